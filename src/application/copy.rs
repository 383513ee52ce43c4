use error_stack::{bail, report, ResultExt};
use thiserror::Error;
use tracing::instrument;

use crate::domain::database::table::{TableIdentifier, CATALOG_LOOKUP};
use crate::domain::grid::{collect_grid, Grid, GridRow, ScannedGrid};
use crate::domain::sheets::range_address::{AddressError, RangeAddress};
use crate::ports::database::{Database, DatabaseError};
use crate::ports::sheet_writer::{SheetWriter, WriteSummary};

pub const DEFAULT_FIRST_ROW: u32 = 1;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CopyError {
    #[error("Could not connect to the database")]
    Connection,
    #[error("Database query failed")]
    Query,
    #[error("Table {0:?} not found in the database catalog")]
    TableNotFound(String),
    #[error("Could not compute the target range")]
    Address,
    #[error("Could not set up the Google Sheets client")]
    Credentials,
    #[error("Writing to the spreadsheet failed")]
    Write,
}

/// Confirms `candidate` names a table in the connected schema. The name only
/// travels as a bound parameter here.
#[instrument(skip(db))]
pub async fn validate_table<D: Database + ?Sized>(
    db: &mut D,
    candidate: &str,
) -> error_stack::Result<TableIdentifier, CopyError> {
    let found = db
        .fetch_optional_text(CATALOG_LOOKUP, candidate)
        .await
        .change_context(CopyError::Query)?;

    match found {
        Some(name) => Ok(TableIdentifier::confirmed(name)),
        None => bail!(CopyError::TableNotFound(candidate.to_owned())),
    }
}

/// Validates `table` and reads all of it. Nothing is returned unless the scan
/// completed, so a failed scan can never lead to a partial write.
#[instrument(skip(db))]
pub async fn read_table<D: Database + ?Sized>(
    db: &mut D,
    table: &str,
) -> error_stack::Result<ScannedGrid, CopyError> {
    let table = validate_table(db, table).await?;
    let statement = table.scan_statement();
    let scanned = collect_grid(db.fetch_rows(&statement))
        .await
        .change_context(CopyError::Query)
        .attach_printable_lazy(|| format!("while scanning {}", table.name()))?;

    tracing::info!(
        rows = scanned.row_count,
        columns = scanned.column_count,
        "Read table {}",
        table.name()
    );
    Ok(scanned)
}

/// Reads `table` over a freshly opened connection and closes it on every path,
/// including a failed lookup or an interrupted scan.
#[instrument(skip(connection))]
pub async fn scan_table<D: Database>(
    connection: error_stack::Result<D, DatabaseError>,
    table: &str,
) -> error_stack::Result<ScannedGrid, CopyError> {
    let mut connection = connection.change_context(CopyError::Connection)?;
    let scanned = read_table(&mut connection, table).await;
    connection.close().await;
    scanned
}

/// Overwrites `page` from `A1` with a scanned table.
#[instrument(skip(writer, scanned), fields(rows = scanned.row_count, columns = scanned.column_count))]
pub async fn mirror_grid<W: SheetWriter + ?Sized>(
    writer: &W,
    page: &str,
    scanned: ScannedGrid,
) -> error_stack::Result<WriteSummary, CopyError> {
    let range = RangeAddress::for_block(page, 1, scanned.row_count, scanned.column_count)
        .change_context(CopyError::Address)?;
    writer
        .update(&range, scanned.rows)
        .await
        .change_context(CopyError::Write)
}

/// Appends a scanned table as one block after the rows already on `page`.
#[instrument(skip(writer, scanned), fields(rows = scanned.row_count, columns = scanned.column_count))]
pub async fn append_grid<W: SheetWriter + ?Sized>(
    writer: &W,
    page: &str,
    scanned: ScannedGrid,
    max_rows: u32,
) -> error_stack::Result<WriteSummary, CopyError> {
    if scanned.row_count == 0 {
        bail!(CopyError::Address);
    }
    let range = RangeAddress::for_append(page, scanned.column_count, max_rows)
        .change_context(CopyError::Address)?;
    writer
        .append(&range, scanned.rows)
        .await
        .change_context(CopyError::Write)
}

/// Appends a single row. The search window is `A1` down to `max_rows`.
#[instrument(skip(writer))]
pub async fn append_row<W: SheetWriter + ?Sized>(
    writer: &W,
    page: &str,
    row: GridRow,
    max_rows: u32,
) -> error_stack::Result<WriteSummary, CopyError> {
    let range =
        RangeAddress::for_append(page, row.len(), max_rows).change_context(CopyError::Address)?;
    writer
        .append(&range, vec![row])
        .await
        .change_context(CopyError::Write)
}

/// Overwrites the block starting at `first_row` (default 1). The width comes from
/// the first row; wider rows after it are written past the addressed range at
/// the caller's risk.
#[instrument(skip(writer, grid), fields(rows = grid.len()))]
pub async fn copy_array<W: SheetWriter + ?Sized>(
    writer: &W,
    first_row: Option<u32>,
    page: &str,
    grid: Grid,
) -> error_stack::Result<WriteSummary, CopyError> {
    let first_row = first_row.unwrap_or(DEFAULT_FIRST_ROW);
    let column_count = grid.first().map_or(0, Vec::len);
    let range = RangeAddress::for_block(page, first_row, grid.len(), column_count)
        .change_context(CopyError::Address)?;
    writer
        .update(&range, grid)
        .await
        .change_context(CopyError::Write)
}

/// Draws the rule on `page`, or on the first page when none is named.
/// `first_row == rule_row` is accepted: the rule range is then empty and only
/// the inner borders from `rule_row` down are cleared.
#[instrument(skip(writer))]
pub async fn horizontal_rule<W: SheetWriter + ?Sized>(
    writer: &W,
    page: Option<&str>,
    first_row: u32,
    rule_row: u32,
) -> error_stack::Result<usize, CopyError> {
    if rule_row < first_row {
        return Err(report!(AddressError::EndBeforeStart {
            start_row: first_row,
            end_row: rule_row,
        })
        .change_context(CopyError::Address));
    }
    let first_row = i32::try_from(first_row)
        .map_err(|_| AddressError::Overflow)
        .change_context(CopyError::Address)?;
    let rule_row = i32::try_from(rule_row)
        .map_err(|_| AddressError::Overflow)
        .change_context(CopyError::Address)?;

    let sheet_id = match page {
        Some(page) => Some(
            writer
                .sheet_id(page)
                .await
                .change_context(CopyError::Write)?,
        ),
        None => None,
    };

    writer
        .draw_horizontal_rule(sheet_id, first_row, rule_row)
        .await
        .change_context(CopyError::Write)
}
