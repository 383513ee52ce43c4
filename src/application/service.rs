//! Entry points that own their adapters: each call authenticates, opens at most
//! one database connection, writes, and keeps nothing afterwards.

use error_stack::ResultExt;
use tracing::instrument;

use crate::adapters::config::database_config::DatabaseConfig;
use crate::adapters::config::sheets_config::SpreadsheetConfig;
use crate::adapters::database::mysql::MySqlDatabase;
use crate::adapters::sheets::auth::CredentialSource;
use crate::adapters::sheets::spreadsheet_manager::SpreadsheetManager;
use crate::domain::grid::{Grid, GridRow};
use crate::ports::sheet_writer::WriteSummary;

use super::copy::{self, CopyError};

async fn open_spreadsheet(
    spreadsheet_id: &str,
    credentials: CredentialSource,
) -> error_stack::Result<SpreadsheetManager, CopyError> {
    SpreadsheetManager::new(SpreadsheetConfig {
        spreadsheet_id: spreadsheet_id.into(),
        credentials,
    })
    .await
    .change_context(CopyError::Credentials)
}

/// Appends `values_row` as a single row after the existing data on `page_name`.
#[instrument(skip(credentials))]
pub async fn append_to_sheet(
    spreadsheet_id: &str,
    page_name: &str,
    values_row: GridRow,
    max_rows: u32,
    credentials: CredentialSource,
) -> error_stack::Result<WriteSummary, CopyError> {
    let spreadsheet = open_spreadsheet(spreadsheet_id, credentials).await?;
    copy::append_row(&spreadsheet, page_name, values_row, max_rows).await
}

/// Mirrors the whole of `table` onto `page_name` from `A1`, without a header row.
#[instrument(skip(credentials))]
pub async fn copy_db_to_sheet(
    spreadsheet_id: &str,
    database: &DatabaseConfig,
    table: &str,
    page_name: &str,
    credentials: CredentialSource,
) -> error_stack::Result<WriteSummary, CopyError> {
    let spreadsheet = open_spreadsheet(spreadsheet_id, credentials).await?;
    let scanned = copy::scan_table(MySqlDatabase::connect(database).await, table).await?;
    copy::mirror_grid(&spreadsheet, page_name, scanned).await
}

/// Reads the whole of `table` and appends it as one block after the existing data.
#[instrument(skip(credentials))]
pub async fn append_db_to_sheet(
    spreadsheet_id: &str,
    database: &DatabaseConfig,
    table: &str,
    page_name: &str,
    max_rows: u32,
    credentials: CredentialSource,
) -> error_stack::Result<WriteSummary, CopyError> {
    let spreadsheet = open_spreadsheet(spreadsheet_id, credentials).await?;
    let scanned = copy::scan_table(MySqlDatabase::connect(database).await, table).await?;
    copy::append_grid(&spreadsheet, page_name, scanned, max_rows).await
}

/// Writes `data` as a block whose top-left cell is `A{first_row}`.
#[instrument(skip(data, credentials), fields(rows = data.len()))]
pub async fn copy_array_to_sheet(
    spreadsheet_id: &str,
    first_row: Option<u32>,
    page_name: &str,
    data: Grid,
    credentials: CredentialSource,
) -> error_stack::Result<WriteSummary, CopyError> {
    let spreadsheet = open_spreadsheet(spreadsheet_id, credentials).await?;
    copy::copy_array(&spreadsheet, first_row, page_name, data).await
}

/// Leaves one dashed rule at `rule_row` and no inner horizontal borders below it,
/// on `page_name` or, when it is `None`, on the first page.
#[instrument(skip(credentials))]
pub async fn draw_horizontal_rule(
    spreadsheet_id: &str,
    page_name: Option<&str>,
    first_row: u32,
    rule_row: u32,
    credentials: CredentialSource,
) -> error_stack::Result<usize, CopyError> {
    let spreadsheet = open_spreadsheet(spreadsheet_id, credentials).await?;
    copy::horizontal_rule(&spreadsheet, page_name, first_row, rule_row).await
}
