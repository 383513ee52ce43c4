use thiserror::Error;

use crate::domain::grid::Grid;
use crate::domain::sheets::range_address::RangeAddress;

#[derive(Error, Debug)]
pub enum SheetWriterError {
    #[error("Failed to authenticate against Google Sheets")]
    Authentication,
    #[error("Failed to append to range")]
    FailedToAppendRange,
    #[error("Failed to write range")]
    FailedToWriteRange,
    #[error("Failed to update borders")]
    FailedToUpdateBorders,
    #[error("Failed to fetch sheet id")]
    FailedToFetchSheetId,
}

/// What the service reported back for a values write.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WriteSummary {
    pub spreadsheet_id: Option<String>,
    /// Range of the table the service appended after. Only set for appends.
    pub table_range: Option<String>,
    pub updated_range: Option<String>,
    pub updated_rows: Option<i32>,
    pub updated_columns: Option<i32>,
    pub updated_cells: Option<i32>,
}

#[async_trait::async_trait]
pub trait SheetWriter: Send + Sync {
    /// Adds `grid` after the last non-empty row found inside `range`.
    async fn append(
        &self,
        range: &RangeAddress,
        grid: Grid,
    ) -> error_stack::Result<WriteSummary, SheetWriterError>;

    /// Overwrites exactly `range`. Cells outside it are left as they were.
    async fn update(
        &self,
        range: &RangeAddress,
        grid: Grid,
    ) -> error_stack::Result<WriteSummary, SheetWriterError>;

    /// Numeric id of the page titled `page_name`.
    async fn sheet_id(&self, page_name: &str) -> error_stack::Result<i32, SheetWriterError>;

    /// Draws a dashed rule under rows `[first_row, rule_row)` and clears every
    /// inner horizontal border from `rule_row` down. Rows are 0-based grid indices.
    /// Without a `sheet_id` the service applies it to the first page.
    /// Returns the number of replies the batch produced.
    async fn draw_horizontal_rule(
        &self,
        sheet_id: Option<i32>,
        first_row: i32,
        rule_row: i32,
    ) -> error_stack::Result<usize, SheetWriterError>;
}
