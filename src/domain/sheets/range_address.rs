use thiserror::Error;

use super::a1_notation::{sheet_prefix, A1Notation, ToA1Notation};
use super::column::Column;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AddressError {
    #[error("Column count must be at least 1")]
    ZeroColumn,
    #[error("Row numbers are 1-based, got 0")]
    ZeroRow,
    #[error("End row {end_row} is before start row {start_row}")]
    EndBeforeStart { start_row: u32, end_row: u32 },
    #[error("Row or column count does not fit in a spreadsheet address")]
    Overflow,
    #[error("Page name is empty")]
    EmptyPage,
    #[error("Grid has no rows or no columns")]
    EmptyGrid,
}

/// Top-left-anchored rectangle on one page. The start column is always `A`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RangeAddress {
    page_name: String,
    start_row: u32,
    end_column: Column,
    end_row: u32,
}

impl RangeAddress {
    pub fn new(
        page_name: impl Into<String>,
        start_row: u32,
        end_row: u32,
        column_count: u32,
    ) -> Result<Self, AddressError> {
        let page_name = page_name.into();
        if page_name.is_empty() {
            return Err(AddressError::EmptyPage);
        }
        if start_row == 0 {
            return Err(AddressError::ZeroRow);
        }
        if end_row < start_row {
            return Err(AddressError::EndBeforeStart { start_row, end_row });
        }
        Ok(Self {
            page_name,
            start_row,
            end_column: Column::new(column_count)?,
            end_row,
        })
    }

    /// Search window for an append: rows `1..=max_rows`, as wide as the row being added.
    /// `max_rows` bounds where the service looks for the table, it is not the row written.
    pub fn for_append(
        page_name: impl Into<String>,
        column_count: usize,
        max_rows: u32,
    ) -> Result<Self, AddressError> {
        Self::new(page_name, 1, max_rows, count_to_u32(column_count)?)
    }

    /// Exact rectangle covering `row_count` rows starting at `first_row`.
    pub fn for_block(
        page_name: impl Into<String>,
        first_row: u32,
        row_count: usize,
        column_count: usize,
    ) -> Result<Self, AddressError> {
        let row_count = count_to_u32(row_count)?;
        if row_count == 0 {
            return Err(AddressError::EmptyGrid);
        }
        let end_row = first_row
            .checked_add(row_count - 1)
            .ok_or(AddressError::Overflow)?;
        Self::new(page_name, first_row, end_row, count_to_u32(column_count)?)
    }
}

fn count_to_u32(count: usize) -> Result<u32, AddressError> {
    u32::try_from(count).map_err(|_| AddressError::Overflow)
}

impl ToA1Notation for RangeAddress {
    fn to_a1_notation(&self) -> A1Notation {
        A1Notation(format!(
            "{}!A{}:{}{}",
            sheet_prefix(&self.page_name),
            self.start_row,
            self.end_column,
            self.end_row
        ))
    }
}

impl std::fmt::Display for RangeAddress {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_a1_notation())
    }
}
