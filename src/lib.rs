//! Copies MySQL tables and in-memory grids into Google Sheets pages, either
//! overwriting a top-left-anchored block or appending after existing rows.

pub mod adapters;
pub mod application;
pub mod domain;
pub mod ports;
pub mod prettyprint;

pub use adapters::config::database_config::DatabaseConfig;
pub use adapters::sheets::auth::CredentialSource;
pub use application::copy::CopyError;
pub use application::service::{
    append_db_to_sheet, append_to_sheet, copy_array_to_sheet, copy_db_to_sheet,
    draw_horizontal_rule,
};
pub use domain::grid::{CellValue, Grid, GridRow};
pub use domain::sheets::column::column_name;
pub use domain::sheets::range_address::{AddressError, RangeAddress};
pub use ports::sheet_writer::WriteSummary;
