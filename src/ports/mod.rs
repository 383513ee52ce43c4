pub mod database;
pub mod sheet_writer;
