pub mod database;
pub mod grid;
pub mod sheets;
