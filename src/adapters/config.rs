pub mod database_config;
pub mod environment;
pub mod field;
pub mod flags;
pub mod request;
pub mod settings;
pub mod sheets_config;
