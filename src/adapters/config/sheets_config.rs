use crate::adapters::sheets::auth::CredentialSource;

#[derive(Debug, Clone)]
pub struct SpreadsheetConfig {
    /// The long identifier after `https://docs.google.com/spreadsheets/d/`.
    pub spreadsheet_id: Box<str>,
    pub credentials: CredentialSource,
}
