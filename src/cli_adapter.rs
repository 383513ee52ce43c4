use std::process::ExitCode;

use tracing::{error, info, instrument};

use table_into_gsheet::adapters::config::settings::{RuleSettings, Settings, WriteMode};
use table_into_gsheet::application::service;
use table_into_gsheet::{CopyError, WriteSummary};

/// Wrong or missing parameters.
pub const EXIT_PARAMETERS: u8 = 2;
/// The requested table is not in the database catalog.
pub const EXIT_TABLE_NOT_FOUND: u8 = 3;

#[derive(Debug)]
pub struct CliAdapter {
    settings: Settings,
}

impl CliAdapter {
    pub fn new(settings: Settings) -> Self {
        Self { settings }
    }

    #[instrument(skip(self))]
    pub async fn run(self) -> ExitCode {
        let result = self.copy().await;
        let result = match (result, self.settings.rule) {
            (Ok(summary), Some(rule)) => self.draw_rule(rule).await.map(|_| summary),
            (result, _) => result,
        };

        match result {
            Ok(summary) => {
                info!(
                    "Wrote {} rows to {}",
                    summary.updated_rows.unwrap_or_default(),
                    summary.updated_range.as_deref().unwrap_or("<unknown range>")
                );
                ExitCode::SUCCESS
            }
            Err(report) => {
                error!("{:?}", report);
                match report.current_context() {
                    CopyError::TableNotFound(table) => {
                        eprintln!("Table not found: {table}");
                        ExitCode::from(EXIT_TABLE_NOT_FOUND)
                    }
                    other => {
                        eprintln!("{other}");
                        ExitCode::FAILURE
                    }
                }
            }
        }
    }

    async fn copy(&self) -> error_stack::Result<WriteSummary, CopyError> {
        let settings = &self.settings;
        match settings.mode {
            WriteMode::Mirror => {
                service::copy_db_to_sheet(
                    &settings.spreadsheet_id,
                    &settings.database,
                    &settings.table,
                    &settings.page,
                    settings.credentials.clone(),
                )
                .await
            }
            WriteMode::Append { max_rows } => {
                service::append_db_to_sheet(
                    &settings.spreadsheet_id,
                    &settings.database,
                    &settings.table,
                    &settings.page,
                    max_rows,
                    settings.credentials.clone(),
                )
                .await
            }
        }
    }

    async fn draw_rule(&self, rule: RuleSettings) -> error_stack::Result<usize, CopyError> {
        service::draw_horizontal_rule(
            &self.settings.spreadsheet_id,
            Some(self.settings.page.as_str()),
            rule.first_row,
            rule.rule_row,
            self.settings.credentials.clone(),
        )
        .await
    }
}
