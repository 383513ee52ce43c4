use std::{collections::HashMap, fmt::Debug};

use error_stack::{report, ResultExt};
use google_sheets4::{
    api::{
        AppendValuesResponse, BatchUpdateSpreadsheetRequest, Sheet, UpdateValuesResponse,
        ValueRange,
    },
    Sheets,
};
use tokio::sync::RwLock;
use tracing::instrument;

use crate::adapters::config::sheets_config::SpreadsheetConfig;
use crate::domain::grid::Grid;
use crate::domain::sheets::a1_notation::ToA1Notation;
use crate::domain::sheets::range_address::RangeAddress;
use crate::ports::sheet_writer::{SheetWriter, SheetWriterError, WriteSummary};

use super::{
    auth,
    borders::horizontal_rule_requests,
    http_client::{self, HttpsConnector},
    value_range_factory::ValueRangeFactory,
};

/// Values are stored exactly as given; nothing is parsed as a formula or date.
const VALUE_INPUT_OPTION: &str = "RAW";

pub struct SpreadsheetManager {
    pub config: SpreadsheetConfig,
    hub: Sheets<HttpsConnector>,
    /// Page title to sheet id, filled from one `spreadsheets.get`.
    sheet_id_cache: RwLock<HashMap<String, i32>>,
}

impl Debug for SpreadsheetManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "SpreadsheetManager {{ config: {:?} }}", self.config)
    }
}

impl SpreadsheetManager {
    #[instrument(name = "SpreadsheetManager::new")]
    pub async fn new(config: SpreadsheetConfig) -> error_stack::Result<Self, SheetWriterError> {
        let client = http_client::http_client()
            .change_context(SheetWriterError::Authentication)
            .attach_printable("Could not load native root certificates")?;
        let auth = auth::auth(&config.credentials, client.clone())
            .await
            .change_context(SheetWriterError::Authentication)?;

        Ok(SpreadsheetManager {
            config,
            hub: Sheets::new(client, auth),
            sheet_id_cache: RwLock::new(HashMap::new()),
        })
    }
}

fn sheet_ids(sheets: &[Sheet]) -> HashMap<String, i32> {
    sheets
        .iter()
        .filter_map(|sheet| {
            let properties = sheet.properties.as_ref()?;
            Some((properties.title.clone()?, properties.sheet_id?))
        })
        .collect()
}

impl From<UpdateValuesResponse> for WriteSummary {
    fn from(response: UpdateValuesResponse) -> Self {
        WriteSummary {
            spreadsheet_id: response.spreadsheet_id,
            table_range: None,
            updated_range: response.updated_range,
            updated_rows: response.updated_rows,
            updated_columns: response.updated_columns,
            updated_cells: response.updated_cells,
        }
    }
}

impl From<AppendValuesResponse> for WriteSummary {
    fn from(response: AppendValuesResponse) -> Self {
        let updates = response.updates.map(WriteSummary::from).unwrap_or_default();
        WriteSummary {
            spreadsheet_id: response.spreadsheet_id.or(updates.spreadsheet_id),
            table_range: response.table_range,
            ..updates
        }
    }
}

#[async_trait::async_trait]
impl SheetWriter for SpreadsheetManager {
    #[instrument(skip(grid), fields(rows = grid.len()))]
    async fn append(
        &self,
        range: &RangeAddress,
        grid: Grid,
    ) -> error_stack::Result<WriteSummary, SheetWriterError> {
        let range_str = range.to_a1_notation();
        self.hub
            .spreadsheets()
            .values_append(
                ValueRange::from_grid(grid),
                &self.config.spreadsheet_id,
                range_str.as_ref(),
            )
            .value_input_option(VALUE_INPUT_OPTION)
            .doit()
            .await
            .map(|(_, response)| WriteSummary::from(response))
            .change_context(SheetWriterError::FailedToAppendRange)
            .attach_printable_lazy(|| format!("Failed to append to range {}", range_str))
    }

    #[instrument(skip(grid), fields(rows = grid.len()))]
    async fn update(
        &self,
        range: &RangeAddress,
        grid: Grid,
    ) -> error_stack::Result<WriteSummary, SheetWriterError> {
        let range_str = range.to_a1_notation();
        self.hub
            .spreadsheets()
            .values_update(
                ValueRange::from_grid(grid),
                &self.config.spreadsheet_id,
                range_str.as_ref(),
            )
            .value_input_option(VALUE_INPUT_OPTION)
            .doit()
            .await
            .map(|(_, response)| WriteSummary::from(response))
            .change_context(SheetWriterError::FailedToWriteRange)
            .attach_printable_lazy(|| format!("Failed to write to range {}", range_str))
    }

    #[instrument]
    async fn sheet_id(&self, page_name: &str) -> error_stack::Result<i32, SheetWriterError> {
        if let Some(sheet_id) = self.sheet_id_cache.read().await.get(page_name) {
            return Ok(*sheet_id);
        }

        let (_, spreadsheet) = self
            .hub
            .spreadsheets()
            .get(&self.config.spreadsheet_id)
            .doit()
            .await
            .change_context(SheetWriterError::FailedToFetchSheetId)?;

        let mut guard = self.sheet_id_cache.write().await;
        guard.extend(sheet_ids(spreadsheet.sheets.as_deref().unwrap_or_default()));
        guard.get(page_name).copied().ok_or_else(|| {
            report!(SheetWriterError::FailedToFetchSheetId)
                .attach_printable(format!("No page titled {page_name:?}"))
        })
    }

    #[instrument]
    async fn draw_horizontal_rule(
        &self,
        sheet_id: Option<i32>,
        first_row: i32,
        rule_row: i32,
    ) -> error_stack::Result<usize, SheetWriterError> {
        let request = BatchUpdateSpreadsheetRequest {
            requests: Some(horizontal_rule_requests(sheet_id, first_row, rule_row)),
            ..Default::default()
        };

        self.hub
            .spreadsheets()
            .batch_update(request, &self.config.spreadsheet_id)
            .doit()
            .await
            .map(|(_, response)| response.replies.map_or(0, |replies| replies.len()))
            .change_context(SheetWriterError::FailedToUpdateBorders)
            .attach_printable_lazy(|| {
                format!(
                    "Failed to draw rule at row index {} (first row index {})",
                    rule_row, first_row
                )
            })
    }
}
