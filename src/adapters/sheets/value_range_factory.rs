use google_sheets4::api::ValueRange;
use serde_json::Value;

use crate::domain::grid::{CellValue, Grid};

pub trait ValueRangeFactory {
    fn from_grid(grid: Grid) -> Self;
}

fn wrap_value(value: CellValue) -> Value {
    value.map(Value::String).unwrap_or(Value::Null)
}

impl ValueRangeFactory for ValueRange {
    fn from_grid(grid: Grid) -> Self {
        let values = grid
            .into_iter()
            .map(|row| row.into_iter().map(wrap_value).collect())
            .collect();

        ValueRange {
            major_dimension: Some("ROWS".to_string()),
            range: None,
            values: Some(values),
        }
    }
}
