use futures::{Stream, TryStreamExt};

/// A single cell. `None` is SQL `NULL` and is sent to the sheet as JSON `null`.
pub type CellValue = Option<String>;

pub type GridRow = Vec<CellValue>;

/// Rows outer, columns inner. Rows may have different lengths.
pub type Grid = Vec<GridRow>;

/// A grid together with the dimensions observed while it was read.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScannedGrid {
    pub rows: Grid,
    pub row_count: usize,
    /// Widest row seen, not the width of any particular row.
    pub column_count: usize,
}

#[derive(Debug, Default)]
pub struct GridBuilder {
    rows: Grid,
    column_count: usize,
}

impl GridBuilder {
    pub fn push(&mut self, row: GridRow) {
        self.column_count = self.column_count.max(row.len());
        self.rows.push(row);
    }

    pub fn finish(self) -> ScannedGrid {
        ScannedGrid {
            row_count: self.rows.len(),
            column_count: self.column_count,
            rows: self.rows,
        }
    }
}

/// Drains a forward-only row stream into a grid, stopping at the first error.
pub async fn collect_grid<S, E>(rows: S) -> Result<ScannedGrid, E>
where
    S: Stream<Item = Result<GridRow, E>>,
{
    futures::pin_mut!(rows);
    let mut builder = GridBuilder::default();
    while let Some(row) = rows.try_next().await? {
        builder.push(row);
    }
    Ok(builder.finish())
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::stream;

    fn cells(values: &[&str]) -> GridRow {
        values.iter().map(|v| Some(v.to_string())).collect()
    }

    #[tokio::test]
    async fn test_ragged_rows_track_widest() {
        let rows = vec![cells(&["1", "2"]), cells(&["3", "4", "5"]), cells(&["6"])];
        let source = stream::iter(rows.clone().into_iter().map(Ok::<_, String>));

        let scanned = collect_grid(source).await.unwrap();

        assert_eq!(scanned.column_count, 3);
        assert_eq!(scanned.row_count, 3);
        assert_eq!(scanned.rows, rows);
    }

    #[tokio::test]
    async fn test_empty_stream() {
        let source = stream::iter(Vec::<Result<GridRow, String>>::new());
        let scanned = collect_grid(source).await.unwrap();
        assert_eq!(scanned, ScannedGrid::default());
    }

    #[tokio::test]
    async fn test_stream_error_stops_collection() {
        let source = stream::iter(vec![
            Ok(cells(&["a"])),
            Err("connection reset".to_string()),
            Ok(cells(&["b"])),
        ]);
        let result = collect_grid(source).await;
        assert_eq!(result, Err("connection reset".to_string()));
    }

    #[test]
    fn test_builder_counts_nulls_as_cells() {
        let mut builder = GridBuilder::default();
        builder.push(vec![None, Some("x".into()), None]);
        builder.push(vec![]);
        let scanned = builder.finish();
        assert_eq!(scanned.row_count, 2);
        assert_eq!(scanned.column_count, 3);
    }
}
