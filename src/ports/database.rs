use futures::stream::BoxStream;
use thiserror::Error;

use crate::domain::grid::GridRow;

#[derive(Error, Debug)]
pub enum DatabaseError {
    #[error("Failed to connect to database")]
    ConnectionFailed,
    #[error("Database query failed")]
    QueryFailed,
}

/// The two queries a copy needs: one parameterized lookup and one plain scan.
#[async_trait::async_trait]
pub trait Database: Send {
    /// Runs `statement` with `param` bound to its single placeholder and returns
    /// the first column of the first row, if any row matched.
    async fn fetch_optional_text(
        &mut self,
        statement: &str,
        param: &str,
    ) -> error_stack::Result<Option<String>, DatabaseError>;

    /// Streams every row of an argument-free statement. Forward only; the stream
    /// cannot be restarted once consumed.
    fn fetch_rows<'a>(
        &'a mut self,
        statement: &'a str,
    ) -> BoxStream<'a, error_stack::Result<GridRow, DatabaseError>>;

    /// Releases the connection. Failures are logged, not returned.
    async fn close(self)
    where
        Self: Sized;
}
