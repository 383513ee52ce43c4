use error_stack::{Report, ResultExt};
use futures::stream::{BoxStream, StreamExt};
use sqlx::mysql::{MySqlConnectOptions, MySqlConnection, MySqlRow};
use sqlx::{ConnectOptions, Connection, Executor, Row};
use tracing::instrument;

use crate::adapters::config::database_config::DatabaseConfig;
use crate::domain::grid::{CellValue, GridRow};
use crate::ports::database::{Database, DatabaseError};

const CHARSET: &str = "utf8mb4";

pub struct MySqlDatabase {
    connection: MySqlConnection,
}

impl std::fmt::Debug for MySqlDatabase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MySqlDatabase").finish_non_exhaustive()
    }
}

impl MySqlDatabase {
    #[instrument(name = "MySqlDatabase::connect")]
    pub async fn connect(config: &DatabaseConfig) -> error_stack::Result<Self, DatabaseError> {
        let mut options = MySqlConnectOptions::new()
            .host(&config.hostname)
            .username(&config.user)
            .password(&config.password)
            .database(&config.database)
            .charset(CHARSET);
        if let Some(port) = config.port {
            options = options.port(port);
        }

        let connection = options
            .connect()
            .await
            .change_context(DatabaseError::ConnectionFailed)
            .attach_printable_lazy(|| {
                format!("host: {}, database: {}", config.hostname, config.database)
            })?;

        Ok(Self { connection })
    }
}

/// Reads every column of a text-protocol row as UTF-8, keeping SQL `NULL` distinct.
fn row_to_cells(row: &MySqlRow) -> error_stack::Result<GridRow, DatabaseError> {
    (0..row.len())
        .map(|index| {
            row.try_get_unchecked::<Option<Vec<u8>>, _>(index)
                .map(|bytes| -> CellValue {
                    bytes.map(|bytes| String::from_utf8_lossy(&bytes).into_owned())
                })
                .change_context(DatabaseError::QueryFailed)
                .attach_printable_lazy(|| format!("Failed to read column {index}"))
        })
        .collect()
}

#[async_trait::async_trait]
impl Database for MySqlDatabase {
    #[instrument(skip(self))]
    async fn fetch_optional_text(
        &mut self,
        statement: &str,
        param: &str,
    ) -> error_stack::Result<Option<String>, DatabaseError> {
        let row = sqlx::query(statement)
            .bind(param)
            .fetch_optional(&mut self.connection)
            .await
            .change_context(DatabaseError::QueryFailed)?;

        match row {
            Some(row) => Ok(row_to_cells(&row)?.into_iter().next().flatten()),
            None => Ok(None),
        }
    }

    fn fetch_rows<'a>(
        &'a mut self,
        statement: &'a str,
    ) -> BoxStream<'a, error_stack::Result<GridRow, DatabaseError>> {
        tracing::debug!("Scanning with {statement}");
        // A bare &str carries no arguments, so sqlx sends it over the text protocol
        // and every value arrives as text regardless of column type.
        (&mut self.connection)
            .fetch(statement)
            .map(|row| {
                row.map_err(|error| Report::new(error).change_context(DatabaseError::QueryFailed))
                    .and_then(|row| row_to_cells(&row))
            })
            .boxed()
    }

    // By the time the connection is closed its result has already been read.
    #[instrument(name = "MySqlDatabase::close")]
    async fn close(self) {
        if let Err(error) = self.connection.close().await {
            tracing::warn!("Failed to close database connection cleanly: {error}");
        }
    }
}
