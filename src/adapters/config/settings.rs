use std::{path::PathBuf, str::FromStr};

use error_stack::{bail, report, ResultExt};
use thiserror::Error;

use super::database_config::DatabaseConfig;
use super::field::{Field, FieldValues};
use super::flags::CliArgs;
use super::request::parse_request;
use crate::adapters::sheets::auth::CredentialSource;
use crate::application::copy::DEFAULT_FIRST_ROW;

pub const DEFAULT_MAX_ROWS: u32 = 10_000_000;

#[derive(Debug, Error)]
pub enum ParameterError {
    #[error("No parameters were given")]
    NoParameters,
    #[error("Missing required parameter: {0}")]
    Missing(Field),
    #[error("Invalid value for {field}: {value:?}")]
    Invalid { field: Field, value: String },
    #[error("Could not read parameters from the environment")]
    Environment,
}

/// First present value, in the order the sources are given.
pub fn resolve_first<T>(sources: impl IntoIterator<Item = Option<T>>) -> Option<T> {
    sources.into_iter().flatten().next()
}

/// All places a setting can come from, highest priority first.
#[derive(Debug, Clone, Default)]
pub struct SettingsSources {
    pub request: FieldValues,
    pub short: FieldValues,
    pub long: FieldValues,
    pub environment: FieldValues,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteMode {
    /// Overwrite from `A1` with the whole table.
    Mirror,
    /// Append the table after the existing rows, searching up to `max_rows`.
    Append { max_rows: u32 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RuleSettings {
    pub first_row: u32,
    pub rule_row: u32,
}

#[derive(Debug, Clone)]
pub struct Settings {
    pub spreadsheet_id: String,
    pub page: String,
    pub table: String,
    pub database: DatabaseConfig,
    pub mode: WriteMode,
    pub rule: Option<RuleSettings>,
    pub credentials: CredentialSource,
}

impl SettingsSources {
    /// `--request` wins over `query_string` for the request-style layer.
    pub fn new(args: CliArgs, query_string: Option<String>, environment: FieldValues) -> Self {
        let request = resolve_first([args.request, query_string])
            .map(|query| parse_request(&query))
            .unwrap_or_default();

        Self {
            request,
            short: args.short.into(),
            long: args.long.into(),
            environment,
        }
    }

    pub fn get(&self, field: Field) -> Option<&str> {
        resolve_first([
            self.request.get(field),
            self.short.get(field),
            self.long.get(field),
            self.environment.get(field),
        ])
    }

    pub fn is_empty(&self) -> bool {
        self.request.is_empty()
            && self.short.is_empty()
            && self.long.is_empty()
            && self.environment.is_empty()
    }

    fn required(&self, field: Field) -> error_stack::Result<String, ParameterError> {
        self.get(field)
            .map(str::to_owned)
            .ok_or_else(|| report!(ParameterError::Missing(field)))
    }

    fn number<T>(&self, field: Field) -> error_stack::Result<Option<T>, ParameterError>
    where
        T: FromStr,
        T::Err: std::error::Error + Send + Sync + 'static,
    {
        self.get(field)
            .map(|value| {
                value
                    .trim()
                    .parse::<T>()
                    .change_context_lazy(|| ParameterError::Invalid {
                        field,
                        value: value.to_owned(),
                    })
            })
            .transpose()
    }

    fn switch(&self, field: Field) -> error_stack::Result<bool, ParameterError> {
        let Some(value) = self.get(field) else {
            return Ok(false);
        };
        match value.trim().to_ascii_lowercase().as_str() {
            "1" | "true" | "yes" | "on" => Ok(true),
            "0" | "false" | "no" | "off" => Ok(false),
            _ => bail!(ParameterError::Invalid {
                field,
                value: value.to_owned(),
            }),
        }
    }

    /// Inline JSON is taken as an already-parsed credentials object; anything
    /// else is a path.
    fn credentials(&self) -> error_stack::Result<CredentialSource, ParameterError> {
        let Some(value) = self.get(Field::Credentials) else {
            return Ok(CredentialSource::Default);
        };
        if value.trim_start().starts_with('{') {
            let parsed = serde_json::from_str(value).change_context(ParameterError::Invalid {
                field: Field::Credentials,
                value: "<inline json>".to_string(),
            })?;
            return Ok(CredentialSource::first_present(None, Some(parsed), None));
        }
        Ok(CredentialSource::first_present(
            None,
            None,
            Some(PathBuf::from(value)),
        ))
    }

    pub fn resolve(&self) -> error_stack::Result<Settings, ParameterError> {
        if self.is_empty() {
            bail!(ParameterError::NoParameters);
        }

        let mode = if self.switch(Field::Append)? {
            WriteMode::Append {
                max_rows: self.number(Field::MaxRows)?.unwrap_or(DEFAULT_MAX_ROWS),
            }
        } else {
            WriteMode::Mirror
        };

        let rule = self.number(Field::RuleRow)?.map(|rule_row| RuleSettings {
            first_row: DEFAULT_FIRST_ROW,
            rule_row,
        });
        let rule = match (rule, self.number(Field::FirstRow)?) {
            (Some(rule), Some(first_row)) => Some(RuleSettings { first_row, ..rule }),
            (rule, _) => rule,
        };

        Ok(Settings {
            spreadsheet_id: self.required(Field::SheetId)?,
            page: self.required(Field::Page)?,
            table: self.required(Field::Table)?,
            database: DatabaseConfig {
                hostname: self.required(Field::Hostname)?.into(),
                database: self.required(Field::Db)?.into(),
                user: self.required(Field::User)?.into(),
                password: self.get(Field::Password).unwrap_or_default().into(),
                port: self.number(Field::Port)?,
            },
            mode,
            rule,
            credentials: self.credentials()?,
        })
    }
}
