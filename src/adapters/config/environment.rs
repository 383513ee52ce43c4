use std::collections::HashMap;
use std::ffi::OsString;

use config::{Config, Environment};
use error_stack::ResultExt;

use super::field::{Field, FieldValues};
use super::settings::ParameterError;

/// Process environment without the entries that are not valid UTF-8. Those can
/// never name one of our settings, and `std::env::vars` panics on them.
pub fn process_environment() -> HashMap<String, String> {
    utf8_entries(std::env::vars_os())
}

fn utf8_entries(vars: impl IntoIterator<Item = (OsString, OsString)>) -> HashMap<String, String> {
    vars.into_iter()
        .filter_map(|(key, value)| Some((key.into_string().ok()?, value.into_string().ok()?)))
        .collect()
}

/// Reads the `Field::env_key` variables out of `source`.
pub fn environment_values(
    source: HashMap<String, String>,
) -> error_stack::Result<FieldValues, ParameterError> {
    let config = Config::builder()
        .add_source(Environment::default().source(Some(source)))
        .build()
        .change_context(ParameterError::Environment)?;

    let mut values = FieldValues::default();
    for field in Field::ALL {
        // config lowercases environment keys
        if let Ok(value) = config.get_string(&field.env_key().to_ascii_lowercase()) {
            values.insert(field, value);
        }
    }
    Ok(values)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reads_known_variables() {
        let env = HashMap::from([
            ("SHEET_ID".to_string(), "abc123".to_string()),
            ("DB_TABLE".to_string(), "orders".to_string()),
            ("MAX_ROWS".to_string(), "500".to_string()),
            ("UNRELATED".to_string(), "x".to_string()),
        ]);
        let values = environment_values(env).unwrap();
        assert_eq!(values.get(Field::SheetId), Some("abc123"));
        assert_eq!(values.get(Field::Table), Some("orders"));
        assert_eq!(values.get(Field::MaxRows), Some("500"));
        assert_eq!(values.get(Field::Page), None);
    }

    #[test]
    fn test_empty_environment() {
        let values = environment_values(HashMap::new()).unwrap();
        assert!(values.is_empty());
    }

    #[cfg(unix)]
    #[test]
    fn test_non_utf8_entries_are_skipped() {
        use std::os::unix::ffi::OsStringExt;

        let vars = vec![
            (OsString::from("DB_TABLE"), OsString::from("orders")),
            (OsString::from("BROKEN"), OsString::from_vec(vec![0xff])),
            (OsString::from_vec(vec![b'K', 0xfe]), OsString::from("value")),
        ];
        let env = utf8_entries(vars);
        assert_eq!(env.len(), 1);

        let values = environment_values(env).unwrap();
        assert_eq!(values.get(Field::Table), Some("orders"));
    }

    #[test]
    fn test_process_environment_is_readable() {
        let env = process_environment();
        assert!(environment_values(env).is_ok());
    }
}
