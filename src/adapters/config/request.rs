use super::field::{Field, FieldValues};

/// CGI-style query string set by a web server in front of the binary.
pub const QUERY_STRING_VAR: &str = "QUERY_STRING";

/// Parses `key=value&...` input. Unknown keys are ignored; a bare `append` key
/// turns the switch on.
pub fn parse_request(query: &str) -> FieldValues {
    let mut values = FieldValues::default();
    let query = query.trim_start_matches('?');
    for (key, value) in url::form_urlencoded::parse(query.as_bytes()) {
        match Field::from_request_key(&key) {
            Some(Field::Append) if value.is_empty() => values.insert_switch(Field::Append, true),
            Some(field) => values.insert(field, value.into_owned()),
            None => tracing::debug!("Ignoring unknown request key {key:?}"),
        }
    }
    values
}
