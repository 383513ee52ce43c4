use std::collections::HashMap;

/// Every setting the command line understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Field {
    SheetId,
    Hostname,
    Port,
    Db,
    User,
    Password,
    Table,
    Page,
    MaxRows,
    Append,
    RuleRow,
    FirstRow,
    Credentials,
}

impl Field {
    pub const ALL: [Field; 13] = [
        Field::SheetId,
        Field::Hostname,
        Field::Port,
        Field::Db,
        Field::User,
        Field::Password,
        Field::Table,
        Field::Page,
        Field::MaxRows,
        Field::Append,
        Field::RuleRow,
        Field::FirstRow,
        Field::Credentials,
    ];

    /// Key in request-style `k=v&...` input. Matches the long flag name.
    pub fn request_key(&self) -> &'static str {
        match self {
            Field::SheetId => "sheet",
            Field::Hostname => "hostname",
            Field::Port => "port",
            Field::Db => "db",
            Field::User => "user",
            Field::Password => "password",
            Field::Table => "table",
            Field::Page => "page",
            Field::MaxRows => "max-rows",
            Field::Append => "append",
            Field::RuleRow => "rule-row",
            Field::FirstRow => "first-row",
            Field::Credentials => "credentials",
        }
    }

    pub fn env_key(&self) -> &'static str {
        match self {
            Field::SheetId => "SHEET_ID",
            Field::Hostname => "DB_HOSTNAME",
            Field::Port => "DB_PORT",
            Field::Db => "DB_NAME",
            Field::User => "DB_USER",
            Field::Password => "DB_PASSWORD",
            Field::Table => "DB_TABLE",
            Field::Page => "SHEET_PAGE",
            Field::MaxRows => "MAX_ROWS",
            Field::Append => "APPEND",
            Field::RuleRow => "RULE_ROW",
            Field::FirstRow => "FIRST_ROW",
            Field::Credentials => "CREDENTIALS",
        }
    }

    pub fn from_request_key(key: &str) -> Option<Field> {
        let key = key.replace('_', "-").to_ascii_lowercase();
        Field::ALL.into_iter().find(|field| field.request_key() == key)
    }
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.request_key())
    }
}

/// Values one source supplied. Blank values count as absent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldValues(HashMap<Field, String>);

impl FieldValues {
    pub fn insert(&mut self, field: Field, value: impl Into<String>) {
        let value = value.into();
        if !value.trim().is_empty() {
            self.0.insert(field, value);
        }
    }

    pub fn insert_opt(&mut self, field: Field, value: Option<String>) {
        if let Some(value) = value {
            self.insert(field, value);
        }
    }

    /// Switches only contribute when they were given.
    pub fn insert_switch(&mut self, field: Field, on: bool) {
        if on {
            self.insert(field, "true");
        }
    }

    pub fn get(&self, field: Field) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
