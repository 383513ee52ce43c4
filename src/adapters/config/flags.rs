use clap::{ArgAction, Args, Parser};

use super::field::{Field, FieldValues};

/// Copy a MySQL table into a Google Sheets page, mirroring it or appending to it.
///
/// Every option can also come from request-style input (`--request` or
/// `$QUERY_STRING`), which wins over flags, or from environment variables, which
/// lose to them. Short flags win over long ones.
#[derive(Parser, Debug, Default)]
#[command(name = "table-into-gsheet", version, disable_help_flag = true)]
pub struct CliArgs {
    #[command(flatten)]
    pub short: ShortFlags,

    #[command(flatten)]
    pub long: LongFlags,

    /// Request-style input, e.g. `table=orders&page=Sheet1`. Defaults to $QUERY_STRING
    #[arg(long, value_name = "QUERY")]
    pub request: Option<String>,

    /// Print help
    #[arg(long, action = ArgAction::Help)]
    help: Option<bool>,
}

#[derive(Args, Debug, Default)]
pub struct ShortFlags {
    /// Spreadsheet id
    #[arg(short = 's', id = "short_sheet", value_name = "SHEET_ID")]
    pub sheet: Option<String>,
    /// Database hostname
    #[arg(short = 'h', id = "short_hostname", value_name = "HOST")]
    pub hostname: Option<String>,
    /// Database port, when not the server default
    #[arg(short = 'P', id = "short_port", value_name = "PORT")]
    pub port: Option<String>,
    /// Database name
    #[arg(short = 'd', id = "short_db", value_name = "DB")]
    pub db: Option<String>,
    /// Database user
    #[arg(short = 'u', id = "short_user", value_name = "USER")]
    pub user: Option<String>,
    /// Database password
    #[arg(short = 'p', id = "short_password", value_name = "PASSWORD")]
    pub password: Option<String>,
    /// Table to copy
    #[arg(short = 't', id = "short_table", value_name = "TABLE")]
    pub table: Option<String>,
    /// Page (tab) name in the spreadsheet
    #[arg(short = 'g', id = "short_page", value_name = "PAGE")]
    pub page: Option<String>,
    /// Upper bound of the append search range
    #[arg(short = 'm', id = "short_max_rows", value_name = "ROWS")]
    pub max_rows: Option<String>,
    /// Append rows instead of overwriting from A1
    #[arg(short = 'a', id = "short_append")]
    pub append: bool,
    /// Draw a dashed horizontal rule at this row index after writing
    #[arg(short = 'r', id = "short_rule_row", value_name = "ROW")]
    pub rule_row: Option<String>,
    /// First row index of the block the rule is drawn under
    #[arg(short = 'f', id = "short_first_row", value_name = "ROW")]
    pub first_row: Option<String>,
    /// Credentials JSON file
    #[arg(short = 'c', id = "short_credentials", value_name = "PATH")]
    pub credentials: Option<String>,
}

#[derive(Args, Debug, Default)]
pub struct LongFlags {
    #[arg(long = "sheet", value_name = "SHEET_ID")]
    pub sheet: Option<String>,
    #[arg(long = "hostname", value_name = "HOST")]
    pub hostname: Option<String>,
    #[arg(long = "port", value_name = "PORT")]
    pub port: Option<String>,
    #[arg(long = "db", value_name = "DB")]
    pub db: Option<String>,
    #[arg(long = "user", value_name = "USER")]
    pub user: Option<String>,
    #[arg(long = "password", value_name = "PASSWORD")]
    pub password: Option<String>,
    #[arg(long = "table", value_name = "TABLE")]
    pub table: Option<String>,
    #[arg(long = "page", value_name = "PAGE")]
    pub page: Option<String>,
    #[arg(long = "max-rows", value_name = "ROWS")]
    pub max_rows: Option<String>,
    #[arg(long = "append")]
    pub append: bool,
    #[arg(long = "rule-row", value_name = "ROW")]
    pub rule_row: Option<String>,
    #[arg(long = "first-row", value_name = "ROW")]
    pub first_row: Option<String>,
    #[arg(long = "credentials", value_name = "PATH")]
    pub credentials: Option<String>,
}

macro_rules! flag_values {
    ($flags:expr) => {{
        let flags = $flags;
        let mut values = FieldValues::default();
        values.insert_opt(Field::SheetId, flags.sheet);
        values.insert_opt(Field::Hostname, flags.hostname);
        values.insert_opt(Field::Port, flags.port);
        values.insert_opt(Field::Db, flags.db);
        values.insert_opt(Field::User, flags.user);
        values.insert_opt(Field::Password, flags.password);
        values.insert_opt(Field::Table, flags.table);
        values.insert_opt(Field::Page, flags.page);
        values.insert_opt(Field::MaxRows, flags.max_rows);
        values.insert_switch(Field::Append, flags.append);
        values.insert_opt(Field::RuleRow, flags.rule_row);
        values.insert_opt(Field::FirstRow, flags.first_row);
        values.insert_opt(Field::Credentials, flags.credentials);
        values
    }};
}

impl From<ShortFlags> for FieldValues {
    fn from(flags: ShortFlags) -> Self {
        flag_values!(flags)
    }
}

impl From<LongFlags> for FieldValues {
    fn from(flags: LongFlags) -> Self {
        flag_values!(flags)
    }
}
