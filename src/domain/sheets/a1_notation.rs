use std::fmt::Formatter;

/// A rendered range reference such as `Sheet1!A1:C10`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct A1Notation(pub String);

impl std::fmt::Display for A1Notation {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<A1Notation> for String {
    fn from(a1_notation: A1Notation) -> Self {
        a1_notation.0
    }
}

impl AsRef<str> for A1Notation {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

pub trait ToA1Notation {
    fn to_a1_notation(&self) -> A1Notation;
}

/// Page names made of letters, digits and underscores are used bare; anything
/// else is wrapped in single quotes with embedded quotes doubled.
pub fn sheet_prefix(page_name: &str) -> String {
    let bare = page_name
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '_');
    if bare {
        page_name.to_owned()
    } else {
        format!("'{}'", page_name.replace('\'', "''"))
    }
}
