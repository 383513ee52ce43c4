/// Catalog lookup used to confirm a table exists in the connected schema.
/// The candidate name is always bound to the placeholder, never spliced in.
pub const CATALOG_LOOKUP: &str = "SELECT table_name FROM information_schema.TABLES \
     WHERE table_name = ? AND table_schema = DATABASE()";

/// A table name the database catalog has confirmed. Only obtainable through
/// a catalog match, so it is safe to place in a `FROM` clause.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableIdentifier {
    name: String,
}

impl TableIdentifier {
    pub(crate) fn confirmed(name: String) -> Self {
        Self { name }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Unfiltered, unordered full scan.
    pub fn scan_statement(&self) -> String {
        format!("SELECT * FROM `{}`", self.name.replace('`', "``"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scan_statement() {
        let table = TableIdentifier::confirmed("orders".to_string());
        assert_eq!(table.scan_statement(), "SELECT * FROM `orders`");
    }

    #[test]
    fn test_scan_statement_escapes_backticks() {
        let table = TableIdentifier::confirmed("we`ird".to_string());
        assert_eq!(table.scan_statement(), "SELECT * FROM `we``ird`");
    }

    #[test]
    fn test_catalog_lookup_is_parameterized() {
        assert_eq!(CATALOG_LOOKUP.matches('?').count(), 1);
    }
}
