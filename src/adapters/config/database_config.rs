#[derive(serde::Deserialize, Clone, PartialEq, Eq)]
pub struct DatabaseConfig {
    pub hostname: Box<str>,
    pub database: Box<str>,
    pub user: Box<str>,
    pub password: Box<str>,
    #[serde(default)]
    pub port: Option<u16>,
}

impl std::fmt::Debug for DatabaseConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DatabaseConfig")
            .field("hostname", &self.hostname)
            .field("database", &self.database)
            .field("user", &self.user)
            .field("password", &"<redacted>")
            .field("port", &self.port)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_hides_password() {
        let config = DatabaseConfig {
            hostname: "db.local".into(),
            database: "shop".into(),
            user: "reader".into(),
            password: "hunter2".into(),
            port: None,
        };
        let printed = format!("{:?}", config);
        assert!(printed.contains("db.local"));
        assert!(!printed.contains("hunter2"));
    }

    #[test]
    fn test_deserialize_without_port() {
        let config: DatabaseConfig = serde_json::from_value(serde_json::json!({
            "hostname": "db.local",
            "database": "shop",
            "user": "reader",
            "password": "hunter2"
        }))
        .unwrap();
        assert_eq!(&*config.database, "shop");
        assert_eq!(config.port, None);
    }
}
