//! Database connection configuration

/// MySQL port used when none is given
pub const DEFAULT_MYSQL_PORT: u16 = 3306;

/// Where and as whom to connect
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatabaseConfig {
    /// MySQL host (default: "localhost")
    pub host: String,

    /// MySQL port (default: 3306)
    pub port: u16,

    pub user: Option<String>,

    pub password: Option<String>,

    /// Default schema
    pub database: Option<String>,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            host: "localhost".to_string(),
            port: DEFAULT_MYSQL_PORT,
            user: None,
            password: None,
            database: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = DatabaseConfig::default();
        assert_eq!(config.host, "localhost");
        assert_eq!(config.port, 3306);
        assert!(config.user.is_none());
        assert!(config.password.is_none());
        assert!(config.database.is_none());
    }
}
