//! Configuration for the backing credential store
//!
//! Loads the store address, database account, and the table/column names of
//! the credentials table from config.toml with environment overrides.

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

/// Connection and schema configuration for the backing store.
///
/// Passed to the store at construction; nothing in this crate reads
/// configuration through globals.
#[derive(Debug, Deserialize, Clone)]
pub struct StoreConfig {
    /// Hostname of the database server
    pub host: String,

    /// Port of the database server
    pub port: u16,

    /// Database holding the credentials table
    pub database: String,

    /// Database account credentials
    /// Environment: DB_USER / DB_PASSWORD
    pub user: String,
    pub password: String,

    /// Credentials table and its columns
    pub table: String,
    pub login_column: String,
    pub password_column: String,
    pub name_column: String,
}

impl StoreConfig {
    /// Load configuration from config.toml (optional) with DB_* environment
    /// overrides. Missing DB_USER/DB_PASSWORD default to empty strings; the
    /// connection attempt then fails at the server and surfaces as a
    /// storage error rather than a load error.
    pub fn load() -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .set_default("host", "localhost")?
            .set_default("port", 3306)?
            .set_default("database", "connectiondb")?
            .set_default("user", "")?
            .set_default("password", "")?
            .set_default("table", "usuarios")?
            .set_default("login_column", "login")?
            .set_default("password_column", "senha")?
            .set_default("name_column", "nome")?
            .add_source(File::with_name("config").required(false))
            .add_source(Environment::with_prefix("DB"))
            .build()?;

        let config: StoreConfig = settings.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Validation for all configuration values
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.port == 0 {
            return Err(ConfigError::Message("port cannot be 0".into()));
        }

        if self.host.is_empty() {
            return Err(ConfigError::Message("host cannot be empty".into()));
        }

        if self.database.is_empty() {
            return Err(ConfigError::Message("database cannot be empty".into()));
        }

        // Table and column names are interpolated into query text, so they
        // must be plain SQL identifiers. Login/password values never are;
        // they are always bound as parameters.
        for (field, value) in [
            ("table", &self.table),
            ("login_column", &self.login_column),
            ("password_column", &self.password_column),
            ("name_column", &self.name_column),
        ] {
            if !is_sql_identifier(value) {
                return Err(ConfigError::Message(format!(
                    "{} is not a valid SQL identifier: {:?}",
                    field, value
                )));
            }
        }

        Ok(())
    }
}

/// Accepts `[A-Za-z_][A-Za-z0-9_]*` only.
fn is_sql_identifier(value: &str) -> bool {
    let mut chars = value.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_config() -> StoreConfig {
        StoreConfig {
            host: "localhost".to_string(),
            port: 3306,
            database: "connectiondb".to_string(),
            user: "app".to_string(),
            password: "secret".to_string(),
            table: "usuarios".to_string(),
            login_column: "login".to_string(),
            password_column: "senha".to_string(),
            name_column: "nome".to_string(),
        }
    }

    #[test]
    fn test_valid_config_passes_validation() {
        assert!(sample_config().validate().is_ok());
    }

    #[test]
    fn test_rejects_port_zero() {
        let mut config = sample_config();
        config.port = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_empty_database() {
        let mut config = sample_config();
        config.database = String::new();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_malformed_identifiers() {
        for bad in ["", "1users", "users; DROP TABLE x", "na-me", "log in"] {
            let mut config = sample_config();
            config.table = bad.to_string();
            assert!(config.validate().is_err(), "accepted {:?}", bad);
        }
    }

    #[test]
    fn test_identifier_syntax() {
        assert!(is_sql_identifier("usuarios"));
        assert!(is_sql_identifier("_senha2"));
        assert!(!is_sql_identifier("2senha"));
        assert!(!is_sql_identifier("senha'--"));
    }
}
