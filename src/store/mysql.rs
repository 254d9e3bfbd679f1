//! MySQL credential store
//!
//! Executes the credential lookup against a MySQL server. Each lookup opens
//! its own connection and closes it before returning, so concurrent callers
//! share no state.

use async_trait::async_trait;
use log::{debug, warn};
use sqlx::mysql::{MySqlConnectOptions, MySqlConnection};
use sqlx::{Connection, Row};

use super::CredentialStore;
use crate::config::StoreConfig;
use crate::error::StorageError;

/// Credential store backed by a MySQL credentials table.
pub struct MySqlStore {
    options: MySqlConnectOptions,
    host: String,
    sql: String,
}

impl MySqlStore {
    /// Build a store from a validated configuration.
    ///
    /// The lookup SQL is rendered once here. Table and column names come
    /// from the configuration, which restricts them to plain identifiers;
    /// login and password are bound positionally at query time.
    pub fn new(config: &StoreConfig) -> Self {
        let options = MySqlConnectOptions::new()
            .host(&config.host)
            .port(config.port)
            .database(&config.database)
            .username(&config.user)
            .password(&config.password);

        let sql = format!(
            "SELECT {} FROM {} WHERE {} = ? AND {} = ?",
            config.name_column, config.table, config.login_column, config.password_column
        );

        Self {
            options,
            host: config.host.clone(),
            sql,
        }
    }

    /// The rendered lookup statement.
    pub fn query_sql(&self) -> &str {
        &self.sql
    }
}

#[async_trait]
impl CredentialStore for MySqlStore {
    async fn lookup(&self, login: &str, password: &str) -> Result<Option<String>, StorageError> {
        let mut conn = MySqlConnection::connect_with(&self.options).await?;
        debug!("Connected to credential store at {}", self.host);

        // Hold the query result until the connection is closed so the
        // connection is released on the error path too.
        let result = sqlx::query(&self.sql)
            .bind(login)
            .bind(password)
            .fetch_optional(&mut conn)
            .await;

        if let Err(e) = conn.close().await {
            warn!("Failed to close store connection cleanly: {}", e);
        }

        match result? {
            Some(row) => {
                let display_name: String = row.try_get(0)?;
                Ok(Some(display_name))
            }
            None => Ok(None),
        }
    }
}
