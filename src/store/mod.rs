//! Credential storage backends
//!
//! Defines the storage seam the verifier runs against, plus the MySQL
//! backend and an in-memory store for tests and demos.

use async_trait::async_trait;

use crate::error::StorageError;

pub mod memory;
pub mod mysql;

pub use memory::MemoryStore;
pub use mysql::MySqlStore;

/// A backing store holding the credentials table.
#[async_trait]
pub trait CredentialStore: Send + Sync {
    /// Look up the display name stored for the given login/password pair.
    ///
    /// Returns `Ok(None)` when no row matches. Both values are opaque
    /// strings; any format constraints belong to the store's schema.
    async fn lookup(&self, login: &str, password: &str) -> Result<Option<String>, StorageError>;
}
