//! In-memory credential store
//!
//! Instance-based stand-in for the MySQL table, used by tests and demos.
//! Lookups compare login and password by exact string equality, matching
//! the parameterized query's semantics.

use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;

use super::CredentialStore;
use crate::error::StorageError;

struct StoredUser {
    password: String,
    display_name: String,
}

/// In-memory credential table keyed by login.
#[derive(Default)]
pub struct MemoryStore {
    users: RwLock<HashMap<String, StoredUser>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace a stored credential row.
    pub fn insert(
        &self,
        login: impl Into<String>,
        password: impl Into<String>,
        display_name: impl Into<String>,
    ) {
        self.users
            .write()
            .expect("couldn't get credential store")
            .insert(
                login.into(),
                StoredUser {
                    password: password.into(),
                    display_name: display_name.into(),
                },
            );
    }
}

#[async_trait]
impl CredentialStore for MemoryStore {
    async fn lookup(&self, login: &str, password: &str) -> Result<Option<String>, StorageError> {
        let users = self.users.read().expect("couldn't get credential store");
        Ok(users
            .get(login)
            .filter(|user| user.password == password)
            .map(|user| user.display_name.clone()))
    }
}
