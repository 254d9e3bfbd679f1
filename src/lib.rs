pub mod auth;
pub mod config;
pub mod error;
pub mod store;

pub use auth::{Credential, CredentialVerifier, VerificationResult};
pub use config::StoreConfig;
pub use error::StorageError;
pub use store::{CredentialStore, MemoryStore, MySqlStore};
