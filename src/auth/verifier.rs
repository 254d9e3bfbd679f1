//! Credential verifier
//!
//! Performs the single verification operation: one store lookup per call,
//! mapped to authenticated / rejected / storage error.

use log::{debug, info};

use super::credentials::Credential;
use super::results::VerificationResult;
use crate::error::StorageError;
use crate::store::CredentialStore;

/// Verifies credentials against an injected backing store.
///
/// `verify` returns a fresh result value per call and mutates nothing, so
/// one verifier may be shared across concurrent callers.
pub struct CredentialVerifier<S: CredentialStore> {
    store: S,
}

impl<S: CredentialStore> CredentialVerifier<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Check the pair against the store.
    ///
    /// Exactly one matching row yields success plus the stored display name;
    /// no match yields failure with an empty name. Store failures propagate
    /// as `StorageError` and are never reported as a failed login.
    pub async fn verify(
        &self,
        credential: &Credential,
    ) -> Result<VerificationResult, StorageError> {
        debug!("Verifying credentials for login '{}'", credential.login);

        match self
            .store
            .lookup(&credential.login, &credential.password)
            .await?
        {
            Some(display_name) => {
                info!("Login '{}' authenticated", credential.login);
                Ok(VerificationResult::authenticated(display_name))
            }
            None => {
                info!("Login '{}' rejected", credential.login);
                Ok(VerificationResult::rejected())
            }
        }
    }
}
