//! Credential verification
//!
//! Checks a caller-supplied login/password pair against the backing store
//! and reports the outcome together with the stored display name.

pub mod credentials;
pub mod results;
pub mod verifier;

pub use credentials::Credential;
pub use results::VerificationResult;
pub use verifier::CredentialVerifier;
