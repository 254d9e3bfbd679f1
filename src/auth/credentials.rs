//! Credential input type
//!
//! A caller-supplied login/password pair. Not persisted by this crate.

/// A login/password pair to verify.
///
/// Both fields are opaque strings; no format constraints are enforced here.
#[derive(Debug, Clone)]
pub struct Credential {
    pub login: String,
    pub password: String,
}

impl Credential {
    pub fn new(login: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            login: login.into(),
            password: password.into(),
        }
    }
}
