//! Verification result types
//!
//! Defines result structures returned by credential verification.

/// Result of a single verification call
///
/// Valid for that call only; the verifier keeps no state across calls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerificationResult {
    pub success: bool,
    pub display_name: String,
}

impl VerificationResult {
    /// A matching row was found.
    pub fn authenticated(display_name: impl Into<String>) -> Self {
        Self {
            success: true,
            display_name: display_name.into(),
        }
    }

    /// No row matched the supplied pair.
    pub fn rejected() -> Self {
        Self {
            success: false,
            display_name: String::new(),
        }
    }
}
