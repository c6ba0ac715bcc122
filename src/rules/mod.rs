//! Validation checks for suppression rules
//!
//! Each check is an independent predicate over rule fields. The engine
//! runs them in a fixed order and stops at the first failure, so the
//! caller always sees the first applicable error.

pub mod identifier;
pub mod resource;

/// A failed validation check
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rejection {
    /// Identifier of the check that rejected the rule
    pub check: &'static str,

    /// Caller-facing reason, surfaced verbatim
    pub message: String,
}

impl Rejection {
    /// Create a new rejection
    pub fn new(check: &'static str, message: impl Into<String>) -> Self {
        Self {
            check,
            message: message.into(),
        }
    }
}
