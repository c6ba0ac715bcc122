//! Verdicts and JSON responses for the admission CLI
//!
//! Produces the JSON output format consumed by the rule store.

use serde::Serialize;

use crate::rules::Rejection;

/// Decision result from the validation engine
#[derive(Debug, Clone)]
pub enum Verdict {
    /// Admit the rule
    Admit { reason: String },

    /// Reject the rule
    Reject { check: String, reason: String },

    /// Rejected, but admitted anyway (warn-only mode)
    Warn { check: String, reason: String },
}

impl Verdict {
    /// Create an admit verdict
    pub fn admit(reason: impl Into<String>) -> Self {
        Verdict::Admit {
            reason: reason.into(),
        }
    }

    /// Create a reject verdict
    pub fn reject(check: impl Into<String>, reason: impl Into<String>) -> Self {
        Verdict::Reject {
            check: check.into(),
            reason: reason.into(),
        }
    }

    /// Create a warn verdict
    pub fn warn(check: impl Into<String>, reason: impl Into<String>) -> Self {
        Verdict::Warn {
            check: check.into(),
            reason: reason.into(),
        }
    }

    /// Check if this verdict admits the rule
    pub fn is_admit(&self) -> bool {
        matches!(self, Verdict::Admit { .. })
    }

    /// Check if this verdict rejects the rule
    pub fn is_reject(&self) -> bool {
        matches!(self, Verdict::Reject { .. })
    }

    /// Get the check that fired, if any
    pub fn check(&self) -> Option<&str> {
        match self {
            Verdict::Admit { .. } => None,
            Verdict::Reject { check, .. } => Some(check),
            Verdict::Warn { check, .. } => Some(check),
        }
    }

    /// Get the reason
    pub fn reason(&self) -> &str {
        match self {
            Verdict::Admit { reason } => reason,
            Verdict::Reject { reason, .. } => reason,
            Verdict::Warn { reason, .. } => reason,
        }
    }
}

impl From<Rejection> for Verdict {
    fn from(rejection: Rejection) -> Self {
        Verdict::Reject {
            check: rejection.check.to_string(),
            reason: rejection.message,
        }
    }
}

/// JSON response written to stdout by the CLI
#[derive(Debug, Serialize)]
pub struct GuardResponse {
    /// Validation result (absent for match responses)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub valid: Option<bool>,

    /// Match result (absent for validation responses)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub matched: Option<bool>,

    /// Check that rejected the rule
    #[serde(skip_serializing_if = "Option::is_none")]
    pub check: Option<String>,

    /// Rejection reason
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,

    /// Warn-only mode: the rejection that was downgraded
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warning: Option<String>,
}

impl GuardResponse {
    /// Create an admitting validation response
    pub fn valid() -> Self {
        GuardResponse {
            valid: Some(true),
            matched: None,
            check: None,
            error: None,
            warning: None,
        }
    }

    /// Create a rejecting validation response
    pub fn invalid(check: &str, error: &str) -> Self {
        GuardResponse {
            valid: Some(false),
            matched: None,
            check: Some(check.to_string()),
            error: Some(error.to_string()),
            warning: None,
        }
    }

    /// Create a warn response (admits but carries the downgraded rejection)
    pub fn warned(check: &str, warning: &str) -> Self {
        GuardResponse {
            valid: Some(true),
            matched: None,
            check: Some(check.to_string()),
            error: None,
            warning: Some(warning.to_string()),
        }
    }

    /// Create a match response
    pub fn matched(matched: bool) -> Self {
        GuardResponse {
            valid: None,
            matched: Some(matched),
            check: None,
            error: None,
            warning: None,
        }
    }

    /// Create a response from a verdict
    pub fn from_verdict(verdict: &Verdict) -> Self {
        match verdict {
            Verdict::Admit { .. } => GuardResponse::valid(),
            Verdict::Reject { check, reason } => GuardResponse::invalid(check, reason),
            Verdict::Warn { check, reason } => GuardResponse::warned(check, reason),
        }
    }

    /// Serialize to JSON string
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| "{}".to_string())
    }
}
