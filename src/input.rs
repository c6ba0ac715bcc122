//! Request parsing for the admission CLI
//!
//! Parses the JSON the rule store sends on stdin: either a rule record
//! to validate or a rule/finding identifier pair to match.

use serde::Deserialize;

/// A suppression rule record as the rule store supplies it
///
/// Absent fields deserialize to empty strings. `ser_id` and
/// `description` come along from the store record and are only used for
/// audit summaries.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SuppressionRule {
    /// Vulnerability identifier: CVE, CWE group list, or `*`
    pub id: String,

    /// ARN-shaped resource pattern, may contain `*` segments
    pub resource_pattern: String,

    /// Exact resource-type taxonomy tag
    pub resource_type: String,

    /// Scanner source; only Inspector rules are validated
    pub product_name: String,

    /// Exception-request ticket the rule was filed under
    pub ser_id: String,

    /// Free-form justification from the rule author
    pub description: String,
}

impl SuppressionRule {
    /// Get a summary of the rule for logging
    pub fn summary(&self) -> String {
        let mut parts = vec![format!("id={}", self.id)];
        if !self.resource_pattern.is_empty() {
            parts.push(format!("pattern={}", self.resource_pattern));
        }
        if !self.resource_type.is_empty() {
            parts.push(format!("type={}", self.resource_type));
        }
        if !self.product_name.is_empty() {
            parts.push(format!("product={}", self.product_name));
        }
        if !self.ser_id.is_empty() {
            parts.push(format!("ser={}", self.ser_id));
        }
        parts.join(" ")
    }
}

/// A single request to the engine
#[derive(Debug, Clone)]
pub enum Request {
    /// Validate a rule before it is persisted
    Validate { rule: SuppressionRule },

    /// Check an admitted rule against a finding
    Match {
        rule_id: String,
        finding_id: String,
    },

    /// Unrecognized request shape - rejected by the CLI
    Unknown { raw: serde_json::Value },
}

impl<'de> Deserialize<'de> for Request {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        // Deserialize as raw JSON first, then sniff the shape
        let value = serde_json::Value::deserialize(deserializer)?;

        if let Some(obj) = value.as_object() {
            // Validation request carries a "rule" object
            if let Some(rule_value) = obj.get("rule") {
                if let Ok(rule) = SuppressionRule::deserialize(rule_value.clone()) {
                    return Ok(Request::Validate { rule });
                }
            }

            // Match request carries both identifiers
            if let (Some(rule_id), Some(finding_id)) = (
                obj.get("rule_id").and_then(|v| v.as_str()),
                obj.get("finding_id").and_then(|v| v.as_str()),
            ) {
                return Ok(Request::Match {
                    rule_id: rule_id.to_string(),
                    finding_id: finding_id.to_string(),
                });
            }
        }

        Ok(Request::Unknown { raw: value })
    }
}

impl Request {
    /// Parse a request from a JSON string
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Get a summary of the request for logging
    pub fn summary(&self) -> String {
        match self {
            Request::Validate { rule } => format!("validate: {}", rule.summary()),
            Request::Match {
                rule_id,
                finding_id,
            } => format!("match: rule={} finding={}", rule_id, finding_id),
            Request::Unknown { .. } => "unknown request".to_string(),
        }
    }
}
