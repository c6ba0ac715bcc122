//! Finding matcher for admitted suppression rules
//!
//! Exact match or full wildcard only. A prior revision matched on
//! identifier prefixes; that behavior is gone and must stay gone, so a
//! rule for `CVE-2025` never matches finding `CVE-2025-12345`.

use crate::rules::identifier::WILDCARD;

/// Decide whether a rule identifier applies to a finding identifier
pub fn matches_finding(rule_id: &str, finding_id: &str) -> bool {
    let rule_id = rule_id.trim();
    let finding_id = finding_id.trim();

    if rule_id.is_empty() || finding_id.is_empty() {
        return false;
    }

    // * suppresses every finding
    if rule_id == WILDCARD {
        return true;
    }

    rule_id == finding_id
}
