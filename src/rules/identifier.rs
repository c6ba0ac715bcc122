//! Identifier grammar checks for suppression rules
//!
//! A rule identifier is either the full wildcard `*`, a CVE identifier
//! (`CVE-YYYY-NNNNN`), or a CWE group list (`CWE-409`, `CWE-117,93`).

use once_cell::sync::Lazy;
use regex::Regex;

use crate::rules::Rejection;

/// The full-wildcard identifier sentinel
pub const WILDCARD: &str = "*";

/// CVE identifier: 4-digit year, 4-7 digit sequence number
static CVE_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"^CVE-\d{4}-\d{4,7}$").unwrap());

/// CWE identifier: comma-separated 1-4 digit groups, prefix on the first only
static CWE_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"^CWE-\d{1,4}(,\d{1,4})*$").unwrap());

/// Any character outside the identifier alphabet
static INVALID_ID_CHARS: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^a-zA-Z0-9\-*,]").unwrap());

/// Check whether an identifier is exactly the full wildcard
pub fn is_wildcard(id: &str) -> bool {
    id.trim() == WILDCARD
}

/// Validate a rule identifier
///
/// Checks, in order: presence, character set, partial wildcards, and
/// finally the CVE/CWE grammar. The partial-wildcard guard runs before
/// grammar matching so `CVE-2025-*` reports a wildcard problem rather
/// than a format problem.
pub fn check_id(id: &str) -> Result<(), Rejection> {
    let trimmed = id.trim();

    if trimmed.is_empty() {
        return Err(Rejection::new("id-required", "Vulnerability ID is required"));
    }

    if INVALID_ID_CHARS.is_match(trimmed) {
        return Err(Rejection::new(
            "id-charset",
            format!("ID contains invalid characters: {}", trimmed),
        ));
    }

    // A wildcard anywhere but alone would need prefix-matching semantics
    // at lookup time, which the matcher deliberately does not have.
    if trimmed.contains(WILDCARD) && trimmed != WILDCARD {
        return Err(Rejection::new(
            "id-partial-wildcard",
            format!("Partial wildcards not allowed in ID: {}", trimmed),
        ));
    }

    if trimmed != WILDCARD && !CVE_PATTERN.is_match(trimmed) && !CWE_PATTERN.is_match(trimmed) {
        let upper = trimmed.to_uppercase();
        let message = if upper.starts_with("CVE") {
            format!("Invalid CVE format: {}. Use CVE-YYYY-NNNNN", trimmed)
        } else if upper.starts_with("CWE") {
            format!("Invalid CWE format: {}. Use CWE-NNN", trimmed)
        } else {
            format!("Invalid ID format: {}. Use CVE-YYYY-NNNNN or CWE-NNN", trimmed)
        };
        return Err(Rejection::new("id-format", message));
    }

    Ok(())
}
