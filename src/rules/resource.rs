//! Resource scoping checks for suppression rules

use crate::rules::identifier::{is_wildcard, WILDCARD};
use crate::rules::Rejection;

/// Cross-check the resource pattern against the rule identifier
///
/// A wildcard identifier already matches every finding, so its resource
/// pattern must pin down exact resources. A specific identifier may
/// scope with any pattern, wildcarded or not.
pub fn check_pattern(id: &str, resource_pattern: &str) -> Result<(), Rejection> {
    if resource_pattern.trim().is_empty() {
        // presence is enforced by check_scope
        return Ok(());
    }

    if is_wildcard(id) && resource_pattern.contains(WILDCARD) {
        return Err(Rejection::new(
            "pattern-wildcard-conflict",
            "ResourcePattern cannot have wildcards when ID is *",
        ));
    }

    Ok(())
}

/// Resource types are exact taxonomy tags, never patterns
pub fn check_resource_type(resource_type: &str) -> Result<(), Rejection> {
    if resource_type.trim().is_empty() {
        return Ok(());
    }

    if resource_type.contains(WILDCARD) {
        return Err(Rejection::new(
            "type-wildcard",
            format!("Wildcards not allowed in ResourceType: {}", resource_type),
        ));
    }

    Ok(())
}

/// At least one resource field must scope the rule
pub fn check_scope(resource_pattern: &str, resource_type: &str) -> Result<(), Rejection> {
    if resource_pattern.trim().is_empty() && resource_type.trim().is_empty() {
        return Err(Rejection::new(
            "scope-required",
            "ResourcePattern or ResourceType is required",
        ));
    }

    Ok(())
}
