//! Integration tests for suppression-rule validation

use suppression_guard::{Config, Request, SuppressionRule, ValidationEngine, Verdict};

fn engine() -> ValidationEngine {
    ValidationEngine::new(Config::default())
}

fn validate_json(json: &str) -> Verdict {
    let request = Request::from_json(json).unwrap();
    match request {
        Request::Validate { rule } => engine().validate(&rule),
        _ => panic!("Expected Validate request"),
    }
}

fn inspector_rule(id: &str, pattern: &str, resource_type: &str) -> SuppressionRule {
    SuppressionRule {
        id: id.to_string(),
        resource_pattern: pattern.to_string(),
        resource_type: resource_type.to_string(),
        product_name: "Inspector".to_string(),
        ..Default::default()
    }
}

// ============================================================================
// Identifier grammar
// ============================================================================

#[test]
fn test_valid_cve_rule_admitted() {
    let verdict = engine().validate(&inspector_rule(
        "CVE-2025-12345",
        "arn:aws:ec2:*:*:instance/*",
        "",
    ));
    assert!(verdict.is_admit());
}

#[test]
fn test_valid_cwe_rule_admitted() {
    let verdict = engine().validate(&inspector_rule("CWE-409", "*", ""));
    assert!(verdict.is_admit());

    let verdict = engine().validate(&inspector_rule("CWE-117,93", "", "AWS::Lambda::Function"));
    assert!(verdict.is_admit());
}

#[test]
fn test_blank_id_rejected() {
    let verdict = engine().validate(&inspector_rule("", "arn:aws:s3:::my-bucket", ""));
    assert!(verdict.is_reject());
    assert_eq!(verdict.reason(), "Vulnerability ID is required");
}

#[test]
fn test_bad_cve_year_rejected() {
    let verdict = engine().validate(&inspector_rule("CVE-25-12345", "arn:aws:s3:::b", ""));
    assert!(verdict.is_reject());
    assert!(verdict.reason().contains("Invalid CVE format"));
}

#[test]
fn test_cve_sequence_length_bounds() {
    // 3 digits: too short
    let verdict = engine().validate(&inspector_rule("CVE-2025-123", "arn:aws:s3:::b", ""));
    assert!(verdict.is_reject());

    // 8 digits: too long
    let verdict = engine().validate(&inspector_rule("CVE-2025-12345678", "arn:aws:s3:::b", ""));
    assert!(verdict.is_reject());

    // 4 and 7 digits: in bounds
    assert!(engine()
        .validate(&inspector_rule("CVE-2025-1234", "arn:aws:s3:::b", ""))
        .is_admit());
    assert!(engine()
        .validate(&inspector_rule("CVE-2025-1234567", "arn:aws:s3:::b", ""))
        .is_admit());
}

#[test]
fn test_invalid_characters_rejected() {
    let verdict = engine().validate(&inspector_rule("CVE-2025-12345;", "arn:aws:s3:::b", ""));
    assert!(verdict.is_reject());
    assert!(verdict.reason().contains("invalid characters"));
}

#[test]
fn test_partial_wildcard_id_rejected() {
    for partial in ["CVE-2025-*", "CWE-*", "C*E-2025-12345"] {
        let verdict = engine().validate(&inspector_rule(partial, "arn:aws:s3:::b", ""));
        assert!(verdict.is_reject(), "{} should be rejected", partial);
        assert!(verdict.reason().contains("Partial wildcards not allowed in ID"));
    }
}

// ============================================================================
// Resource scoping
// ============================================================================

#[test]
fn test_wildcard_id_with_wildcard_pattern_rejected() {
    let verdict = engine().validate(&inspector_rule("*", "arn:aws:*", ""));
    assert!(verdict.is_reject());
    assert!(verdict.reason().contains("wildcards when ID is *"));
}

#[test]
fn test_wildcard_id_with_exact_arn_admitted() {
    let verdict = engine().validate(&inspector_rule(
        "*",
        "arn:aws:ec2:us-east-1:123456789012:instance/i-1234567890abcdef0",
        "",
    ));
    assert!(verdict.is_admit());
}

#[test]
fn test_wildcard_resource_type_rejected() {
    let verdict = engine().validate(&inspector_rule("CVE-2025-11111", "", "AWS::EC2::*"));
    assert!(verdict.is_reject());
    assert!(verdict.reason().contains("Wildcards not allowed in ResourceType"));
}

#[test]
fn test_no_scope_rejected() {
    let verdict = engine().validate(&inspector_rule("CVE-2025-22222", "", ""));
    assert!(verdict.is_reject());
    assert!(verdict.reason().contains("required"));
}

#[test]
fn test_both_scope_fields_admitted() {
    let verdict = engine().validate(&inspector_rule(
        "CVE-2025-12345",
        "arn:aws:lambda:*:*:function:my-function",
        "AWS::Lambda::Function",
    ));
    assert!(verdict.is_admit());
}

// ============================================================================
// Product gating
// ============================================================================

#[test]
fn test_security_hub_rule_bypasses_validation() {
    let rule = SuppressionRule {
        id: "aws-foundational-security-best-practices/v/1.0.0/S3.1".to_string(),
        resource_pattern: "arn:aws:s3:::my-bucket".to_string(),
        product_name: "Security Hub".to_string(),
        ..Default::default()
    };
    assert!(engine().validate(&rule).is_admit());
}

#[test]
fn test_empty_product_bypasses_validation() {
    let rule = SuppressionRule {
        id: "not-even-close".to_string(),
        ..Default::default()
    };
    assert!(engine().validate(&rule).is_admit());
}

#[test]
fn test_custom_product_list() {
    let config: Config =
        toml::from_str("[general]\nproducts = [\"inspector\", \"guardduty\"]\n").unwrap();
    let engine = ValidationEngine::new(config);

    let rule = SuppressionRule {
        id: "bogus".to_string(),
        product_name: "GuardDuty".to_string(),
        ..Default::default()
    };
    assert!(engine.validate(&rule).is_reject());
}

// ============================================================================
// Check ordering
// ============================================================================

#[test]
fn test_identifier_error_reported_before_scope_error() {
    // Rule violates the grammar, the type guard, and scope presence;
    // the identifier error comes back first.
    let verdict = engine().validate(&inspector_rule("CVE-oops", "", ""));
    assert_eq!(verdict.check(), Some("id-format"));
}

#[test]
fn test_pattern_conflict_reported_before_type_error() {
    let verdict = engine().validate(&inspector_rule("*", "arn:aws:*", "AWS::EC2::*"));
    assert_eq!(verdict.check(), Some("pattern-wildcard-conflict"));
}

// ============================================================================
// JSON request surface
// ============================================================================

#[test]
fn test_validate_via_json_request() {
    let verdict = validate_json(
        r#"{"rule":{"id":"CVE-2025-12345","resource_pattern":"arn:aws:ec2:*:*:instance/*","product_name":"Inspector"}}"#,
    );
    assert!(verdict.is_admit());

    let verdict = validate_json(
        r#"{"rule":{"id":"*","resource_pattern":"arn:aws:*","product_name":"inspector"}}"#,
    );
    assert!(verdict.is_reject());
    assert!(verdict.reason().contains("wildcards when ID is *"));
}

#[test]
fn test_absent_fields_default_to_empty() {
    let verdict = validate_json(r#"{"rule":{"id":"CVE-2025-22222","product_name":"Inspector"}}"#);
    assert!(verdict.is_reject());
    assert_eq!(verdict.reason(), "ResourcePattern or ResourceType is required");
}
