//! suppression-guard - Validation and matching for finding-suppression rules
//!
//! This library decides whether a security-scanner suppression rule is
//! safe to admit, and whether an admitted rule applies to a finding.
//!
//! # Features
//!
//! - **Identifier grammar**: Exact CVE/CWE formats or the full wildcard `*`
//! - **Partial-wildcard blocking**: `CVE-2025-*` is never accepted
//! - **Scope cross-checks**: A wildcard ID may not combine with a
//!   wildcarded resource pattern; resource types are always exact
//! - **Product gating**: Only rules from governed scanners (Inspector by
//!   default) are validated; others pass through
//! - **Exact matching**: An admitted rule matches a finding by equality
//!   or full wildcard, never by prefix
//! - **Audit logging**: JSONL log of all verdicts
//!
//! # Example
//!
//! ```
//! use suppression_guard::{Config, SuppressionRule, ValidationEngine};
//!
//! let engine = ValidationEngine::new(Config::default());
//!
//! let rule = SuppressionRule {
//!     id: "CVE-2025-12345".to_string(),
//!     resource_pattern: "arn:aws:ec2:*:*:instance/*".to_string(),
//!     product_name: "Inspector".to_string(),
//!     ..Default::default()
//! };
//!
//! let verdict = engine.validate(&rule);
//! assert!(verdict.is_admit());
//!
//! assert!(engine.matches("CVE-2025-12345", "CVE-2025-12345"));
//! assert!(!engine.matches("CVE-2025", "CVE-2025-12345"));
//! ```

pub mod audit;
pub mod config;
pub mod engine;
pub mod input;
pub mod output;
pub mod rules;

// Re-exports for convenience
pub use config::Config;
pub use engine::matcher::matches_finding;
pub use engine::ValidationEngine;
pub use input::{Request, SuppressionRule};
pub use output::{GuardResponse, Verdict};
