//! Validation engine for suppression rules
//!
//! Runs the ordered check chain over one rule at a time and gates on
//! the rule's scanner source.

pub mod matcher;

use crate::config::Config;
use crate::input::SuppressionRule;
use crate::output::Verdict;
use crate::rules::{identifier, resource, Rejection};

use std::env;

/// The rule validation engine
pub struct ValidationEngine {
    config: Config,
}

impl ValidationEngine {
    /// Create a new engine with the given configuration
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Check if validation is disabled via environment
    pub fn is_disabled(&self) -> bool {
        env::var("SUPPRESSION_GUARD_DISABLED").is_ok()
    }

    /// Check if warn-only mode is enabled
    pub fn is_warn_only(&self) -> bool {
        env::var("SUPPRESSION_GUARD_WARN_ONLY").is_ok()
    }

    /// Whether this engine has authority over rules from the given scanner
    pub fn governs(&self, product_name: &str) -> bool {
        let product = product_name.trim();
        self.config
            .general
            .products
            .iter()
            .any(|p| p.eq_ignore_ascii_case(product))
    }

    /// Main entry point: validate one rule and return a verdict
    pub fn validate(&self, rule: &SuppressionRule) -> Verdict {
        if self.is_disabled() {
            return Verdict::admit("disabled via SUPPRESSION_GUARD_DISABLED");
        }

        if !self.governs(&rule.product_name) {
            return Verdict::admit(format!("product not governed: {}", rule.product_name));
        }

        let verdict = match self.run_checks(rule) {
            Ok(()) => Verdict::admit("rule passed all checks"),
            Err(rejection) => Verdict::from(rejection),
        };

        // Warn-only mode downgrades rejections
        if self.is_warn_only() {
            if let Verdict::Reject { check, reason } = verdict {
                return Verdict::warn(check, reason);
            }
        }

        verdict
    }

    // First failure wins; callers depend on receiving the first
    // applicable error when a rule breaks several checks at once.
    fn run_checks(&self, rule: &SuppressionRule) -> Result<(), Rejection> {
        identifier::check_id(&rule.id)?;
        resource::check_pattern(&rule.id, &rule.resource_pattern)?;
        resource::check_resource_type(&rule.resource_type)?;
        resource::check_scope(&rule.resource_pattern, &rule.resource_type)?;
        Ok(())
    }

    /// Whether an admitted rule's identifier applies to a finding
    pub fn matches(&self, rule_id: &str, finding_id: &str) -> bool {
        matcher::matches_finding(rule_id, finding_id)
    }

    /// Get the configuration
    pub fn config(&self) -> &Config {
        &self.config
    }
}
