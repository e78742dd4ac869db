//! Validation check modules.
//!
//! Each module performs a specific type of validation check.

pub mod expiry;
pub mod monitoring;
pub mod required;

use expc_model::{ExperimentDefinition, ValidationReport};

use crate::policy::ExpiryPolicy;

/// Construction-time checks: required fields, then the monitoring rule.
pub fn run_structural(definition: &ExperimentDefinition) -> ValidationReport {
    let mut report = ValidationReport::new(&definition.name);

    // 1. Required fields
    for issue in required::check(definition) {
        report.add(issue);
    }

    // 2. Monitoring experiment never expires
    for issue in monitoring::check(definition) {
        report.add(issue);
    }

    report
}

/// Query-time checks on a definition that passed construction.
pub fn run_expiry(
    definition: &ExperimentDefinition,
    policy: &ExpiryPolicy,
    check_expiry: bool,
) -> ValidationReport {
    let mut report = ValidationReport::new(&definition.name);
    if monitoring::is_exempt(definition) {
        return report;
    }
    for issue in expiry::check(definition, policy, check_expiry) {
        report.add(issue);
    }
    report
}
