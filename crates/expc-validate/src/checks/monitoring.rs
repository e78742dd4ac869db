//! The monitoring experiment must never expire.

use expc_model::{CheckType, ExperimentDefinition, Issue, NEVER_EXPIRES};

pub fn check(definition: &ExperimentDefinition) -> Vec<Issue> {
    if definition.is_monitoring_experiment() && definition.expiry != NEVER_EXPIRES {
        return vec![Issue::error(
            CheckType::MonitoringExpiry,
            format!(
                "{} should never expire (expiry must be \"{NEVER_EXPIRES}\", found \"{}\")",
                definition.name, definition.expiry
            ),
        )];
    }
    Vec::new()
}

/// The one definition exempt from every date rule.
pub fn is_exempt(definition: &ExperimentDefinition) -> bool {
    definition.is_monitoring_experiment() && definition.expiry == NEVER_EXPIRES
}
