//! Required field checks.
//!
//! `name`, `description`, `owner` and `expiry` must all be non-empty. Every
//! missing field is reported, not just the first.

use expc_model::{CheckType, ExperimentDefinition, Issue};

pub fn check(definition: &ExperimentDefinition) -> Vec<Issue> {
    let mut issues = Vec::new();
    if definition.name.is_empty() {
        issues.push(Issue::error(CheckType::MissingName, "experiment with no name"));
    }
    let fields = [
        (&definition.description, CheckType::MissingDescription, "description"),
        (&definition.owner, CheckType::MissingOwner, "owner"),
        (&definition.expiry, CheckType::MissingExpiry, "expiry"),
    ];
    for (value, check_type, field) in fields {
        if value.is_empty() {
            issues.push(Issue::error(
                check_type,
                format!("no {field} for experiment {}", definition.name),
            ));
        }
    }
    issues
}
