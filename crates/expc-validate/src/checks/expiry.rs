//! Expiry date checks run at query time.

use expc_model::{CheckType, ExperimentDefinition, Issue};

use crate::policy::{ExpiryPolicy, in_blackout_window, parse_expiry};

/// Check the expiry date of a structurally valid definition.
///
/// Format and blackout problems are errors. Past and far-future expiries are
/// warnings and only reported when `check_expiry` is set.
pub fn check(
    definition: &ExperimentDefinition,
    policy: &ExpiryPolicy,
    check_expiry: bool,
) -> Vec<Issue> {
    let Some(expiry) = parse_expiry(&definition.expiry) else {
        return vec![Issue::error(
            CheckType::InvalidExpiryFormat,
            format!(
                "invalid date format in expiry: {} for experiment {}",
                definition.expiry, definition.name
            ),
        )];
    };
    if in_blackout_window(expiry) {
        return vec![Issue::error(
            CheckType::ExpiryInBlackout,
            format!(
                "experiment {}: expiration is not allowed between Nov 1 and Jan 15 (experiment lists {})",
                definition.name, definition.expiry
            ),
        )];
    }
    if !check_expiry {
        return Vec::new();
    }
    let mut issues = Vec::new();
    if policy.is_expired(expiry) {
        issues.push(Issue::warning(
            CheckType::Expired,
            format!("experiment {} expired on {}", definition.name, definition.expiry),
        ));
    }
    if policy.is_too_far(expiry) {
        issues.push(Issue::warning(
            CheckType::ExpiryTooFar,
            format!(
                "experiment {} expires far in the future on {}; expiry should be no more than {} days from now",
                definition.name, definition.expiry, policy.horizon_days
            ),
        ));
    }
    issues
}
