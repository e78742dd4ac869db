//! Rollout merge engine.
//!
//! Combines a [`RolloutSpecification`] with the platform registry and the
//! experiment's accumulated requirements to produce one value class and one
//! constraint string per platform.
//!
//! # Rules
//!
//! - An experiment with any requirement resolves to the `debug` value class on
//!   every platform, whatever the rollout asks for. The constraint text lists
//!   the requirements.
//! - Otherwise `default_value` applies everywhere, falling back to the
//!   per-platform entry. A platform with neither fails the whole merge.
//!
//! Resolution is staged and only written back on success.

use std::collections::BTreeMap;

use tracing::{debug, error};

use expc_model::{DEBUG_VALUE_CLASS, ExperimentDefinition, PlatformResolution, RolloutSpecification};

use crate::error::MergeError;

/// Merge `rollout` into `experiment` for every platform in `platforms`.
///
/// Missing values mark the experiment invalid; a misrouted rollout or an
/// already invalid experiment leaves it untouched.
pub fn merge(
    experiment: &mut ExperimentDefinition,
    rollout: &RolloutSpecification,
    platforms: &BTreeMap<String, String>,
) -> Result<(), MergeError> {
    if !experiment.is_valid() {
        return Err(MergeError::ExperimentInvalid {
            experiment: experiment.name.clone(),
        });
    }
    if rollout.name != experiment.name {
        error!(
            rollout = %rollout.name,
            experiment = %experiment.name,
            "rollout specification does not apply to this experiment"
        );
        return Err(MergeError::NameMismatch {
            rollout: rollout.name.clone(),
            experiment: experiment.name.clone(),
        });
    }

    let mut requirements = experiment.requirements().to_vec();
    for requirement in &rollout.requirements {
        if !requirements.contains(requirement) {
            requirements.push(requirement.clone());
        }
    }

    if rollout.has_no_value() {
        error!(experiment = %experiment.name, "no default for experiment");
        experiment.mark_invalid();
        return Err(MergeError::NoDefault {
            experiment: experiment.name.clone(),
        });
    }

    let constraint = requirements.join(", ");
    let mut resolution = PlatformResolution::default();
    for platform in platforms.keys() {
        let Some(chosen) = rollout.value_for(platform) else {
            error!(
                experiment = %experiment.name,
                platform = %platform,
                "no value set for experiment on platform"
            );
            experiment.mark_invalid();
            return Err(MergeError::NoPlatformValue {
                experiment: experiment.name.clone(),
                platform: platform.clone(),
            });
        };
        if requirements.is_empty() {
            resolution.insert(platform, chosen.to_string(), String::new());
        } else {
            resolution.insert(platform, DEBUG_VALUE_CLASS.to_string(), constraint.clone());
        }
    }

    for requirement in requirements {
        experiment.add_requirement(requirement);
    }
    debug!(
        experiment = %experiment.name,
        platforms = ?resolution.defaults,
        constraint = %constraint,
        "merged rollout specification"
    );
    experiment.set_resolution(resolution);
    Ok(())
}
