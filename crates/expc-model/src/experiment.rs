use std::collections::BTreeMap;

use serde::Serialize;

/// Experiment that must never expire.
pub const MONITORING_EXPERIMENT: &str = "monitoring_experiment";

/// Expiry sentinel that exempts an experiment from expiry enforcement.
pub const NEVER_EXPIRES: &str = "never-ever";

/// Value class forced onto every platform when an experiment has requirements.
pub const DEBUG_VALUE_CLASS: &str = "debug";

/// Value class reported for platforms no rollout has resolved.
pub const FALLBACK_VALUE_CLASS: &str = "false";

/// Static metadata of a single experiment plus its per-platform resolution.
///
/// A definition is created once per compilation run. Structural problems do
/// not abort construction; they flip the record to invalid and the record is
/// kept out of generated output.
///
/// Serialize only. Validity is cleared through
/// [`ExperimentDefinition::mark_invalid`] and never restored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExperimentDefinition {
    pub name: String,
    pub description: String,
    pub owner: String,
    pub expiry: String,
    pub uses_polling: bool,
    pub allow_in_fuzzing_config: bool,
    pub test_tags: Vec<String>,
    requirements: Vec<String>,
    valid: bool,
    per_platform_default: BTreeMap<String, String>,
    per_platform_constraint: BTreeMap<String, String>,
}

impl ExperimentDefinition {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        owner: impl Into<String>,
        expiry: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            owner: owner.into(),
            expiry: expiry.into(),
            uses_polling: false,
            allow_in_fuzzing_config: false,
            test_tags: Vec::new(),
            requirements: Vec::new(),
            valid: true,
            per_platform_default: BTreeMap::new(),
            per_platform_constraint: BTreeMap::new(),
        }
    }

    #[must_use]
    pub fn with_uses_polling(mut self, uses_polling: bool) -> Self {
        self.uses_polling = uses_polling;
        self
    }

    #[must_use]
    pub fn with_allow_in_fuzzing_config(mut self, allow: bool) -> Self {
        self.allow_in_fuzzing_config = allow;
        self
    }

    #[must_use]
    pub fn with_test_tags(mut self, tags: Vec<String>) -> Self {
        self.test_tags = tags;
        self
    }

    /// False once any structural or merge-time check has failed.
    pub fn is_valid(&self) -> bool {
        self.valid
    }

    /// Invalidity is permanent for the rest of the run.
    pub fn mark_invalid(&mut self) {
        self.valid = false;
    }

    /// Experiments this one is gated behind, in first-seen order.
    pub fn requirements(&self) -> &[String] {
        &self.requirements
    }

    /// Add a requirement unless it is already present.
    pub fn add_requirement(&mut self, requirement: impl Into<String>) {
        let requirement = requirement.into();
        if !self.requirements.contains(&requirement) {
            self.requirements.push(requirement);
        }
    }

    /// Resolved value class for `platform`, or [`FALLBACK_VALUE_CLASS`].
    pub fn default_value(&self, platform: &str) -> &str {
        self.per_platform_default
            .get(platform)
            .map_or(FALLBACK_VALUE_CLASS, String::as_str)
    }

    /// Human-readable constraint text for `platform` (empty when ungated).
    pub fn additional_constraints(&self, platform: &str) -> &str {
        self.per_platform_constraint
            .get(platform)
            .map_or("", String::as_str)
    }

    pub fn per_platform_default(&self) -> &BTreeMap<String, String> {
        &self.per_platform_default
    }

    pub fn per_platform_constraint(&self) -> &BTreeMap<String, String> {
        &self.per_platform_constraint
    }

    /// Replace the per-platform resolution in one step.
    pub fn set_resolution(&mut self, resolution: PlatformResolution) {
        self.per_platform_default = resolution.defaults;
        self.per_platform_constraint = resolution.constraints;
    }

    pub fn is_monitoring_experiment(&self) -> bool {
        self.name == MONITORING_EXPERIMENT
    }
}

/// Per-platform value classes and constraint text produced by a merge.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlatformResolution {
    pub defaults: BTreeMap<String, String>,
    pub constraints: BTreeMap<String, String>,
}

impl PlatformResolution {
    pub fn insert(&mut self, platform: &str, value_class: String, constraint: String) {
        self.defaults.insert(platform.to_string(), value_class);
        self.constraints.insert(platform.to_string(), constraint);
    }
}
