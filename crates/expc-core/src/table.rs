//! Read-only view of a finished compilation run.

use serde::Serialize;

use expc_model::{CompilerConfig, DEBUG_VALUE_CLASS, ExperimentDefinition};

/// Valid experiments in name order, together with the run's configuration.
///
/// Generators only ever see experiments through this view, so invalid records
/// never reach generated output.
#[derive(Debug, Clone)]
pub struct ResolvedTable<'a> {
    config: &'a CompilerConfig,
    experiments: Vec<&'a ExperimentDefinition>,
}

/// One row of the resolved table for a single platform.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedEntry<'a> {
    pub name: &'a str,
    pub description: &'a str,
    pub value_class: &'a str,
    pub constraint: &'a str,
    pub requirements: &'a [String],
    pub allow_in_fuzzing_config: bool,
}

/// An experiment that only turns on in debug builds for some platform.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DebugExperiment {
    pub experiment: String,
    pub platform: String,
}

impl<'a> ResolvedTable<'a> {
    pub(crate) fn new(
        config: &'a CompilerConfig,
        mut experiments: Vec<&'a ExperimentDefinition>,
    ) -> Self {
        experiments.retain(|experiment| experiment.is_valid());
        experiments.sort_by(|a, b| a.name.cmp(&b.name));
        Self {
            config,
            experiments,
        }
    }

    pub fn config(&self) -> &'a CompilerConfig {
        self.config
    }

    pub fn experiments(&self) -> &[&'a ExperimentDefinition] {
        &self.experiments
    }

    pub fn len(&self) -> usize {
        self.experiments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.experiments.is_empty()
    }

    pub fn get(&self, name: &str) -> Option<&'a ExperimentDefinition> {
        self.experiments
            .binary_search_by(|experiment| experiment.name.as_str().cmp(name))
            .ok()
            .map(|index| self.experiments[index])
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn any_requirements(&self) -> bool {
        self.experiments
            .iter()
            .any(|experiment| !experiment.requirements().is_empty())
    }

    /// Rows for `platform`, in name order.
    pub fn entries(&self, platform: &str) -> Vec<ResolvedEntry<'a>> {
        self.experiments
            .iter()
            .map(|&experiment| ResolvedEntry {
                name: &experiment.name,
                description: &experiment.description,
                value_class: experiment.default_value(platform),
                constraint: experiment.additional_constraints(platform),
                requirements: experiment.requirements(),
                allow_in_fuzzing_config: experiment.allow_in_fuzzing_config,
            })
            .collect()
    }

    /// Every (experiment, platform) pair resolved to the debug value class.
    pub fn debug_experiments(&self) -> Vec<DebugExperiment> {
        let mut found = Vec::new();
        for experiment in &self.experiments {
            for platform in self.config.platform_names() {
                if experiment.default_value(platform) == DEBUG_VALUE_CLASS {
                    found.push(DebugExperiment {
                        experiment: experiment.name.clone(),
                        platform: platform.to_string(),
                    });
                }
            }
        }
        found
    }
}
