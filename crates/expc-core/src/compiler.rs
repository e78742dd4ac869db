//! Experiment registry for one compilation run.

use std::collections::BTreeMap;

use tracing::{error, info, info_span, warn};

use expc_ingest::{parse_experiment_definitions, parse_rollout_specifications};
use expc_model::{CompilerConfig, ExperimentDefinition, RolloutSpecification, ValidationReport};
use expc_validate::Validator;

use crate::error::{CompileError, Result};
use crate::merge::merge;
use crate::table::{DebugExperiment, ResolvedTable};

/// Owns the experiment definitions of a run and the configuration they are
/// resolved against.
#[derive(Debug, Clone)]
pub struct ExperimentsCompiler {
    config: CompilerConfig,
    validator: Validator,
    experiment_definitions: BTreeMap<String, ExperimentDefinition>,
}

impl ExperimentsCompiler {
    pub fn new(config: CompilerConfig) -> Self {
        Self {
            config,
            validator: Validator::new(),
            experiment_definitions: BTreeMap::new(),
        }
    }

    /// Replace the validator, typically to pin the expiry clock.
    pub fn with_validator(mut self, validator: Validator) -> Self {
        self.validator = validator;
        self
    }

    pub fn config(&self) -> &CompilerConfig {
        &self.config
    }

    pub fn validator(&self) -> &Validator {
        &self.validator
    }

    /// All registered definitions, valid or not, in name order.
    pub fn experiment_definitions(&self) -> &BTreeMap<String, ExperimentDefinition> {
        &self.experiment_definitions
    }

    pub fn experiment(&self, name: &str) -> Option<&ExperimentDefinition> {
        self.experiment_definitions.get(name)
    }

    /// Parse a YAML stream of definitions and register each one.
    ///
    /// Returns one validation report per parsed record, in input order.
    pub fn add_experiment_definitions(&mut self, yaml: &str) -> Result<Vec<ValidationReport>> {
        let span = info_span!("definitions");
        let _guard = span.enter();

        let definitions = parse_experiment_definitions(yaml)?;
        let reports: Vec<ValidationReport> = definitions
            .into_iter()
            .map(|definition| self.add_experiment_definition(definition))
            .collect();
        info!(
            records = reports.len(),
            invalid = reports.iter().filter(|report| report.has_errors()).count(),
            "experiment definitions loaded"
        );
        Ok(reports)
    }

    /// Validate and register a single definition. A later definition with
    /// the same name replaces the earlier one.
    pub fn add_experiment_definition(
        &mut self,
        mut definition: ExperimentDefinition,
    ) -> ValidationReport {
        let report = self.validator.validate(&definition);
        if report.has_errors() {
            definition.mark_invalid();
        }
        if self.experiment_definitions.contains_key(&definition.name) {
            warn!(experiment = %definition.name, "replacing earlier definition");
        }
        self.experiment_definitions
            .insert(definition.name.clone(), definition);
        report
    }

    /// Parse a YAML stream of rollouts and merge each into its experiment.
    ///
    /// Stops at the first failing rollout. Returns the number merged.
    pub fn add_rollout_specifications(&mut self, yaml: &str) -> Result<usize> {
        let span = info_span!("rollouts");
        let _guard = span.enter();

        let rollouts = parse_rollout_specifications(yaml)?;
        for rollout in &rollouts {
            self.add_rollout_specification(rollout)?;
        }
        info!(rollouts = rollouts.len(), "rollout specifications merged");
        Ok(rollouts.len())
    }

    pub fn add_rollout_specification(&mut self, rollout: &RolloutSpecification) -> Result<()> {
        if rollout.has_no_value() {
            error!(experiment = %rollout.name, "rollout has neither default_value nor platform_value");
            if let Some(experiment) = self.experiment_definitions.get_mut(&rollout.name) {
                experiment.mark_invalid();
            }
            return Err(CompileError::MissingRolloutValue {
                name: rollout.name.clone(),
            });
        }
        let Some(experiment) = self.experiment_definitions.get_mut(&rollout.name) else {
            error!(experiment = %rollout.name, "rollout names an unknown experiment");
            return Err(CompileError::UnknownExperiment {
                name: rollout.name.clone(),
            });
        };
        merge(experiment, rollout, &self.config.platforms).map_err(|source| {
            CompileError::Merge {
                experiment: rollout.name.clone(),
                source,
            }
        })
    }

    /// Run the query-time checks over every definition in name order.
    pub fn check_definitions(&self, check_expiry: bool) -> Vec<ValidationReport> {
        self.experiment_definitions
            .values()
            .map(|definition| self.validator.check(definition, check_expiry))
            .collect()
    }

    /// Name-sorted view of the definitions that pass both construction and
    /// query-time checks.
    pub fn resolved_table(&self) -> ResolvedTable<'_> {
        ResolvedTable::new(
            &self.config,
            self.experiment_definitions
                .values()
                .filter(|definition| self.validator.accepts(definition))
                .collect(),
        )
    }

    /// Valid experiments that resolve to the debug value class somewhere.
    pub fn debug_experiments(&self) -> Vec<DebugExperiment> {
        self.resolved_table().debug_experiments()
    }
}
