//! Experiment definition validation.
//!
//! ## Construction-time rules
//!
//! - `name`, `description`, `owner`, `expiry` must be non-empty → **Error**
//! - `monitoring_experiment` must use the `never-ever` expiry → **Error**
//!
//! A definition failing either rule is marked invalid for the rest of the run.
//!
//! ## Query-time rules
//!
//! - `monitoring_experiment` with `never-ever` is always valid
//! - expiry must parse as `YYYY-MM-DD` → **Error**
//! - expiry must not fall between Nov 1 and Jan 15 inclusive → **Error**
//! - expiry in the past → **Warning** (only when expiry checking is requested)
//! - expiry more than 180 days out → **Warning** (same)

pub mod checks;
pub mod policy;

use chrono::NaiveDate;
use tracing::{error, warn};

use expc_model::{CheckType, ExperimentDefinition, Issue, Severity, ValidationReport};

pub use policy::{
    EXPIRY_FORMAT, ExpiryPolicy, MAX_EXPIRY_HORIZON_DAYS, in_blackout_window, parse_expiry,
};

/// Validation context.
#[derive(Debug, Clone, Default)]
pub struct Validator {
    policy: ExpiryPolicy,
}

impl Validator {
    /// Create a validator whose clock is the current UTC date.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_policy(mut self, policy: ExpiryPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Pin "today" for the expiry warnings.
    pub fn with_today(self, today: NaiveDate) -> Self {
        self.with_policy(ExpiryPolicy::new(today))
    }

    pub fn policy(&self) -> &ExpiryPolicy {
        &self.policy
    }

    /// Run the construction-time rules.
    pub fn validate(&self, definition: &ExperimentDefinition) -> ValidationReport {
        let report = checks::run_structural(definition);
        log_report(&report);
        if report.has_errors() {
            error!(experiment = %definition.name, "failed to create experiment definition");
        }
        report
    }

    /// Re-validate a definition at query time.
    ///
    /// A definition already marked invalid fails without further checks.
    pub fn check(&self, definition: &ExperimentDefinition, check_expiry: bool) -> ValidationReport {
        if !definition.is_valid() {
            let mut report = ValidationReport::new(&definition.name);
            report.add(Issue::error(
                CheckType::DefinitionInvalid,
                format!("experiment {} failed earlier validation", definition.name),
            ));
            return report;
        }
        let report = checks::run_expiry(definition, &self.policy, check_expiry);
        log_report(&report);
        report
    }

    pub fn is_valid(&self, definition: &ExperimentDefinition, check_expiry: bool) -> bool {
        self.check(definition, check_expiry).is_valid()
    }

    /// Whether `definition` belongs in generated output. Same rules as
    /// [`Validator::check`] without expiry warnings, and nothing is logged.
    pub fn accepts(&self, definition: &ExperimentDefinition) -> bool {
        definition.is_valid() && checks::run_expiry(definition, &self.policy, false).is_valid()
    }
}

fn log_report(report: &ValidationReport) {
    for issue in &report.issues {
        match issue.severity {
            Severity::Error => error!(
                experiment = %report.experiment,
                check = %issue.check_type,
                "{}",
                issue.message
            ),
            Severity::Warning => warn!(
                experiment = %report.experiment,
                check = %issue.check_type,
                "{}",
                issue.message
            ),
        }
    }
}
