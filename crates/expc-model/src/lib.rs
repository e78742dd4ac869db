pub mod config;
pub mod experiment;
pub mod issue;
pub mod rollout;

pub use config::{CompilerConfig, DEBUG_ONLY_DEFAULT, FALLBACK_PLATFORM};
pub use experiment::{
    DEBUG_VALUE_CLASS, ExperimentDefinition, FALLBACK_VALUE_CLASS, MONITORING_EXPERIMENT,
    NEVER_EXPIRES, PlatformResolution,
};
pub use issue::{CheckType, Issue, Severity, ValidationReport};
pub use rollout::RolloutSpecification;
