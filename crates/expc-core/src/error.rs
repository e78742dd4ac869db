//! Error types for merging and compiling.

use thiserror::Error;

use expc_ingest::IngestError;

/// Why a rollout could not be merged into an experiment.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MergeError {
    #[error("experiment {experiment} is invalid")]
    ExperimentInvalid { experiment: String },

    #[error("rollout specification for {rollout} does not apply to experiment {experiment}")]
    NameMismatch { rollout: String, experiment: String },

    #[error("no default for experiment {experiment}")]
    NoDefault { experiment: String },

    #[error("no value set for experiment {experiment} on platform {platform}")]
    NoPlatformValue { experiment: String, platform: String },
}

/// Errors that fail a batch call on the compiler.
#[derive(Debug, Error)]
pub enum CompileError {
    #[error(transparent)]
    Ingest(#[from] IngestError),

    #[error("no default value or platform value for rollout: {name}")]
    MissingRolloutValue { name: String },

    #[error("rollout specification names unknown experiment: {name}")]
    UnknownExperiment { name: String },

    #[error("failed to add rollout specification for experiment {experiment}: {source}")]
    Merge {
        experiment: String,
        #[source]
        source: MergeError,
    },
}

pub type Result<T> = std::result::Result<T, CompileError>;
