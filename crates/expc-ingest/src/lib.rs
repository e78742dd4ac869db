//! Parsing of experiment definition and rollout YAML streams.

pub mod definitions;
pub mod document;
pub mod error;
pub mod rollouts;

pub use definitions::parse_experiment_definitions;
pub use document::{load_records, scalar_to_string};
pub use error::{IngestError, Result};
pub use rollouts::parse_rollout_specifications;
