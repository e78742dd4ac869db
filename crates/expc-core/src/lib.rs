//! Experiment registry and rollout merge engine.

pub mod compiler;
pub mod error;
pub mod merge;
pub mod table;

pub use compiler::ExperimentsCompiler;
pub use error::{CompileError, MergeError, Result};
pub use merge::merge;
pub use table::{DebugExperiment, ResolvedEntry, ResolvedTable};
