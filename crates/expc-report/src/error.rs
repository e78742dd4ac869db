use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RenderError {
    #[error("unsupported mode: {mode}")]
    UnsupportedMode { mode: String },

    #[error("value class {value_class:?} of experiment {experiment} on {platform} has no {table} entry")]
    UnknownValueClass {
        experiment: String,
        platform: String,
        value_class: String,
        table: &'static str,
    },

    #[error("experiment {experiment} requires {requirement}, which is not a valid experiment")]
    UnknownRequirement {
        experiment: String,
        requirement: String,
    },
}
