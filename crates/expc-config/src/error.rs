use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse TOML config {path}: {source}")]
    Toml {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("invalid config: {message}")]
    InvalidManifest { message: String },

    #[error("missing required platform in config: {platform}")]
    MissingPlatform { platform: String },

    #[error("missing required value class in config: {value_class}")]
    MissingValueClass { value_class: String },

    #[error("value class '{value_class}' has no entry in [{table}]")]
    IncompleteValueClass { value_class: String, table: String },

    #[error("[{table}] names value class '{value_class}' which is missing from [defaults]")]
    UnknownValueClass { value_class: String, table: String },
}

impl ConfigError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
