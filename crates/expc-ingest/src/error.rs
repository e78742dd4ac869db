//! Error types for document ingestion.

use thiserror::Error;

/// Errors that can occur while turning YAML documents into records.
#[derive(Debug, Error)]
pub enum IngestError {
    /// The YAML stream itself could not be parsed.
    #[error("failed to parse yaml: {source}")]
    Yaml {
        #[source]
        source: serde_yaml::Error,
    },

    /// A field holds a value of the wrong shape.
    #[error("document {document}: field '{field}' must be {expected}")]
    InvalidField {
        document: usize,
        field: String,
        expected: &'static str,
    },
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;
