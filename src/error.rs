use thiserror::Error;

/// Caller bugs when handing documents to the schema layer.
///
/// Domain problems (missing fields, out-of-range values, wrong JSON types)
/// are never errors: they are reported as [`FieldViolation`]s.
///
/// [`FieldViolation`]: crate::validation::FieldViolation
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SchemaError {
    #[error("Expected a JSON object, got {0}")]
    NotARecord(&'static str),

    #[error("Document has no _type")]
    MissingType,

    #[error("Unknown document type: {0}")]
    UnknownType(String),
}

#[derive(Error, Debug)]
pub enum DatasetError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid JSON on line {line}: {source}")]
    Json {
        line: usize,
        #[source]
        source: serde_json::Error,
    },

    #[error("Schema error on line {line}: {source}")]
    Schema {
        line: usize,
        #[source]
        source: SchemaError,
    },

    #[error("Validation task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}

pub type Result<T> = std::result::Result<T, DatasetError>;
