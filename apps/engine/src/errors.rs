use thiserror::Error;

/// Engine-level error type.
///
/// Per-document failures during batch processing are caught at the
/// facade boundary and recorded as [`crate::profile::ParseFailure`];
/// only `Validation` aborts a ranking request.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("File not found: {0}")]
    NotFound(String),

    #[error("Unsupported format: {extension}. Supported: {supported:?}")]
    UnsupportedFormat {
        extension: String,
        supported: &'static [&'static str],
    },

    #[error("Unable to decode file with encodings: {attempted:?}")]
    Decode { attempted: Vec<&'static str> },

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
