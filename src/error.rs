//! BLEU error types

use thiserror::Error;

/// Errors reported before any scoring work starts.
#[derive(Debug, Error)]
pub enum BleuError {
    #[error("reference set is empty; at least one reference is required")]
    EmptyReferences,

    #[error("invalid n-gram order {0}; order must be at least 1")]
    InvalidOrder(i64),

    #[error("batch length mismatch: {references} reference sets for {sentences} sentences")]
    BatchLengthMismatch { references: usize, sentences: usize },

    #[error("failed to start scoring runtime: {0}")]
    Runtime(#[from] std::io::Error),
}

/// Result type for BLEU operations
pub type Result<T> = std::result::Result<T, BleuError>;

#[cfg(feature = "python")]
impl From<BleuError> for pyo3::PyErr {
    fn from(err: BleuError) -> Self {
        match err {
            BleuError::Runtime(_) => pyo3::exceptions::PyRuntimeError::new_err(err.to_string()),
            _ => pyo3::exceptions::PyValueError::new_err(err.to_string()),
        }
    }
}
