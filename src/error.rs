//! Error types for the quiz core engine

use pyo3::exceptions::{PyIndexError, PyRuntimeError, PyValueError};
use pyo3::PyErr;
use thiserror::Error;

/// Main error type for the quiz core engine
#[derive(Error, Debug)]
pub enum QuizError {
    /// No qualifying passage was found within the rejection-sampling budget.
    /// Caught per generation attempt and logged, never surfaced to the host.
    #[error("Insufficient source material for a {0} question")]
    InsufficientMaterial(&'static str),

    #[error("Passage pool too small: {0} passages (minimum 3)")]
    EmptyPool(usize),

    #[error("Unknown question kind: {0}")]
    InvalidQuestionKind(String),

    #[error("Invalid quiz settings: {0}")]
    InvalidSettings(String),

    #[error("Deserialization error: {0}")]
    Deserialization(String),

    #[error("Word handle out of range: {0}")]
    WordHandleOutOfRange(usize),

    #[error("Session state error: {0}")]
    SessionState(String),
}

impl From<QuizError> for PyErr {
    fn from(err: QuizError) -> PyErr {
        match err {
            QuizError::InsufficientMaterial(kind) => PyValueError::new_err(format!(
                "Insufficient source material for a {} question",
                kind
            )),
            QuizError::EmptyPool(n) => PyValueError::new_err(format!(
                "Passage pool too small: {} passages (minimum 3)",
                n
            )),
            QuizError::InvalidQuestionKind(name) => {
                PyValueError::new_err(format!("Unknown question kind: {}", name))
            }
            QuizError::InvalidSettings(msg) => {
                PyValueError::new_err(format!("Invalid quiz settings: {}", msg))
            }
            QuizError::Deserialization(msg) => {
                PyValueError::new_err(format!("Deserialization error: {}", msg))
            }
            QuizError::WordHandleOutOfRange(idx) => {
                PyIndexError::new_err(format!("Word handle out of range: {}", idx))
            }
            QuizError::SessionState(msg) => {
                PyRuntimeError::new_err(format!("Session state error: {}", msg))
            }
        }
    }
}

/// Result type alias for the quiz core engine
pub type Result<T> = std::result::Result<T, QuizError>;
