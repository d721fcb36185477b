//! Error types for the logic engine

use thiserror::Error;

/// Main error type for rule evaluation
///
/// The first two variants are raised by the engine itself while dispatching.
/// The remaining evaluation variants belong to operators: the engine passes
/// whatever an operator returns back to the caller untouched.
#[derive(Error, Debug)]
pub enum EngineError {
    /// A single-key rule named an operator that is not registered
    #[error("operator not found: {0}")]
    UnknownOperator(String),

    /// Quick access shorthand was used but no quick access operator is registered
    #[error("quick access operator not defined")]
    QuickAccessUnconfigured,

    /// Invalid operation
    #[error("Invalid operation: {0}")]
    InvalidOperation(String),

    /// Operator received arguments it cannot work with
    #[error("Invalid arguments for '{operator}': {reason}")]
    InvalidArguments { operator: String, reason: String },

    /// Type mismatch during operation
    #[error("Type mismatch: expected {expected}, got {actual}")]
    TypeMismatch { expected: String, actual: String },

    /// Variable not found during lookup
    #[error("Variable not found: {0}")]
    VariableNotFound(String),

    /// Any other operator failure
    #[error("{0}")]
    Custom(Box<dyn std::error::Error + Send + Sync>),

    /// JSON encoding or decoding error
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

impl EngineError {
    /// Wrap a foreign error raised inside an operator.
    pub fn custom<E>(err: E) -> Self
    where
        E: Into<Box<dyn std::error::Error + Send + Sync>>,
    {
        EngineError::Custom(err.into())
    }

    /// Check if this is an unknown operator error
    pub fn is_unknown_operator(&self) -> bool {
        matches!(self, EngineError::UnknownOperator(_))
    }

    /// Name carried by an unknown operator error.
    pub fn unknown_operator_name(&self) -> Option<&str> {
        match self {
            EngineError::UnknownOperator(name) => Some(name),
            _ => None,
        }
    }
}

/// Result type alias for engine operations
pub type Result<T> = std::result::Result<T, EngineError>;
