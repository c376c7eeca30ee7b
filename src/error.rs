use thiserror::Error;

/// Error types for the lmsolve-rs library.
#[derive(Error, Debug)]
pub enum LmSolveError {
    /// Error indicating a mismatch in vector or matrix dimensions.
    #[error("Dimension mismatch: {0}")]
    DimensionMismatch(String),

    /// Error indicating a singular matrix was encountered.
    #[error("Singular matrix encountered")]
    SingularMatrix,

    /// Error for invalid configuration values.
    #[error("Invalid parameter value: {0}")]
    InvalidParameter(String),

    /// Error during residual function evaluation.
    #[error("Function evaluation error: {0}")]
    FunctionEvaluation(String),

    /// I/O error wrapper.
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

/// Result type alias for lmsolve-rs operations.
pub type Result<T> = std::result::Result<T, LmSolveError>;
