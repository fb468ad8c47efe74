use thiserror::Error;

/// Application-level error type.
/// Every operation that can fail on caller input returns `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("No examples available for subject: {0}")]
    SubjectNotFound(String),

    #[error("Invalid query: {0}")]
    InvalidQuery(String),

    #[error("Invalid example library: {0}")]
    InvalidLibrary(String),

    #[error("Unknown prompting technique: {0}")]
    UnknownTechnique(String),

    #[error("Dataset error: {0}")]
    Dataset(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    /// Stable machine-readable code, used in JSON output and evaluation feedback.
    pub fn code(&self) -> &'static str {
        match self {
            AppError::SubjectNotFound(_) => "SUBJECT_NOT_FOUND",
            AppError::InvalidQuery(_) => "INVALID_QUERY",
            AppError::InvalidLibrary(_) => "INVALID_LIBRARY",
            AppError::UnknownTechnique(_) => "UNKNOWN_TECHNIQUE",
            AppError::Dataset(_) => "DATASET_ERROR",
            AppError::Io(_) => "IO_ERROR",
            AppError::Internal(_) => "INTERNAL_ERROR",
        }
    }
}
