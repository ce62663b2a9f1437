//! Error handling module
//!
//! Centralized error types and their mapping onto the caller-facing taxonomy.

/// Application-wide Result type
pub type AppResult<T> = Result<T, AppError>;

/// Application error types
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Citizen already exists: {0}")]
    DuplicateEntity(String),

    #[error("Not found: {0}")]
    NotFound(String),

    // Domain errors
    #[error(transparent)]
    Domain(#[from] crate::domain::DomainError),

    // Internal errors
    #[error("Configuration error: {0}")]
    Config(#[from] crate::config::ConfigError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Caller-facing error classes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    InvalidArgument,
    DuplicateEntity,
    NotFound,
    Internal,
}

impl AppError {
    /// Classify this error; every domain error is an invalid argument
    pub fn kind(&self) -> ErrorKind {
        match self {
            AppError::InvalidArgument(_) | AppError::Domain(_) => ErrorKind::InvalidArgument,
            AppError::DuplicateEntity(_) => ErrorKind::DuplicateEntity,
            AppError::NotFound(_) => ErrorKind::NotFound,
            AppError::Config(_) | AppError::Io(_) => ErrorKind::Internal,
        }
    }

    /// Stable snake_case code for logs
    pub fn error_code(&self) -> &'static str {
        use crate::domain::DomainError;

        match self {
            AppError::InvalidArgument(_) => "invalid_argument",
            AppError::DuplicateEntity(_) => "duplicate_entity",
            AppError::NotFound(_) => "not_found",
            AppError::Domain(domain_err) => match domain_err {
                DomainError::Measure(_) => "invalid_measure",
                DomainError::MissingField(_) => "missing_field",
                DomainError::UnknownCategory(_) => "unknown_category",
                DomainError::UnknownPolicy(_) => "unknown_policy",
            },
            AppError::Config(_) => "config_error",
            AppError::Io(_) => "io_error",
        }
    }

    /// Caused by the operator's input; the console retries with new input
    pub fn is_client_error(&self) -> bool {
        self.kind() != ErrorKind::Internal
    }
}
