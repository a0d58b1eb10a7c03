//! Error types for repository operations.

/// Result type for repository operations
pub type RepositoryResult<T> = Result<T, RepositoryError>;

/// Error type for repository operations
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    /// Connection pool or database connection errors.
    /// These are typically transient and may be retried.
    #[error("Connection error: {0}")]
    ConnectionError(String),

    /// SQL query execution errors.
    #[error("Query error: {0}")]
    QueryError(String),

    /// Requested entity was not found (e.g. the counter row is missing).
    #[error("Not found: {0}")]
    NotFound(String),

    /// Value validation failed before the database operation.
    #[error("{0}")]
    ValidationError(String),

    /// Configuration or initialization error.
    #[error("Configuration error: {0}")]
    ConfigurationError(String),

    /// Catch-all for unexpected internal failures.
    #[error("Internal error: {0}")]
    InternalError(String),
}

impl RepositoryError {
    /// Whether retrying the operation may succeed.
    ///
    /// Connection-level failures are transient by nature; everything else
    /// (bad input, missing rows, misconfiguration) will fail again.
    pub fn is_retryable(&self) -> bool {
        matches!(self, RepositoryError::ConnectionError(_))
    }
}

impl From<String> for RepositoryError {
    fn from(s: String) -> Self {
        RepositoryError::InternalError(s)
    }
}

impl From<&str> for RepositoryError {
    fn from(s: &str) -> Self {
        RepositoryError::InternalError(s.to_string())
    }
}
