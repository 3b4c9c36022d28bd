use async_graphql::ErrorExtensions;
use cinedex_core::error::CoreError;

/// Sanitized message returned for any failure the client cannot act on.
const INTERNAL_MESSAGE: &str = "An internal error occurred";

/// Application-level error type for resolvers and handlers.
///
/// Wraps [`CoreError`] for domain errors and [`sqlx::Error`] for store
/// failures. Implements [`ErrorExtensions`] so every GraphQL error carries a
/// stable `extensions.code`.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `cinedex_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A database error from sqlx.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// An internal error with a human-readable message.
    #[error("Internal error: {0}")]
    InternalError(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    /// Map the error to its client-facing code and message.
    ///
    /// Store and internal failures are logged here and reach the client only
    /// as a generic message. Missing rows never get here: lookups return
    /// `None` and deletes return a message.
    pub fn classify(&self) -> (&'static str, String) {
        match self {
            AppError::Core(CoreError::Validation(msg)) => ("VALIDATION_ERROR", msg.clone()),
            AppError::Database(err) => {
                tracing::error!(error = %err, "Database error");
                ("INTERNAL_ERROR", INTERNAL_MESSAGE.to_string())
            }
            AppError::InternalError(msg) => {
                tracing::error!(error = %msg, "Internal error");
                ("INTERNAL_ERROR", INTERNAL_MESSAGE.to_string())
            }
        }
    }
}

impl ErrorExtensions for AppError {
    fn extend(&self) -> async_graphql::Error {
        let (code, message) = self.classify();
        async_graphql::Error::new(message).extend_with(|_, ext| ext.set("code", code.to_string()))
    }
}
