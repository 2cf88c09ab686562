use thiserror::Error;

#[cfg(feature = "sqlite")]
use rusqlite;
#[cfg(feature = "postgres")]
use tokio_postgres;

#[derive(Debug, Error)]
pub enum SqlowError {
    /// Failure raised by this library itself.
    #[error("Sqlow Error: {0}")]
    Sqlow(String),

    #[cfg(feature = "sqlite")]
    #[error(transparent)]
    SqliteError(#[from] rusqlite::Error),

    #[cfg(feature = "postgres")]
    #[error(transparent)]
    PostgresError(#[from] tokio_postgres::Error),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Connection error: {0}")]
    ConnectionError(String),

    #[error("Connection closed: {0}")]
    ConnectionClosed(String),

    #[error("Unsupported value: {0}")]
    Unsupported(String),
}

impl SqlowError {
    /// Build the library's own prefixed error.
    #[must_use]
    pub fn sqlow(msg: impl Into<String>) -> Self {
        SqlowError::Sqlow(msg.into())
    }

    #[must_use]
    pub fn is_closed(&self) -> bool {
        matches!(self, SqlowError::ConnectionClosed(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn own_error_carries_prefix() {
        let err = SqlowError::sqlow("boom");
        assert_eq!(err.to_string(), "Sqlow Error: boom");
    }

    #[test]
    fn closed_is_detectable() {
        assert!(SqlowError::ConnectionClosed("main".into()).is_closed());
        assert!(!SqlowError::ConnectionError("x".into()).is_closed());
    }
}
