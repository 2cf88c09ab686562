use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;

use crate::error::SqlowError;

/// Lifecycle operations a wrapped connection must provide.
///
/// Implemented for the bundled `SQLite` and `PostgreSQL` adapters; implement it
/// for any other driver to wrap it in a [`Database`].
#[async_trait]
pub trait DatabaseConnection: Send + Sync {
    /// Check that the connection is still usable.
    async fn ping(&self) -> Result<(), SqlowError>;

    /// Close the connection. Whether a second close is an error is up to
    /// the implementation.
    async fn close(&self) -> Result<(), SqlowError>;
}

/// An already-open connection paired with a display name.
///
/// The handle never opens or validates the connection, and dropping it does
/// not close anything: the connection is shared with whoever created it.
/// Clones share the same connection.
pub struct Database<C: ?Sized> {
    connection: Arc<C>,
    name: String,
}

impl<C: DatabaseConnection + ?Sized> Database<C> {
    /// Wrap an open connection. No ping is performed.
    pub fn new(connection: Arc<C>, name: impl Into<String>) -> Self {
        let name = name.into();
        tracing::debug!(name = %name, "wrapping database connection");
        Self { connection, name }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The shared underlying connection.
    #[must_use]
    pub fn connection(&self) -> &Arc<C> {
        &self.connection
    }

    /// Forward to the connection's ping. No retry.
    ///
    /// # Errors
    /// Returns whatever the underlying connection reports.
    pub async fn ping(&self) -> Result<(), SqlowError> {
        let res = self.connection.ping().await;
        tracing::debug!(name = %self.name, ok = res.is_ok(), "ping");
        res
    }

    /// Forward to the connection's close.
    ///
    /// # Errors
    /// Returns the underlying connection's error unchanged.
    pub async fn close(&self) -> Result<(), SqlowError> {
        let res = self.connection.close().await;
        match &res {
            Ok(()) => tracing::debug!(name = %self.name, "closed database connection"),
            Err(e) => tracing::warn!(name = %self.name, error = %e, "close failed"),
        }
        res
    }
}

impl<C: ?Sized> Clone for Database<C> {
    fn clone(&self) -> Self {
        Self {
            connection: Arc::clone(&self.connection),
            name: self.name.clone(),
        }
    }
}

impl<C: ?Sized> fmt::Debug for Database<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Database")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

    #[derive(Default)]
    struct FakeConn {
        closed: AtomicBool,
        pings: AtomicUsize,
    }

    #[async_trait]
    impl DatabaseConnection for FakeConn {
        async fn ping(&self) -> Result<(), SqlowError> {
            self.pings.fetch_add(1, Ordering::SeqCst);
            if self.closed.load(Ordering::SeqCst) {
                Err(SqlowError::ConnectionClosed("fake".into()))
            } else {
                Ok(())
            }
        }

        async fn close(&self) -> Result<(), SqlowError> {
            if self.closed.swap(true, Ordering::SeqCst) {
                Err(SqlowError::ConnectionClosed("fake".into()))
            } else {
                Ok(())
            }
        }
    }

    #[tokio::test]
    async fn construction_does_not_ping() {
        let conn = Arc::new(FakeConn::default());
        let db = Database::new(Arc::clone(&conn), "main");
        assert_eq!(db.name(), "main");
        assert_eq!(conn.pings.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn forwards_ping_and_close() {
        let db = Database::new(Arc::new(FakeConn::default()), "main");
        db.ping().await.unwrap();
        db.close().await.unwrap();
        assert!(db.ping().await.unwrap_err().is_closed());
        // second close is whatever the connection says
        assert!(db.close().await.is_err());
    }

    #[tokio::test]
    async fn clones_share_connection() {
        let db = Database::new(Arc::new(FakeConn::default()), "main");
        let other = db.clone();
        other.close().await.unwrap();
        assert!(db.ping().await.is_err());
        assert_eq!(db.connection().pings.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn dyn_connections_wrap() {
        let conn: Arc<dyn DatabaseConnection> = Arc::new(FakeConn::default());
        let db = Database::new(conn, "dyn");
        assert!(db.ping().await.is_ok());
    }
}
