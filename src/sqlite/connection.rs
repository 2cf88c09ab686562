use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;

use super::config::SqliteOptions;
use crate::error::SqlowError;
use crate::handle::DatabaseConnection;

type SharedSqliteConnection = Arc<Mutex<Option<rusqlite::Connection>>>;

/// A `rusqlite` connection that can be pinged and closed from async code.
///
/// Blocking driver calls run on tokio's blocking pool. After [`close`](DatabaseConnection::close)
/// every operation returns `SqlowError::ConnectionClosed`.
pub struct SqliteConnection {
    conn: SharedSqliteConnection,
    label: String,
}

impl SqliteConnection {
    /// Wrap a connection the caller already opened.
    #[must_use]
    pub fn from_connection(conn: rusqlite::Connection) -> Self {
        let label = conn
            .path()
            .filter(|p| !p.is_empty())
            .unwrap_or(":memory:")
            .to_string();
        Self {
            conn: Arc::new(Mutex::new(Some(conn))),
            label,
        }
    }

    /// Open a connection from options.
    ///
    /// # Errors
    /// Returns `SqlowError::SqliteError` if the file cannot be opened or the
    /// busy timeout cannot be applied.
    pub async fn open(opts: SqliteOptions) -> Result<Self, SqlowError> {
        let flags = opts.open_flags();
        let path = opts.db_path.clone();
        let busy_timeout = opts.busy_timeout;
        let conn = tokio::task::spawn_blocking(move || {
            let conn = rusqlite::Connection::open_with_flags(&path, flags)?;
            if let Some(timeout) = busy_timeout {
                conn.busy_timeout(timeout)?;
            }
            Ok::<_, SqlowError>(conn)
        })
        .await
        .map_err(|e| SqlowError::ConnectionError(format!("sqlite open join error: {e}")))??;

        tracing::debug!(path = %opts.db_path, "opened sqlite connection");
        Ok(Self {
            conn: Arc::new(Mutex::new(Some(conn))),
            label: opts.db_path,
        })
    }

    /// Run a closure against the raw `rusqlite` connection.
    ///
    /// # Errors
    /// Returns `SqlowError::ConnectionClosed` after close, or whatever `func` returns.
    pub async fn with_connection<F, R>(&self, func: F) -> Result<R, SqlowError>
    where
        F: FnOnce(&mut rusqlite::Connection) -> Result<R, SqlowError> + Send + 'static,
        R: Send + 'static,
    {
        run_blocking(Arc::clone(&self.conn), self.label.clone(), func).await
    }
}

#[async_trait]
impl DatabaseConnection for SqliteConnection {
    async fn ping(&self) -> Result<(), SqlowError> {
        self.with_connection(|conn| {
            conn.query_row("SELECT 1", [], |row| row.get::<_, i64>(0))?;
            Ok(())
        })
        .await
    }

    async fn close(&self) -> Result<(), SqlowError> {
        let handle = Arc::clone(&self.conn);
        let label = self.label.clone();
        tokio::task::spawn_blocking(move || {
            let mut guard = handle.blocking_lock();
            let conn = guard.take().ok_or(SqlowError::ConnectionClosed(label))?;
            conn.close().map_err(|(conn, e)| {
                // keep the connection usable so the caller can retry
                *guard = Some(conn);
                SqlowError::SqliteError(e)
            })
        })
        .await
        .map_err(|e| SqlowError::ConnectionError(format!("sqlite close join error: {e}")))?
    }
}

impl fmt::Debug for SqliteConnection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SqliteConnection")
            .field("label", &self.label)
            .finish_non_exhaustive()
    }
}

async fn run_blocking<F, R>(
    conn: SharedSqliteConnection,
    label: String,
    func: F,
) -> Result<R, SqlowError>
where
    F: FnOnce(&mut rusqlite::Connection) -> Result<R, SqlowError> + Send + 'static,
    R: Send + 'static,
{
    tokio::task::spawn_blocking(move || {
        let mut guard = conn.blocking_lock();
        let conn = guard.as_mut().ok_or(SqlowError::ConnectionClosed(label))?;
        func(conn)
    })
    .await
    .map_err(|e| SqlowError::ConnectionError(format!("sqlite spawn_blocking join error: {e}")))?
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn memory_round_trip() {
        let conn = SqliteConnection::open(SqliteOptions::new(":memory:"))
            .await
            .unwrap();
        conn.ping().await.unwrap();
        conn.close().await.unwrap();
        assert!(conn.ping().await.unwrap_err().is_closed());
        assert!(conn.close().await.unwrap_err().is_closed());
    }

    #[tokio::test]
    async fn wraps_existing_connection() {
        let raw = rusqlite::Connection::open_in_memory().unwrap();
        let conn = SqliteConnection::from_connection(raw);
        let n = conn
            .with_connection(|c| Ok(c.query_row("SELECT 40 + 2", [], |r| r.get::<_, i64>(0))?))
            .await
            .unwrap();
        assert_eq!(n, 42);
    }
}
