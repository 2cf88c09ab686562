use std::fmt;

use async_trait::async_trait;
use tokio::sync::Mutex;
use tokio::task::JoinHandle;
use tokio_postgres::{Client, NoTls};

use super::config::PostgresOptions;
use crate::error::SqlowError;
use crate::handle::DatabaseConnection;

/// A `tokio_postgres` client that can be pinged and closed.
///
/// Closing drops the client, which makes the driver send a terminate message
/// and end its connection task.
pub struct PostgresConnection {
    client: Mutex<Option<Client>>,
    task: Mutex<Option<JoinHandle<()>>>,
    label: String,
}

impl PostgresConnection {
    /// Wrap a client whose connection future the caller already spawned.
    #[must_use]
    pub fn from_client(client: Client, label: impl Into<String>) -> Self {
        Self {
            client: Mutex::new(Some(client)),
            task: Mutex::new(None),
            label: label.into(),
        }
    }

    /// Connect without TLS and drive the connection on the tokio runtime.
    ///
    /// # Errors
    /// Returns `SqlowError::ConfigError` if required fields are missing, or
    /// `SqlowError::PostgresError` if the server cannot be reached.
    pub async fn connect(opts: PostgresOptions) -> Result<Self, SqlowError> {
        opts.validate()?;
        let label = opts.label();
        let (client, connection) = opts.config.connect(NoTls).await?;

        let task_label = label.clone();
        let task = tokio::spawn(async move {
            if let Err(e) = connection.await {
                tracing::warn!(name = %task_label, error = %e, "postgres connection ended with error");
            }
        });

        tracing::debug!(name = %label, "connected to postgres");
        Ok(Self {
            client: Mutex::new(Some(client)),
            task: Mutex::new(Some(task)),
            label,
        })
    }
}

#[async_trait]
impl DatabaseConnection for PostgresConnection {
    async fn ping(&self) -> Result<(), SqlowError> {
        let guard = self.client.lock().await;
        let client = guard
            .as_ref()
            .ok_or_else(|| SqlowError::ConnectionClosed(self.label.clone()))?;
        client.simple_query("SELECT 1").await?;
        Ok(())
    }

    async fn close(&self) -> Result<(), SqlowError> {
        let client = self
            .client
            .lock()
            .await
            .take()
            .ok_or_else(|| SqlowError::ConnectionClosed(self.label.clone()))?;
        drop(client);

        if let Some(task) = self.task.lock().await.take() {
            task.await.map_err(|e| {
                SqlowError::ConnectionError(format!("postgres connection task join error: {e}"))
            })?;
        }
        Ok(())
    }
}

impl fmt::Debug for PostgresConnection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PostgresConnection")
            .field("label", &self.label)
            .finish_non_exhaustive()
    }
}
