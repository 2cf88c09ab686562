use tokio_postgres::Config as PgConfig;

use super::connection::PostgresConnection;
use crate::error::SqlowError;

/// Options for connecting to `PostgreSQL`.
#[derive(Debug, Clone)]
pub struct PostgresOptions {
    pub config: PgConfig,
}

impl PostgresOptions {
    #[must_use]
    pub fn new(config: PgConfig) -> Self {
        Self { config }
    }

    /// Parse a `postgresql://` URL or a `key=value` connection string.
    ///
    /// # Errors
    /// Returns `SqlowError::PostgresError` if the string does not parse.
    pub fn from_url(url: &str) -> Result<Self, SqlowError> {
        Ok(Self::new(url.parse::<PgConfig>()?))
    }

    /// Check that the fields needed to connect are present.
    ///
    /// # Errors
    /// Returns `SqlowError::ConfigError` naming the first missing field.
    pub fn validate(&self) -> Result<(), SqlowError> {
        if self.config.get_dbname().is_none() {
            return Err(SqlowError::ConfigError("dbname is required".to_string()));
        }
        if self.config.get_hosts().is_empty() {
            return Err(SqlowError::ConfigError("host is required".to_string()));
        }
        if self.config.get_user().is_none() {
            return Err(SqlowError::ConfigError("user is required".to_string()));
        }
        Ok(())
    }

    /// Validate and connect.
    ///
    /// # Errors
    /// Returns `SqlowError::ConfigError` for missing fields, or the driver's
    /// error if the connection fails.
    pub async fn connect(self) -> Result<PostgresConnection, SqlowError> {
        PostgresConnection::connect(self).await
    }

    pub(crate) fn label(&self) -> String {
        format!(
            "{}@{}",
            self.config.get_dbname().unwrap_or_default(),
            self.config
                .get_hosts()
                .first()
                .map(host_name)
                .unwrap_or_default()
        )
    }
}

fn host_name(host: &tokio_postgres::config::Host) -> String {
    match host {
        tokio_postgres::config::Host::Tcp(name) => name.clone(),
        #[cfg(unix)]
        tokio_postgres::config::Host::Unix(path) => path.display().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_are_reported_in_order() {
        let mut cfg = PgConfig::new();
        let err = PostgresOptions::new(cfg.clone()).validate().unwrap_err();
        assert_eq!(err.to_string(), "Configuration error: dbname is required");

        cfg.dbname("app");
        let err = PostgresOptions::new(cfg.clone()).validate().unwrap_err();
        assert_eq!(err.to_string(), "Configuration error: host is required");

        cfg.host("localhost");
        let err = PostgresOptions::new(cfg.clone()).validate().unwrap_err();
        assert_eq!(err.to_string(), "Configuration error: user is required");

        cfg.user("app");
        assert!(PostgresOptions::new(cfg).validate().is_ok());
    }

    #[test]
    fn parses_urls() {
        let opts = PostgresOptions::from_url("postgresql://app@db.internal:5433/orders").unwrap();
        assert!(opts.validate().is_ok());
        assert_eq!(opts.label(), "orders@db.internal");
        assert!(PostgresOptions::from_url("host=localhost port=notaport").is_err());
    }
}
