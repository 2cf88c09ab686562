// PostgreSQL module - connection adapter backed by tokio-postgres
//
// - config: connection options and validation
// - connection: ping/close adapter used by `Database`

pub mod config;
pub mod connection;

pub use config::PostgresOptions;
pub use connection::PostgresConnection;
