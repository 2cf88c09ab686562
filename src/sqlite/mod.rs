// SQLite module - connection adapter backed by rusqlite
//
// - config: open options and builder
// - connection: ping/close adapter used by `Database`

pub mod config;
pub mod connection;

pub use config::{SqliteOptions, SqliteOptionsBuilder};
pub use connection::SqliteConnection;
