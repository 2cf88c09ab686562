//! Connection handle wrappers and SQL literal formatting helpers.
//!
//! Two independent pieces:
//!
//! * [`Database`] pairs a connection the caller already opened with a display
//!   name and forwards `ping`/`close` to it. Adapters for `rusqlite`
//!   (feature `sqlite`) and `tokio-postgres` (feature `postgres`) are bundled.
//! * The literal formatters ([`format_scalar`], [`format_list`], [`escape`] and
//!   the date/time helpers) render values into SQL text for callers that
//!   assemble statements by hand.
//!
//! ```rust
//! use sqlow::prelude::*;
//!
//! let ids = sql_values![3, 5, "x"];
//! let sql = format!("SELECT * FROM t WHERE id IN ({})", format_list(&ids, LiteralStyle::SingleQuote));
//! assert_eq!(sql, "SELECT * FROM t WHERE id IN (3,5,'x')");
//! ```

pub mod datetime;
pub mod error;
pub mod escape;
pub mod handle;
pub mod literal;
mod macros;
pub mod prelude;
pub mod types;

#[cfg(feature = "postgres")]
pub mod postgres;
#[cfg(feature = "sqlite")]
pub mod sqlite;

pub use datetime::{format_date, format_datetime, format_time};
pub use error::SqlowError;
pub use escape::escape;
pub use handle::{Database, DatabaseConnection};
pub use literal::{
    LiteralFormatter, LiteralOptions, LiteralStyle, QuoteEscaping, format_list, format_scalar,
    try_format_list, try_format_scalar,
};
pub use types::{SqlValue, ValueKind};

#[cfg(feature = "postgres")]
pub use postgres::{PostgresConnection, PostgresOptions};
#[cfg(feature = "sqlite")]
pub use sqlite::{SqliteConnection, SqliteOptions, SqliteOptionsBuilder};
