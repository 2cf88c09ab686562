//! Convenient imports for common functionality.

pub use crate::datetime::{format_date, format_datetime, format_time};
pub use crate::error::SqlowError;
pub use crate::escape::escape;
pub use crate::handle::{Database, DatabaseConnection};
pub use crate::literal::{
    LiteralFormatter, LiteralOptions, LiteralStyle, QuoteEscaping, format_list, format_scalar,
    try_format_list, try_format_scalar,
};
pub use crate::sql_values;
pub use crate::types::SqlValue;

#[cfg(feature = "postgres")]
pub use crate::postgres::{PostgresConnection, PostgresOptions};
#[cfg(feature = "sqlite")]
pub use crate::sqlite::{SqliteConnection, SqliteOptions, SqliteOptionsBuilder};
