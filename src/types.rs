use std::fmt;

use chrono::NaiveDateTime;
use serde_json::Value as JsonValue;

/// Values that can be rendered into SQL literal text.
///
/// Build them directly, through the `From` conversions, or with [`sql_values!`](crate::sql_values):
/// ```rust
/// use sqlow::prelude::*;
///
/// let values = vec![
///     SqlValue::Int(1),
///     SqlValue::from("alice"),
///     SqlValue::from(2.5_f64),
/// ];
/// assert_eq!(format_list(&values, LiteralStyle::SingleQuote), "1,'alice',2.5");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum SqlValue {
    /// Signed integer value (all widths widen to 64-bit)
    Int(i64),
    /// Unsigned integer value (all widths widen to 64-bit)
    UInt(u64),
    /// Floating point value (64-bit)
    Float(f64),
    /// Timestamp value
    Timestamp(NaiveDateTime),
    /// Text/string value
    Text(String),
    /// Boolean value
    Bool(bool),
    /// JSON value
    JSON(JsonValue),
    /// Binary data
    Blob(Vec<u8>),
    /// NULL value
    Null,
}

/// Coarse classification used by the formatters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    Numeric,
    Timestamp,
    Other,
}

impl SqlValue {
    #[must_use]
    pub fn kind(&self) -> ValueKind {
        match self {
            SqlValue::Int(_) | SqlValue::UInt(_) | SqlValue::Float(_) => ValueKind::Numeric,
            SqlValue::Timestamp(_) => ValueKind::Timestamp,
            _ => ValueKind::Other,
        }
    }

    #[must_use]
    pub fn is_numeric(&self) -> bool {
        self.kind() == ValueKind::Numeric
    }

    /// Check if this value is NULL
    #[must_use]
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }
}

/// Natural string form of the value, before quoting or escaping.
impl fmt::Display for SqlValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SqlValue::Int(v) => write!(f, "{v}"),
            SqlValue::UInt(v) => write!(f, "{v}"),
            SqlValue::Float(v) => write!(f, "{v}"),
            SqlValue::Timestamp(v) => write!(f, "{v}"),
            SqlValue::Text(v) => f.write_str(v),
            SqlValue::Bool(v) => write!(f, "{v}"),
            SqlValue::JSON(v) => write!(f, "{v}"),
            SqlValue::Blob(bytes) => {
                for b in bytes {
                    write!(f, "{b:02x}")?;
                }
                Ok(())
            }
            SqlValue::Null => f.write_str("NULL"),
        }
    }
}

macro_rules! impl_from_int {
    ($variant:ident, $wide:ty, $($t:ty),+) => {
        $(
            impl From<$t> for SqlValue {
                fn from(v: $t) -> Self {
                    SqlValue::$variant(<$wide>::from(v))
                }
            }
        )+
    };
}

impl_from_int!(Int, i64, i8, i16, i32, i64);
impl_from_int!(UInt, u64, u8, u16, u32, u64);

impl From<isize> for SqlValue {
    fn from(v: isize) -> Self {
        // isize is at most 64 bits on every supported target
        SqlValue::Int(v as i64)
    }
}

impl From<usize> for SqlValue {
    fn from(v: usize) -> Self {
        SqlValue::UInt(v as u64)
    }
}

impl From<f64> for SqlValue {
    fn from(v: f64) -> Self {
        SqlValue::Float(v)
    }
}

impl From<f32> for SqlValue {
    /// Widens through the shortest decimal form so `0.1_f32` stays `0.1`.
    fn from(v: f32) -> Self {
        SqlValue::Float(v.to_string().parse().unwrap_or_else(|_| f64::from(v)))
    }
}

impl From<bool> for SqlValue {
    fn from(v: bool) -> Self {
        SqlValue::Bool(v)
    }
}

impl From<&str> for SqlValue {
    fn from(v: &str) -> Self {
        SqlValue::Text(v.to_string())
    }
}

impl From<String> for SqlValue {
    fn from(v: String) -> Self {
        SqlValue::Text(v)
    }
}

impl From<NaiveDateTime> for SqlValue {
    fn from(v: NaiveDateTime) -> Self {
        SqlValue::Timestamp(v)
    }
}

impl From<JsonValue> for SqlValue {
    fn from(v: JsonValue) -> Self {
        SqlValue::JSON(v)
    }
}

impl From<Vec<u8>> for SqlValue {
    fn from(v: Vec<u8>) -> Self {
        SqlValue::Blob(v)
    }
}

impl<T: Into<SqlValue>> From<Option<T>> for SqlValue {
    fn from(v: Option<T>) -> Self {
        v.map_or(SqlValue::Null, Into::into)
    }
}
