/// Build a `Vec<SqlValue>` from mixed literals.
///
/// ```rust
/// use sqlow::{sql_values, SqlValue};
///
/// let values = sql_values![1, "a", 2.5];
/// assert_eq!(values[1], SqlValue::Text("a".into()));
/// ```
#[macro_export]
macro_rules! sql_values {
    () => {
        ::std::vec::Vec::<$crate::SqlValue>::new()
    };
    ($($value:expr),+ $(,)?) => {
        vec![$($crate::SqlValue::from($value)),+]
    };
}
