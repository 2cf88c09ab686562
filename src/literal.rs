use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::error::SqlowError;
use crate::escape::escape;
use crate::types::{SqlValue, ValueKind};

/// Quote character wrapped around non-numeric literals.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, ValueEnum, Serialize, Deserialize,
)]
#[serde(rename_all = "kebab-case")]
pub enum LiteralStyle {
    /// Wrap with `` ` ``.
    Backtick,
    /// Wrap with `'`, the conventional SQL string style.
    #[default]
    SingleQuote,
}

impl LiteralStyle {
    #[must_use]
    pub fn quote(self) -> char {
        match self {
            LiteralStyle::Backtick => '`',
            LiteralStyle::SingleQuote => '\'',
        }
    }

    fn wrap(self, content: &str) -> String {
        let q = self.quote();
        let mut out = String::with_capacity(content.len() + 2);
        out.push(q);
        out.push_str(content);
        out.push(q);
        out
    }
}

/// Whether the escaping pass also sees the wrapping quotes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum QuoteEscaping {
    /// Escape the value content, then wrap. The escapes are backslash
    /// sequences, so only dialects that honour them (MySQL-style) read the
    /// result as intended; a quote inside the content still comes out as `\\'`.
    #[default]
    ContentOnly,
    /// Wrap, then run the escape pass over the whole string, so the wrapper
    /// quotes are escaped too (single-quote wrappers come out as `\\'`).
    Legacy,
}

/// Formatter configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LiteralOptions {
    pub style: LiteralStyle,
    pub quote_escaping: QuoteEscaping,
    /// Reject values with no literal form instead of falling back to their
    /// string representation.
    pub strict: bool,
}

impl LiteralOptions {
    #[must_use]
    pub fn new(style: LiteralStyle) -> Self {
        Self {
            style,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_quote_escaping(mut self, quote_escaping: QuoteEscaping) -> Self {
        self.quote_escaping = quote_escaping;
        self
    }

    #[must_use]
    pub fn with_strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }
}

/// Formatter bound to a set of [`LiteralOptions`].
///
/// The free functions [`format_scalar`] and [`format_list`] cover the common
/// case; use this when the style or strictness comes from configuration.
#[derive(Debug, Clone, Copy, Default)]
pub struct LiteralFormatter {
    options: LiteralOptions,
}

impl LiteralFormatter {
    #[must_use]
    pub fn new(options: LiteralOptions) -> Self {
        Self { options }
    }

    /// Render one value.
    ///
    /// # Errors
    ///
    /// Returns `SqlowError::Unsupported` in strict mode when the value has no
    /// literal form (see [`try_format_scalar`]).
    pub fn scalar(&self, value: &SqlValue) -> Result<String, SqlowError> {
        if self.options.strict {
            check_supported(value)?;
        }
        Ok(render_scalar(
            value,
            self.options.style,
            self.options.quote_escaping,
        ))
    }

    /// Render a comma-joined list.
    ///
    /// # Errors
    ///
    /// Returns `SqlowError::Unsupported` in strict mode when any element has
    /// no literal form.
    pub fn list(&self, values: &[SqlValue]) -> Result<String, SqlowError> {
        if self.options.strict {
            values.iter().try_for_each(check_supported)?;
        }
        Ok(render_list(
            values,
            self.options.style,
            self.options.quote_escaping,
        ))
    }
}

/// Render a single value as SQL literal text.
///
/// Numbers come out as bare numerals in either style. Timestamps use
/// `YYYY/M/D HH:MM:SS`; everything else uses its natural string form. Both are
/// escaped and then wrapped in the style's quote.
///
/// Non-finite floats come out bare as `NaN`, `inf` or `-inf`, which SQL reads
/// as identifiers; [`try_format_scalar`] rejects them instead.
///
/// ```rust
/// use sqlow::prelude::*;
///
/// assert_eq!(format_scalar(&SqlValue::Int(42), LiteralStyle::Backtick), "42");
/// assert_eq!(format_scalar(&"o'k".into(), LiteralStyle::SingleQuote), r"'o\\'k'");
/// ```
#[must_use]
pub fn format_scalar(value: &SqlValue, style: LiteralStyle) -> String {
    render_scalar(value, style, QuoteEscaping::ContentOnly)
}

/// Render values joined by `,` with no surrounding brackets.
///
/// Numbers stay bare; every other element is quoted with the style's quote.
/// As with [`format_scalar`], non-finite floats are emitted bare (`NaN`,
/// `inf`); use [`try_format_list`] to reject them.
#[must_use]
pub fn format_list(values: &[SqlValue], style: LiteralStyle) -> String {
    render_list(values, style, QuoteEscaping::ContentOnly)
}

/// [`format_scalar`] that refuses values with no literal form.
///
/// # Errors
///
/// Returns `SqlowError::Unsupported` for `NULL`, binary data, and non-finite
/// floats.
pub fn try_format_scalar(value: &SqlValue, style: LiteralStyle) -> Result<String, SqlowError> {
    check_supported(value)?;
    Ok(format_scalar(value, style))
}

/// [`format_list`] that refuses values with no literal form.
///
/// # Errors
///
/// Returns `SqlowError::Unsupported` naming the first rejected element.
pub fn try_format_list(values: &[SqlValue], style: LiteralStyle) -> Result<String, SqlowError> {
    values.iter().try_for_each(check_supported)?;
    Ok(format_list(values, style))
}

fn check_supported(value: &SqlValue) -> Result<(), SqlowError> {
    match value {
        SqlValue::Null => Err(SqlowError::Unsupported(
            "NULL has no quoted literal form".to_string(),
        )),
        SqlValue::Blob(bytes) => Err(SqlowError::Unsupported(format!(
            "binary value ({} bytes) has no quoted literal form",
            bytes.len()
        ))),
        SqlValue::Float(f) if !f.is_finite() => Err(SqlowError::Unsupported(format!(
            "non-finite float {f}"
        ))),
        _ => Ok(()),
    }
}

fn render_scalar(value: &SqlValue, style: LiteralStyle, escaping: QuoteEscaping) -> String {
    match (value.kind(), value) {
        (ValueKind::Numeric, _) => value.to_string(),
        (ValueKind::Timestamp, SqlValue::Timestamp(ts)) => {
            quoted(&ts.format("%Y/%-m/%-d %H:%M:%S").to_string(), style, escaping)
        }
        _ => quoted(&value.to_string(), style, escaping),
    }
}

fn render_list(values: &[SqlValue], style: LiteralStyle, escaping: QuoteEscaping) -> String {
    match escaping {
        // No rule matches across a `,` or inside a numeral, so escaping each
        // element's content is the same as escaping the joined content once.
        QuoteEscaping::ContentOnly => values
            .iter()
            .map(|v| {
                if v.is_numeric() {
                    v.to_string()
                } else {
                    style.wrap(&escape(&v.to_string()))
                }
            })
            .collect::<Vec<_>>()
            .join(","),
        QuoteEscaping::Legacy => {
            let joined = values
                .iter()
                .map(|v| {
                    if v.is_numeric() {
                        v.to_string()
                    } else {
                        style.wrap(&v.to_string())
                    }
                })
                .collect::<Vec<_>>()
                .join(",");
            escape(&joined).into_owned()
        }
    }
}

fn quoted(content: &str, style: LiteralStyle, escaping: QuoteEscaping) -> String {
    match escaping {
        QuoteEscaping::ContentOnly => style.wrap(&escape(content)),
        QuoteEscaping::Legacy => escape(&style.wrap(content)).into_owned(),
    }
}
