use std::borrow::Cow;

/// Ordered replacement rules. Each rule rewrites every occurrence before the
/// next one runs, so later rules see (and re-escape) the output of earlier
/// ones: the `\` rule doubles the backslashes produced by the quote rules, and
/// the last two rules double-escape `\0` and `\Z` sequences left behind.
const RULES: [(&str, &str); 11] = [
    ("'", "\\'"),
    ("\"", "\\\""),
    ("\\", "\\\\"),
    ("\u{8}", "\\b"),
    ("\n", "\\n"),
    ("\r", "\\r"),
    ("\t", "\\t"),
    ("%", "\\%"),
    ("_", "\\_"),
    ("\\0", "\\\\0"),
    ("\\Z", "\\\\Z"),
];

/// Characters that trigger at least one rule. The two sequence rules need a
/// backslash, which is already in the set.
const TRIGGERS: [char; 9] = ['\'', '"', '\\', '\u{8}', '\n', '\r', '\t', '%', '_'];

/// Escape quote, control, and LIKE wildcard characters for inclusion in SQL text.
///
/// Returns a borrowed `Cow` when nothing needs escaping.
///
/// ```rust
/// use sqlow::escape;
///
/// assert_eq!(escape("50%_off"), r"50\%\_off");
/// assert_eq!(escape("plain"), "plain");
/// ```
#[must_use]
pub fn escape(text: &str) -> Cow<'_, str> {
    if !text.contains(TRIGGERS) {
        return Cow::Borrowed(text);
    }

    let mut out = text.to_string();
    for (from, to) in RULES {
        if out.contains(from) {
            out = out.replace(from, to);
        }
    }
    Cow::Owned(out)
}
