//! SQL identifier sanitization and quoting.
//!
//! Sanitization makes scraped header text usable as a column or table
//! name; quoting makes any identifier safe to embed in generated SQL.
//! The two are independent: quoting is applied even to names that are
//! already sanitized, since sanitized text can still collide with
//! reserved words.

use std::sync::LazyLock;

use regex::Regex;

/// Substitute for identifiers that sanitize to nothing.
pub const FALLBACK_IDENT: &str = "col";

static NON_WORD: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\W+").expect("valid regex"));

/// Turns arbitrary header text into a valid SQL identifier.
///
/// Trims surrounding whitespace, collapses every maximal run of
/// non-word characters into a single underscore, and substitutes
/// [`FALLBACK_IDENT`] when nothing survives. Total over all inputs
/// and idempotent.
pub fn sanitize_identifier(raw: &str) -> String {
    let cleaned = NON_WORD.replace_all(raw.trim(), "_");
    if cleaned.is_empty() {
        FALLBACK_IDENT.to_string()
    } else {
        cleaned.into_owned()
    }
}

/// Wraps an identifier in double quotes, doubling any embedded quote.
pub fn quote_identifier(name: &str) -> String {
    format!("\"{}\"", name.replace('"', "\"\""))
}
