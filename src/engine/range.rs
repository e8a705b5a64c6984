//! Expansion of range-encoded cells.
//!
//! Ad-archive exports encode audience size, impressions and spend as a
//! dictionary-like text payload instead of a plain number:
//!
//! ```text
//! {'lower_bound': '100', 'upper_bound': '200'}
//! ```
//!
//! [`expand`] turns such a cell into two derived sub-fields named
//! `<column>_lower` and `<column>_upper`, whose values go through the usual
//! per-cell coercion afterwards. Failure to expand is a normal outcome, not
//! an error: the row simply proceeds without the derived fields.

use serde_json::Value;

/// The three columns that are checked for range-encoded payloads.
pub const RESERVED_RANGE_COLUMNS: [&str; 3] = ["estimated_audience_size", "impressions", "spend"];

/// Returns true if `column` is one of the reserved range-encoded columns.
pub fn is_reserved(column: &str) -> bool {
    RESERVED_RANGE_COLUMNS.contains(&column)
}

/// Name of the derived lower-bound column for `column`.
pub fn lower_name(column: &str) -> String {
    format!("{column}_lower")
}

/// Name of the derived upper-bound column for `column`.
pub fn upper_name(column: &str) -> String {
    format!("{column}_upper")
}

/// Attempts to expand a range-encoded cell into its two bound values.
///
/// Returns the `lower_bound` and `upper_bound` values as text so the
/// downstream coercion keeps the integer-vs-float distinction. `None` means
/// "no expansion": a non-reserved column, an empty cell, a malformed
/// payload or missing keys. None of these are errors.
pub fn expand(column: &str, raw: &str) -> Option<(String, String)> {
    if !is_reserved(column) || raw.is_empty() {
        return None;
    }

    let dict = parse_dict_literal(raw)?;
    let lower = bound_text(dict.get("lower_bound")?)?;
    let upper = bound_text(dict.get("upper_bound")?)?;
    Some((lower, upper))
}

/// Parses a Python-repr-style dictionary literal.
///
/// The payloads use single quotes; JSON wants double quotes. Normalising the
/// quotes and handing the result to serde_json covers every payload shape
/// the archive produces (string bounds, bare-number bounds, either quote
/// style). Payloads with apostrophes inside values do not survive the
/// normalisation and come back as `None`, which downgrades the cell to
/// categorical text.
fn parse_dict_literal(raw: &str) -> Option<serde_json::Map<String, Value>> {
    let candidate = raw.trim();
    if !candidate.starts_with('{') {
        return None;
    }
    let normalised = candidate.replace('\'', "\"");
    match serde_json::from_str::<Value>(&normalised) {
        Ok(Value::Object(map)) => Some(map),
        _ => None,
    }
}

fn bound_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}
