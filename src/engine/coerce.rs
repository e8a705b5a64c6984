//! Per-cell type coercion.
//!
//! Every raw cell goes through [`coerce`] exactly once. Classification is
//! per-cell, not per-column: a column whose cells are not uniformly typed
//! ends up tracked in both the numeric and categorical registries.

/// A cell after coercion: either a number or the original text.
#[derive(Clone, Debug, PartialEq)]
pub enum TypedValue {
    Number(f64),
    Text(String),
}

impl TypedValue {
    pub fn is_number(&self) -> bool {
        matches!(self, Self::Number(_))
    }
}

/// Converts a raw textual cell into a typed value. Never fails.
///
/// Rules, in order: an integer literal becomes a `Number` (so `"007"` and
/// `"-3"` count as numeric), then a float literal, otherwise the text is
/// kept unchanged. The integer path parses as `i64` first so that plain
/// counts are recognised even with leading zeros; the value is stored as
/// `f64` either way.
pub fn coerce(text: &str) -> TypedValue {
    let trimmed = text.trim();
    if let Ok(i) = trimmed.parse::<i64>() {
        return TypedValue::Number(i as f64);
    }
    if let Ok(f) = trimmed.parse::<f64>() {
        return TypedValue::Number(f);
    }
    TypedValue::Text(text.to_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integer_literal() {
        assert_eq!(coerce("42"), TypedValue::Number(42.0));
        assert_eq!(coerce("-3"), TypedValue::Number(-3.0));
        assert_eq!(coerce("007"), TypedValue::Number(7.0));
    }

    #[test]
    fn test_float_literal() {
        assert_eq!(coerce("3.25"), TypedValue::Number(3.25));
        assert_eq!(coerce("1e3"), TypedValue::Number(1000.0));
    }

    #[test]
    fn test_text_falls_through() {
        assert_eq!(coerce("fb"), TypedValue::Text("fb".to_owned()));
        assert_eq!(coerce(""), TypedValue::Text(String::new()));
        assert_eq!(coerce("12 dollars"), TypedValue::Text("12 dollars".to_owned()));
    }

    #[test]
    fn test_surrounding_whitespace_is_ignored_for_numbers() {
        assert_eq!(coerce("  10 "), TypedValue::Number(10.0));
        // Non-numeric text keeps its original whitespace
        assert_eq!(coerce(" a "), TypedValue::Text(" a ".to_owned()));
    }
}
