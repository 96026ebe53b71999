//! Polars AnyValue utility functions.

use polars::prelude::{AnyValue, DataFrame};

use crate::error::Result;

/// Converts a Polars AnyValue to its text.
///
/// Exports are read with every column as String, so only string and null
/// values reach here; anything else falls back to its display form.
pub fn any_to_string(value: AnyValue<'_>) -> String {
    match value {
        AnyValue::Null => String::new(),
        AnyValue::String(s) => s.to_string(),
        AnyValue::StringOwned(s) => s.to_string(),
        other => other.to_string(),
    }
}

/// Converts an AnyValue to text, keeping nulls as `None`.
///
/// Unlike display helpers this never trims: names are compared verbatim.
pub fn any_to_text(value: AnyValue<'_>) -> Option<String> {
    match value {
        AnyValue::Null => None,
        other => Some(any_to_string(other)),
    }
}

/// Extract every value of a column as optional text.
pub fn column_text(df: &DataFrame, name: &str) -> Result<Vec<Option<String>>> {
    let column = df.column(name)?;
    let mut values = Vec::with_capacity(df.height());
    for idx in 0..df.height() {
        values.push(any_to_text(column.get(idx).unwrap_or(AnyValue::Null)));
    }
    Ok(values)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn string_values_are_kept_verbatim() {
        assert_eq!(any_to_string(AnyValue::String("0042-B")), "0042-B");
        assert_eq!(any_to_string(AnyValue::Null), "");
    }

    #[test]
    fn null_stays_null() {
        assert_eq!(any_to_text(AnyValue::Null), None);
        assert_eq!(any_to_text(AnyValue::String(" Ann ")), Some(" Ann ".to_string()));
    }
}
