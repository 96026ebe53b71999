//! Join-key derivation.

/// Append the booking namespace suffix to a master or consent identifier.
///
/// The identifier is taken as-is; an identifier that already ends with the
/// suffix is still suffixed, matching how the exports are keyed.
pub fn suffix_record_id(record_id: &str, suffix: &str) -> String {
    let mut key = String::with_capacity(record_id.len() + suffix.len());
    key.push_str(record_id);
    key.push_str(suffix);
    key
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn appends_suffix() {
        assert_eq!(suffix_record_id("101", "-B"), "101-B");
        assert_eq!(suffix_record_id("0042", "-B"), "0042-B");
        assert_eq!(suffix_record_id("", "-B"), "-B");
    }
}
