//! Phone number normalization.

/// Marker left in front of international numbers by spreadsheet exports.
const QUOTED_COUNTRY_CODE: &str = "'+1";

/// Normalize a phone number to `(AAA) BBB-CCCC`.
///
/// A leading `'+1` marker and the whitespace after it are removed first. When
/// exactly ten digits remain they are formatted; otherwise the marker-stripped
/// text is returned with its punctuation intact.
///
/// # Examples
///
/// ```
/// use recon_transform::clean_phone_number;
///
/// assert_eq!(clean_phone_number("'+1 5125550100"), "(512) 555-0100");
/// assert_eq!(clean_phone_number("512.555.0100"), "(512) 555-0100");
/// assert_eq!(clean_phone_number("555-01"), "555-01");
/// ```
pub fn clean_phone_number(raw: &str) -> String {
    let unquoted = match raw.strip_prefix(QUOTED_COUNTRY_CODE) {
        Some(rest) => rest.trim_start(),
        None => raw,
    };
    let digits: String = unquoted.chars().filter(char::is_ascii_digit).collect();
    if digits.len() == 10 {
        format!("({}) {}-{}", &digits[..3], &digits[3..6], &digits[6..])
    } else {
        unquoted.to_string()
    }
}

/// Nullable form of [`clean_phone_number`]; missing values stay missing.
pub fn normalize_phone(raw: Option<&str>) -> Option<String> {
    raw.map(clean_phone_number)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_ten_digit_numbers() {
        assert_eq!(clean_phone_number("5125550100"), "(512) 555-0100");
        assert_eq!(clean_phone_number("512-555-0100"), "(512) 555-0100");
        assert_eq!(clean_phone_number(" (512) 555 0100 "), "(512) 555-0100");
    }

    #[test]
    fn strips_quoted_country_code() {
        assert_eq!(clean_phone_number("'+1 5125550100"), "(512) 555-0100");
        assert_eq!(clean_phone_number("'+1   512-555-0100"), "(512) 555-0100");
        assert_eq!(clean_phone_number("'+15125550100"), "(512) 555-0100");
    }

    #[test]
    fn other_lengths_are_returned_unchanged() {
        assert_eq!(clean_phone_number("555-01"), "555-01");
        assert_eq!(clean_phone_number("555-0100"), "555-0100");
        assert_eq!(clean_phone_number("+1 512 555 0100"), "+1 512 555 0100");
        assert_eq!(clean_phone_number("unknown"), "unknown");
        assert_eq!(clean_phone_number(""), "");
    }

    #[test]
    fn marker_is_removed_even_when_not_formatted() {
        assert_eq!(clean_phone_number("'+1 555-01"), "555-01");
    }

    #[test]
    fn null_propagates() {
        assert_eq!(normalize_phone(None), None);
        assert_eq!(
            normalize_phone(Some("5125550100")).as_deref(),
            Some("(512) 555-0100")
        );
    }
}
