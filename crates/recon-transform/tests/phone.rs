//! Property tests for phone normalization.

use proptest::prelude::*;

use recon_transform::{clean_phone_number, normalize_phone};

fn digit_count(value: &str) -> usize {
    value.chars().filter(char::is_ascii_digit).count()
}

#[test]
fn documented_examples() {
    assert_eq!(clean_phone_number("'+1 5125550100"), "(512) 555-0100");
    assert_eq!(clean_phone_number("555-01"), "555-01");
    assert_eq!(clean_phone_number("(512) 555-0100"), "(512) 555-0100");
}

proptest! {
    #[test]
    fn ten_digits_always_format(digits in "[0-9]{10}") {
        let formatted = clean_phone_number(&digits);
        prop_assert_eq!(formatted.len(), 14);
        prop_assert_eq!(
            formatted,
            format!("({}) {}-{}", &digits[..3], &digits[3..6], &digits[6..])
        );
    }

    #[test]
    fn formatting_is_idempotent(raw in "[0-9 ()./-]{10,20}") {
        let once = clean_phone_number(&raw);
        prop_assert_eq!(clean_phone_number(&once), once.clone());
    }

    #[test]
    fn other_digit_counts_pass_through(raw in "[ -~]{0,24}") {
        prop_assume!(!raw.starts_with("'+1"));
        prop_assume!(digit_count(&raw) != 10);
        prop_assert_eq!(clean_phone_number(&raw), raw);
    }

    #[test]
    fn quoted_marker_is_stripped(rest in "[0-9]{1,9}|[0-9]{11,14}") {
        let raw = format!("'+1 {rest}");
        prop_assert_eq!(clean_phone_number(&raw), rest);
    }

    #[test]
    fn present_values_stay_present(raw in "\\PC{0,16}") {
        prop_assert!(normalize_phone(Some(&raw)).is_some());
    }
}
