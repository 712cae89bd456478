use lotto_types::{MAX_NUMBER, MIN_NUMBER};

/// Widest text a number slot accepts
pub const MAX_SLOT_DIGITS: usize = 2;

/// Filter one keystroke in a number slot.
///
/// Non-digit characters are dropped from `typed`. The result replaces
/// `current` only if it is empty or parses to a number in range; anything
/// else (e.g. "75" after "7") is rejected and `current` is kept.
pub fn sanitize_number_input(current: &str, typed: &str) -> String {
    let digits = digits_only(typed);

    if is_acceptable(&digits) {
        digits
    } else {
        current.to_string()
    }
}

pub fn digits_only(typed: &str) -> String {
    typed.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// Whether a digit string may stand in a number slot
pub fn is_acceptable(digits: &str) -> bool {
    if digits.is_empty() {
        return true;
    }
    if digits.len() > MAX_SLOT_DIGITS {
        return false;
    }
    digits
        .parse::<u8>()
        .map(|n| (MIN_NUMBER..=MAX_NUMBER).contains(&n))
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_numbers_in_range() {
        assert_eq!(sanitize_number_input("", "7"), "7");
        assert_eq!(sanitize_number_input("6", "60"), "60");
        assert_eq!(sanitize_number_input("", "1"), "1");
    }

    #[test]
    fn test_rejects_values_above_sixty() {
        // Typing "5" after "7" would make 75
        assert_eq!(sanitize_number_input("7", "75"), "7");
        assert_eq!(sanitize_number_input("6", "61"), "6");
    }

    #[test]
    fn test_rejects_zero() {
        assert_eq!(sanitize_number_input("", "0"), "");
        assert_eq!(sanitize_number_input("", "00"), "");
    }

    #[test]
    fn test_strips_non_digits() {
        assert_eq!(sanitize_number_input("", "a1b"), "1");
        assert_eq!(sanitize_number_input("", "-4"), "4");
        assert_eq!(sanitize_number_input("", " 12 "), "12");
        assert_eq!(sanitize_number_input("3", "abc"), "");
    }

    #[test]
    fn test_is_acceptable() {
        assert!(is_acceptable(""));
        assert!(is_acceptable("60"));
        assert!(!is_acceptable("61"));
        assert!(!is_acceptable("123"));
    }

    #[test]
    fn test_clearing_the_slot_is_allowed() {
        assert_eq!(sanitize_number_input("12", ""), "");
    }

    #[test]
    fn test_slot_is_limited_to_two_digits() {
        assert_eq!(sanitize_number_input("07", "007"), "07");
        assert_eq!(sanitize_number_input("", "07"), "07");
    }
}
