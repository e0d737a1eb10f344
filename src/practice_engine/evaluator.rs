//! Answer checking and question formatting.

use crate::practice_engine::models::Fact;

/// Parse the leading base-10 integer of `text`, the way a browser's
/// `parseInt(text, 10)` does: leading whitespace is skipped, one optional
/// sign is accepted, and parsing stops at the first non-digit.
///
/// Returns `None` when no digit follows the sign, or when the value does not
/// fit in an `i64`.
pub fn parse_int_prefix(text: &str) -> Option<i64> {
    let trimmed = text.trim_start();
    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let digits_len = rest.bytes().take_while(u8::is_ascii_digit).count();
    if digits_len == 0 {
        return None;
    }

    let magnitude: i128 = rest[..digits_len].parse().ok()?;
    let value = if negative { -magnitude } else { magnitude };
    i64::try_from(value).ok()
}

/// True iff `user_answer` parses (leniently, see [`parse_int_prefix`]) to
/// exactly `correct_answer`. `"42abc"` counts as 42; `""` never matches.
pub fn check_answer(user_answer: &str, correct_answer: i64) -> bool {
    parse_int_prefix(user_answer) == Some(correct_answer)
}

/// Display form of a fact, e.g. `"6 × 7"`.
pub fn format_question(multiplier: u32, multiplicand: u32) -> String {
    Fact::new(multiplier, multiplicand).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_answers_match() {
        assert!(check_answer("42", 42));
        assert!(!check_answer("41", 42));
        assert!(check_answer("-5", -5));
        assert!(check_answer("+7", 7));
    }

    #[test]
    fn trailing_garbage_is_ignored() {
        assert!(check_answer("42abc", 42));
        assert!(check_answer("42.0", 42));
        assert!(check_answer("42.9", 42));
        assert!(check_answer("42 43", 42));
    }

    #[test]
    fn leading_whitespace_is_skipped() {
        assert!(check_answer("  42", 42));
        assert!(check_answer("\t\n42", 42));
    }

    #[test]
    fn malformed_input_is_simply_wrong() {
        assert!(!check_answer("", 42));
        assert!(!check_answer("   ", 42));
        assert!(!check_answer("abc42", 42));
        assert!(!check_answer("-", 0));
        assert!(!check_answer("- 5", -5));
        assert!(!check_answer("--5", -5));
    }

    #[test]
    fn leading_zeros_parse_as_decimal() {
        assert_eq!(parse_int_prefix("0042"), Some(42));
        assert_eq!(parse_int_prefix("-0"), Some(0));
    }

    #[test]
    fn overflow_never_matches() {
        assert_eq!(parse_int_prefix("99999999999999999999999"), None);
        assert_eq!(parse_int_prefix("9223372036854775807"), Some(i64::MAX));
        assert!(!check_answer("99999999999999999999999", i64::MAX));
    }

    #[test]
    fn question_format() {
        assert_eq!(format_question(6, 7), "6 × 7");
        assert_eq!(format_question(12, 1), "12 × 1");
    }
}
