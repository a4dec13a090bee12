//! 10-digit organizational identifier validation.
//!
//! The check digit is a Luhn mod-10 digit computed over the identifier with
//! the fixed prefix [`IDENTIFIER_PREFIX`] prepended.

use intake_model::ValidationResult;

/// Constant prefix folded into the checksum.
pub const IDENTIFIER_PREFIX: &str = "80840";

const IDENTIFIER_LEN: usize = 10;

pub const ERR_LENGTH: &str = "must be exactly 10 digits";
pub const ERR_CHECK_DIGIT: &str = "check digit is invalid";

/// Remove whitespace and hyphens.
pub fn clean_identifier(raw: &str) -> String {
    raw.chars()
        .filter(|c| !c.is_whitespace() && *c != '-')
        .collect()
}

fn is_ten_digits(cleaned: &str) -> bool {
    cleaned.len() == IDENTIFIER_LEN && cleaned.bytes().all(|b| b.is_ascii_digit())
}

pub fn validate_identifier(raw: &str) -> ValidationResult {
    let cleaned = clean_identifier(raw);
    if !is_ten_digits(&cleaned) {
        return ValidationResult::invalid(ERR_LENGTH);
    }
    if luhn_sum(IDENTIFIER_PREFIX.bytes().chain(cleaned.bytes()), false) % 10 == 0 {
        ValidationResult::ok()
    } else {
        ValidationResult::invalid(ERR_CHECK_DIGIT)
    }
}

/// Format as `DDD-DDD-DDDD`, or return the input unchanged if it is not
/// 10 digits after cleaning.
pub fn format_identifier(raw: &str) -> String {
    let cleaned = clean_identifier(raw);
    if !is_ten_digits(&cleaned) {
        return raw.to_string();
    }
    format!("{}-{}-{}", &cleaned[..3], &cleaned[3..6], &cleaned[6..])
}

/// Compute the trailing check digit for the first nine digits.
///
/// Returns `None` unless `first_nine` is exactly nine ASCII digits after
/// cleaning.
pub fn compute_check_digit(first_nine: &str) -> Option<u8> {
    let cleaned = clean_identifier(first_nine);
    if cleaned.len() != IDENTIFIER_LEN - 1 || !cleaned.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    // The missing check digit shifts the doubling onto the rightmost digit.
    let sum = luhn_sum(IDENTIFIER_PREFIX.bytes().chain(cleaned.bytes()), true);
    Some(((10 - sum % 10) % 10) as u8)
}

/// Luhn digit sum walking right to left. When `double_first` is false the
/// rightmost digit is kept and every second digit after it is doubled.
fn luhn_sum(digits: impl DoubleEndedIterator<Item = u8>, double_first: bool) -> u32 {
    digits
        .rev()
        .enumerate()
        .map(|(idx, byte)| {
            let digit = u32::from(byte - b'0');
            if (idx % 2 == 1) != double_first {
                let doubled = digit * 2;
                if doubled > 9 { doubled - 9 } else { doubled }
            } else {
                digit
            }
        })
        .sum()
}
