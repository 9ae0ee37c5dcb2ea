// 🔢 Sequence Completer - mod-10 (Luhn) check digit
// Turns a validated prefix into a full 16-digit checksum-valid number

use crate::rng::RandomSource;

/// Digits before the check digit
pub const PARTIAL_LEN: usize = 15;

/// Full card number length
pub const CARD_LEN: usize = PARTIAL_LEN + 1;

/// Double-and-reduce step: 0..=9 -> 0..=9
fn doubled(digit: u32) -> u32 {
    let d = digit * 2;
    if d >= 10 {
        d - 9
    } else {
        d
    }
}

/// Check digit for a partial sequence
///
/// Scans from the last digit (index 0) leftward and doubles digits at even
/// index. Non-digit characters are skipped.
pub fn check_digit(partial: &str) -> u8 {
    let sum: u32 = partial
        .chars()
        .rev()
        .filter_map(|c| c.to_digit(10))
        .enumerate()
        .map(|(i, d)| if i % 2 == 0 { doubled(d) } else { d })
        .sum();

    ((10 - sum % 10) % 10) as u8
}

/// Checksum predicate over a complete sequence
///
/// Index 0 is the check digit itself, so odd indices are doubled.
pub fn is_valid(number: &str) -> bool {
    if number.is_empty() || !number.chars().all(|c| c.is_ascii_digit()) {
        return false;
    }

    let sum: u32 = number
        .chars()
        .rev()
        .filter_map(|c| c.to_digit(10))
        .enumerate()
        .map(|(i, d)| if i % 2 == 1 { doubled(d) } else { d })
        .sum();

    sum % 10 == 0
}

/// Random digits needed to bring `prefix` up to the partial length
pub fn filler_len(prefix: &str) -> usize {
    PARTIAL_LEN.saturating_sub(prefix.len())
}

/// Append `filler_len(prefix)` random digits, then the check digit
pub fn complete(prefix: &str, rng: &mut dyn RandomSource) -> String {
    let mut number = String::with_capacity(CARD_LEN);
    number.push_str(prefix);

    for _ in 0..filler_len(prefix) {
        number.push(char::from(b'0' + rng.digit()));
    }

    let check = check_digit(&number);
    number.push(char::from(b'0' + check));
    number
}
