//! Grouped amount input.
//!
//! An amount field keeps a [`normalize_input`]-ed string as its display
//! value and calls [`parse_amount`] on submit. Both functions are total:
//! any keystroke sequence, pasted text, or empty input yields a
//! well-defined result, so callers never need to pre-validate.
//!
//! ```rust
//! use toman_ledger::amount::{normalize_input, parse_amount};
//!
//! assert_eq!(normalize_input("1234567"), "1,234,567");
//! assert_eq!(parse_amount("1,234,567"), 1_234_567);
//! assert_eq!(normalize_input("abc"), "");
//! assert_eq!(parse_amount("abc"), 0);
//! ```

/// Separator inserted between groups of three digits in input fields.
pub const GROUP_SEPARATOR: char = ',';

/// Persian thousands separator (U+066C) used in read-only displays.
pub const PERSIAN_GROUP_SEPARATOR: char = '\u{066C}';

/// Number of digits per group.
const GROUP_WIDTH: usize = 3;

/// First Extended Arabic-Indic (Persian) digit, `۰`.
const PERSIAN_ZERO: u32 = 0x06F0;

/// First Arabic-Indic digit, `٠`.
const ARABIC_INDIC_ZERO: u32 = 0x0660;

/// Returns the value of a decimal digit.
///
/// Persian and Arabic-Indic digits count alongside ASCII ones, since a
/// Persian keyboard produces them in numeric fields.
fn digit_value(ch: char) -> Option<u32> {
    match ch {
        '0'..='9' => ch.to_digit(10),
        '\u{06F0}'..='\u{06F9}' => Some(u32::from(ch) - PERSIAN_ZERO),
        '\u{0660}'..='\u{0669}' => Some(u32::from(ch) - ARABIC_INDIC_ZERO),
        _ => None,
    }
}

/// Collects the decimal digits of `raw` as ASCII, dropping everything
/// else.
fn ascii_digits(raw: &str) -> String {
    raw.chars()
        .filter_map(digit_value)
        .filter_map(|value| char::from_digit(value, 10))
        .collect()
}

/// Inserts `separator` between groups of three, counting from the
/// least-significant digit.
fn group_with(digits: &str, separator: char) -> String {
    let len = digits.chars().count();
    let mut out = String::with_capacity(len + len.div_ceil(GROUP_WIDTH));
    for (idx, ch) in digits.chars().enumerate() {
        if idx > 0 && (len - idx) % GROUP_WIDTH == 0 {
            out.push(separator);
        }
        out.push(ch);
    }
    out
}

/// Turns raw keystrokes into a grouped amount string.
///
/// Every non-digit character is stripped. If nothing remains the result
/// is empty. Otherwise the digits are read as an integer (leading zeros
/// dropped, so `"00"` becomes `"0"`) and re-rendered with
/// [`GROUP_SEPARATOR`] every three digits from the right.
///
/// The reconstruction works on the digit string, so arbitrarily long
/// input never overflows. The function is idempotent:
/// `normalize_input(&normalize_input(x)) == normalize_input(x)`.
#[inline]
#[must_use]
pub fn normalize_input(raw: &str) -> String {
    let digits = ascii_digits(raw);
    if digits.is_empty() {
        return String::new();
    }
    let significant = digits.trim_start_matches('0');
    if significant.is_empty() {
        return "0".to_owned();
    }
    group_with(significant, GROUP_SEPARATOR)
}

/// Parses a grouped (or any) string into a Toman amount.
///
/// Every non-digit character is stripped and the rest is read in base
/// 10. Returns `0` when no digits remain. Digit runs beyond `u64::MAX`
/// saturate rather than wrap.
#[inline]
#[must_use]
pub fn parse_amount(text: &str) -> u64 {
    text.chars().filter_map(digit_value).fold(0_u64, |acc, value| {
        acc.saturating_mul(10).saturating_add(u64::from(value))
    })
}

/// Renders an amount with [`GROUP_SEPARATOR`] between digit groups.
#[inline]
#[must_use]
pub fn format_grouped(amount: u64) -> String {
    group_with(&amount.to_string(), GROUP_SEPARATOR)
}

/// Replaces ASCII digits with Persian digits, leaving other characters
/// untouched.
#[inline]
#[must_use]
pub fn to_persian_digits(text: &str) -> String {
    text.chars()
        .map(|ch| {
            ch.to_digit(10)
                .and_then(|value| char::from_u32(PERSIAN_ZERO + value))
                .unwrap_or(ch)
        })
        .collect()
}

/// Formats an amount for read-only display: Persian digits grouped with
/// [`PERSIAN_GROUP_SEPARATOR`].
#[inline]
#[must_use]
pub fn display_toman(amount: u64) -> String {
    to_persian_digits(&group_with(&amount.to_string(), PERSIAN_GROUP_SEPARATOR))
}
