//! Persian number words for Toman amounts.
//!
//! Amounts are decomposed into short-scale magnitude groups (billions,
//! millions, thousands, remainder). Each group of 1–999 is spelled from
//! fixed digit tables and the groups are joined with the conjunction
//! `و`, most significant first.
//!
//! ```rust
//! use toman_ledger::words::to_words;
//!
//! assert_eq!(to_words(0), "صفر تومان");
//! assert_eq!(to_words(45_000), "چهل و پنج هزار تومان");
//! assert_eq!(to_words(1_890_000), "یک میلیون و هشتصد و نود هزار تومان");
//! ```

/// Currency unit appended to every rendering.
pub const UNIT: &str = "تومان";

/// Word for zero.
const ZERO: &str = "صفر";

/// Conjunction placed between components and between groups.
const AND: &str = " و ";

/// Ones digit words, indexed by digit.
const ONES: [&str; 10] = ["", "یک", "دو", "سه", "چهار", "پنج", "شش", "هفت", "هشت", "نه"];

/// Tens digit words, indexed by digit.
const TENS: [&str; 10] = [
    "", "ده", "بیست", "سی", "چهل", "پنجاه", "شصت", "هفتاد", "هشتاد", "نود",
];

/// Irregular words for 10–19, indexed by the ones digit.
const TEENS: [&str; 10] = [
    "ده", "یازده", "دوازده", "سیزده", "چهارده", "پانزده", "شانزده", "هفده", "هجده", "نوزده",
];

/// Hundreds digit words, indexed by digit.
const HUNDREDS: [&str; 10] = [
    "", "صد", "دویست", "سیصد", "چهارصد", "پانصد", "ششصد", "هفتصد", "هشتصد", "نهصد",
];

/// Magnitude values and names, most significant first.
///
/// The table stops at billions; larger counts of billions are spelled
/// recursively in front of `میلیارد`.
const MAGNITUDES: [(u64, &str); 3] = [
    (1_000_000_000, "میلیارد"),
    (1_000_000, "میلیون"),
    (1_000, "هزار"),
];

/// Size of one magnitude group.
const GROUP: u64 = 1_000;

/// Looks up the word for `digit` in a ten-entry table.
fn word(table: &[&'static str; 10], digit: u64) -> &'static str {
    usize::try_from(digit)
        .ok()
        .and_then(|idx| table.get(idx))
        .copied()
        .unwrap_or_default()
}

/// Spells a single group in `0..1000`. Returns an empty string for 0.
#[allow(clippy::integer_division, reason = "digit extraction")]
fn group_words(group: u64) -> String {
    let hundreds = group / 100;
    let rest = group % 100;

    let mut parts: Vec<&str> = Vec::with_capacity(3);
    parts.push(word(&HUNDREDS, hundreds));
    if (10..20).contains(&rest) {
        parts.push(word(&TEENS, rest - 10));
    } else {
        parts.push(word(&TENS, rest / 10));
        parts.push(word(&ONES, rest % 10));
    }
    parts.retain(|part| !part.is_empty());
    parts.join(AND)
}

/// Spells a non-zero amount without the currency unit.
#[allow(clippy::integer_division, reason = "magnitude extraction")]
fn sentence(amount: u64) -> String {
    let mut parts: Vec<String> = Vec::new();
    let mut remainder = amount;
    for (value, name) in MAGNITUDES {
        let count = remainder / value;
        remainder %= value;
        if count == 0 {
            continue;
        }
        let spelled = if count < GROUP {
            group_words(count)
        } else {
            sentence(count)
        };
        parts.push(format!("{spelled} {name}"));
    }
    if remainder > 0 {
        parts.push(group_words(remainder));
    }
    parts.join(AND)
}

/// Renders an amount as Persian words followed by [`UNIT`].
///
/// Zero renders as the fixed literal `صفر تومان`.
#[inline]
#[must_use]
pub fn to_words(amount: u64) -> String {
    if amount == 0 {
        return format!("{ZERO} {UNIT}");
    }
    format!("{} {UNIT}", sentence(amount))
}

/// Renders a possibly fractional or negative amount.
///
/// The absolute value is truncated toward zero before spelling. NaN and
/// infinities render as zero; values above `u64::MAX` saturate.
#[inline]
#[must_use]
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    reason = "value is finite, non-negative and already truncated; `as` saturates"
)]
pub fn to_words_lossy(amount: f64) -> String {
    if !amount.is_finite() {
        return to_words(0);
    }
    to_words(amount.abs().trunc() as u64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_is_fixed_literal() {
        assert_eq!(to_words(0), "صفر تومان");
    }

    #[test]
    fn thousands_compound() {
        assert_eq!(to_words(45_000), "چهل و پنج هزار تومان");
        assert_eq!(to_words(120_000), "صد و بیست هزار تومان");
        assert_eq!(to_words(250_000), "دویست و پنجاه هزار تومان");
    }

    #[test]
    fn millions_and_thousands_compound() {
        assert_eq!(to_words(1_890_000), "یک میلیون و هشتصد و نود هزار تومان");
        assert_eq!(to_words(1_000_001), "یک میلیون و یک تومان");
    }

    #[test]
    fn teens_are_irregular() {
        assert_eq!(to_words(10), "ده تومان");
        assert_eq!(to_words(15), "پانزده تومان");
        assert_eq!(to_words(19), "نوزده تومان");
        assert_eq!(to_words(318), "سیصد و هجده تومان");
    }

    #[test]
    fn hundreds_and_tens() {
        assert_eq!(to_words(100), "صد تومان");
        assert_eq!(to_words(101), "صد و یک تومان");
        assert_eq!(to_words(110), "صد و ده تومان");
        assert_eq!(to_words(999), "نهصد و نود و نه تومان");
        assert_eq!(to_words(70), "هفتاد تومان");
    }

    #[test]
    fn magnitude_without_lower_groups() {
        assert_eq!(to_words(1_000), "یک هزار تومان");
        assert_eq!(to_words(2_000_000_000), "دو میلیارد تومان");
    }

    #[test]
    fn skips_empty_middle_groups() {
        assert_eq!(to_words(3_000_000_005), "سه میلیارد و پنج تومان");
        assert_eq!(to_words(7_000_020_000), "هفت میلیارد و بیست هزار تومان");
    }

    #[test]
    fn billions_beyond_table_spell_recursively() {
        assert_eq!(to_words(1_000_000_000_000), "یک هزار میلیارد تومان");
        assert_eq!(
            to_words(2_500_000_000_000),
            "دو هزار و پانصد میلیارد تومان"
        );
    }

    #[test]
    fn max_value_does_not_panic() {
        let words = to_words(u64::MAX);
        assert!(words.ends_with(UNIT));
        assert!(words.contains("میلیارد"));
    }

    #[test]
    fn lossy_truncates_and_takes_absolute() {
        assert_eq!(to_words_lossy(45_000.9), "چهل و پنج هزار تومان");
        assert_eq!(to_words_lossy(-45_000.0), "چهل و پنج هزار تومان");
        assert_eq!(to_words_lossy(0.7), "صفر تومان");
    }

    #[test]
    fn lossy_non_finite_is_zero() {
        assert_eq!(to_words_lossy(f64::NAN), "صفر تومان");
        assert_eq!(to_words_lossy(f64::INFINITY), "صفر تومان");
    }
}
