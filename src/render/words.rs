//! Amount in words, Indian numbering system (thousand, lakh, crore).

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

use crate::core::round_half_up;

/// Currency names used when spelling out an amount.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CurrencyWords {
    /// Printed once before the spelled amount, e.g. "Indian Rupee".
    pub prefix: &'static str,
    pub unit: &'static str,
    pub unit_plural: &'static str,
    pub fraction: &'static str,
    pub fraction_plural: &'static str,
}

impl CurrencyWords {
    pub const RUPEE: Self = Self {
        prefix: "Indian Rupee",
        unit: "Rupee",
        unit_plural: "Rupees",
        fraction: "Paisa",
        fraction_plural: "Paise",
    };
}

const ONES: [&str; 20] = [
    "Zero", "One", "Two", "Three", "Four", "Five", "Six", "Seven", "Eight", "Nine", "Ten",
    "Eleven", "Twelve", "Thirteen", "Fourteen", "Fifteen", "Sixteen", "Seventeen", "Eighteen",
    "Nineteen",
];

const TENS: [&str; 10] = [
    "", "", "Twenty", "Thirty", "Forty", "Fifty", "Sixty", "Seventy", "Eighty", "Ninety",
];

/// Spell out an amount in rupees and paise.
///
/// ```
/// use billsum::render::amount_in_words;
/// use rust_decimal_macros::dec;
///
/// assert_eq!(
///     amount_in_words(dec!(2124)),
///     "Indian Rupee Two Thousand One Hundred Twenty Four Rupees Only"
/// );
/// ```
pub fn amount_in_words(amount: Decimal) -> String {
    amount_in_words_with(amount, &CurrencyWords::RUPEE)
}

/// Spell out an amount using the given currency names. The amount is
/// rounded half-up to two places first.
pub fn amount_in_words_with(amount: Decimal, currency: &CurrencyWords) -> String {
    let rounded = round_half_up(amount, 2);
    let negative = rounded < Decimal::ZERO;
    let abs = rounded.abs();
    let whole = abs.trunc().to_u128().unwrap_or_default();
    let fraction = ((abs - abs.trunc()) * Decimal::ONE_HUNDRED)
        .to_u128()
        .unwrap_or_default();

    let mut out = String::from(currency.prefix);
    if negative {
        out.push_str(" Minus");
    }
    out.push(' ');
    out.push_str(&spell(whole));
    out.push(' ');
    out.push_str(if whole == 1 {
        currency.unit
    } else {
        currency.unit_plural
    });

    if fraction > 0 {
        out.push_str(" And ");
        out.push_str(&spell(fraction));
        out.push(' ');
        out.push_str(if fraction == 1 {
            currency.fraction
        } else {
            currency.fraction_plural
        });
    }

    out.push_str(" Only");
    out
}

fn spell(n: u128) -> String {
    if n == 0 {
        return ONES[0].to_string();
    }

    let mut parts: Vec<String> = Vec::new();
    let crore = n / 10_000_000;
    if crore > 0 {
        parts.push(format!("{} Crore", spell(crore)));
    }
    let mut rest = n % 10_000_000;

    let scales = [(100_000, "Lakh"), (1_000, "Thousand"), (100, "Hundred")];
    for (size, name) in scales {
        let count = rest / size;
        if count > 0 {
            parts.push(format!("{} {name}", below_hundred(count)));
        }
        rest %= size;
    }
    if rest > 0 {
        parts.push(below_hundred(rest));
    }

    parts.join(" ")
}

fn below_hundred(n: u128) -> String {
    let n = n as usize;
    if n < 20 {
        ONES[n].to_string()
    } else if n % 10 == 0 {
        TENS[n / 10].to_string()
    } else {
        format!("{} {}", TENS[n / 10], ONES[n % 10])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn spells_small_numbers() {
        assert_eq!(spell(0), "Zero");
        assert_eq!(spell(7), "Seven");
        assert_eq!(spell(19), "Nineteen");
        assert_eq!(spell(40), "Forty");
        assert_eq!(spell(99), "Ninety Nine");
        assert_eq!(spell(101), "One Hundred One");
    }

    #[test]
    fn spells_indian_scales() {
        assert_eq!(spell(25_000), "Twenty Five Thousand");
        assert_eq!(spell(1_00_000), "One Lakh");
        assert_eq!(spell(12_34_567), "Twelve Lakh Thirty Four Thousand Five Hundred Sixty Seven");
        assert_eq!(spell(1_00_00_000), "One Crore");
        assert_eq!(spell(100_00_00_000), "One Hundred Crore");
    }

    #[test]
    fn rupees_and_paise() {
        assert_eq!(
            amount_in_words(dec!(1234.56)),
            "Indian Rupee One Thousand Two Hundred Thirty Four Rupees And Fifty Six Paise Only"
        );
    }

    #[test]
    fn singular_forms() {
        assert_eq!(amount_in_words(dec!(1.01)), "Indian Rupee One Rupee And One Paisa Only");
    }

    #[test]
    fn zero_and_negative() {
        assert_eq!(amount_in_words(dec!(0)), "Indian Rupee Zero Rupees Only");
        assert_eq!(amount_in_words(dec!(-5)), "Indian Rupee Minus Five Rupees Only");
    }

    #[test]
    fn rounds_before_spelling() {
        assert_eq!(
            amount_in_words(dec!(274.575)),
            "Indian Rupee Two Hundred Seventy Four Rupees And Fifty Eight Paise Only"
        );
    }
}
