use rust_decimal::Decimal;

use crate::core::round_half_up;

/// Format an amount with two decimals and Indian digit grouping,
/// e.g. `1234567.891` → `"12,34,567.89"`.
pub fn format_amount(amount: Decimal) -> String {
    let rounded = round_half_up(amount, 2);
    let negative = rounded < Decimal::ZERO;
    let text = rounded.abs().to_string();

    let (int_part, frac_part) = match text.split_once('.') {
        Some((i, f)) => (i, f),
        None => (text.as_str(), ""),
    };

    let mut out = String::with_capacity(text.len() + 8);
    if negative {
        out.push('-');
    }
    out.push_str(&group_indian(int_part));
    out.push('.');
    out.push_str(frac_part);
    for _ in frac_part.len()..2 {
        out.push('0');
    }
    out
}

/// Format with an explicit sign, as used for adjustments: `+50.00`, `-12.50`.
pub fn format_signed(amount: Decimal) -> String {
    let formatted = format_amount(amount);
    if formatted.starts_with('-') {
        formatted
    } else {
        format!("+{formatted}")
    }
}

/// Last three digits form one group, every two digits before that another.
fn group_indian(digits: &str) -> String {
    if digits.len() <= 3 {
        return digits.to_string();
    }
    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut groups: Vec<&str> = Vec::new();
    let mut end = head.len();
    while end > 0 {
        let start = end.saturating_sub(2);
        groups.push(&head[start..end]);
        end = start;
    }
    groups.reverse();
    format!("{},{}", groups.join(","), tail)
}
