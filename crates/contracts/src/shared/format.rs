//! Number formatting for documents and the form (Romanian conventions:
//! `.` groups thousands, `,` separates decimals).

use rust_decimal::{Decimal, RoundingStrategy};

/// Format a decimal with thousands grouping and a fixed number of decimals.
///
/// # Examples
///
/// ```
/// use contracts::shared::format::format_decimal;
/// use rust_decimal::Decimal;
/// assert_eq!(format_decimal(Decimal::new(1234567, 3), 2), "1.234,57");
/// ```
pub fn format_decimal(value: Decimal, decimals: u32) -> String {
    let rounded = value.round_dp_with_strategy(decimals, RoundingStrategy::MidpointAwayFromZero);
    let negative = rounded.is_sign_negative() && !rounded.is_zero();
    let text = format!("{:.*}", decimals as usize, rounded.abs());

    let (integer_part, decimal_part) = match text.split_once('.') {
        Some((i, d)) => (i, Some(d)),
        None => (text.as_str(), None),
    };

    let mut grouped = String::new();
    for (i, c) in integer_part.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(c);
    }
    let mut result: String = grouped.chars().rev().collect();
    if negative {
        result.insert(0, '-');
    }
    if let Some(d) = decimal_part {
        result.push(',');
        result.push_str(d);
    }
    result
}

/// Money amount with 2 decimals.
pub fn format_money(value: Decimal) -> String {
    format_decimal(value, 2)
}

/// Percent without trailing zeros, e.g. `19%` or `7,5%`.
pub fn format_percent(value: Decimal) -> String {
    format!("{}%", value.normalize().to_string().replace('.', ","))
}
