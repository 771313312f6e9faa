//! Advance payment split shown on the pro-forma. Derived on every render,
//! never stored.

use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{CurrencyTotal, OrderError};
use crate::domain::a002_product::Currency;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdvanceLine {
    pub currency: Currency,
    pub gross: Decimal,
    pub advance: Decimal,
    pub remainder: Decimal,
}

/// Parse the advance percent field. Blank means 0; accepts `,` or `.` as
/// decimal separator; the value is clamped to [0, 100].
pub fn parse_advance_percent(raw: &str) -> Result<Decimal, OrderError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(Decimal::ZERO);
    }
    let value = Decimal::from_str(&trimmed.replace(',', "."))
        .map_err(|_| OrderError::InvalidAdvancePercent(trimmed.to_string()))?;
    Ok(clamp_percent(value))
}

pub fn clamp_percent(value: Decimal) -> Decimal {
    value.max(Decimal::ZERO).min(Decimal::ONE_HUNDRED)
}

pub fn compute_advance(
    totals: &[CurrencyTotal],
    percent: Decimal,
) -> Result<Vec<AdvanceLine>, OrderError> {
    let percent = clamp_percent(percent);
    totals
        .iter()
        .map(|t| {
            let overflow = || OrderError::AmountOverflow(format!("avans {}", t.currency));
            let advance = t
                .gross
                .checked_mul(percent)
                .and_then(|v| v.checked_div(Decimal::ONE_HUNDRED))
                .ok_or_else(overflow)?;
            let remainder = t.gross.checked_sub(advance).ok_or_else(overflow)?;
            Ok(AdvanceLine {
                currency: t.currency,
                gross: t.gross,
                advance,
                remainder,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn eur_total(gross: Decimal) -> CurrencyTotal {
        CurrencyTotal {
            currency: Currency::Eur,
            net: Decimal::ZERO,
            vat: Decimal::ZERO,
            gross,
        }
    }

    #[test]
    fn test_thirty_percent() {
        let lines = compute_advance(&[eur_total(Decimal::new(118762, 3))], Decimal::from(30)).unwrap();
        assert_eq!(lines[0].advance, Decimal::new(356286, 4));
        assert_eq!(lines[0].remainder, Decimal::new(831334, 4));
    }

    #[test]
    fn test_percent_is_clamped() {
        let gross = Decimal::from(200);
        let over = compute_advance(&[eur_total(gross)], Decimal::from(150)).unwrap();
        assert_eq!(over[0].advance, gross);
        assert_eq!(over[0].remainder, Decimal::ZERO);

        let under = compute_advance(&[eur_total(gross)], Decimal::from(-5)).unwrap();
        assert_eq!(under[0].advance, Decimal::ZERO);
        assert_eq!(under[0].remainder, gross);
    }

    #[test]
    fn test_advance_on_huge_total_is_an_error() {
        let err = compute_advance(&[eur_total(Decimal::MAX)], Decimal::from(50)).unwrap_err();
        assert_eq!(err, OrderError::AmountOverflow("avans EUR".into()));
    }

    #[test]
    fn test_parse_advance_percent() {
        assert_eq!(parse_advance_percent(""), Ok(Decimal::ZERO));
        assert_eq!(parse_advance_percent("30"), Ok(Decimal::from(30)));
        assert_eq!(parse_advance_percent("12,5"), Ok(Decimal::new(125, 1)));
        assert_eq!(parse_advance_percent("250"), Ok(Decimal::ONE_HUNDRED));
        assert!(parse_advance_percent("treizeci").is_err());
    }
}
