use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{OrderError, OrderLine};
use crate::domain::a002_product::Currency;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrencyTotal {
    pub currency: Currency,
    pub net: Decimal,
    pub vat: Decimal,
    pub gross: Decimal,
}

impl CurrencyTotal {
    fn empty(currency: Currency) -> Self {
        Self {
            currency,
            net: Decimal::ZERO,
            vat: Decimal::ZERO,
            gross: Decimal::ZERO,
        }
    }
}

fn add(a: Decimal, b: Decimal, currency: Currency) -> Result<Decimal, OrderError> {
    a.checked_add(b)
        .ok_or_else(|| OrderError::AmountOverflow(format!("total {}", currency)))
}

/// Sum lines per currency. Output follows [`Currency`] declaration order.
pub fn fold_totals(lines: &[OrderLine]) -> Result<Vec<CurrencyTotal>, OrderError> {
    let mut acc: BTreeMap<Currency, CurrencyTotal> = BTreeMap::new();
    for line in lines {
        let total = acc
            .entry(line.currency)
            .or_insert_with(|| CurrencyTotal::empty(line.currency));
        total.net = add(total.net, line.net, line.currency)?;
        total.vat = add(total.vat, line.vat, line.currency)?;
        total.gross = add(total.gross, line.gross, line.currency)?;
    }
    Ok(acc.into_values().collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(name: &str, price: Decimal, currency: Currency) -> OrderLine {
        OrderLine::priced(name, name, 1, price, currency, Decimal::ZERO, Some("TVA inclus".into()))
            .unwrap()
    }

    #[test]
    fn test_totals_follow_currency_order() {
        let totals = fold_totals(&[
            line("a", Decimal::from(170), Currency::Ron),
            line("b", Decimal::from(10), Currency::Eur),
            line("c", Decimal::from(5), Currency::Ron),
        ])
        .unwrap();
        assert_eq!(totals.len(), 2);
        assert_eq!(totals[0].currency, Currency::Eur);
        assert_eq!(totals[1].gross, Decimal::from(175));
    }

    #[test]
    fn test_sum_past_decimal_range_is_an_error() {
        let err = fold_totals(&[
            line("a", Decimal::MAX, Currency::Eur),
            line("b", Decimal::ONE, Currency::Eur),
        ])
        .unwrap_err();
        assert_eq!(err, OrderError::AmountOverflow("total EUR".into()));
    }
}
