//! Pricing of an order: catalog + quantities -> lines and per-currency totals.

pub mod advance;
pub mod error;
pub mod line;
pub mod totals;

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::domain::a002_product::ProductLine;

pub use advance::{compute_advance, parse_advance_percent, AdvanceLine};
pub use error::OrderError;
pub use line::OrderLine;
pub use totals::{fold_totals, CurrencyTotal};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderSummary {
    pub lines: Vec<OrderLine>,
    pub totals: Vec<CurrencyTotal>,
}

/// Parse a quantity field. Blank means 0.
pub fn parse_quantity(product: &str, raw: &str) -> Result<u32, OrderError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(0);
    }
    trimmed
        .parse::<u32>()
        .map_err(|_| OrderError::InvalidQuantity {
            product: product.to_string(),
            value: trimmed.to_string(),
        })
}

/// Price every catalog entry with its quantity (missing keys count as 0).
/// Lines keep catalog order; zero-quantity lines are dropped.
pub fn compute_order(
    catalog: &[ProductLine],
    quantities: &HashMap<String, u32>,
) -> Result<OrderSummary, OrderError> {
    let lines = catalog
        .iter()
        .map(|p| OrderLine::from_product(p, quantities.get(p.key).copied().unwrap_or(0)))
        .collect::<Result<Vec<_>, _>>()?;
    summarize(lines)
}

/// Drop zero-quantity lines and fold the rest into currency totals.
pub fn summarize(lines: Vec<OrderLine>) -> Result<OrderSummary, OrderError> {
    let lines: Vec<OrderLine> = lines.into_iter().filter(|l| l.quantity > 0).collect();
    if lines.is_empty() {
        return Err(OrderError::EmptyOrder);
    }
    let totals = fold_totals(&lines)?;
    Ok(OrderSummary { lines, totals })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a002_product::{catalog, Currency};
    use rust_decimal::Decimal;

    fn quantities(pairs: &[(&str, u32)]) -> HashMap<String, u32> {
        pairs.iter().map(|(k, v)| (k.to_string(), *v)).collect()
    }

    #[test]
    fn test_reference_order() {
        let summary =
            compute_order(catalog(), &quantities(&[("gps", 2), ("repetor", 0), ("wifi", 1)]))
                .unwrap();

        assert_eq!(summary.lines.len(), 2);
        let gps = &summary.lines[0];
        assert_eq!(gps.key, "gps");
        assert_eq!(gps.net, Decimal::new(9980, 2));
        assert_eq!(gps.vat, Decimal::new(18962, 3));
        assert_eq!(gps.gross, Decimal::new(118762, 3));

        let wifi = &summary.lines[1];
        assert_eq!(wifi.key, "wifi");
        assert_eq!(wifi.net, Decimal::from(170));
        assert_eq!(wifi.vat, Decimal::ZERO);
        assert_eq!(wifi.gross, Decimal::from(170));

        assert_eq!(
            summary.totals,
            vec![
                CurrencyTotal {
                    currency: Currency::Eur,
                    net: Decimal::new(9980, 2),
                    vat: Decimal::new(18962, 3),
                    gross: Decimal::new(118762, 3),
                },
                CurrencyTotal {
                    currency: Currency::Ron,
                    net: Decimal::from(170),
                    vat: Decimal::ZERO,
                    gross: Decimal::from(170),
                },
            ]
        );
    }

    #[test]
    fn test_same_currency_lines_are_summed() {
        let summary =
            compute_order(catalog(), &quantities(&[("gps", 1), ("repetor", 2)])).unwrap();
        assert_eq!(summary.totals.len(), 1);
        let eur = &summary.totals[0];
        // 49.90 + 70.00 net, 19% VAT
        assert_eq!(eur.net, Decimal::new(11990, 2));
        assert_eq!(eur.vat, Decimal::new(227810, 4));
        assert_eq!(eur.gross, Decimal::new(1426810, 4));
    }

    #[test]
    fn test_all_zero_is_empty_order() {
        let err = compute_order(catalog(), &quantities(&[("gps", 0), ("wifi", 0)])).unwrap_err();
        assert_eq!(err, OrderError::EmptyOrder);
        assert_eq!(
            compute_order(catalog(), &HashMap::new()).unwrap_err(),
            OrderError::EmptyOrder
        );
    }

    #[test]
    fn test_unknown_keys_are_ignored() {
        let summary = compute_order(catalog(), &quantities(&[("modem", 4), ("wifi", 2)])).unwrap();
        assert_eq!(summary.lines.len(), 1);
        assert_eq!(summary.lines[0].gross, Decimal::from(340));
    }

    #[test]
    fn test_parse_quantity() {
        assert_eq!(parse_quantity("GPS", ""), Ok(0));
        assert_eq!(parse_quantity("GPS", " 3 "), Ok(3));
        assert!(matches!(
            parse_quantity("GPS", "-1"),
            Err(OrderError::InvalidQuantity { .. })
        ));
        assert!(parse_quantity("GPS", "1.5").is_err());
        assert!(parse_quantity("GPS", "abc").is_err());
    }
}
