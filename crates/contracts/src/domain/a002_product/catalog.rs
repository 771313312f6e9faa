//! Fixed product catalog. Entries never change at runtime.

use once_cell::sync::Lazy;
use rust_decimal::Decimal;
use serde::Serialize;

use super::Currency;

/// How VAT applies to a product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum VatRule {
    /// VAT is added on top of the net price.
    Percent { percent: Decimal },
    /// The price already contains VAT; the note is printed instead of a rate.
    Included { note: &'static str },
}

impl VatRule {
    /// Rate applied on top of net; zero when VAT is included.
    pub fn percent(&self) -> Decimal {
        match self {
            VatRule::Percent { percent } => *percent,
            VatRule::Included { .. } => Decimal::ZERO,
        }
    }

    pub fn note(&self) -> Option<&'static str> {
        match self {
            VatRule::Percent { .. } => None,
            VatRule::Included { note } => Some(note),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductLine {
    pub key: &'static str,
    pub name: &'static str,
    pub unit_price: Decimal,
    pub currency: Currency,
    pub vat: VatRule,
}

pub const VAT_INCLUDED_NOTE: &str = "TVA inclus";

static CATALOG: Lazy<Vec<ProductLine>> = Lazy::new(|| {
    vec![
        ProductLine {
            key: "gps",
            name: "Module GPS",
            unit_price: Decimal::new(4990, 2),
            currency: Currency::Eur,
            vat: VatRule::Percent {
                percent: Decimal::from(19),
            },
        },
        ProductLine {
            key: "repetor",
            name: "Repetor",
            unit_price: Decimal::new(3500, 2),
            currency: Currency::Eur,
            vat: VatRule::Percent {
                percent: Decimal::from(19),
            },
        },
        ProductLine {
            key: "wifi",
            name: "Router WI-FI",
            unit_price: Decimal::new(17000, 2),
            currency: Currency::Ron,
            vat: VatRule::Included {
                note: VAT_INCLUDED_NOTE,
            },
        },
    ]
});

/// Catalog entries in display order.
pub fn catalog() -> &'static [ProductLine] {
    &CATALOG
}

pub fn find_product(key: &str) -> Option<&'static ProductLine> {
    catalog().iter().find(|p| p.key == key)
}
