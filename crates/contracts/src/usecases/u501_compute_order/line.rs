use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::OrderError;
use crate::domain::a002_product::{Currency, ProductLine};
use crate::shared::format::format_percent;

/// A priced order line.
///
/// `vat_note` set means the price already includes VAT: no VAT is added and
/// the note is shown instead of a rate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderLine {
    pub key: String,
    pub name: String,
    pub quantity: u32,
    pub unit_price: Decimal,
    pub currency: Currency,
    pub vat_percent: Decimal,
    pub vat_note: Option<String>,
    pub net: Decimal,
    pub vat: Decimal,
    pub gross: Decimal,
}

impl OrderLine {
    /// Price `quantity` units. Amounts outside the decimal range are reported
    /// as [`OrderError::AmountOverflow`] naming the product.
    pub fn priced(
        key: impl Into<String>,
        name: impl Into<String>,
        quantity: u32,
        unit_price: Decimal,
        currency: Currency,
        vat_percent: Decimal,
        vat_note: Option<String>,
    ) -> Result<Self, OrderError> {
        let name = name.into();
        let overflow = || OrderError::AmountOverflow(name.clone());

        let net = Decimal::from(quantity)
            .checked_mul(unit_price)
            .ok_or_else(overflow)?;
        let vat = if vat_note.is_some() {
            Decimal::ZERO
        } else {
            net.checked_mul(vat_percent)
                .and_then(|v| v.checked_div(Decimal::ONE_HUNDRED))
                .ok_or_else(overflow)?
        };
        let gross = net.checked_add(vat).ok_or_else(overflow)?;

        Ok(Self {
            key: key.into(),
            name,
            quantity,
            unit_price,
            currency,
            vat_percent,
            vat_note,
            net,
            vat,
            gross,
        })
    }

    pub fn from_product(product: &ProductLine, quantity: u32) -> Result<Self, OrderError> {
        Self::priced(
            product.key,
            product.name,
            quantity,
            product.unit_price,
            product.currency,
            product.vat.percent(),
            product.vat.note().map(str::to_string),
        )
    }

    /// VAT column text: the note when VAT is included, else the rate.
    pub fn vat_label(&self) -> String {
        match &self.vat_note {
            Some(note) => note.clone(),
            None => format_percent(self.vat_percent),
        }
    }
}
