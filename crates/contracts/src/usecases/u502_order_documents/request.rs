//! JSON contract between the form and the document endpoint.
//!
//! ```json
//! {
//!   "client":   { "companyName": "...", "address": "...", "cui": "", "bank": "", "iban": "" },
//!   "delivery": { "address": "...", "contactName": "...", "email": "...", "phone": "..." },
//!   "advancePercent": "30",
//!   "items": [ { "name": "Module GPS", "qty": 2, "price": "49.90", "currency": "EUR", "vatPercent": "19" } ]
//! }
//! ```
//! Prices and percents are accepted as JSON numbers or strings.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::DocumentRequestError;
use crate::domain::a001_client::ClientDto;
use crate::domain::a002_product::Currency;
use crate::usecases::u501_compute_order::{OrderError, OrderLine, OrderSummary};

/// Delivery address and contact person.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct DeliveryInfo {
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub contact_name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeliveryField {
    Address,
    ContactName,
    Email,
    Phone,
}

impl DeliveryInfo {
    pub fn set(&mut self, field: DeliveryField, value: String) {
        match field {
            DeliveryField::Address => self.address = value,
            DeliveryField::ContactName => self.contact_name = value,
            DeliveryField::Email => self.email = value,
            DeliveryField::Phone => self.phone = value,
        }
    }

    pub fn get(&self, field: DeliveryField) -> &str {
        match field {
            DeliveryField::Address => &self.address,
            DeliveryField::ContactName => &self.contact_name,
            DeliveryField::Email => &self.email,
            DeliveryField::Phone => &self.phone,
        }
    }

    pub fn trimmed(&self) -> Self {
        Self {
            address: self.address.trim().to_string(),
            contact_name: self.contact_name.trim().to_string(),
            email: self.email.trim().to_string(),
            phone: self.phone.trim().to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItemDto {
    pub name: String,
    pub qty: u32,
    pub price: Decimal,
    pub currency: Currency,
    pub vat_percent: Decimal,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vat_note: Option<String>,
}

impl From<&OrderLine> for OrderItemDto {
    fn from(line: &OrderLine) -> Self {
        Self {
            name: line.name.clone(),
            qty: line.quantity,
            price: line.unit_price,
            currency: line.currency,
            vat_percent: line.vat_percent,
            vat_note: line.vat_note.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentRequest {
    pub client: ClientDto,
    #[serde(default)]
    pub delivery: DeliveryInfo,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub advance_percent: Option<Decimal>,
    pub items: Vec<OrderItemDto>,
}

impl DocumentRequest {
    pub fn new(
        client: &ClientDto,
        delivery: &DeliveryInfo,
        advance_percent: Option<Decimal>,
        summary: &OrderSummary,
    ) -> Self {
        Self {
            client: client.normalized(),
            delivery: delivery.trimmed(),
            advance_percent,
            items: summary.lines.iter().map(OrderItemDto::from).collect(),
        }
    }

    pub fn from_json(raw: &str) -> Result<Self, DocumentRequestError> {
        serde_json::from_str(raw).map_err(|e| DocumentRequestError::Malformed(e.to_string()))
    }

    /// Client rules plus per-item sanity checks. Items are numbered from 1.
    pub fn validate(&self) -> Result<(), DocumentRequestError> {
        self.client.normalized().validate()?;
        for (i, item) in self.items.iter().enumerate() {
            let index = i + 1;
            if item.name.trim().is_empty() {
                return Err(DocumentRequestError::InvalidItem {
                    index,
                    reason: "denumire lipsă".into(),
                });
            }
            if item.price.is_sign_negative() {
                return Err(DocumentRequestError::InvalidItem {
                    index,
                    reason: "preț negativ".into(),
                });
            }
            if item.vat_percent < Decimal::ZERO || item.vat_percent > Decimal::ONE_HUNDRED {
                return Err(DocumentRequestError::InvalidItem {
                    index,
                    reason: "TVA trebuie să fie între 0 și 100".into(),
                });
            }
        }
        Ok(())
    }

    /// Priced lines, in request order.
    pub fn to_lines(&self) -> Result<Vec<OrderLine>, OrderError> {
        self.items
            .iter()
            .map(|item| {
                OrderLine::priced(
                    item.name.trim().to_lowercase(),
                    item.name.trim(),
                    item.qty,
                    item.price,
                    item.currency,
                    item.vat_percent,
                    item.vat_note.clone(),
                )
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "client": {"companyName": "Alfa SRL", "address": "Cluj", "cui": "RO1"},
        "delivery": {"address": "Depozit 3", "contactName": "Ion Pop", "email": "ion@alfa.ro", "phone": "0740000000"},
        "advancePercent": 30,
        "items": [
            {"name": "Module GPS", "qty": 2, "price": 49.90, "currency": "EUR", "vatPercent": 19},
            {"name": "Router WI-FI", "qty": 1, "price": "170", "currency": "RON", "vatPercent": 0, "vatNote": "TVA inclus"}
        ]
    }"#;

    #[test]
    fn test_parses_numbers_and_strings() {
        let req = DocumentRequest::from_json(SAMPLE).unwrap();
        assert_eq!(req.items.len(), 2);
        assert_eq!(req.items[0].price, Decimal::new(4990, 2));
        assert_eq!(req.items[1].price, Decimal::from(170));
        assert_eq!(req.advance_percent, Some(Decimal::from(30)));
        assert_eq!(req.client.bank, "");
        assert!(req.validate().is_ok());

        let lines = req.to_lines().unwrap();
        assert_eq!(lines[0].gross, Decimal::new(118762, 3));
        assert_eq!(lines[1].vat, Decimal::ZERO);
    }

    #[test]
    fn test_malformed_json_is_reported() {
        assert!(matches!(
            DocumentRequest::from_json(r#"{"client": {}, "items": [{"name": 1}]}"#),
            Err(DocumentRequestError::Malformed(_))
        ));
        assert!(matches!(
            DocumentRequest::from_json("items=3"),
            Err(DocumentRequestError::Malformed(_))
        ));
    }

    #[test]
    fn test_item_checks() {
        let mut req = DocumentRequest::from_json(SAMPLE).unwrap();
        req.items[1].vat_percent = Decimal::from(120);
        assert_eq!(
            req.validate(),
            Err(DocumentRequestError::InvalidItem {
                index: 2,
                reason: "TVA trebuie să fie între 0 și 100".into()
            })
        );

        let mut req = DocumentRequest::from_json(SAMPLE).unwrap();
        req.client.address = " ".into();
        assert!(matches!(req.validate(), Err(DocumentRequestError::Client(_))));
    }
}
