use crate::domain::common::AggregateId;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use super::error::ClientValidationError;
use super::identity::normalize_cui;

static IBAN_RO: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^RO[A-Z0-9]{22}$").expect("static IBAN pattern"));

// ============================================================================
// ID Type
// ============================================================================
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ClientId(pub String);

impl ClientId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn value(&self) -> &str {
        &self.0
    }
}

impl AggregateId for ClientId {
    fn as_string(&self) -> String {
        self.0.clone()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err("Empty client id".to_string());
        }
        Ok(Self(trimmed.to_string()))
    }
}

impl std::fmt::Display for ClientId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

// ============================================================================
// Aggregate Root
// ============================================================================
/// A saved client. Optional fields are empty strings when absent, which is
/// also how they appear in the persisted blob.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Client {
    pub id: ClientId,

    #[serde(rename = "companyName", default)]
    pub company_name: String,
    #[serde(default)]
    pub address: String,

    // Tax identifier (CUI)
    #[serde(default)]
    pub cui: String,
    #[serde(default)]
    pub bank: String,
    #[serde(default)]
    pub iban: String,
}

impl Client {
    /// Build a record from an already normalized payload.
    pub fn new_with_id(id: ClientId, dto: &ClientDto) -> Self {
        Self {
            id,
            company_name: dto.company_name.clone(),
            address: dto.address.clone(),
            cui: dto.cui.clone(),
            bank: dto.bank.clone(),
            iban: dto.iban.clone(),
        }
    }

    /// Replace every field except the id.
    pub fn update(&mut self, dto: &ClientDto) {
        self.company_name = dto.company_name.clone();
        self.address = dto.address.clone();
        self.cui = dto.cui.clone();
        self.bank = dto.bank.clone();
        self.iban = dto.iban.clone();
    }

    pub fn to_dto(&self) -> ClientDto {
        ClientDto {
            company_name: self.company_name.clone(),
            address: self.address.clone(),
            cui: self.cui.clone(),
            bank: self.bank.clone(),
            iban: self.iban.clone(),
        }
    }

    /// Text shown in the client picker.
    pub fn picker_label(&self) -> String {
        let name = if self.company_name.is_empty() {
            "(fără nume)"
        } else {
            self.company_name.as_str()
        };
        if self.cui.is_empty() {
            name.to_string()
        } else {
            format!("{} • {}", name, self.cui)
        }
    }
}

// ============================================================================
// DTO
// ============================================================================
/// Client payload as typed into the form (no identifier).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct ClientDto {
    #[serde(rename = "companyName", default)]
    pub company_name: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub cui: String,
    #[serde(default)]
    pub bank: String,
    #[serde(default)]
    pub iban: String,
}

/// Editable client form fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClientField {
    CompanyName,
    Address,
    Cui,
    Bank,
    Iban,
}

impl ClientDto {
    pub fn set(&mut self, field: ClientField, value: String) {
        match field {
            ClientField::CompanyName => self.company_name = value,
            ClientField::Address => self.address = value,
            ClientField::Cui => self.cui = value,
            ClientField::Bank => self.bank = value,
            ClientField::Iban => self.iban = value,
        }
    }

    pub fn get(&self, field: ClientField) -> &str {
        match field {
            ClientField::CompanyName => &self.company_name,
            ClientField::Address => &self.address,
            ClientField::Cui => &self.cui,
            ClientField::Bank => &self.bank,
            ClientField::Iban => &self.iban,
        }
    }

    /// Trimmed copy; CUI and IBAN are uppercased with all whitespace removed.
    pub fn normalized(&self) -> Self {
        Self {
            company_name: self.company_name.trim().to_string(),
            address: self.address.trim().to_string(),
            cui: normalize_cui(&self.cui),
            bank: self.bank.trim().to_string(),
            iban: normalize_iban(&self.iban),
        }
    }

    /// Checks a normalized payload. The first failing rule is reported.
    pub fn validate(&self) -> Result<(), ClientValidationError> {
        if self.company_name.trim().is_empty() {
            return Err(ClientValidationError::MissingCompanyName);
        }
        if self.address.trim().is_empty() {
            return Err(ClientValidationError::MissingAddress);
        }
        if !self.iban.is_empty() && !is_valid_iban(&self.iban) {
            return Err(ClientValidationError::InvalidIban);
        }
        Ok(())
    }
}

pub fn normalize_iban(raw: &str) -> String {
    raw.chars()
        .filter(|c| !c.is_whitespace())
        .collect::<String>()
        .to_uppercase()
}

/// Coarse format check only (`RO` + 22 alphanumerics), no checksum.
pub fn is_valid_iban(iban: &str) -> bool {
    IBAN_RO.is_match(iban)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dto(name: &str, address: &str, iban: &str) -> ClientDto {
        ClientDto {
            company_name: name.into(),
            address: address.into(),
            iban: iban.into(),
            ..Default::default()
        }
    }

    #[test]
    fn test_iban_format() {
        assert!(is_valid_iban("RO49AAAA1B31007593840000"));
        assert!(!is_valid_iban("RO1234"));
        assert!(!is_valid_iban("FR7630006000011234567890189"));
        assert!(!is_valid_iban("ro49aaaa1b31007593840000"));
    }

    #[test]
    fn test_normalized_strips_and_uppercases() {
        let raw = ClientDto {
            company_name: "  SC Client SRL ".into(),
            address: " Cluj, Str. Lunga 1 ".into(),
            cui: " ro 123 456 ".into(),
            bank: " Banca Transilvania ".into(),
            iban: "ro49 aaaa 1b31 0075 9384 0000".into(),
        };
        let n = raw.normalized();
        assert_eq!(n.company_name, "SC Client SRL");
        assert_eq!(n.address, "Cluj, Str. Lunga 1");
        assert_eq!(n.cui, "RO123456");
        assert_eq!(n.bank, "Banca Transilvania");
        assert_eq!(n.iban, "RO49AAAA1B31007593840000");
        assert!(n.validate().is_ok());
    }

    #[test]
    fn test_validate_reports_first_failure() {
        assert_eq!(
            dto("", "", "").validate(),
            Err(ClientValidationError::MissingCompanyName)
        );
        assert_eq!(
            dto("Firma", "  ", "").validate(),
            Err(ClientValidationError::MissingAddress)
        );
        assert_eq!(
            dto("Firma", "Adresa", "RO1234").validate(),
            Err(ClientValidationError::InvalidIban)
        );
        assert!(dto("Firma", "Adresa", "").validate().is_ok());
    }

    #[test]
    fn test_picker_label() {
        let mut c = Client::new_with_id(ClientId::new("CUI_RO1"), &dto("Alfa", "X", ""));
        assert_eq!(c.picker_label(), "Alfa");
        c.cui = "RO1".into();
        assert_eq!(c.picker_label(), "Alfa • RO1");
        c.company_name.clear();
        assert_eq!(c.picker_label(), "(fără nume) • RO1");
    }

    #[test]
    fn test_serialized_field_names() {
        let c = Client::new_with_id(ClientId::new("CUI_RO1"), &dto("Alfa", "X", ""));
        let v = serde_json::to_value(&c).unwrap();
        assert_eq!(v["id"], "CUI_RO1");
        assert_eq!(v["companyName"], "Alfa");
        assert_eq!(v["iban"], "");
    }
}
