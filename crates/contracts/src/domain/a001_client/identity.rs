//! Client identifier derivation.
//!
//! A non-empty tax id (CUI) always maps to the same identifier, which is what
//! lets a "new" client merge into an existing record with the same CUI. Clients
//! without a CUI get a time-based identifier and never collide.

use chrono::{DateTime, Utc};

use super::ClientId;

pub const CUI_PREFIX: &str = "CUI_";
pub const NAME_PREFIX: &str = "NAME_";

/// Trim, uppercase and drop all whitespace.
pub fn normalize_cui(raw: &str) -> String {
    raw.split_whitespace().collect::<String>().to_uppercase()
}

/// Trim, lowercase and join whitespace-separated words with `_`.
pub fn normalize_name(raw: &str) -> String {
    let joined = raw
        .split_whitespace()
        .map(|w| w.to_lowercase())
        .collect::<Vec<_>>()
        .join("_");
    if joined.is_empty() {
        "client".to_string()
    } else {
        joined
    }
}

pub fn derive_client_id(cui: &str, name: &str, now: DateTime<Utc>) -> ClientId {
    let cui = normalize_cui(cui);
    if !cui.is_empty() {
        return ClientId(format!("{}{}", CUI_PREFIX, cui));
    }
    ClientId(format!(
        "{}{}_{}",
        NAME_PREFIX,
        normalize_name(name),
        now.timestamp_millis()
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(millis: i64) -> DateTime<Utc> {
        Utc.timestamp_millis_opt(millis).unwrap()
    }

    #[test]
    fn test_same_cui_same_id_regardless_of_name() {
        let a = derive_client_id("ro123456", "Alfa SRL", at(1));
        let b = derive_client_id(" RO 123 456 ", "Beta SA", at(2));
        assert_eq!(a, b);
        assert_eq!(a.value(), "CUI_RO123456");
    }

    #[test]
    fn test_name_based_id_uses_timestamp() {
        let id = derive_client_id("  ", "  SC Client   Nou SRL ", at(1_700_000_000_123));
        assert_eq!(id.value(), "NAME_sc_client_nou_srl_1700000000123");
    }

    #[test]
    fn test_name_based_ids_differ_per_save() {
        let a = derive_client_id("", "Alfa", at(10));
        let b = derive_client_id("", "Alfa", at(11));
        assert_ne!(a, b);
    }

    #[test]
    fn test_empty_name_falls_back() {
        let id = derive_client_id("", "", at(5));
        assert_eq!(id.value(), "NAME_client_5");
    }
}
