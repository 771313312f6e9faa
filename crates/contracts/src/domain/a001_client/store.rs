//! Client list persistence.
//!
//! The whole list lives in one JSON blob under [`STORAGE_KEY`]. Reads fail
//! soft: a missing, corrupted or non-array blob reads as an empty list, and
//! a single bad entry does not cost the rest.

use super::error::StoreError;
use super::Client;

pub const STORAGE_KEY: &str = "app.clients.v1";

/// Injectable persistence for the client list.
pub trait ClientStore {
    /// Current list; never fails.
    fn list(&self) -> Vec<Client>;

    /// Replace the stored list.
    fn save_all(&mut self, clients: &[Client]) -> Result<(), StoreError>;
}

/// Decode a stored blob. An unreadable or non-array blob reads as an empty
/// list; individual entries that do not decode are skipped.
pub fn decode_clients(raw: Option<&str>) -> Vec<Client> {
    let Some(raw) = raw else {
        return Vec::new();
    };
    let value: serde_json::Value = match serde_json::from_str(raw) {
        Ok(v) => v,
        Err(e) => {
            log::warn!("client store: unreadable blob, starting empty ({e})");
            return Vec::new();
        }
    };
    let serde_json::Value::Array(entries) = value else {
        log::warn!("client store: stored value is not a list, starting empty");
        return Vec::new();
    };
    entries
        .into_iter()
        .enumerate()
        .filter_map(|(i, entry)| match serde_json::from_value::<Client>(entry) {
            Ok(client) => Some(client),
            Err(e) => {
                log::warn!("client store: skipping malformed entry {i} ({e})");
                None
            }
        })
        .collect()
}

pub fn encode_clients(clients: &[Client]) -> Result<String, StoreError> {
    Ok(serde_json::to_string(clients)?)
}

/// Store holding the serialized blob in memory.
#[derive(Debug, Clone, Default)]
pub struct MemoryClientStore {
    raw: Option<String>,
}

impl MemoryClientStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an arbitrary stored value (possibly corrupted).
    pub fn with_raw(raw: impl Into<String>) -> Self {
        Self {
            raw: Some(raw.into()),
        }
    }

    pub fn with_clients(clients: &[Client]) -> Result<Self, StoreError> {
        Ok(Self {
            raw: Some(encode_clients(clients)?),
        })
    }

    pub fn raw(&self) -> Option<&str> {
        self.raw.as_deref()
    }
}

impl ClientStore for MemoryClientStore {
    fn list(&self) -> Vec<Client> {
        decode_clients(self.raw.as_deref())
    }

    fn save_all(&mut self, clients: &[Client]) -> Result<(), StoreError> {
        self.raw = Some(encode_clients(clients)?);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_client::{ClientDto, ClientId};

    fn client(id: &str, name: &str) -> Client {
        Client::new_with_id(
            ClientId::new(id),
            &ClientDto {
                company_name: name.into(),
                address: "Str. Mare 1".into(),
                cui: "RO1".into(),
                bank: "BT".into(),
                iban: "RO49AAAA1B31007593840000".into(),
            },
        )
    }

    #[test]
    fn test_empty_store_lists_nothing() {
        assert!(MemoryClientStore::new().list().is_empty());
    }

    #[test]
    fn test_save_then_list_is_exact() {
        let mut store = MemoryClientStore::new();
        let clients = vec![client("CUI_RO1", "Alfa"), client("NAME_beta_1", "Beta")];
        store.save_all(&clients).unwrap();
        assert_eq!(store.list(), clients);
    }

    #[test]
    fn test_corrupted_blob_reads_empty() {
        assert!(MemoryClientStore::with_raw("{not json").list().is_empty());
        assert!(MemoryClientStore::with_raw(r#"{"id":"x"}"#).list().is_empty());
        assert!(MemoryClientStore::with_raw("42").list().is_empty());
        assert!(MemoryClientStore::with_raw(r#"[{"companyName":"no id"}]"#)
            .list()
            .is_empty());
    }

    #[test]
    fn test_bad_entry_does_not_drop_good_ones() {
        let store = MemoryClientStore::with_raw(
            r#"[
                {"id":"CUI_RO1","companyName":"Alfa","address":"Cluj"},
                {"companyName":"fara id"},
                7,
                {"id":"CUI_RO2","companyName":"Beta","address":"Iasi"}
            ]"#,
        );
        let ids: Vec<String> = store.list().iter().map(|c| c.id.to_string()).collect();
        assert_eq!(ids, vec!["CUI_RO1", "CUI_RO2"]);
    }

    #[test]
    fn test_seeded_store_lists_its_clients() {
        let clients = vec![client("CUI_RO1", "Alfa")];
        let store = MemoryClientStore::with_clients(&clients).unwrap();
        assert_eq!(store.list(), clients);
        assert!(store.raw().is_some_and(|raw| raw.starts_with('[')));
    }

    #[test]
    fn test_reads_blob_with_missing_optional_fields() {
        let store = MemoryClientStore::with_raw(
            r#"[{"id":"CUI_RO9","companyName":"Gama","address":"Iasi"}]"#,
        );
        let list = store.list();
        assert_eq!(list.len(), 1);
        assert_eq!(list[0].cui, "");
        assert_eq!(list[0].iban, "");
    }
}
