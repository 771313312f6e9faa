use contracts::domain::a001_client::store::{decode_clients, encode_clients, STORAGE_KEY};
use contracts::domain::a001_client::{Client, ClientStore, StoreError};

fn storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

/// Client list kept in the browser's localStorage under one key.
///
/// Reads go through `decode_clients`, so a missing or corrupted entry shows
/// up as an empty list instead of an error.
pub struct LocalStorageClientStore {
    key: &'static str,
}

impl LocalStorageClientStore {
    pub fn new() -> Self {
        Self { key: STORAGE_KEY }
    }
}

impl Default for LocalStorageClientStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ClientStore for LocalStorageClientStore {
    fn list(&self) -> Vec<Client> {
        let raw = storage().and_then(|s| s.get_item(self.key).ok().flatten());
        decode_clients(raw.as_deref())
    }

    fn save_all(&mut self, clients: &[Client]) -> Result<(), StoreError> {
        let raw = encode_clients(clients)?;
        let storage =
            storage().ok_or_else(|| StoreError::Unavailable("localStorage".to_string()))?;
        storage
            .set_item(self.key, &raw)
            .map_err(|e| StoreError::Write(format!("{:?}", e)))?;
        log::debug!("Stored {} client(s) under {}", clients.len(), self.key);
        Ok(())
    }
}
