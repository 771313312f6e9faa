use chrono::{DateTime, Utc};

use super::error::ClientError;
use super::identity::derive_client_id;
use super::store::ClientStore;
use super::{Client, ClientDto, ClientId};

/// Which branch of the upsert a save took.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveKind {
    /// The selected record was updated in place.
    Updated,
    /// The derived id matched an existing record, which was overwritten.
    Merged,
    /// A new record was appended.
    Created,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SaveOutcome {
    pub id: ClientId,
    pub kind: SaveKind,
}

impl SaveOutcome {
    pub fn message(&self) -> &'static str {
        match self.kind {
            SaveKind::Updated => "Client actualizat.",
            SaveKind::Merged => "Client actualizat (CUI existent).",
            SaveKind::Created => "Client salvat.",
        }
    }
}

/// Validate and upsert a client.
///
/// An existing selection is updated without re-deriving its id, so editing
/// the CUI of a selected record keeps the record's identity.
pub fn save_client<S: ClientStore + ?Sized>(
    store: &mut S,
    selected: Option<&ClientId>,
    dto: &ClientDto,
    now: DateTime<Utc>,
) -> Result<SaveOutcome, ClientError> {
    let data = dto.normalized();
    data.validate()?;

    let mut list = store.list();

    if let Some(selected) = selected {
        if let Some(existing) = list.iter_mut().find(|c| &c.id == selected) {
            existing.update(&data);
            store.save_all(&list)?;
            log::debug!("client {} updated in place", selected);
            return Ok(SaveOutcome {
                id: selected.clone(),
                kind: SaveKind::Updated,
            });
        }
    }

    let id = derive_client_id(&data.cui, &data.company_name, now);
    let kind = match list.iter_mut().find(|c| c.id == id) {
        Some(existing) => {
            existing.update(&data);
            SaveKind::Merged
        }
        None => {
            list.push(Client::new_with_id(id.clone(), &data));
            SaveKind::Created
        }
    };
    store.save_all(&list)?;
    log::debug!("client {} saved ({:?})", id, kind);
    Ok(SaveOutcome { id, kind })
}

pub fn load_client<S: ClientStore + ?Sized>(
    store: &S,
    selected: Option<&ClientId>,
) -> Result<Client, ClientError> {
    let selected = selected.ok_or(ClientError::NoSelection)?;
    store
        .list()
        .into_iter()
        .find(|c| &c.id == selected)
        .ok_or_else(|| ClientError::NotFound(selected.clone()))
}

/// Remove the selected client. Nothing is written when the selection is
/// missing or unknown.
pub fn delete_client<S: ClientStore + ?Sized>(
    store: &mut S,
    selected: Option<&ClientId>,
) -> Result<ClientId, ClientError> {
    let selected = selected.ok_or(ClientError::NoSelection)?;
    let mut list = store.list();
    let before = list.len();
    list.retain(|c| &c.id != selected);
    if list.len() == before {
        return Err(ClientError::NotFound(selected.clone()));
    }
    store.save_all(&list)?;
    Ok(selected.clone())
}

/// Clients ordered for the picker: by company name, case-insensitive.
pub fn list_for_picker<S: ClientStore + ?Sized>(store: &S) -> Vec<Client> {
    let mut items = store.list();
    items.sort_by(|a, b| {
        a.company_name
            .to_lowercase()
            .cmp(&b.company_name.to_lowercase())
    });
    items
}
