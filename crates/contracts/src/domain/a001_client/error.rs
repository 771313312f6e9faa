use thiserror::Error;

use super::ClientId;

/// Client form validation failures. Messages are shown to the user as is.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClientValidationError {
    #[error("Denumire firmă (client) este obligatorie.")]
    MissingCompanyName,

    #[error("Adresă firmă (client) este obligatorie.")]
    MissingAddress,

    #[error("IBAN invalid (format RO + 22 caractere).")]
    InvalidIban,
}

/// Persistence failures of a [`super::ClientStore`].
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("Storage unavailable: {0}")]
    Unavailable(String),

    #[error("Storage write failed: {0}")]
    Write(String),
}

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("{0}")]
    Validation(#[from] ClientValidationError),

    #[error("Alege un client din listă.")]
    NoSelection,

    #[error("Clientul nu a fost găsit.")]
    NotFound(ClientId),

    #[error("Clienții nu au putut fi salvați: {0}")]
    Store(#[from] StoreError),
}
