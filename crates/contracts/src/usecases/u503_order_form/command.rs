use crate::domain::a001_client::{ClientField, ClientId};
use crate::usecases::u502_order_documents::{DeliveryField, DocumentKind};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormCommand {
    SetMode(super::ClientMode),
    Select(Option<ClientId>),
    EditClient(ClientField, String),
    ClearClientForm,
    SaveClient,
    LoadClient,
    DeleteClient,
    EditQuantity { key: String, value: String },
    EditDelivery(DeliveryField, String),
    SetAdvancePercent(String),
    /// Validate the form and, if the order is not empty, request a document.
    Generate(DocumentKind),
    /// Reported by the shell once the document was downloaded.
    DocumentReady { file_name: String },
    /// Reported by the shell when the request or download failed.
    DocumentFailed(String),
}
