use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::domain::a001_client::{ClientDto, ClientId};
use crate::usecases::u502_order_documents::DeliveryInfo;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClientMode {
    /// Pick a saved client from the list.
    #[default]
    Existing,
    /// Type a new client.
    New,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageLevel {
    Ok,
    Warn,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormMessage {
    pub level: MessageLevel,
    pub text: String,
}

impl FormMessage {
    pub fn ok(text: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Ok,
            text: text.into(),
        }
    }

    pub fn warn(text: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warn,
            text: text.into(),
        }
    }

    pub fn is_ok(&self) -> bool {
        self.level == MessageLevel::Ok
    }

    /// Text with its status marker, as shown next to the buttons.
    pub fn display(&self) -> String {
        match self.level {
            MessageLevel::Ok => format!("✅ {}", self.text),
            MessageLevel::Warn => format!("⚠ {}", self.text),
        }
    }
}

/// Everything the form shows. Field values are kept raw, as typed.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FormState {
    pub mode: ClientMode,
    pub selected_id: Option<ClientId>,
    pub client: ClientDto,

    /// Raw quantity inputs keyed by product key.
    pub quantities: BTreeMap<String, String>,
    pub delivery: DeliveryInfo,
    pub advance_percent: String,

    /// Feedback of the picker buttons (load / delete).
    pub client_message: Option<FormMessage>,
    /// Feedback of the save button.
    pub save_message: Option<FormMessage>,
    /// Feedback of the document buttons.
    pub document_message: Option<FormMessage>,

    /// A document request is in flight.
    pub generating: bool,
}

impl FormState {
    pub fn quantity(&self, key: &str) -> &str {
        self.quantities.get(key).map(String::as_str).unwrap_or("")
    }
}
