use std::collections::HashMap;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

use super::{ClientMode, FormCommand, FormMessage, FormState};
use crate::domain::a001_client::service::{delete_client, list_for_picker, load_client, save_client};
use crate::domain::a001_client::{ClientDto, ClientStore};
use crate::domain::a002_product::catalog;
use crate::domain::common::AggregateId;
use crate::usecases::u501_compute_order::{
    compute_order, parse_advance_percent, parse_quantity, OrderError, OrderSummary,
};
use crate::usecases::u502_order_documents::{DocumentKind, DocumentRequest};

/// Work the UI shell has to do after a transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormEffect {
    /// Send the request to the document endpoint and download the result.
    Generate {
        kind: DocumentKind,
        request: DocumentRequest,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    pub state: FormState,
    pub message: Option<FormMessage>,
    pub effect: Option<FormEffect>,
}

impl Transition {
    fn quiet(state: FormState) -> Self {
        Self {
            state,
            message: None,
            effect: None,
        }
    }
}

pub fn handle<S: ClientStore + ?Sized>(
    mut state: FormState,
    command: FormCommand,
    store: &mut S,
    now: DateTime<Utc>,
) -> Transition {
    match command {
        FormCommand::SetMode(mode) => {
            state.mode = mode;
            if mode == ClientMode::New {
                state.selected_id = None;
                state.client_message = None;
            }
            Transition::quiet(state)
        }
        FormCommand::Select(id) => {
            state.selected_id = id;
            Transition::quiet(state)
        }
        FormCommand::EditClient(field, value) => {
            state.client.set(field, value);
            Transition::quiet(state)
        }
        FormCommand::ClearClientForm => {
            state.client = ClientDto::default();
            state.save_message = None;
            Transition::quiet(state)
        }
        FormCommand::SaveClient => {
            let msg = match save_client(store, state.selected_id.as_ref(), &state.client, now) {
                Ok(outcome) => {
                    let msg = FormMessage::ok(outcome.message());
                    state.selected_id = Some(outcome.id);
                    msg
                }
                Err(e) => FormMessage::warn(e.to_string()),
            };
            state.save_message = Some(msg.clone());
            with_message(state, msg)
        }
        FormCommand::LoadClient => {
            let msg = match load_client(store, state.selected_id.as_ref()) {
                Ok(client) => {
                    state.client = client.to_dto();
                    FormMessage::ok("Client încărcat.")
                }
                Err(e) => FormMessage::warn(e.to_string()),
            };
            state.client_message = Some(msg.clone());
            with_message(state, msg)
        }
        FormCommand::DeleteClient => {
            let msg = match delete_client(store, state.selected_id.as_ref()) {
                Ok(_) => {
                    state.selected_id = None;
                    state.client = ClientDto::default();
                    state.save_message = None;
                    FormMessage::ok("Client șters.")
                }
                Err(e) => FormMessage::warn(e.to_string()),
            };
            state.client_message = Some(msg.clone());
            with_message(state, msg)
        }
        FormCommand::EditQuantity { key, value } => {
            state.quantities.insert(key, value);
            Transition::quiet(state)
        }
        FormCommand::EditDelivery(field, value) => {
            state.delivery.set(field, value);
            Transition::quiet(state)
        }
        FormCommand::SetAdvancePercent(value) => {
            state.advance_percent = value;
            Transition::quiet(state)
        }
        FormCommand::Generate(kind) => generate(state, kind),
        FormCommand::DocumentReady { file_name } => {
            state.generating = false;
            let msg = FormMessage::ok(format!("Document generat: {}", file_name));
            state.document_message = Some(msg.clone());
            with_message(state, msg)
        }
        FormCommand::DocumentFailed(reason) => {
            state.generating = false;
            let msg = FormMessage::warn(reason);
            state.document_message = Some(msg.clone());
            with_message(state, msg)
        }
    }
}

fn with_message(state: FormState, msg: FormMessage) -> Transition {
    Transition {
        state,
        message: Some(msg),
        effect: None,
    }
}

fn generate(mut state: FormState, kind: DocumentKind) -> Transition {
    if state.generating {
        return Transition::quiet(state);
    }
    match build_request(&state, kind) {
        Ok(request) => {
            state.generating = true;
            state.document_message = None;
            Transition {
                state,
                message: None,
                effect: Some(FormEffect::Generate { kind, request }),
            }
        }
        Err(text) => {
            let msg = FormMessage::warn(text);
            state.document_message = Some(msg.clone());
            with_message(state, msg)
        }
    }
}

fn build_request(state: &FormState, kind: DocumentKind) -> Result<DocumentRequest, String> {
    state
        .client
        .normalized()
        .validate()
        .map_err(|e| e.to_string())?;
    let summary = preview_order(state).map_err(|e| e.to_string())?;
    let advance = match kind {
        DocumentKind::ProForma => Some(
            parse_advance_percent(&state.advance_percent).map_err(|e| e.to_string())?,
        )
        .filter(|p| *p > Decimal::ZERO),
        DocumentKind::OrderNote => None,
    };
    Ok(DocumentRequest::new(
        &state.client,
        &state.delivery,
        advance,
        &summary,
    ))
}

/// Priced order for the current quantity inputs.
pub fn preview_order(state: &FormState) -> Result<OrderSummary, OrderError> {
    let mut quantities = HashMap::new();
    for product in catalog() {
        let qty = parse_quantity(product.name, state.quantity(product.key))?;
        quantities.insert(product.key.to_string(), qty);
    }
    compute_order(catalog(), &quantities)
}

/// `(value, label)` pairs for the client picker, sorted by name.
pub fn picker_options<S: ClientStore + ?Sized>(store: &S) -> Vec<(String, String)> {
    list_for_picker(store)
        .into_iter()
        .map(|c| (c.id.as_string(), c.picker_label()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_client::{ClientField, ClientId, MemoryClientStore};
    use crate::usecases::u503_order_form::MessageLevel;
    use chrono::TimeZone;

    fn now() -> DateTime<Utc> {
        Utc.timestamp_millis_opt(1_760_000_000_000).unwrap()
    }

    fn run(state: FormState, cmds: Vec<FormCommand>, store: &mut MemoryClientStore) -> Transition {
        let mut t = Transition::quiet(state);
        for cmd in cmds {
            t = handle(t.state, cmd, store, now());
        }
        t
    }

    fn typed_client() -> Vec<FormCommand> {
        vec![
            FormCommand::EditClient(ClientField::CompanyName, "Alfa SRL".into()),
            FormCommand::EditClient(ClientField::Address, "Cluj, Str. Lunga 1".into()),
            FormCommand::EditClient(ClientField::Cui, "ro 123".into()),
        ]
    }

    fn qty(key: &str, value: &str) -> FormCommand {
        FormCommand::EditQuantity {
            key: key.into(),
            value: value.into(),
        }
    }

    #[test]
    fn test_save_selects_new_client() {
        let mut store = MemoryClientStore::new();
        let mut cmds = typed_client();
        cmds.push(FormCommand::SaveClient);
        let t = run(FormState::default(), cmds, &mut store);

        assert_eq!(t.state.selected_id, Some(ClientId::new("CUI_RO123")));
        let msg = t.message.unwrap();
        assert_eq!(msg.display(), "✅ Client salvat.");
        assert_eq!(t.state.save_message, Some(msg));
        assert_eq!(store.list().len(), 1);
    }

    #[test]
    fn test_second_save_updates_in_place() {
        let mut store = MemoryClientStore::new();
        let mut cmds = typed_client();
        cmds.push(FormCommand::SaveClient);
        cmds.push(FormCommand::EditClient(ClientField::Bank, "ING".into()));
        cmds.push(FormCommand::SaveClient);
        let t = run(FormState::default(), cmds, &mut store);

        assert_eq!(t.message.unwrap().text, "Client actualizat.");
        let list = store.list();
        assert_eq!(list.len(), 1);
        assert_eq!(list[0].bank, "ING");
    }

    #[test]
    fn test_invalid_save_warns_and_keeps_store() {
        let mut store = MemoryClientStore::new();
        let t = run(
            FormState::default(),
            vec![
                FormCommand::EditClient(ClientField::CompanyName, "Alfa".into()),
                FormCommand::SaveClient,
            ],
            &mut store,
        );
        let msg = t.message.unwrap();
        assert_eq!(msg.level, MessageLevel::Warn);
        assert_eq!(msg.display(), "⚠ Adresă firmă (client) este obligatorie.");
        assert!(store.raw().is_none());
        assert_eq!(t.state.selected_id, None);
    }

    #[test]
    fn test_new_mode_clears_selection() {
        let mut store = MemoryClientStore::new();
        let state = FormState {
            selected_id: Some(ClientId::new("CUI_X")),
            client_message: Some(FormMessage::ok("Client încărcat.")),
            ..Default::default()
        };
        let t = run(state, vec![FormCommand::SetMode(ClientMode::New)], &mut store);
        assert_eq!(t.state.mode, ClientMode::New);
        assert_eq!(t.state.selected_id, None);
        assert_eq!(t.state.client_message, None);
    }

    #[test]
    fn test_load_and_delete() {
        let mut store = MemoryClientStore::new();
        let mut cmds = typed_client();
        cmds.push(FormCommand::SaveClient);
        cmds.push(FormCommand::ClearClientForm);
        cmds.push(FormCommand::LoadClient);
        let t = run(FormState::default(), cmds, &mut store);
        assert_eq!(t.state.client.company_name, "Alfa SRL");
        assert_eq!(t.state.client.cui, "RO123");
        assert_eq!(t.message.unwrap().text, "Client încărcat.");

        let t = run(t.state, vec![FormCommand::DeleteClient], &mut store);
        assert_eq!(t.message.unwrap().text, "Client șters.");
        assert_eq!(t.state.selected_id, None);
        assert_eq!(t.state.client, ClientDto::default());
        assert!(store.list().is_empty());
    }

    #[test]
    fn test_delete_without_selection_warns() {
        let mut store = MemoryClientStore::new();
        let mut cmds = typed_client();
        cmds.push(FormCommand::SaveClient);
        cmds.push(FormCommand::Select(None));
        let t = run(FormState::default(), cmds, &mut store);
        let raw_before = store.raw().map(str::to_string);

        let t = run(t.state, vec![FormCommand::DeleteClient], &mut store);
        assert_eq!(t.message.unwrap().display(), "⚠ Alege un client din listă.");
        assert_eq!(store.raw().map(str::to_string), raw_before);
    }

    #[test]
    fn test_generate_empty_order_is_blocked() {
        let mut store = MemoryClientStore::new();
        let mut cmds = typed_client();
        cmds.push(qty("gps", "0"));
        cmds.push(FormCommand::Generate(DocumentKind::OrderNote));
        let t = run(FormState::default(), cmds, &mut store);
        assert!(t.effect.is_none());
        assert!(!t.state.generating);
        assert_eq!(t.message.unwrap().level, MessageLevel::Warn);
    }

    #[test]
    fn test_generate_requires_valid_client() {
        let mut store = MemoryClientStore::new();
        let t = run(
            FormState::default(),
            vec![qty("gps", "1"), FormCommand::Generate(DocumentKind::OrderNote)],
            &mut store,
        );
        assert!(t.effect.is_none());
        assert_eq!(
            t.message.unwrap().text,
            "Denumire firmă (client) este obligatorie."
        );
    }

    #[test]
    fn test_generate_invalid_quantity() {
        let mut store = MemoryClientStore::new();
        let mut cmds = typed_client();
        cmds.push(qty("wifi", "doi"));
        cmds.push(FormCommand::Generate(DocumentKind::OrderNote));
        let t = run(FormState::default(), cmds, &mut store);
        assert!(t.effect.is_none());
        assert_eq!(
            t.message.unwrap().text,
            "Cantitate invalidă pentru Router WI-FI: doi"
        );
    }

    #[test]
    fn test_generate_proforma_emits_request() {
        let mut store = MemoryClientStore::new();
        let mut cmds = typed_client();
        cmds.push(qty("gps", "2"));
        cmds.push(qty("wifi", "1"));
        cmds.push(FormCommand::SetAdvancePercent("30".into()));
        cmds.push(FormCommand::Generate(DocumentKind::ProForma));
        let t = run(FormState::default(), cmds, &mut store);

        assert!(t.state.generating);
        let Some(FormEffect::Generate { kind, request }) = t.effect else {
            panic!("expected a generate effect");
        };
        assert_eq!(kind, DocumentKind::ProForma);
        assert_eq!(request.items.len(), 2);
        assert_eq!(request.client.cui, "RO123");
        assert_eq!(request.advance_percent, Some(Decimal::from(30)));

        // a second click while the first request is in flight does nothing
        let t2 = handle(
            t.state.clone(),
            FormCommand::Generate(DocumentKind::ProForma),
            &mut store,
            now(),
        );
        assert!(t2.effect.is_none());

        let done = handle(
            t.state,
            FormCommand::DocumentReady {
                file_name: "proforma_2025-10-09.pdf".into(),
            },
            &mut store,
            now(),
        );
        assert!(!done.state.generating);
        assert_eq!(
            done.message.unwrap().display(),
            "✅ Document generat: proforma_2025-10-09.pdf"
        );
    }

    #[test]
    fn test_order_note_ignores_advance() {
        let mut store = MemoryClientStore::new();
        let mut cmds = typed_client();
        cmds.push(qty("repetor", "1"));
        cmds.push(FormCommand::SetAdvancePercent("abc".into()));
        cmds.push(FormCommand::Generate(DocumentKind::OrderNote));
        let t = run(FormState::default(), cmds, &mut store);
        let Some(FormEffect::Generate { request, .. }) = t.effect else {
            panic!("expected a generate effect");
        };
        assert_eq!(request.advance_percent, None);
    }

    #[test]
    fn test_picker_options() {
        let mut store = MemoryClientStore::new();
        let mut cmds = typed_client();
        cmds.push(FormCommand::SaveClient);
        run(FormState::default(), cmds, &mut store);
        assert_eq!(
            picker_options(&store),
            vec![("CUI_RO123".to_string(), "Alfa SRL • RO123".to_string())]
        );
    }
}
