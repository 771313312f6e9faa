use chrono::Utc;
use contracts::domain::a001_client::ClientField;
use contracts::usecases::u501_compute_order::{
    compute_advance, parse_advance_percent, AdvanceLine, OrderError, OrderSummary,
};
use contracts::usecases::u502_order_documents::DeliveryField;
use contracts::usecases::u503_order_form::{
    handle, picker_options, preview_order, FormCommand, FormEffect, FormState,
};
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::api;
use crate::domain::a001_client::LocalStorageClientStore;
use crate::shared::export::download_bytes;

/// Reactive shell around the pure form controller.
///
/// Every UI event goes through [`OrderFormVm::dispatch`]; the only work done
/// here is running effects (network call, download) and re-reading the store
/// after a write.
#[derive(Clone, Copy)]
pub struct OrderFormVm {
    pub state: RwSignal<FormState>,
    store_revision: RwSignal<u64>,
}

impl OrderFormVm {
    pub fn new() -> Self {
        Self {
            state: RwSignal::new(FormState::default()),
            store_revision: RwSignal::new(0),
        }
    }

    pub fn dispatch(&self, command: FormCommand) {
        let touches_store = matches!(command, FormCommand::SaveClient | FormCommand::DeleteClient);
        let mut store = LocalStorageClientStore::new();
        let transition = handle(self.state.get_untracked(), command, &mut store, Utc::now());

        if let Some(message) = &transition.message {
            log::debug!("order form: {}", message.display());
        }
        self.state.set(transition.state);
        if touches_store {
            self.store_revision.update(|r| *r += 1);
        }

        if let Some(effect) = transition.effect {
            self.run(effect);
        }
    }

    fn run(&self, effect: FormEffect) {
        let vm = *self;
        match effect {
            FormEffect::Generate { kind, request } => spawn_local(async move {
                let outcome = match api::generate_document(kind, &request).await {
                    Ok(doc) => download_bytes(&doc.bytes, &doc.file_name, "application/pdf")
                        .map(|_| doc.file_name),
                    Err(e) => Err(e),
                };
                match outcome {
                    Ok(file_name) => vm.dispatch(FormCommand::DocumentReady { file_name }),
                    Err(e) => {
                        log::error!("document generation failed: {}", e);
                        vm.dispatch(FormCommand::DocumentFailed(e))
                    }
                }
            }),
        }
    }

    /// Picker entries, re-read after every save or delete.
    pub fn picker_options(&self) -> Signal<Vec<(String, String)>> {
        let revision = self.store_revision;
        Signal::derive(move || {
            revision.track();
            picker_options(&LocalStorageClientStore::new())
        })
    }

    pub fn preview(&self) -> Signal<Result<OrderSummary, OrderError>> {
        let state = self.state;
        Signal::derive(move || state.with(preview_order))
    }

    /// Advance split for the pro-forma; empty while the percent is 0 or invalid.
    pub fn advance_preview(&self) -> Signal<Vec<AdvanceLine>> {
        let state = self.state;
        let preview = self.preview();
        Signal::derive(move || {
            let percent = state.with(|s| parse_advance_percent(&s.advance_percent));
            match (percent, preview.get()) {
                (Ok(p), Ok(summary)) if !p.is_zero() => {
                    compute_advance(&summary.totals, p).unwrap_or_default()
                }
                _ => Vec::new(),
            }
        })
    }

    pub fn selected_id(&self) -> Signal<String> {
        let state = self.state;
        Signal::derive(move || {
            state.with(|s| s.selected_id.as_ref().map(|id| id.to_string()).unwrap_or_default())
        })
    }

    pub fn client_field(&self, field: ClientField) -> Signal<String> {
        let state = self.state;
        Signal::derive(move || state.with(|s| s.client.get(field).to_string()))
    }

    pub fn delivery_field(&self, field: DeliveryField) -> Signal<String> {
        let state = self.state;
        Signal::derive(move || state.with(|s| s.delivery.get(field).to_string()))
    }

    pub fn quantity(&self, key: &'static str) -> Signal<String> {
        let state = self.state;
        Signal::derive(move || state.with(|s| s.quantity(key).to_string()))
    }
}

impl Default for OrderFormVm {
    fn default() -> Self {
        Self::new()
    }
}
