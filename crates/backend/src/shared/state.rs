use std::sync::Arc;

use super::config::Config;
use crate::usecases::u502_order_documents::{DocumentRenderer, PdfRenderer};

/// Immutable per-process state shared by all handlers.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub renderer: Arc<dyn DocumentRenderer>,
}

impl AppState {
    pub fn new(config: Arc<Config>) -> Self {
        let renderer = Arc::new(PdfRenderer::new(config.documents.footer.clone()));
        Self { config, renderer }
    }
}
