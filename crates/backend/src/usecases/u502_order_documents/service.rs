use chrono::NaiveDate;
use contracts::usecases::u502_order_documents::{build_layout, DocumentKind, DocumentRequest};

use super::renderer::DocumentRenderer;
use crate::shared::error::AppError;

/// A finished document ready to be sent as an attachment.
#[derive(Debug)]
pub struct RenderedDocument {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

/// Decode, validate, price and render one document request.
pub fn generate(
    kind: DocumentKind,
    raw_body: &str,
    today: NaiveDate,
    renderer: &dyn DocumentRenderer,
) -> Result<RenderedDocument, AppError> {
    let request = DocumentRequest::from_json(raw_body)?;
    let layout = build_layout(kind, &request, today)?;

    tracing::info!(
        "Generating {} for '{}' ({} item(s))",
        layout.file_name,
        request.client.company_name.trim(),
        layout.rows.len()
    );

    let bytes = renderer.render(&layout)?;
    Ok(RenderedDocument {
        file_name: layout.file_name,
        bytes,
    })
}
