use axum::extract::State;
use axum::http::header;
use axum::response::{IntoResponse, Response};
use chrono::Local;
use contracts::usecases::u502_order_documents::DocumentKind;

use crate::shared::error::AppError;
use crate::shared::state::AppState;
use crate::usecases::u502_order_documents;

/// POST /api/documents/order-note
pub async fn order_note(State(state): State<AppState>, body: String) -> Result<Response, AppError> {
    render(&state, DocumentKind::OrderNote, &body)
}

/// POST /api/documents/proforma
pub async fn proforma(State(state): State<AppState>, body: String) -> Result<Response, AppError> {
    render(&state, DocumentKind::ProForma, &body)
}

fn render(state: &AppState, kind: DocumentKind, body: &str) -> Result<Response, AppError> {
    let today = Local::now().date_naive();
    let doc = u502_order_documents::generate(kind, body, today, state.renderer.as_ref())?;

    let disposition = format!("attachment; filename=\"{}\"", doc.file_name);
    Ok((
        [
            (header::CONTENT_TYPE, "application/pdf".to_string()),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        doc.bytes,
    )
        .into_response())
}
