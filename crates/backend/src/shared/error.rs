//! HTTP error mapping. Every failure leaves the backend as a
//! [`UseCaseError`] JSON body so the frontend can show `message` verbatim.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use contracts::usecases::common::UseCaseError;
use contracts::usecases::u501_compute_order::OrderError;
use contracts::usecases::u502_order_documents::DocumentRequestError;
use thiserror::Error;

use crate::usecases::u502_order_documents::RenderError;

#[derive(Error, Debug)]
pub enum AppError {
    /// Request body was malformed (400), or decoded but rejected by
    /// validation or pricing (422).
    #[error(transparent)]
    Request(#[from] DocumentRequestError),

    /// PDF generation failed (500). Details are logged, not returned.
    #[error(transparent)]
    Render(#[from] RenderError),
}

impl AppError {
    fn status_and_body(&self) -> (StatusCode, UseCaseError) {
        match self {
            Self::Request(DocumentRequestError::Malformed(msg)) => (
                StatusCode::BAD_REQUEST,
                UseCaseError::bad_request("Cererea nu este un JSON valid.").with_details(msg),
            ),
            Self::Request(DocumentRequestError::Order(OrderError::EmptyOrder)) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                UseCaseError::empty_order(OrderError::EmptyOrder.to_string()),
            ),
            Self::Request(other) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                UseCaseError::validation(other.to_string()),
            ),
            Self::Render(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                UseCaseError::internal("Documentul nu a putut fi generat."),
            ),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = self.status_and_body();

        if status.is_server_error() {
            tracing::error!(error = %self, "document generation failed");
        } else {
            tracing::warn!(error = %self, "document request rejected");
        }

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a001_client::ClientValidationError;

    #[test]
    fn test_status_mapping() {
        let (status, body) =
            AppError::from(DocumentRequestError::Malformed("eof".into())).status_and_body();
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body.details.as_deref(), Some("eof"));

        let (status, body) =
            AppError::from(DocumentRequestError::Order(OrderError::EmptyOrder)).status_and_body();
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body.code, "EMPTY_ORDER");

        let (status, body) = AppError::from(DocumentRequestError::Client(
            ClientValidationError::InvalidIban,
        ))
        .status_and_body();
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body.code, "VALIDATION_ERROR");
        assert_eq!(body.message, "IBAN invalid (format RO + 22 caractere).");

        let (status, body) = AppError::from(DocumentRequestError::Order(
            OrderError::AmountOverflow("Module GPS".into()),
        ))
        .status_and_body();
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body.code, "VALIDATION_ERROR");

        let (status, body) = AppError::from(RenderError::Pdf("boom".into())).status_and_body();
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(!body.message.contains("boom"));
    }
}
