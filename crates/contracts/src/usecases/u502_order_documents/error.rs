use thiserror::Error;

use crate::domain::a001_client::ClientValidationError;
use crate::usecases::u501_compute_order::OrderError;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DocumentRequestError {
    #[error("Date comandă invalide: {0}")]
    Malformed(String),

    #[error("{0}")]
    Client(#[from] ClientValidationError),

    #[error("Produsul #{index} este invalid: {reason}")]
    InvalidItem { index: usize, reason: String },

    #[error("{0}")]
    Order(#[from] OrderError),
}
