use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OrderError {
    #[error("Comanda este goală: introduceți cel puțin o cantitate mai mare ca 0.")]
    EmptyOrder,

    #[error("Cantitate invalidă pentru {product}: {value}")]
    InvalidQuantity { product: String, value: String },

    #[error("Procent avans invalid: {0}")]
    InvalidAdvancePercent(String),

    /// A price, total or advance does not fit the decimal range.
    #[error("Valoare prea mare pentru {0}.")]
    AmountOverflow(String),
}
