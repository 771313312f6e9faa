pub mod aggregate;
pub mod error;
pub mod identity;
pub mod service;
pub mod store;

pub use aggregate::{Client, ClientDto, ClientField, ClientId};
pub use error::{ClientError, ClientValidationError, StoreError};
pub use store::{ClientStore, MemoryClientStore};
