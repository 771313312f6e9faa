//! Order note and pro-forma documents: wire request, kinds and the
//! renderer-independent layout.

pub mod error;
pub mod kind;
pub mod layout;
pub mod request;

pub use error::DocumentRequestError;
pub use kind::DocumentKind;
pub use layout::{build_layout, DocumentLayout, LabeledField};
pub use request::{DeliveryField, DeliveryInfo, DocumentRequest, OrderItemDto};
