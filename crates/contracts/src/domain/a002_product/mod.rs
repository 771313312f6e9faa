pub mod catalog;
pub mod currency;

pub use catalog::{catalog, find_product, ProductLine, VatRule};
pub use currency::Currency;
