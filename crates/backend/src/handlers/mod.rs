pub mod a002_product;
pub mod u502_order_documents;
