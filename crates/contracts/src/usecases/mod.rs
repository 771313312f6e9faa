pub mod common;
pub mod u501_compute_order;
pub mod u502_order_documents;
pub mod u503_order_form;
