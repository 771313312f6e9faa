pub mod u502_order_documents;
