pub mod u503_order_form;
