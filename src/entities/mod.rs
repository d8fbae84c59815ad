pub mod category;
pub mod customer;
pub mod order;
pub mod order_detail;
pub mod product;
pub mod shipper;
pub mod supplier;
