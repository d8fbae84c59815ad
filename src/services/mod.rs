pub mod catalog;
pub mod imports;
pub mod invoices;
pub mod revenue;
pub mod shippers;
