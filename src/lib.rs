//! Line-item financial calculations for invoices, purchase orders, debit notes
//! and sales returns.
//!
//! Per-row rate, discount, tax and amount; document totals; optional
//! round-off of the grand total; construction of new rows from the catalog.

pub mod config;
pub mod core;
pub mod modules;

// Re-export commonly used types
pub use modules::documents;
pub use modules::items;
pub use modules::totals;
