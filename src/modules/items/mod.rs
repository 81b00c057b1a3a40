// Line items: row models, per-row calculation and row construction

pub mod models;
pub mod services;

pub use models::{DiscountType, ItemEdit, ItemValues, LineItem, Product, TaxInfo};
pub use services::{ItemCalculator, ItemFormatter};
