mod discount;
mod item_values;
mod line_item;
mod product;
mod tax_info;

pub use discount::DiscountType;
pub use item_values::ItemValues;
pub use line_item::{ItemEdit, LineItem};
pub use product::Product;
pub use tax_info::TaxInfo;
