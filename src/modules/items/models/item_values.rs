use rust_decimal::Decimal;
use serde::Serialize;

use super::DiscountType;

/// Calculated values for one line item
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemValues {
    /// quantity × unit rate, before discount
    #[serde(with = "rust_decimal::serde::float")]
    pub rate: Decimal,

    /// Absolute discount for the line
    #[serde(with = "rust_decimal::serde::float")]
    pub discount: Decimal,

    /// Absolute tax for the line
    #[serde(with = "rust_decimal::serde::float")]
    pub tax: Decimal,

    /// taxable amount + tax
    #[serde(with = "rust_decimal::serde::float")]
    pub amount: Decimal,

    /// rate - discount
    #[serde(with = "rust_decimal::serde::float")]
    pub taxable_amount: Decimal,

    #[serde(with = "rust_decimal::serde::float")]
    pub quantity: Decimal,

    /// Unit rate the line rate was computed from
    #[serde(with = "rust_decimal::serde::float")]
    pub base_rate: Decimal,

    pub discount_type: Option<DiscountType>,
}
