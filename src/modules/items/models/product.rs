use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::discount::{self, DiscountType};
use super::TaxInfo;
use crate::core::lenient;

/// Catalog product snapshot, as returned by the product lookup endpoints
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Product {
    #[serde(alias = "_id", deserialize_with = "lenient::text")]
    pub id: Option<String>,

    #[serde(deserialize_with = "lenient::text")]
    pub name: Option<String>,

    #[serde(with = "lenient::decimal")]
    pub purchase_price: Option<Decimal>,

    #[serde(with = "lenient::decimal")]
    pub selling_price: Option<Decimal>,

    #[serde(deserialize_with = "discount::deserialize_lenient")]
    pub discount_type: Option<DiscountType>,

    /// Percentage or flat amount, per `discount_type`
    #[serde(with = "lenient::decimal")]
    pub discount_value: Option<Decimal>,

    #[serde(deserialize_with = "lenient::object")]
    pub tax: Option<TaxInfo>,

    pub units: Option<serde_json::Value>,
}
