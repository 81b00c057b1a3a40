use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::core::lenient;

/// Tax reference attached to a line item or catalog product
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TaxInfo {
    #[serde(alias = "_id", deserialize_with = "lenient::text")]
    pub id: Option<String>,

    #[serde(deserialize_with = "lenient::text")]
    pub name: Option<String>,

    /// Percentage (15 means 15%)
    #[serde(with = "lenient::decimal")]
    pub tax_rate: Option<Decimal>,
}

impl TaxInfo {
    pub fn new(id: impl Into<String>, name: impl Into<String>, tax_rate: Decimal) -> Self {
        Self {
            id: Some(id.into()),
            name: Some(name.into()),
            tax_rate: Some(tax_rate),
        }
    }

    /// The rate, or zero when none is set
    pub fn rate(&self) -> Decimal {
        self.tax_rate.unwrap_or(Decimal::ZERO)
    }
}
