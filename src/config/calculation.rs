use crate::core::{AppError, Result};
use crate::modules::documents::{DocumentKind, TradeSide};
use crate::modules::items::DiscountType;

/// Discount type given to blank rows, per trade side.
///
/// Sales and purchase screens have always defaulted differently; both are
/// kept and can be overridden independently.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ItemDefaults {
    pub sales_discount_type: DiscountType,
    pub purchase_discount_type: DiscountType,
}

impl Default for ItemDefaults {
    fn default() -> Self {
        Self {
            sales_discount_type: DiscountType::Percentage,
            purchase_discount_type: DiscountType::NoDiscount,
        }
    }
}

impl ItemDefaults {
    pub fn discount_type_for(&self, kind: DocumentKind) -> DiscountType {
        match kind.side() {
            TradeSide::Sales => self.sales_discount_type,
            TradeSide::Purchase => self.purchase_discount_type,
        }
    }
}

/// Calculation settings
#[derive(Debug, Clone, Default)]
pub struct CalculationConfig {
    pub item_defaults: ItemDefaults,
}

impl CalculationConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build from any variable source; unset variables keep their defaults
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = ItemDefaults::default();

        Ok(CalculationConfig {
            item_defaults: ItemDefaults {
                sales_discount_type: discount_type_var(
                    &lookup,
                    "SALES_DEFAULT_DISCOUNT_TYPE",
                    defaults.sales_discount_type,
                )?,
                purchase_discount_type: discount_type_var(
                    &lookup,
                    "PURCHASE_DEFAULT_DISCOUNT_TYPE",
                    defaults.purchase_discount_type,
                )?,
            },
        })
    }
}

fn discount_type_var<F>(lookup: &F, name: &str, default: DiscountType) -> Result<DiscountType>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(name) {
        Some(value) => value
            .parse()
            .map_err(|err| AppError::configuration(format!("Invalid {}: {}", name, err))),
        None => Ok(default),
    }
}
