use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

use crate::core::lenient::Loose;

/// How a line item's discount value is interpreted.
///
/// Codes are shared with the backend API and the dropdown endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DiscountType {
    /// Flat amount off the whole line (not scaled by quantity)
    Amount = 1,
    /// Percentage of the line rate
    Percentage = 2,
    /// No discount configured
    NoDiscount = 3,
}

impl DiscountType {
    pub fn code(self) -> u8 {
        self as u8
    }

    pub fn from_code(code: i64) -> Option<Self> {
        match code {
            1 => Some(DiscountType::Amount),
            2 => Some(DiscountType::Percentage),
            3 => Some(DiscountType::NoDiscount),
            _ => None,
        }
    }

    pub fn is_percentage(self) -> bool {
        self == DiscountType::Percentage
    }
}

impl fmt::Display for DiscountType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DiscountType::Amount => write!(f, "amount"),
            DiscountType::Percentage => write!(f, "percentage"),
            DiscountType::NoDiscount => write!(f, "none"),
        }
    }
}

impl std::str::FromStr for DiscountType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Ok(code) = s.parse::<i64>() {
            return Self::from_code(code).ok_or_else(|| format!("Invalid discount type code: {}", s));
        }

        match s.to_lowercase().as_str() {
            "amount" => Ok(DiscountType::Amount),
            "percentage" => Ok(DiscountType::Percentage),
            "none" => Ok(DiscountType::NoDiscount),
            _ => Err(format!("Invalid discount type: {}", s)),
        }
    }
}

impl Serialize for DiscountType {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_u8(self.code())
    }
}

/// Lenient field deserializer: integer codes or numeric strings, anything else
/// (including unknown codes) is `None`.
pub(crate) fn deserialize_lenient<'de, D>(deserializer: D) -> Result<Option<DiscountType>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Loose>::deserialize(deserializer)?;
    Ok(value
        .and_then(Loose::into_integer)
        .and_then(DiscountType::from_code))
}
