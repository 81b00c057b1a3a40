//! Serde helpers for loosely-typed JSON coming from the dashboard forms.
//!
//! Form state arrives with numbers as numbers or strings, flags as booleans or
//! `"true"`, and fields that may be missing, null, empty or plain garbage. All
//! of that is normalized here, once, so the arithmetic only ever sees
//! `Option<Decimal>` and `bool`.

use std::str::FromStr;

use rust_decimal::Decimal;
use serde::de::IgnoredAny;
use serde::{Deserialize, Deserializer};

/// Any JSON scalar (or anything else, swallowed).
///
/// Integers that fit in `i64` stay exact. Other numbers go through `f64` and keep
/// about 17 significant digits; send longer values as strings.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub(crate) enum Loose {
    Bool(bool),
    Integer(i64),
    Number(f64),
    Text(String),
    Other(IgnoredAny),
}

impl Loose {
    pub(crate) fn into_decimal(self) -> Option<Decimal> {
        match self {
            Loose::Integer(value) => Some(Decimal::from(value)),
            Loose::Number(value) if value.is_finite() => Decimal::from_str(&value.to_string()).ok(),
            Loose::Text(text) => parse_decimal(&text),
            _ => None,
        }
    }

    pub(crate) fn into_integer(self) -> Option<i64> {
        match self {
            Loose::Integer(value) => Some(value),
            Loose::Number(value) if value.is_finite() && value.fract() == 0.0 => {
                Some(value as i64)
            }
            Loose::Text(text) => text.trim().parse().ok(),
            _ => None,
        }
    }

    fn into_text(self) -> Option<String> {
        match self {
            Loose::Text(text) if !text.is_empty() => Some(text),
            Loose::Integer(value) => Some(value.to_string()),
            Loose::Number(value) if value.is_finite() => Some(value.to_string()),
            _ => None,
        }
    }

    fn is_truthy_flag(&self) -> bool {
        match self {
            Loose::Bool(flag) => *flag,
            Loose::Text(text) => text == "true",
            _ => false,
        }
    }
}

/// A value of `T`, or anything else (swallowed)
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum LooseValue<T> {
    Value(T),
    Other(IgnoredAny),
}

impl<T> LooseValue<T> {
    fn into_option(self) -> Option<T> {
        match self {
            LooseValue::Value(value) => Some(value),
            LooseValue::Other(_) => None,
        }
    }
}

fn parse_decimal(text: &str) -> Option<Decimal> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }
    Decimal::from_str(text)
        .or_else(|_| Decimal::from_scientific(text))
        .ok()
}

/// Lenient `Option<Decimal>`; serializes as a JSON number.
pub mod decimal {
    use rust_decimal::Decimal;
    use serde::{Deserialize, Deserializer, Serializer};

    use super::Loose;

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<Decimal>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Option::<Loose>::deserialize(deserializer)?;
        Ok(value.and_then(Loose::into_decimal))
    }

    pub fn serialize<S>(value: &Option<Decimal>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        rust_decimal::serde::float_option::serialize(value, serializer)
    }
}

/// `true` or `"true"` is true, everything else is false.
pub fn flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Loose>::deserialize(deserializer)?;
    Ok(value.is_some_and(|v| v.is_truthy_flag()))
}

/// Strings, or numbers rendered as strings (ids often arrive as either).
pub fn text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Loose>::deserialize(deserializer)?;
    Ok(value.and_then(Loose::into_text))
}

/// An object of type `T`, or `None` for null or anything that is not a `T`.
pub fn object<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    let value = Option::<LooseValue<T>>::deserialize(deserializer)?;
    Ok(value.and_then(LooseValue::into_option))
}

/// A list of `T`; a non-list becomes empty and entries that are not a `T` are dropped.
pub fn list<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    let value = Option::<LooseValue<Vec<LooseValue<T>>>>::deserialize(deserializer)?;
    Ok(value
        .and_then(LooseValue::into_option)
        .map(|entries| entries.into_iter().filter_map(LooseValue::into_option).collect())
        .unwrap_or_default())
}
