use rust_decimal::Decimal;
use serde::Serialize;
use std::ops::Add;

use crate::core::money;
use crate::modules::items::ItemValues;

/// Sums of per-row values over a document's rows
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LineTotals {
    /// Sum of line rates (before discount)
    #[serde(with = "rust_decimal::serde::float")]
    pub sub_total: Decimal,

    #[serde(with = "rust_decimal::serde::float")]
    pub total_discount: Decimal,

    #[serde(with = "rust_decimal::serde::float")]
    pub total_tax: Decimal,

    /// Sum of line amounts
    #[serde(with = "rust_decimal::serde::float")]
    pub total: Decimal,

    #[serde(with = "rust_decimal::serde::float")]
    pub taxable_amount: Decimal,
}

impl LineTotals {
    /// Add one row's values
    pub fn accumulate(self, values: &ItemValues) -> Self {
        Self {
            sub_total: money::add(self.sub_total, values.rate),
            total_discount: money::add(self.total_discount, values.discount),
            total_tax: money::add(self.total_tax, values.tax),
            total: money::add(self.total, values.amount),
            taxable_amount: money::add(self.taxable_amount, values.taxable_amount),
        }
    }
}

impl Add for LineTotals {
    type Output = LineTotals;

    fn add(self, other: LineTotals) -> LineTotals {
        LineTotals {
            sub_total: money::add(self.sub_total, other.sub_total),
            total_discount: money::add(self.total_discount, other.total_discount),
            total_tax: money::add(self.total_tax, other.total_tax),
            total: money::add(self.total, other.total),
            taxable_amount: money::add(self.taxable_amount, other.taxable_amount),
        }
    }
}

/// Grand total after the optional round-off
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoundedTotal {
    #[serde(with = "rust_decimal::serde::float")]
    pub total: Decimal,

    /// Signed amount the round-off added, 0 when disabled
    #[serde(with = "rust_decimal::serde::float")]
    pub round_off_value: Decimal,
}

/// Totals as invoices and purchase orders report them
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct DocumentTotals {
    #[serde(rename = "taxableAmount", with = "rust_decimal::serde::float")]
    pub taxable_amount: Decimal,

    #[serde(rename = "totalDiscount", with = "rust_decimal::serde::float")]
    pub total_discount: Decimal,

    #[serde(with = "rust_decimal::serde::float")]
    pub vat: Decimal,

    #[serde(rename = "TotalAmount", with = "rust_decimal::serde::float")]
    pub total_amount: Decimal,

    #[serde(rename = "roundOffValue", with = "rust_decimal::serde::float")]
    pub round_off_value: Decimal,
}

impl DocumentTotals {
    pub fn new(totals: &LineTotals, rounded: RoundedTotal) -> Self {
        Self {
            taxable_amount: totals.taxable_amount,
            total_discount: totals.total_discount,
            vat: totals.total_tax,
            total_amount: rounded.total,
            round_off_value: rounded.round_off_value,
        }
    }
}

/// Totals as debit notes and sales returns report them
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NoteTotals {
    #[serde(with = "rust_decimal::serde::float")]
    pub sub_total: Decimal,

    #[serde(with = "rust_decimal::serde::float")]
    pub total_discount: Decimal,

    #[serde(with = "rust_decimal::serde::float")]
    pub total_tax: Decimal,

    #[serde(with = "rust_decimal::serde::float")]
    pub total: Decimal,

    #[serde(with = "rust_decimal::serde::float")]
    pub taxable_amount: Decimal,

    #[serde(with = "rust_decimal::serde::float")]
    pub round_off_value: Decimal,
}

impl NoteTotals {
    pub fn new(totals: &LineTotals, rounded: RoundedTotal) -> Self {
        Self {
            sub_total: totals.sub_total,
            total_discount: totals.total_discount,
            total_tax: totals.total_tax,
            total: rounded.total,
            taxable_amount: totals.taxable_amount,
            round_off_value: rounded.round_off_value,
        }
    }
}

/// Document totals under the field names the document type uses
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(untagged)]
pub enum TotalsReport {
    Document(DocumentTotals),
    Note(NoteTotals),
}

impl TotalsReport {
    /// Grand total after round-off, whichever labels apply
    pub fn grand_total(&self) -> Decimal {
        match self {
            TotalsReport::Document(totals) => totals.total_amount,
            TotalsReport::Note(totals) => totals.total,
        }
    }

    pub fn round_off_value(&self) -> Decimal {
        match self {
            TotalsReport::Document(totals) => totals.round_off_value,
            TotalsReport::Note(totals) => totals.round_off_value,
        }
    }
}
