// A line item is one product/service row of an invoice, purchase order,
// debit note or sales return, in the shape the dashboard forms produce.
//
// Each row carries two sets of pricing inputs: the stored values established
// when the row was created from the catalog, and the form-updated values the
// user typed in. `is_rate_form_updated` selects which set is authoritative;
// the two are never mixed.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::discount::{self, DiscountType};
use super::{ItemValues, TaxInfo};
use crate::core::lenient;
use crate::core::money::{self, round_money, HUNDRED};
use crate::modules::items::services::ItemCalculator;

/// A single document row
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LineItem {
    /// UI list identity only, not a business attribute
    #[serde(deserialize_with = "lenient::text", skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,

    #[serde(deserialize_with = "lenient::text", skip_serializing_if = "Option::is_none")]
    pub product_id: Option<String>,

    #[serde(deserialize_with = "lenient::text", skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Unit of measure, passed through untouched
    #[serde(skip_serializing_if = "Option::is_none")]
    pub units: Option<serde_json::Value>,

    #[serde(with = "lenient::decimal")]
    pub quantity: Option<Decimal>,

    /// Catalog unit price
    #[serde(with = "lenient::decimal")]
    pub purchase_price: Option<Decimal>,

    /// Line rate (quantity × unit rate), as last calculated
    #[serde(with = "lenient::decimal")]
    pub rate: Option<Decimal>,

    #[serde(deserialize_with = "discount::deserialize_lenient")]
    pub discount_type: Option<DiscountType>,

    /// Absolute discount, as last calculated
    #[serde(with = "lenient::decimal")]
    pub discount: Option<Decimal>,

    #[serde(deserialize_with = "lenient::object")]
    pub tax_info: Option<TaxInfo>,

    /// Absolute tax, as last calculated
    #[serde(with = "lenient::decimal")]
    pub tax: Option<Decimal>,

    #[serde(with = "lenient::decimal")]
    pub taxable_amount: Option<Decimal>,

    #[serde(with = "lenient::decimal")]
    pub amount: Option<Decimal>,

    #[serde(deserialize_with = "lenient::flag")]
    pub is_rate_form_updated: bool,

    /// Unit rate typed by the user
    #[serde(with = "lenient::decimal")]
    pub form_updated_rate: Option<Decimal>,

    #[serde(deserialize_with = "discount::deserialize_lenient")]
    pub form_updated_discount_type: Option<DiscountType>,

    /// Discount typed by the user: a percentage or a flat amount depending on
    /// `form_updated_discount_type`
    #[serde(with = "lenient::decimal")]
    pub form_updated_discount: Option<Decimal>,

    /// Tax percentage typed by the user
    #[serde(with = "lenient::decimal")]
    pub form_updated_tax: Option<Decimal>,
}

/// A user edit of one row; `None` leaves the field as it is.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ItemEdit {
    #[serde(with = "lenient::decimal")]
    pub quantity: Option<Decimal>,

    /// Unit rate
    #[serde(with = "lenient::decimal")]
    pub rate: Option<Decimal>,

    #[serde(deserialize_with = "discount::deserialize_lenient")]
    pub discount_type: Option<DiscountType>,

    #[serde(with = "lenient::decimal")]
    pub discount: Option<Decimal>,

    /// Tax percentage
    #[serde(with = "lenient::decimal")]
    pub tax_rate: Option<Decimal>,
}

impl ItemEdit {
    fn touches_pricing(&self) -> bool {
        self.rate.is_some()
            || self.discount_type.is_some()
            || self.discount.is_some()
            || self.tax_rate.is_some()
    }
}

impl LineItem {
    /// Whether the form-updated fields are authoritative for this row
    pub fn uses_form_values(&self) -> bool {
        self.is_rate_form_updated
    }

    /// Apply a user edit.
    ///
    /// Pricing edits go into the `form_updated_*` fields and switch the row to
    /// form values; the stored fields are left untouched. Quantity is applied
    /// last, through [`LineItem::set_quantity`].
    pub fn apply_edit(&mut self, edit: &ItemEdit) {
        if edit.touches_pricing() {
            if !self.is_rate_form_updated {
                self.seed_form_values();
            }
            self.is_rate_form_updated = true;
            if let Some(rate) = edit.rate {
                self.form_updated_rate = Some(rate);
            }
            if let Some(discount_type) = edit.discount_type {
                self.form_updated_discount_type = Some(discount_type);
            }
            if let Some(discount) = edit.discount {
                self.form_updated_discount = Some(discount);
            }
            if let Some(tax_rate) = edit.tax_rate {
                self.form_updated_tax = Some(tax_rate);
            }
        }

        if let Some(quantity) = edit.quantity {
            self.set_quantity(quantity);
        }
    }

    /// Change the quantity, keeping the unit rate.
    ///
    /// Form rows scale from `form_updated_rate`, so only the quantity changes.
    /// Stored rows keep just the line total in `rate`; it is rescaled here, and
    /// a percentage discount is carried over against the previous line rate.
    pub fn set_quantity(&mut self, quantity: Decimal) {
        if self.uses_form_values() {
            self.quantity = Some(quantity);
            return;
        }

        let unit_rate = ItemCalculator::calculate(self).base_rate;
        let previous_rate = self.rate.unwrap_or(Decimal::ZERO);
        let rate = round_money(money::mul(quantity, unit_rate));

        if self.discount_type.is_some_and(DiscountType::is_percentage) {
            self.discount = Some(ItemCalculator::reapply_stored_percentage(
                rate,
                self.discount.unwrap_or(Decimal::ZERO),
                previous_rate,
            ));
        }
        self.quantity = Some(quantity);
        self.rate = Some(rate);
    }

    /// Fill missing `form_updated_*` fields from the stored values, so a row
    /// switching to form values keeps its current price.
    fn seed_form_values(&mut self) {
        let values = ItemCalculator::calculate(self);

        if self.form_updated_rate.is_none() {
            self.form_updated_rate = Some(values.base_rate);
        }
        if self.form_updated_discount_type.is_none() {
            self.form_updated_discount_type = self.discount_type;
        }
        if self.form_updated_discount.is_none() {
            // Form percentages are typed as percentages, stored ones as amounts
            let as_percentage = self
                .form_updated_discount_type
                .is_some_and(DiscountType::is_percentage);
            let discount = if as_percentage {
                money::mul(money::div(values.discount, values.rate), HUNDRED)
            } else {
                values.discount
            };
            self.form_updated_discount = Some(discount);
        }
        if self.form_updated_tax.is_none() {
            let tax_rate = self.tax_info.as_ref().map(TaxInfo::rate);
            self.form_updated_tax = Some(tax_rate.unwrap_or(Decimal::ZERO));
        }
    }

    /// Write calculated values back onto the row
    pub fn apply_values(&mut self, values: &ItemValues) {
        self.rate = Some(values.rate);
        self.discount = Some(values.discount);
        self.taxable_amount = Some(values.taxable_amount);
        self.tax = Some(values.tax);
        self.amount = Some(values.amount);
    }

    /// Calculate this row and write the result back
    pub fn recalculate(&mut self) -> ItemValues {
        let values = ItemCalculator::calculate(self);
        self.apply_values(&values);
        values
    }
}
