use rust_decimal::Decimal;
use tracing::debug;

use crate::core::money::{self, round_money, HUNDRED};
use crate::modules::items::models::{DiscountType, ItemValues, LineItem};

/// Per-row value calculation for invoices, purchase orders, debit notes and
/// sales returns.
///
/// Pure and infallible: absent or malformed inputs count as zero, divisions
/// are guarded, and a missing item yields all-zero values.
pub struct ItemCalculator;

impl ItemCalculator {
    /// Calculate rate, discount, taxable amount, tax and amount for one row.
    ///
    /// Inputs come from the `form_updated_*` fields when the row is form
    /// updated and from the stored fields otherwise, never a mix of both.
    ///
    /// Rate and discount are rounded to 2 places; tax and amount are not
    /// rounded further.
    pub fn calculate(item: &LineItem) -> ItemValues {
        let use_form = item.uses_form_values();
        let quantity = item.quantity.unwrap_or(Decimal::ZERO);

        let (discount_type, tax_rate) = if use_form {
            (
                item.form_updated_discount_type,
                item.form_updated_tax.unwrap_or(Decimal::ZERO),
            )
        } else {
            (
                item.discount_type,
                item.tax_info
                    .as_ref()
                    .map(|tax| tax.rate())
                    .unwrap_or(Decimal::ZERO),
            )
        };

        let base_rate = Self::resolve_base_rate(item, quantity, use_form);
        let rate = round_money(money::mul(quantity, base_rate));
        let discount = Self::resolve_discount(item, rate, discount_type, use_form);

        let taxable_amount = money::sub(rate, discount);
        let tax = money::percent_of(taxable_amount, tax_rate);
        let amount = money::add(taxable_amount, tax);

        debug!(
            key = item.key.as_deref().unwrap_or("-"),
            use_form,
            %quantity,
            %base_rate,
            %rate,
            %discount,
            %tax,
            %amount,
            "Calculated line item"
        );

        ItemValues {
            rate,
            discount,
            tax,
            amount,
            taxable_amount,
            quantity,
            base_rate,
            discount_type,
        }
    }

    /// Like [`ItemCalculator::calculate`], with all zeros for a missing row
    pub fn calculate_opt(item: Option<&LineItem>) -> ItemValues {
        item.map(Self::calculate).unwrap_or_default()
    }

    /// Reapply a stored percentage discount to a freshly computed rate.
    ///
    /// Percentage rows persist the discount as an absolute amount, so the
    /// percentage is recovered as `stored_discount / stored_rate × 100` and
    /// applied to `rate`. When either stored value is zero the stored discount
    /// is returned unscaled.
    pub fn reapply_stored_percentage(
        rate: Decimal,
        stored_discount: Decimal,
        stored_rate: Decimal,
    ) -> Decimal {
        if stored_rate.is_zero() || stored_discount.is_zero() {
            return stored_discount;
        }

        let percentage = money::mul(money::div(stored_discount, stored_rate), HUNDRED);
        round_money(money::percent_of(rate, percentage))
    }

    /// Unit rate the line rate is scaled from.
    ///
    /// Stored rows keep only the line total in `rate`, so the unit rate is
    /// derived back from it when quantity allows; otherwise the catalog price.
    fn resolve_base_rate(item: &LineItem, quantity: Decimal, use_form: bool) -> Decimal {
        if use_form {
            return item.form_updated_rate.unwrap_or(Decimal::ZERO);
        }

        let stored_rate = non_zero(item.rate);
        match stored_rate {
            Some(rate) if quantity > Decimal::ZERO => money::div(rate, quantity),
            _ => non_zero(item.purchase_price)
                .or(stored_rate)
                .unwrap_or(Decimal::ZERO),
        }
    }

    fn resolve_discount(
        item: &LineItem,
        rate: Decimal,
        discount_type: Option<DiscountType>,
        use_form: bool,
    ) -> Decimal {
        let is_percentage = discount_type.is_some_and(DiscountType::is_percentage);

        match (is_percentage, use_form) {
            (true, true) => round_money(money::percent_of(
                rate,
                item.form_updated_discount.unwrap_or(Decimal::ZERO),
            )),
            (true, false) => Self::reapply_stored_percentage(
                rate,
                item.discount.unwrap_or(Decimal::ZERO),
                item.rate.unwrap_or(Decimal::ZERO),
            ),
            (false, true) => item.form_updated_discount.unwrap_or(Decimal::ZERO),
            (false, false) => item.discount.unwrap_or(Decimal::ZERO),
        }
    }
}

fn non_zero(value: Option<Decimal>) -> Option<Decimal> {
    value.filter(|v| !v.is_zero())
}
