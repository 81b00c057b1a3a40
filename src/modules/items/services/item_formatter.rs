use rust_decimal::Decimal;
use tracing::debug;
use uuid::Uuid;

use crate::config::ItemDefaults;
use crate::core::money::{self, round_money};
use crate::modules::documents::{DocumentKind, TradeSide};
use crate::modules::items::models::{LineItem, Product, TaxInfo};

/// Builds new rows for the document forms
#[derive(Debug, Clone, Copy, Default)]
pub struct ItemFormatter {
    defaults: ItemDefaults,
}

impl ItemFormatter {
    pub fn new(defaults: ItemDefaults) -> Self {
        Self { defaults }
    }

    pub fn defaults(&self) -> &ItemDefaults {
        &self.defaults
    }

    /// An empty row: quantity 1, zero amounts, the side's default discount type
    pub fn blank_item(&self, kind: DocumentKind) -> LineItem {
        let discount_type = self.defaults.discount_type_for(kind);

        LineItem {
            key: Some(new_key()),
            quantity: Some(Decimal::ONE),
            purchase_price: Some(Decimal::ZERO),
            rate: Some(Decimal::ZERO),
            discount_type: Some(discount_type),
            discount: Some(Decimal::ZERO),
            tax_info: Some(TaxInfo::default()),
            tax: Some(Decimal::ZERO),
            taxable_amount: Some(Decimal::ZERO),
            amount: Some(Decimal::ZERO),
            is_rate_form_updated: false,
            form_updated_rate: Some(Decimal::ZERO),
            form_updated_discount_type: Some(discount_type),
            form_updated_discount: Some(Decimal::ZERO),
            form_updated_tax: Some(Decimal::ZERO),
            ..Default::default()
        }
    }

    /// A row for one unit of a catalog product.
    ///
    /// Stored fields hold the catalog values (discount as an absolute amount),
    /// the `form_updated_*` mirrors hold them as the form displays them
    /// (discount as typed: percentage or amount). Derived fields are filled in
    /// so the row shows correct totals before any recalculation.
    pub fn from_product(&self, product: &Product, kind: DocumentKind) -> LineItem {
        let price = match kind.side() {
            TradeSide::Sales => product.selling_price,
            TradeSide::Purchase => product.purchase_price,
        }
        .unwrap_or(Decimal::ZERO);

        let discount_type = product
            .discount_type
            .unwrap_or_else(|| self.defaults.discount_type_for(kind));
        let discount_value = product.discount_value.unwrap_or(Decimal::ZERO);
        let tax_info = product.tax.clone().unwrap_or_default();
        let tax_rate = tax_info.rate();

        let rate = round_money(price);
        let discount = if discount_type.is_percentage() {
            round_money(money::percent_of(rate, discount_value))
        } else {
            discount_value
        };
        let taxable_amount = money::sub(rate, discount);
        let tax = money::percent_of(taxable_amount, tax_rate);
        let amount = money::add(taxable_amount, tax);

        debug!(
            product = product.id.as_deref().unwrap_or("-"),
            %kind,
            %rate,
            %discount,
            %amount,
            "Formatted line item from product"
        );

        LineItem {
            key: Some(new_key()),
            product_id: product.id.clone(),
            name: product.name.clone(),
            units: product.units.clone(),
            quantity: Some(Decimal::ONE),
            purchase_price: Some(rate),
            rate: Some(rate),
            discount_type: Some(discount_type),
            discount: Some(discount),
            tax_info: Some(tax_info),
            tax: Some(tax),
            taxable_amount: Some(taxable_amount),
            amount: Some(amount),
            is_rate_form_updated: false,
            form_updated_rate: Some(rate),
            form_updated_discount_type: Some(discount_type),
            form_updated_discount: Some(discount_value),
            form_updated_tax: Some(tax_rate),
        }
    }
}

fn new_key() -> String {
    Uuid::new_v4().to_string()
}
