// Property-based tests for row construction
//
// Properties tested:
// 1. A row built from a product is already calculated: recalculating it
//    changes nothing
// 2. Blank rows take the configured default discount type for their side
// 3. The form mirrors of a product row reproduce the same values

use erp_totals::config::ItemDefaults;
use erp_totals::documents::DocumentKind;
use erp_totals::items::{DiscountType, ItemCalculator, ItemFormatter, Product, TaxInfo};
use proptest::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

fn kind_strategy() -> impl Strategy<Value = DocumentKind> {
    prop_oneof![
        Just(DocumentKind::Invoice),
        Just(DocumentKind::SalesReturn),
        Just(DocumentKind::PurchaseOrder),
        Just(DocumentKind::DebitNote),
    ]
}

prop_compose! {
    fn product()(
        purchase_mills in 1u32..=10_000_000,
        selling_mills in 1u32..=10_000_000,
        discount_type in prop_oneof![
            Just(None),
            Just(Some(DiscountType::Amount)),
            Just(Some(DiscountType::Percentage)),
            Just(Some(DiscountType::NoDiscount)),
        ],
        discount_value in 0u32..=100,
        tax_rate in prop::option::of(0u32..=25),
    ) -> Product {
        Product {
            id: Some("p".to_string()),
            name: Some("Product".to_string()),
            purchase_price: Some(Decimal::new(purchase_mills as i64, 3)),
            selling_price: Some(Decimal::new(selling_mills as i64, 3)),
            discount_type,
            discount_value: Some(Decimal::from(discount_value)),
            tax: tax_rate.map(|rate| TaxInfo::new("t", "Tax", Decimal::from(rate))),
            units: None,
        }
    }
}

proptest! {
    /// Property: formatted rows are a fixed point of the calculator
    #[test]
    fn test_product_row_is_already_calculated(product in product(), kind in kind_strategy()) {
        let item = ItemFormatter::default().from_product(&product, kind);

        let mut recalculated = item.clone();
        recalculated.recalculate();

        prop_assert_eq!(recalculated, item);
    }

    /// Property: switching a product row to its form mirrors changes nothing
    #[test]
    fn test_form_mirrors_match_stored_values(product in product(), kind in kind_strategy()) {
        let item = ItemFormatter::default().from_product(&product, kind);

        let mut as_form = item.clone();
        as_form.is_rate_form_updated = true;

        let stored = ItemCalculator::calculate(&item);
        let form = ItemCalculator::calculate(&as_form);

        prop_assert_eq!(stored.rate, form.rate);
        prop_assert_eq!(stored.discount, form.discount);
        prop_assert_eq!(stored.amount, form.amount);
    }

    /// Property: stored and form rows stay equal after a quantity change
    #[test]
    fn test_form_mirrors_match_after_quantity_change(
        product in product(),
        kind in kind_strategy(),
        quantity in 1u32..=1000,
    ) {
        let mut item = ItemFormatter::default().from_product(&product, kind);
        let mut as_form = item.clone();
        as_form.is_rate_form_updated = true;

        item.set_quantity(Decimal::from(quantity));
        as_form.set_quantity(Decimal::from(quantity));

        prop_assert_eq!(
            ItemCalculator::calculate(&item).rate,
            ItemCalculator::calculate(&as_form).rate
        );
    }
}

#[test]
fn test_blank_rows_follow_configured_defaults() {
    let formatter = ItemFormatter::new(ItemDefaults::default());

    for kind in [DocumentKind::Invoice, DocumentKind::SalesReturn] {
        assert_eq!(
            formatter.blank_item(kind).discount_type,
            Some(DiscountType::Percentage)
        );
    }
    for kind in [DocumentKind::PurchaseOrder, DocumentKind::DebitNote] {
        assert_eq!(
            formatter.blank_item(kind).discount_type,
            Some(DiscountType::NoDiscount)
        );
    }
}

#[test]
fn test_blank_row_calculates_to_zero() {
    let item = ItemFormatter::default().blank_item(DocumentKind::Invoice);
    let values = ItemCalculator::calculate(&item);

    assert_eq!(values.quantity, dec!(1));
    assert_eq!(values.rate, Decimal::ZERO);
    assert_eq!(values.amount, Decimal::ZERO);
}
