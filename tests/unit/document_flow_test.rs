// Document draft flows as the forms drive them: load, add, edit, remove,
// toggle round-off, read totals under each document kind's labels.

use erp_totals::config::CalculationConfig;
use erp_totals::core::AppError;
use erp_totals::documents::{Document, DocumentKind};
use erp_totals::items::{DiscountType, ItemEdit, ItemFormatter, Product};
use erp_totals::totals::TotalsReport;
use rust_decimal_macros::dec;

fn catalog_product() -> Product {
    serde_json::from_str(
        r#"{
            "_id": "prod-7",
            "name": "Desk lamp",
            "purchasePrice": "40",
            "sellingPrice": "55.50",
            "discountType": 2,
            "discountValue": 10,
            "tax": {"_id": "vat", "name": "VAT", "taxRate": 15}
        }"#,
    )
    .unwrap()
}

#[test]
fn test_invoice_flow() {
    let formatter = ItemFormatter::default();
    let mut document = Document::new(DocumentKind::Invoice);

    let lamp = document.add_product(&formatter, &catalog_product());
    // 55.50 - 5.55 = 49.95, tax 7.4925
    assert_eq!(document.line_totals().total, dec!(57.4425));

    document
        .edit_item(
            &lamp,
            &ItemEdit {
                quantity: Some(dec!(2)),
                ..Default::default()
            },
        )
        .unwrap();
    // 111.00 - 11.10 = 99.90, tax 14.985
    assert_eq!(document.line_totals().total, dec!(114.885));

    document
        .edit_item(
            &lamp,
            &ItemEdit {
                rate: Some(dec!(50)),
                ..Default::default()
            },
        )
        .unwrap();
    // form values: 100 - 10 = 90, tax 13.5
    assert_eq!(document.line_totals().total, dec!(103.5));

    document.set_round_off(true);
    let totals = document.totals();
    assert_eq!(totals.grand_total(), dec!(104));
    assert_eq!(totals.round_off_value(), dec!(0.5));

    let json = serde_json::to_value(totals).unwrap();
    assert_eq!(json["TotalAmount"], serde_json::json!(104.0));
    assert_eq!(json["vat"], serde_json::json!(13.5));
}

#[test]
fn test_debit_note_flow_uses_note_labels() {
    let formatter = ItemFormatter::default();
    let mut document = Document::new(DocumentKind::DebitNote);

    let lamp = document.add_product(&formatter, &catalog_product());
    let blank = document.add_blank_item(&formatter);

    assert_eq!(
        document.items[1].discount_type,
        Some(DiscountType::NoDiscount)
    );

    // 40 - 4 = 36, tax 5.4
    let totals = document.totals();
    assert!(matches!(totals, TotalsReport::Note(_)));
    assert_eq!(totals.grand_total(), dec!(41.4));

    document.remove_item(&lamp).unwrap();
    document.remove_item(&blank).unwrap();
    assert!(document.items.is_empty());
    assert_eq!(document.totals().grand_total(), dec!(0));
}

#[test]
fn test_configured_defaults_reach_blank_rows() {
    let config = CalculationConfig::from_lookup(|name| match name {
        "PURCHASE_DEFAULT_DISCOUNT_TYPE" => Some("percentage".to_string()),
        _ => None,
    })
    .unwrap();
    let formatter = ItemFormatter::new(config.item_defaults);
    let mut document = Document::new(DocumentKind::PurchaseOrder);

    document.add_blank_item(&formatter);

    assert_eq!(
        document.items[0].discount_type,
        Some(DiscountType::Percentage)
    );
}

#[test]
fn test_document_json_round_trip_keeps_totals() {
    let mut document = Document::from_json(
        r#"{
            "kind": "sales_return",
            "roundOff": true,
            "items": [
                {"key": "a", "quantity": 2, "rate": 100, "discountType": 2, "discount": 10,
                 "taxInfo": {"taxRate": 5}},
                {"key": "b", "quantity": 1, "isRateFormUpdated": true, "formUpdatedRate": "19.99",
                 "formUpdatedDiscountType": 1, "formUpdatedDiscount": "4.99", "formUpdatedTax": 0}
            ]
        }"#,
    )
    .unwrap();

    let before = document.totals();
    document.recalculate();
    let serialized = serde_json::to_string(&document).unwrap();
    let reloaded = Document::from_json(&serialized).unwrap();

    // (100 - 10) * 1.05 + (19.99 - 4.99) = 109.5, rounded up to 110
    assert_eq!(before.grand_total(), dec!(110));
    assert_eq!(reloaded.totals(), before);
}

#[test]
fn test_tax_edit_on_loaded_row_keeps_price() {
    let mut document = Document::from_json(
        r#"{
            "kind": "invoice",
            "items": [
                {"key": "k1", "quantity": 2, "rate": 100, "discountType": 3,
                 "taxInfo": {"taxRate": 15}}
            ]
        }"#,
    )
    .unwrap();
    assert_eq!(document.line_totals().total, dec!(115));

    document
        .edit_item(
            "k1",
            &ItemEdit {
                tax_rate: Some(dec!(10)),
                ..Default::default()
            },
        )
        .unwrap();

    let row = &document.items[0];
    assert!(row.is_rate_form_updated);
    assert_eq!(row.rate, Some(dec!(100)));
    assert_eq!(row.amount, Some(dec!(110)));
    assert_eq!(document.line_totals().sub_total, dec!(100));
}

#[test]
fn test_editing_missing_row_fails() {
    let mut document = Document::new(DocumentKind::Invoice);

    let result = document.edit_item(
        "nope",
        &ItemEdit {
            quantity: Some(dec!(1)),
            ..Default::default()
        },
    );

    assert!(matches!(result, Err(AppError::NotFound(_))));
}
