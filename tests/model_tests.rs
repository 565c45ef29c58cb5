//! Parsing tests for the VAT return input model.

use fatoora::core::*;
use rust_decimal_macros::dec;
use serde_json::json;

fn sample_return() -> serde_json::Value {
    // Trimmed-down copy of what the tax engine writes, including fields
    // the generator does not consume.
    json!({
        "period": "2024-01",
        "periodName": "January 2024",
        "companyId": "123-456-789",
        "companyName": "Cairo Electronics Ltd",
        "sales": {
            "local": {
                "items": [
                    { "id": "INV-1", "customer": "Acme", "date": "2024-01-05",
                      "total": 114, "vat": 14 },
                    { "id": "INV-2", "customer": "Globex", "date": "2024-01-18",
                      "total": 228.5, "vat": 28.05 }
                ],
                "value": 300.45,
                "tax": 42.05
            },
            "exports": { "value": 0, "items": [] },
            "exempt": { "value": 0 }
        },
        "inputs": {
            "items": [
                { "id": 7001, "customer": "Supplies Co", "date": "2024-01-10",
                  "total": 57, "vat": 7 }
            ],
            "value": 50,
            "tax": 7
        },
        "summary": {
            "totalOutputVAT": 42.05,
            "totalInputVAT": 7,
            "netVATDue": 35.05,
            "status": "Payable"
        },
        "invoiceCount": 3
    })
}

#[test]
fn parses_consumed_fields() {
    let vat: VatReturn = serde_json::from_value(sample_return()).unwrap();
    assert_eq!(vat.period, "2024-01");
    assert_eq!(vat.period_name, "January 2024");
    assert_eq!(vat.sales.local.items.len(), 2);
    assert_eq!(vat.inputs.items.len(), 1);
    assert_eq!(vat.summary.net_vat_due, dec!(35.05));
    assert!(!vat.summary.is_refundable());
}

#[test]
fn invoice_amounts_deserialize_as_decimals() {
    let vat: VatReturn = serde_json::from_value(sample_return()).unwrap();
    let inv = &vat.sales.local.items[0];
    assert_eq!(inv.total, dec!(114));
    assert_eq!(inv.vat, dec!(14));
    assert_eq!(inv.date, "2024-01-05");
    assert_eq!(inv.customer, "Acme");
}

#[test]
fn net_is_total_minus_vat() {
    let vat: VatReturn = serde_json::from_value(sample_return()).unwrap();
    assert_eq!(vat.sales.local.items[0].net(), dec!(100));
    assert_eq!(vat.inputs.items[0].net(), dec!(50));
}

#[test]
fn invoice_id_accepts_string_and_number() {
    let vat: VatReturn = serde_json::from_value(sample_return()).unwrap();
    assert_eq!(
        vat.sales.local.items[0].id,
        InvoiceId::Text("INV-1".into())
    );
    assert_eq!(vat.inputs.items[0].id, InvoiceId::Number(7001));
}

#[test]
fn invoice_id_display() {
    assert_eq!(InvoiceId::Text("INV-9".into()).to_string(), "INV-9");
    assert_eq!(InvoiceId::Number(42).to_string(), "42");
}

#[test]
fn refundable_status_detected() {
    let mut value = sample_return();
    value["summary"]["netVATDue"] = json!(-120.5);
    value["summary"]["status"] = json!("Refundable");
    let vat: VatReturn = serde_json::from_value(value).unwrap();
    assert!(vat.summary.is_refundable());
    assert_eq!(vat.summary.net_vat_due, dec!(-120.5));
}

#[test]
fn missing_required_key_is_an_error() {
    let mut value = sample_return();
    value.as_object_mut().unwrap().remove("period");
    assert!(serde_json::from_value::<VatReturn>(value).is_err());
}

#[test]
fn missing_invoice_field_is_an_error() {
    let mut value = sample_return();
    value["sales"]["local"]["items"][0]
        .as_object_mut()
        .unwrap()
        .remove("total");
    assert!(serde_json::from_value::<VatReturn>(value).is_err());
}

#[test]
fn empty_item_arrays_parse() {
    let mut value = sample_return();
    value["sales"]["local"]["items"] = json!([]);
    value["inputs"]["items"] = json!([]);
    let vat: VatReturn = serde_json::from_value(value).unwrap();
    assert!(vat.sales.local.items.is_empty());
    assert!(vat.inputs.items.is_empty());
}
