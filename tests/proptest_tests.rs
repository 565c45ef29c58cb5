//! Property-based tests for the row mapping arithmetic.

use proptest::prelude::*;
use rust_decimal::Decimal;

use fatoora::core::{InvoiceId, InvoiceItem};
use fatoora::eta::invoice_to_row;

fn item(total: Decimal, vat: Decimal) -> InvoiceItem {
    InvoiceItem {
        id: InvoiceId::Text("INV-1".into()),
        customer: "Acme".into(),
        date: "2024-01-05".into(),
        total,
        vat,
    }
}

proptest! {
    /// net = total - vat, exactly, for any amounts the tax engine could
    /// emit, including negatives and zero.
    #[test]
    fn net_is_total_minus_vat(
        total in -1_000_000_000i64..1_000_000_000,
        vat in -1_000_000_000i64..1_000_000_000,
        scale in 0u32..4,
    ) {
        let total = Decimal::new(total, scale);
        let vat = Decimal::new(vat, scale);
        let row = invoice_to_row(&item(total, vat));

        prop_assert_eq!(row.net, total - vat);
        prop_assert_eq!(row.vat, vat);
        prop_assert_eq!(row.gross, total);
        prop_assert_eq!(row.net + row.vat, row.gross);
    }

    /// The mapping never reorders or rewrites the pass-through fields.
    #[test]
    fn pass_through_fields_unchanged(total in 0i64..1_000_000, vat in 0i64..1_000_000) {
        let inv = item(Decimal::new(total, 2), Decimal::new(vat, 2));
        let row = invoice_to_row(&inv);
        prop_assert_eq!(row.invoice_number, inv.id);
        prop_assert_eq!(row.counterparty, inv.customer);
        prop_assert_eq!(row.date, inv.date);
    }
}
