//! The fixed 24-column row layout of the ETA upload sheet.

use rust_decimal::Decimal;

use crate::core::{InvoiceId, InvoiceItem};

/// Number of columns in the upload template.
pub const COLUMN_COUNT: u16 = 24;

/// First data row, 0-based. The template's header occupies rows 1-2.
pub const DATA_START_ROW: u32 = 2;

// Constant cell values mandated by the upload template. The upstream data
// carries no per-line product detail, so product name, statement type,
// commodity type, unit and quantity are fixed for every row.
pub(crate) const INVOICE_TYPE: &str = "I";
pub(crate) const VAT_TYPE: &str = "T1";
pub(crate) const ADDRESS: &str = "Egypt";
pub(crate) const PRODUCT_NAME: &str = "Electronics";
pub(crate) const STATEMENT_TYPE: &str = "GS1";
pub(crate) const COMMODITY_TYPE: &str = "GS1";
pub(crate) const UNIT_OF_MEASURE: &str = "EA";
pub(crate) const TAX_CATEGORY: &str = "T1";
pub(crate) const QUANTITY: u32 = 1;
pub(crate) const DISCOUNT: Decimal = Decimal::ZERO;

/// A single upload sheet row (intermediate representation).
///
/// Everything the writer needs for the record-derived columns; the
/// constant and always-empty columns are supplied at write time.
#[derive(Debug, Clone, PartialEq)]
pub struct EtaRow {
    /// Invoice number (column 4).
    pub invoice_number: InvoiceId,
    /// Customer or supplier name (column 5).
    pub counterparty: String,
    /// Invoice date, verbatim (column 11).
    pub date: String,
    /// total - vat; written to unit price, total amount and net amount
    /// (columns 17, 20 and 22).
    pub net: Decimal,
    /// Tax value (column 23).
    pub vat: Decimal,
    /// Gross total (column 24).
    pub gross: Decimal,
}

/// Map one invoice onto the upload row layout.
///
/// No validation is applied; negative or zero amounts pass through
/// unchanged, exactly as the tax engine emitted them.
pub fn invoice_to_row(inv: &InvoiceItem) -> EtaRow {
    EtaRow {
        invoice_number: inv.id.clone(),
        counterparty: inv.customer.clone(),
        date: inv.date.clone(),
        net: inv.net(),
        vat: inv.vat,
        gross: inv.total,
    }
}
