use rust_decimal::Decimal;
use serde::Deserialize;

/// One period's VAT return as produced by the upstream tax engine.
///
/// Only the fields the upload generator consumes are modeled here; anything
/// else in the JSON is ignored on deserialization. A missing required key
/// is a parse error and aborts the run.
#[derive(Debug, Clone, Deserialize)]
pub struct VatReturn {
    /// Period identifier, e.g. "2024-01". Used to derive output filenames.
    pub period: String,
    /// Human-readable period name.
    #[serde(rename = "periodName")]
    pub period_name: String,
    /// Sales side of the return.
    pub sales: Sales,
    /// Input (purchase) side of the return.
    pub inputs: Inputs,
    /// Net VAT position for the period.
    pub summary: Summary,
}

/// Sales section. Only local standard-rated sales carry invoices that go
/// into the upload; exports and exempt sales have no per-invoice detail.
#[derive(Debug, Clone, Deserialize)]
pub struct Sales {
    /// Local (standard-rated) sales.
    pub local: LocalSales,
}

/// Local sales detail.
#[derive(Debug, Clone, Deserialize)]
pub struct LocalSales {
    /// Sales invoices, already in upload order.
    pub items: Vec<InvoiceItem>,
}

/// Input-VAT (purchases) section.
#[derive(Debug, Clone, Deserialize)]
pub struct Inputs {
    /// Purchase invoices, already in upload order.
    pub items: Vec<InvoiceItem>,
}

/// A single sales or purchase invoice. The two sides are structurally
/// identical; `customer` holds the supplier name on the purchase side.
#[derive(Debug, Clone, Deserialize)]
pub struct InvoiceItem {
    /// Invoice number.
    pub id: InvoiceId,
    /// Counterparty display name.
    pub customer: String,
    /// Issue date, passed through to the sheet verbatim.
    pub date: String,
    /// Gross amount.
    pub total: Decimal,
    /// VAT portion of `total`.
    pub vat: Decimal,
}

impl InvoiceItem {
    /// Amount before tax.
    pub fn net(&self) -> Decimal {
        self.total - self.vat
    }
}

/// Invoice numbers come out of the tax engine as either strings or bare
/// numbers depending on the source system that booked the invoice.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum InvoiceId {
    /// Alphanumeric invoice number, e.g. "INV-1".
    Text(String),
    /// Plain numeric invoice number.
    Number(i64),
}

impl std::fmt::Display for InvoiceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Text(s) => f.write_str(s),
            Self::Number(n) => write!(f, "{n}"),
        }
    }
}

/// Period-level net VAT position.
#[derive(Debug, Clone, Deserialize)]
pub struct Summary {
    /// Net VAT due; negative means a credit balance owed to the filer.
    #[serde(rename = "netVATDue")]
    pub net_vat_due: Decimal,
    /// "Refundable" when the filer is owed a refund, anything else otherwise.
    pub status: String,
}

impl Summary {
    /// Whether the period closed with a credit balance.
    pub fn is_refundable(&self) -> bool {
        self.status == "Refundable"
    }
}
