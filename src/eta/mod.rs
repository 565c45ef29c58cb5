//! ETA (Egyptian Tax Authority) upload file generation.
//!
//! Produces the two Excel files the ETA portal accepts per tax period:
//! `{period}_Sales.xlsx` for local sales invoices and
//! `{period}_Purchases.xlsx` for purchase invoices. Both files share the
//! same 24-column layout; the official template's header rows are kept
//! and one data row is appended per invoice starting at row 3.
//!
//! # Example
//!
//! ```no_run
//! use fatoora::batch::load_return;
//! use fatoora::eta::{EtaConfig, generate_period_uploads};
//!
//! # fn main() -> Result<(), fatoora::FatooraError> {
//! let config = EtaConfig {
//!     sales_template: "templates/sales_upload.xlsx".into(),
//!     purchases_template: "templates/purchases_upload.xlsx".into(),
//!     output_dir: "output/excel_uploads_eta".into(),
//! };
//! let vat = load_return("output/2024-01_vat_return.json".as_ref())?;
//! let summary = generate_period_uploads(&vat, &config)?;
//! println!("{summary}");
//! # Ok(())
//! # }
//! ```

mod row;
mod template;
mod writer;

pub use row::{COLUMN_COUNT, DATA_START_ROW, EtaRow, invoice_to_row};
pub use template::{HeaderCell, Template};
pub use writer::write_upload;

use std::fs;
use std::path::PathBuf;

use rust_decimal::Decimal;

use crate::core::{FatooraError, VatReturn};

/// Configuration for upload generation.
#[derive(Debug, Clone)]
pub struct EtaConfig {
    /// Path to the official sales upload template.
    pub sales_template: PathBuf,
    /// Path to the official purchases upload template.
    pub purchases_template: PathBuf,
    /// Directory the generated files are written to. Created if absent;
    /// existing files of the same name are overwritten.
    pub output_dir: PathBuf,
}

/// What was generated for one period.
#[derive(Debug, Clone)]
pub struct PeriodSummary {
    /// Period identifier, e.g. "2024-01".
    pub period: String,
    /// Human-readable period name.
    pub period_name: String,
    /// Rows written to the sales file.
    pub sales_invoices: usize,
    /// Rows written to the purchases file.
    pub purchase_invoices: usize,
    /// Net VAT due for the period.
    pub net_vat_due: Decimal,
    /// Whether the period closed with a credit balance.
    pub refundable: bool,
}

impl std::fmt::Display for PeriodSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}: {} sales, {} purchases, net VAT {} ({})",
            self.period_name,
            self.sales_invoices,
            self.purchase_invoices,
            self.net_vat_due.abs(),
            if self.refundable {
                "refundable"
            } else {
                "payable"
            }
        )
    }
}

/// Generate both upload files for one period.
///
/// Loads a fresh copy of each template; nothing is shared between
/// periods. Creates the output directory on first use.
pub fn generate_period_uploads(
    vat: &VatReturn,
    config: &EtaConfig,
) -> Result<PeriodSummary, FatooraError> {
    fs::create_dir_all(&config.output_dir).map_err(|e| FatooraError::Io {
        path: config.output_dir.clone(),
        source: e,
    })?;

    let sales_rows: Vec<EtaRow> = vat.sales.local.items.iter().map(invoice_to_row).collect();
    let sales_template = Template::load(&config.sales_template)?;
    write_upload(
        &sales_template,
        &sales_rows,
        &upload_path(config, &vat.period, "Sales"),
    )?;

    let purchase_rows: Vec<EtaRow> = vat.inputs.items.iter().map(invoice_to_row).collect();
    let purchases_template = Template::load(&config.purchases_template)?;
    write_upload(
        &purchases_template,
        &purchase_rows,
        &upload_path(config, &vat.period, "Purchases"),
    )?;

    Ok(PeriodSummary {
        period: vat.period.clone(),
        period_name: vat.period_name.clone(),
        sales_invoices: sales_rows.len(),
        purchase_invoices: purchase_rows.len(),
        net_vat_due: vat.summary.net_vat_due,
        refundable: vat.summary.is_refundable(),
    })
}

fn upload_path(config: &EtaConfig, period: &str, kind: &str) -> PathBuf {
    config.output_dir.join(format!("{period}_{kind}.xlsx"))
}
