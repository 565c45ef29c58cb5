//! # fatoora
//!
//! Egyptian Tax Authority (ETA) VAT upload generation.
//!
//! Converts period-level VAT returns (JSON, produced by an upstream tax
//! engine) into the two Excel files the ETA portal accepts per period:
//! one for local sales invoices and one for purchase invoices. The files
//! are built from the official upload templates: the template's header
//! rows are kept and one 24-column data row is appended per invoice,
//! starting at row 3.
//!
//! All monetary values use [`rust_decimal::Decimal`]; conversion to `f64`
//! happens only at the spreadsheet cell boundary.
//!
//! ## Quick Start
//!
//! ```no_run
//! use fatoora::batch::run_batch;
//! use fatoora::eta::EtaConfig;
//!
//! # fn main() -> Result<(), fatoora::FatooraError> {
//! let config = EtaConfig {
//!     sales_template: "templates/sales_upload.xlsx".into(),
//!     purchases_template: "templates/purchases_upload.xlsx".into(),
//!     output_dir: "output/excel_uploads_eta".into(),
//! };
//! let report = run_batch("output".as_ref(), &config)?;
//! for period in &report.periods {
//!     println!("{period}");
//! }
//! println!("{report}");
//! # Ok(())
//! # }
//! ```

pub mod batch;
pub mod core;
pub mod eta;

// Re-export core types at crate root for convenience
pub use crate::core::*;
