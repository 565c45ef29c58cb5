//! Input data model and the crate error type.
//!
//! The model mirrors the JSON the upstream tax engine writes per period
//! (`*_vat_return.json`). Monetary values deserialize into
//! [`rust_decimal::Decimal`] from plain JSON numbers.

mod error;
mod types;

pub use error::*;
pub use types::*;
