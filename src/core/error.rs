use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while generating upload files.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum FatooraError {
    /// Filesystem access failed (reading returns, creating the output directory).
    #[error("I/O error on {path}: {source}")]
    Io {
        /// The path the operation touched.
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A VAT return file was not valid JSON or was missing a required key.
    #[error("invalid VAT return {path}: {source}")]
    VatReturn {
        /// The offending input file.
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// An upload template could not be opened or has an unusable layout.
    #[error("template error in {path}: {message}")]
    Template {
        /// The template file.
        path: PathBuf,
        /// What went wrong.
        message: String,
    },

    /// Output workbook generation failed.
    #[error("workbook error: {0}")]
    Workbook(#[from] rust_xlsxwriter::XlsxError),
}
