//! Batch conversion of a directory of VAT return files.
//!
//! Discovers `*_vat_return.json` files, sorts them by filename and
//! generates the two upload files for each period, strictly one period at
//! a time. Any error aborts the whole run; there is no per-file recovery
//! or partial-success bookkeeping.

use std::fs;
use std::path::{Path, PathBuf};

use crate::core::{FatooraError, VatReturn};
use crate::eta::{EtaConfig, PeriodSummary, generate_period_uploads};

/// Filename suffix that marks a file as a VAT return.
const VAT_RETURN_SUFFIX: &str = "_vat_return.json";

/// Result of a batch run.
#[derive(Debug, Clone, Default)]
pub struct BatchReport {
    /// One entry per processed period, in filename order.
    pub periods: Vec<PeriodSummary>,
}

impl BatchReport {
    /// Total files written: two per period.
    pub fn files_written(&self) -> usize {
        self.periods.len() * 2
    }
}

impl std::fmt::Display for BatchReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "generated {} upload files for {} periods",
            self.files_written(),
            self.periods.len()
        )
    }
}

/// List the VAT return files in `input_dir`, sorted by filename.
///
/// Lexicographic order gives natural period order for the
/// `YYYY-MM_vat_return.json` names the tax engine produces.
pub fn discover_returns(input_dir: &Path) -> Result<Vec<PathBuf>, FatooraError> {
    let io_err = |source| FatooraError::Io {
        path: input_dir.to_path_buf(),
        source,
    };

    let mut files = Vec::new();
    for entry in fs::read_dir(input_dir).map_err(io_err)? {
        let path = entry.map_err(io_err)?.path();
        let is_return = path
            .file_name()
            .and_then(|n| n.to_str())
            .is_some_and(|n| n.ends_with(VAT_RETURN_SUFFIX));
        if is_return && path.is_file() {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

/// Parse one VAT return file.
pub fn load_return(path: &Path) -> Result<VatReturn, FatooraError> {
    let data = fs::read_to_string(path).map_err(|e| FatooraError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;
    serde_json::from_str(&data).map_err(|e| FatooraError::VatReturn {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Convert every VAT return in `input_dir`.
pub fn run_batch(input_dir: &Path, config: &EtaConfig) -> Result<BatchReport, FatooraError> {
    let mut report = BatchReport::default();
    for path in discover_returns(input_dir)? {
        let vat = load_return(&path)?;
        report.periods.push(generate_period_uploads(&vat, config)?);
    }
    Ok(report)
}
