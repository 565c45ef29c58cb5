//! Upload template loading.
//!
//! The ETA distributes its upload forms as `.xlsx` files whose first two
//! rows hold the column headers; data starts at row 3. The generator reads
//! the sheet name and those header cells and re-emits them into each
//! output workbook.

use std::path::Path;

use calamine::{Data, Reader, open_workbook_auto};

use super::row::{COLUMN_COUNT, DATA_START_ROW};
use crate::core::FatooraError;

/// A header cell carried over from the template.
#[derive(Debug, Clone, PartialEq)]
pub enum HeaderCell {
    /// Text content.
    Text(String),
    /// Numeric content.
    Number(f64),
}

/// The parts of an upload template the generator reproduces: the sheet
/// name and the non-empty cells of the header rows.
#[derive(Debug, Clone)]
pub struct Template {
    /// Name of the template's first worksheet.
    pub sheet_name: String,
    /// (row, column, value) triples, 0-based, rows below [`DATA_START_ROW`].
    pub header_cells: Vec<(u32, u16, HeaderCell)>,
}

impl Template {
    /// Read a template from disk.
    ///
    /// A fresh `Template` is loaded for every generated file; nothing is
    /// cached across periods.
    pub fn load(path: &Path) -> Result<Self, FatooraError> {
        let template_err = |message: String| FatooraError::Template {
            path: path.to_path_buf(),
            message,
        };

        let mut workbook = open_workbook_auto(path).map_err(|e| template_err(e.to_string()))?;
        let sheet_name = workbook
            .sheet_names()
            .first()
            .cloned()
            .ok_or_else(|| template_err("template has no sheets".into()))?;
        let range = workbook
            .worksheet_range(&sheet_name)
            .map_err(|e| template_err(e.to_string()))?;

        let mut header_cells = Vec::new();
        for row in 0..DATA_START_ROW {
            for col in 0..u32::from(COLUMN_COUNT) {
                match range.get_value((row, col)) {
                    Some(Data::String(s)) if !s.is_empty() => {
                        header_cells.push((row, col as u16, HeaderCell::Text(s.clone())));
                    }
                    Some(Data::Float(n)) => {
                        header_cells.push((row, col as u16, HeaderCell::Number(*n)));
                    }
                    Some(Data::Int(n)) => {
                        header_cells.push((row, col as u16, HeaderCell::Number(*n as f64)));
                    }
                    _ => {}
                }
            }
        }

        Ok(Self {
            sheet_name,
            header_cells,
        })
    }
}
