//! Output workbook generation.

use std::path::Path;

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use rust_xlsxwriter::{Workbook, Worksheet};

use super::row::{
    ADDRESS, COMMODITY_TYPE, DATA_START_ROW, DISCOUNT, EtaRow, INVOICE_TYPE, PRODUCT_NAME,
    QUANTITY, STATEMENT_TYPE, TAX_CATEGORY, UNIT_OF_MEASURE, VAT_TYPE,
};
use super::template::{HeaderCell, Template};
use crate::core::{FatooraError, InvoiceId};

/// Write one upload file: the template's header rows, then one data row
/// per invoice starting at row 3, in input order.
///
/// The workbook is saved exactly once. An existing file at `path` is
/// overwritten. With no rows the file still gets written with only the
/// header content.
pub fn write_upload(template: &Template, rows: &[EtaRow], path: &Path) -> Result<(), FatooraError> {
    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();
    sheet.set_name(&template.sheet_name)?;

    for (row, col, cell) in &template.header_cells {
        match cell {
            HeaderCell::Text(s) => sheet.write_string(*row, *col, s)?,
            HeaderCell::Number(n) => sheet.write_number(*row, *col, *n)?,
        };
    }

    for (i, row) in rows.iter().enumerate() {
        write_row(sheet, DATA_START_ROW + i as u32, row)?;
    }

    workbook.save(path)?;
    Ok(())
}

fn write_row(sheet: &mut Worksheet, r: u32, row: &EtaRow) -> Result<(), FatooraError> {
    sheet.write_string(r, 0, INVOICE_TYPE)?;
    sheet.write_string(r, 1, VAT_TYPE)?;
    sheet.write_string(r, 2, "")?; // schedule goods type
    match &row.invoice_number {
        InvoiceId::Text(s) => sheet.write_string(r, 3, s)?,
        InvoiceId::Number(n) => sheet.write_number(r, 3, *n as f64)?,
    };
    sheet.write_string(r, 4, &row.counterparty)?;
    sheet.write_string(r, 5, "")?; // counterparty tax registration
    sheet.write_string(r, 6, "")?; // counterparty file number
    sheet.write_string(r, 7, ADDRESS)?;
    sheet.write_string(r, 8, "")?; // national ID
    sheet.write_string(r, 9, "")?; // phone
    sheet.write_string(r, 10, &row.date)?;
    sheet.write_string(r, 11, PRODUCT_NAME)?;
    sheet.write_string(r, 12, "")?; // product code
    sheet.write_string(r, 13, STATEMENT_TYPE)?;
    sheet.write_string(r, 14, COMMODITY_TYPE)?;
    sheet.write_string(r, 15, UNIT_OF_MEASURE)?;
    sheet.write_number(r, 16, to_f64(row.net))?; // unit price
    sheet.write_string(r, 17, TAX_CATEGORY)?;
    sheet.write_number(r, 18, f64::from(QUANTITY))?;
    sheet.write_number(r, 19, to_f64(row.net))?; // total amount
    sheet.write_number(r, 20, to_f64(DISCOUNT))?;
    sheet.write_number(r, 21, to_f64(row.net))?; // net amount
    sheet.write_number(r, 22, to_f64(row.vat))?;
    sheet.write_number(r, 23, to_f64(row.gross))?;
    Ok(())
}

// Decimal's value range is a strict subset of f64's, so the conversion
// itself cannot fail; it may round past 15 significant digits.
fn to_f64(d: Decimal) -> f64 {
    d.to_f64().unwrap_or(0.0)
}
