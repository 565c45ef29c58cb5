//! Generates ETA upload files for every VAT return under `output/`.
//!
//! Mirrors the directory layout the tax engine writes: VAT returns are
//! read from `output/*_vat_return.json` and the upload files land in
//! `output/excel_uploads_eta/`. No flags; paths are fixed by convention.

use std::path::Path;
use std::process::ExitCode;

use fatoora::batch::run_batch;
use fatoora::eta::EtaConfig;

const INPUT_DIR: &str = "output";
const OUTPUT_DIR: &str = "output/excel_uploads_eta";
const SALES_TEMPLATE: &str = "templates/sales_upload.xlsx";
const PURCHASES_TEMPLATE: &str = "templates/purchases_upload.xlsx";

fn main() -> ExitCode {
    let config = EtaConfig {
        sales_template: SALES_TEMPLATE.into(),
        purchases_template: PURCHASES_TEMPLATE.into(),
        output_dir: OUTPUT_DIR.into(),
    };

    match run_batch(Path::new(INPUT_DIR), &config) {
        Ok(report) => {
            for period in &report.periods {
                println!("{period}");
            }
            println!("{report}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
