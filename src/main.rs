//! Cash App → Crypto.com Tax converter CLI
//!
//! Reads `./cash_app_report_btc.csv` and writes `./out.csv` in the working
//! directory. Any failure aborts the run with a non-zero exit status.
//!
//! # Usage
//!
//! ```bash
//! cargo run
//! ```
//!
//! # Environment Variables
//!
//! - `RUST_LOG`: Set to `info` or `debug` to control logging verbosity

use cashapp_tax_export::converter::{self, INPUT_PATH, OUTPUT_PATH};
use cashapp_tax_export::Result;
use std::path::Path;
use std::process;

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run() -> Result<()> {
    converter::convert_files(Path::new(INPUT_PATH), Path::new(OUTPUT_PATH))?;
    Ok(())
}
