//! Streams export rows through the mapper into the import file.
//!
//! Processing is a single pass: each row is read, mapped and written before
//! the next one is read. The first failure stops the run; rows already
//! written are flushed when the writer is dropped.

use crate::error::{ConvertError, Result};
use crate::mapper;
use crate::record::{DestinationRecord, SourceRecord};
use crate::transaction::TransactionKind;
use csv::{ReaderBuilder, Trim};
use log::{debug, error, info};
use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

/// Cash App export read by the binary, relative to the working directory.
pub const INPUT_PATH: &str = "./cash_app_report_btc.csv";

/// Import file written by the binary, relative to the working directory.
pub const OUTPUT_PATH: &str = "./out.csv";

/// Row counts of a finished run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Summary {
    pub sells: usize,
    pub rebates: usize,
}

impl Summary {
    /// Total rows written, excluding the header.
    pub fn rows(&self) -> usize {
        self.sells + self.rebates
    }

    fn record(&mut self, kind: TransactionKind) {
        match kind {
            TransactionKind::Sell => self.sells += 1,
            TransactionKind::Rebate => self.rebates += 1,
        }
    }
}

/// Converts a Cash App export read from `reader` into an import file on `writer`.
///
/// The header row is always written, even for an empty export.
pub fn convert<R: Read, W: Write>(reader: R, writer: W) -> Result<Summary> {
    // Field values are taken verbatim; only header names are trimmed.
    let mut csv_reader = ReaderBuilder::new()
        .trim(Trim::Headers)
        .from_reader(reader);
    let mut csv_writer = csv::Writer::from_writer(writer);

    csv_writer.write_record(DestinationRecord::HEADERS)?;

    let mut summary = Summary::default();
    for (row_idx, result) in csv_reader.deserialize::<SourceRecord>().enumerate() {
        let row = row_idx + 2; // 1-indexed, accounting for header row

        let record = result?;
        let mapped = mapper::map(&record).map_err(|source| {
            error!("Row {}: {}", row, source);
            ConvertError::InvalidRecord { row, source }
        })?;

        debug!(
            "Row {}: {} {:?} -> {}",
            row,
            record.transaction_id,
            record.transaction_type,
            mapped.kind.label()
        );

        csv_writer.write_record(mapped.to_record())?;
        summary.record(mapped.kind);
    }

    csv_writer.flush()?;
    Ok(summary)
}

/// Converts the export at `input` into a newly created import file at `output`.
///
/// `output` is created (or truncated) only after `input` has been opened.
pub fn convert_files(input: &Path, output: &Path) -> Result<Summary> {
    let source = BufReader::new(File::open(input)?);
    let destination = BufWriter::new(File::create(output)?);

    info!("Converting {} into {}", input.display(), output.display());
    let summary = convert(source, destination)?;
    info!(
        "Wrote {} rows ({} sell, {} rebate)",
        summary.rows(),
        summary.sells,
        summary.rebates
    );

    Ok(summary)
}
