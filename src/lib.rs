//! # Cash App → Crypto.com Tax converter
//!
//! Converts a Cash App Bitcoin transaction export into the CSV import format
//! of Crypto.com Tax.
//!
//! ## Design Principles
//!
//! - **Pure mapping**: [`mapper::map`] turns one export row into one import row
//!   and performs no I/O
//! - **Fail fast**: the first malformed row or unknown transaction type aborts
//!   the run; nothing is skipped or guessed
//! - **Streaming processing**: one row in flight, output in input order
//! - **Canonical numbers**: amounts are written as the shortest decimal text
//!   of their `f64` value
//!
//! ## Example
//!
//! ```
//! use cashapp_tax_export::convert;
//! use std::io::Cursor;
//!
//! let csv = "Transaction ID,Date,Transaction Type,Currency,Amount,Fee,Net Amount,\
//! Asset Type,Asset Price,Asset Amount,Status,Notes,Name of sender/receiver,Account\n\
//! a1,2023-05-01 14:30:00 UTC,Bitcoin Boost,USD,$5.00,$0.00,$5.00,BTC,\
//! \"$25,000.00\",0.0002,COMPLETE,,,Bitcoin\n";
//!
//! let mut output = Vec::new();
//! convert(Cursor::new(csv), &mut output).unwrap();
//! assert!(String::from_utf8(output)
//!     .unwrap()
//!     .ends_with("05/01/2023 14:30:00,rebate,BTC,0.0002,5,,,,,,\n"));
//! ```

pub mod converter;
pub mod error;
pub mod mapper;
pub mod number;
pub mod record;
pub mod transaction;

pub use converter::{convert, convert_files, Summary};
pub use error::{ConvertError, MappingError, ParseNumberError, Result};
pub use number::Number;
pub use record::{Currency, DestinationRecord, Leg, SourceRecord};
pub use transaction::TransactionKind;
