//! # Transaction Log Statistics
//!
//! Decodes a binary transaction log (a fixed 9-byte header followed by
//! variable-length, tag-dispatched records) and folds it into summary
//! statistics: credit and debit totals, autopay counts and one user's
//! balance.
//!
//! ## Design Principles
//!
//! - **Fail fast**: any malformed byte aborts the whole log; no partial results
//! - **Streaming decode**: records are folded as they are read, never buffered
//! - **Shape-safe records**: autopay records have no amount field at all
//! - **Pinned rounding**: output uses round-half-to-even on the exact float value
//!
//! ## Example
//!
//! ```no_run
//! use txlog_stats::{process_log, Report, UserId};
//! use std::fs::File;
//! use std::io::BufReader;
//!
//! let file = BufReader::new(File::open("txnlog.dat").unwrap());
//! let target = UserId::new(2456938384156277127);
//! let log = process_log(file, target).unwrap();
//! print!("{}", Report::new(&log.summary, target));
//! ```

pub mod cli;
pub mod decoder;
pub mod engine;
pub mod error;
pub mod header;
pub mod money;
pub mod record;
pub mod record_type;
pub mod report;
pub mod stats;

pub use decoder::{RecordDecoder, Records};
pub use engine::{process_log, summarize_records, LogSummary};
pub use error::{LedgerError, Result};
pub use header::Header;
pub use money::Dollars;
pub use record::{AutopayRecord, MonetaryRecord, Record, UserId};
pub use record_type::{RecordType, UnknownRecordType};
pub use report::Report;
pub use stats::{fold, LedgerEntry, StatisticsAggregator, StatisticsSummary};
