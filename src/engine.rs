//! End-to-end decoding of one transaction log.
//!
//! Reads the header, streams the declared number of records through the
//! statistics aggregator without buffering them, then counts whatever bytes
//! remain after the last declared record.

use crate::decoder::RecordDecoder;
use crate::error::Result;
use crate::header::Header;
use crate::record::UserId;
use crate::stats::{StatisticsAggregator, StatisticsSummary};
use log::{debug, warn};
use std::io::{self, Read};

/// Outcome of decoding a complete log.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LogSummary {
    pub header: Header,
    pub summary: StatisticsSummary,

    /// Bytes found after the last declared record. Non-zero is a warning,
    /// not an error.
    pub trailing_bytes: u64,
}

impl LogSummary {
    /// Returns `true` if the stream ended exactly after the last record.
    pub fn fully_consumed(&self) -> bool {
        self.trailing_bytes == 0
    }
}

/// Decodes a log from an already-open reader and summarizes it for `target`.
///
/// Any decoding error aborts the whole log; there is no partial summary. The
/// magic string is not checked here.
pub fn process_log<R: Read>(mut reader: R, target: UserId) -> Result<LogSummary> {
    let header = Header::read_from(&mut reader)?;
    summarize_records(header, reader, target)
}

/// Decodes the records declared by an already-read `header`.
///
/// `reader` must be positioned just after the header. Callers that need to
/// inspect the header before committing to the records use this instead of
/// [`process_log`].
pub fn summarize_records<R: Read>(header: Header, reader: R, target: UserId) -> Result<LogSummary> {
    let mut decoder = RecordDecoder::with_offset(reader, Header::ENCODED_LEN as u64);
    let mut aggregator = StatisticsAggregator::new(target);
    for record in decoder.records(u64::from(header.num_records())) {
        aggregator.push(&record?)?;
    }
    debug!(
        "Folded {} records, {} bytes consumed",
        aggregator.folded(),
        decoder.offset()
    );
    let summary = aggregator.finish();

    let mut rest = decoder.into_inner();
    let trailing_bytes = io::copy(&mut rest, &mut io::sink())?;
    if trailing_bytes > 0 {
        warn!(
            "File not fully consumed: {} bytes after the last declared record",
            trailing_bytes
        );
    }

    Ok(LogSummary {
        header,
        summary,
        trailing_bytes,
    })
}
