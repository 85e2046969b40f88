//! Sequential record decoder.
//!
//! Records are variable length: the tag byte decides whether 20 or 12 payload
//! bytes follow, so decoding is strictly in stream order. The decoder holds no
//! decoded data between calls, only its position in the stream.

use crate::error::{LedgerError, Result};
use crate::record::{AutopayRecord, MonetaryRecord, Record, UserId};
use crate::record_type::{RecordType, UnknownRecordType};
use byteorder::{BigEndian, ReadBytesExt};
use log::{debug, trace};
use std::io::{self, ErrorKind, Read};

/// Reads until `buf` is full or the reader is exhausted.
///
/// Returns the number of bytes read, which is less than `buf.len()` only at
/// end of input.
pub(crate) fn read_up_to<R: Read + ?Sized>(reader: &mut R, buf: &mut [u8]) -> io::Result<usize> {
    let mut filled = 0;
    while filled < buf.len() {
        match reader.read(&mut buf[filled..]) {
            Ok(0) => break,
            Ok(n) => filled += n,
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        }
    }
    Ok(filled)
}

/// Decodes records one at a time from a byte stream.
///
/// After an error the stream is left wherever the failing read stopped; the
/// decoder does not try to resynchronise.
pub struct RecordDecoder<R> {
    reader: R,

    /// Records decoded so far.
    index: u64,

    /// Absolute byte offset of the next unread byte.
    offset: u64,
}

impl<R: Read> RecordDecoder<R> {
    /// Creates a decoder positioned at byte offset zero.
    pub fn new(reader: R) -> Self {
        Self::with_offset(reader, 0)
    }

    /// Creates a decoder whose error offsets start at `offset`, typically the
    /// size of the header that has already been consumed.
    pub fn with_offset(reader: R, offset: u64) -> Self {
        RecordDecoder {
            reader,
            index: 0,
            offset,
        }
    }

    /// Decodes the next record.
    pub fn next_record(&mut self) -> Result<Record> {
        let tag_offset = self.offset;
        let mut tag = [0u8; 1];
        if self.fill(&mut tag)? == 0 {
            return Err(LedgerError::EndOfStream {
                index: self.index,
                offset: tag_offset,
            });
        }
        trace!("Record {}: tag byte {:#04x} at offset {}", self.index, tag[0], tag_offset);

        let record_type = RecordType::from_byte(tag[0]).map_err(|UnknownRecordType(tag)| {
            LedgerError::UnknownRecordType {
                tag,
                offset: tag_offset,
            }
        })?;

        let expected = record_type.payload_len();
        let mut storage = [0u8; RecordType::MONETARY_PAYLOAD_LEN];
        let payload = &mut storage[..expected];
        let actual = self.fill(payload)?;
        if actual < expected {
            return Err(LedgerError::IncompleteRecord {
                index: self.index,
                expected,
                actual,
            });
        }

        let record = decode_payload(record_type, payload)?;
        debug!("Record {}: {:?}", self.index, record);
        self.index += 1;

        Ok(record)
    }

    /// Reads until `buf` is full or the reader is exhausted, advancing the
    /// offset by every byte received, including those read before a failure.
    fn fill(&mut self, buf: &mut [u8]) -> Result<usize> {
        let mut filled = 0;
        while filled < buf.len() {
            match self.reader.read(&mut buf[filled..]) {
                Ok(0) => break,
                Ok(n) => {
                    filled += n;
                    self.offset += n as u64;
                }
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(source) => {
                    return Err(LedgerError::RecordRead {
                        index: self.index,
                        offset: self.offset,
                        source,
                    })
                }
            }
        }
        Ok(filled)
    }

    /// Iterates over at most `count` further records.
    ///
    /// The iterator ends after yielding the first error.
    pub fn records(&mut self, count: u64) -> Records<'_, R> {
        Records {
            decoder: self,
            remaining: count,
        }
    }

    /// Number of records decoded so far.
    pub fn index(&self) -> u64 {
        self.index
    }

    /// Absolute byte offset of the next unread byte.
    pub fn offset(&self) -> u64 {
        self.offset
    }

    /// Returns the underlying reader, positioned after the last byte consumed.
    pub fn into_inner(self) -> R {
        self.reader
    }
}

/// Decodes a full payload whose length already matches `record_type`.
fn decode_payload(record_type: RecordType, payload: &[u8]) -> Result<Record> {
    let mut cursor = payload;
    let timestamp = cursor.read_u32::<BigEndian>()?;
    let mut id_bytes = [0u8; UserId::ENCODED_LEN];
    cursor.read_exact(&mut id_bytes)?;
    let user_id = UserId::from_be_bytes(id_bytes);

    let record = match record_type {
        RecordType::Debit | RecordType::Credit => {
            let monetary = MonetaryRecord {
                timestamp,
                user_id,
                amount: cursor.read_f64::<BigEndian>()?,
            };
            if record_type == RecordType::Debit {
                Record::Debit(monetary)
            } else {
                Record::Credit(monetary)
            }
        }
        RecordType::StartAutopay => Record::StartAutopay(AutopayRecord { timestamp, user_id }),
        RecordType::EndAutopay => Record::EndAutopay(AutopayRecord { timestamp, user_id }),
    };

    Ok(record)
}

/// Iterator returned by [`RecordDecoder::records`].
pub struct Records<'a, R> {
    decoder: &'a mut RecordDecoder<R>,
    remaining: u64,
}

impl<R: Read> Iterator for Records<'_, R> {
    type Item = Result<Record>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let result = self.decoder.next_record();
        self.remaining = if result.is_ok() { self.remaining - 1 } else { 0 };
        Some(result)
    }
}
