//! Decoded record models.
//!
//! A record is a tagged union over two payload shapes: monetary records
//! (debit and credit) carry an amount, autopay records do not. The amount is
//! structurally absent from autopay records rather than optional.

use crate::error::LedgerError;
use crate::record_type::RecordType;
use byteorder::{BigEndian, WriteBytesExt};
use serde::Serialize;
use std::fmt;
use std::io::{self, Write};
use std::str::FromStr;

/// Identifier of the user a record belongs to.
///
/// Stored as the unsigned big-endian value of the 8 raw id bytes. Equality is
/// bitwise, so ids compare the same whether a producer thought of them as
/// signed or unsigned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize)]
#[serde(transparent)]
pub struct UserId(u64);

impl UserId {
    /// Number of raw bytes an id occupies on the wire.
    pub const ENCODED_LEN: usize = 8;

    pub const fn new(value: u64) -> Self {
        UserId(value)
    }

    pub fn from_be_bytes(bytes: [u8; Self::ENCODED_LEN]) -> Self {
        UserId(u64::from_be_bytes(bytes))
    }

    pub fn to_be_bytes(self) -> [u8; Self::ENCODED_LEN] {
        self.0.to_be_bytes()
    }

    pub fn get(self) -> u64 {
        self.0
    }

    /// Two's-complement reading of the same bytes.
    pub fn as_signed(self) -> i64 {
        self.0 as i64
    }
}

impl FromStr for UserId {
    type Err = LedgerError;

    /// Accepts an unsigned decimal id, or a negative one whose two's-complement
    /// bits are taken as the id.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if let Ok(value) = trimmed.parse::<u64>() {
            return Ok(UserId(value));
        }
        trimmed
            .parse::<i64>()
            .map(|value| UserId(value as u64))
            .map_err(|_| LedgerError::InvalidUserId(trimmed.to_string()))
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Payload of a debit or credit record.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MonetaryRecord {
    /// Unix timestamp in seconds
    pub timestamp: u32,

    pub user_id: UserId,

    /// Amount in dollars
    pub amount: f64,
}

/// Payload of a start or end autopay record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AutopayRecord {
    /// Unix timestamp in seconds
    pub timestamp: u32,

    pub user_id: UserId,
}

/// A single decoded log record.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Record {
    Debit(MonetaryRecord),
    Credit(MonetaryRecord),
    StartAutopay(AutopayRecord),
    EndAutopay(AutopayRecord),
}

impl Record {
    pub fn record_type(&self) -> RecordType {
        match self {
            Record::Debit(_) => RecordType::Debit,
            Record::Credit(_) => RecordType::Credit,
            Record::StartAutopay(_) => RecordType::StartAutopay,
            Record::EndAutopay(_) => RecordType::EndAutopay,
        }
    }

    pub fn timestamp(&self) -> u32 {
        match self {
            Record::Debit(m) | Record::Credit(m) => m.timestamp,
            Record::StartAutopay(a) | Record::EndAutopay(a) => a.timestamp,
        }
    }

    pub fn user_id(&self) -> UserId {
        match self {
            Record::Debit(m) | Record::Credit(m) => m.user_id,
            Record::StartAutopay(a) | Record::EndAutopay(a) => a.user_id,
        }
    }

    /// Dollar amount, present only for debit and credit records.
    pub fn amount(&self) -> Option<f64> {
        match self {
            Record::Debit(m) | Record::Credit(m) => Some(m.amount),
            Record::StartAutopay(_) | Record::EndAutopay(_) => None,
        }
    }

    /// Writes the wire form of this record, tag byte first.
    pub fn encode_into<W: Write>(&self, writer: &mut W) -> io::Result<()> {
        writer.write_u8(self.record_type().as_byte())?;
        writer.write_u32::<BigEndian>(self.timestamp())?;
        writer.write_all(&self.user_id().to_be_bytes())?;
        if let Some(amount) = self.amount() {
            writer.write_f64::<BigEndian>(amount)?;
        }
        Ok(())
    }
}
