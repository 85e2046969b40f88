//! Wire tags for the four record kinds.

use std::fmt;
use thiserror::Error;

/// Tag byte did not map to any [`RecordType`].
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("no record type found for value {0}")]
pub struct UnknownRecordType(pub u8);

/// The closed set of record kinds that may appear in a log.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecordType {
    Debit,
    Credit,
    StartAutopay,
    EndAutopay,
}

impl RecordType {
    /// Payload length, excluding the tag, of a debit or credit record.
    pub const MONETARY_PAYLOAD_LEN: usize = 20;

    /// Payload length, excluding the tag, of an autopay record.
    pub const AUTOPAY_PAYLOAD_LEN: usize = 12;

    /// Resolves a wire tag.
    pub fn from_byte(byte: u8) -> Result<Self, UnknownRecordType> {
        match byte {
            0x00 => Ok(RecordType::Debit),
            0x01 => Ok(RecordType::Credit),
            0x02 => Ok(RecordType::StartAutopay),
            0x03 => Ok(RecordType::EndAutopay),
            other => Err(UnknownRecordType(other)),
        }
    }

    /// Returns the wire tag for this kind.
    pub fn as_byte(self) -> u8 {
        match self {
            RecordType::Debit => 0x00,
            RecordType::Credit => 0x01,
            RecordType::StartAutopay => 0x02,
            RecordType::EndAutopay => 0x03,
        }
    }

    /// Returns `true` for kinds that carry a dollar amount.
    pub fn is_monetary(self) -> bool {
        matches!(self, RecordType::Debit | RecordType::Credit)
    }

    /// Number of bytes following the tag byte on the wire.
    pub fn payload_len(self) -> usize {
        if self.is_monetary() {
            Self::MONETARY_PAYLOAD_LEN
        } else {
            Self::AUTOPAY_PAYLOAD_LEN
        }
    }
}

impl TryFrom<u8> for RecordType {
    type Error = UnknownRecordType;

    fn try_from(byte: u8) -> Result<Self, Self::Error> {
        RecordType::from_byte(byte)
    }
}

impl fmt::Display for RecordType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            RecordType::Debit => "Debit",
            RecordType::Credit => "Credit",
            RecordType::StartAutopay => "StartAutopay",
            RecordType::EndAutopay => "EndAutopay",
        };
        f.write_str(name)
    }
}
