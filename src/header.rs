//! Fixed-size header at the start of every transaction log.
//!
//! Layout (big-endian):
//!
//! ```text
//! | 4 byte magic string | 1 byte version | 4 byte (u32) number of records |
//! ```

use crate::decoder::read_up_to;
use crate::error::{LedgerError, Result};
use byteorder::{BigEndian, ReadBytesExt};
use log::debug;
use std::borrow::Cow;
use std::fmt;
use std::io::Read;

/// Decoded log header.
///
/// The magic string is kept as raw bytes; checking it against an expected
/// marker is left to the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Header {
    magic: [u8; Header::MAGIC_LEN],
    version: u8,
    num_records: u32,
}

impl Header {
    /// Encoded size of a header in bytes.
    pub const ENCODED_LEN: usize = 9;

    /// Size of the magic string prefix.
    pub const MAGIC_LEN: usize = 4;

    pub fn new(magic: [u8; Self::MAGIC_LEN], version: u8, num_records: u32) -> Self {
        Header {
            magic,
            version,
            num_records,
        }
    }

    /// Decodes a header from exactly [`Header::ENCODED_LEN`] bytes.
    pub fn decode(bytes: &[u8]) -> Result<Self> {
        if bytes.len() != Self::ENCODED_LEN {
            return Err(LedgerError::MalformedHeader {
                expected: Self::ENCODED_LEN,
                actual: bytes.len(),
            });
        }

        let mut magic = [0u8; Self::MAGIC_LEN];
        magic.copy_from_slice(&bytes[..Self::MAGIC_LEN]);

        let mut rest = &bytes[Self::MAGIC_LEN..];
        let version = rest.read_u8()?;
        let num_records = rest.read_u32::<BigEndian>()?;

        Ok(Header::new(magic, version, num_records))
    }

    /// Reads and decodes the header from the front of a stream.
    ///
    /// A stream shorter than the header yields `MalformedHeader` carrying the
    /// number of bytes that were actually available.
    pub fn read_from<R: Read>(reader: &mut R) -> Result<Self> {
        let mut buf = [0u8; Self::ENCODED_LEN];
        let read = read_up_to(reader, &mut buf)?;
        let header = Self::decode(&buf[..read])?;
        debug!("Decoded {}", header);
        Ok(header)
    }

    /// Encodes this header into its 9-byte wire form.
    pub fn encode(&self) -> [u8; Self::ENCODED_LEN] {
        let mut buf = [0u8; Self::ENCODED_LEN];
        buf[..Self::MAGIC_LEN].copy_from_slice(&self.magic);
        buf[Self::MAGIC_LEN] = self.version;
        buf[Self::MAGIC_LEN + 1..].copy_from_slice(&self.num_records.to_be_bytes());
        buf
    }

    pub fn magic(&self) -> &[u8; Self::MAGIC_LEN] {
        &self.magic
    }

    /// Magic bytes interpreted as text, with invalid sequences replaced.
    pub fn magic_str(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.magic)
    }

    pub fn version(&self) -> u8 {
        self.version
    }

    /// Number of records declared to follow the header.
    pub fn num_records(&self) -> u32 {
        self.num_records
    }
}

impl fmt::Display for Header {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "header magic={:?} version={} records={}",
            self.magic_str(),
            self.version,
            self.num_records
        )
    }
}
