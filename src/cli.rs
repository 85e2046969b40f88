//! Command-line arguments for the `txlog-stats` binary.

use crate::error::{LedgerError, Result};
use crate::header::Header;
use crate::record::UserId;
use clap::Parser;
use std::path::PathBuf;

/// User reported when `--user-id` is not given.
pub const DEFAULT_USER_ID: UserId = UserId::new(2456938384156277127);

/// Magic string expected at the start of every log.
pub const DEFAULT_MAGIC: &str = "MPS7";

/// Decode a binary transaction log and print summary statistics
#[derive(Parser, Debug)]
#[command(name = "txlog-stats")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Path to the transaction log
    #[arg(short = 'f', long = "transaction-file")]
    pub transaction_file: PathBuf,

    /// User whose balance is reported (negative values are read as two's complement)
    #[arg(long, default_value_t = DEFAULT_USER_ID, allow_hyphen_values = true)]
    pub user_id: UserId,

    /// Expected 4-byte magic string
    #[arg(long, default_value = DEFAULT_MAGIC, value_parser = parse_magic)]
    pub magic: [u8; Header::MAGIC_LEN],

    /// Print the summary as CSV instead of key=value lines
    #[arg(long)]
    pub csv: bool,
}

/// Accepts exactly [`Header::MAGIC_LEN`] bytes.
fn parse_magic(value: &str) -> std::result::Result<[u8; Header::MAGIC_LEN], String> {
    value.as_bytes().try_into().map_err(|_| {
        format!(
            "magic string must be {} bytes, got {}",
            Header::MAGIC_LEN,
            value.len()
        )
    })
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }

    /// Checks a decoded header against the expected magic string.
    pub fn check_magic(&self, header: &Header) -> Result<()> {
        if header.magic() != &self.magic {
            return Err(LedgerError::MagicMismatch {
                expected: String::from_utf8_lossy(&self.magic).into_owned(),
                actual: header.magic_str().into_owned(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli =
            Cli::try_parse_from(["txlog-stats", "--transaction-file", "txnlog.dat"]).unwrap();

        assert_eq!(cli.transaction_file, PathBuf::from("txnlog.dat"));
        assert_eq!(cli.user_id, DEFAULT_USER_ID);
        assert_eq!(&cli.magic, b"MPS7");
        assert!(!cli.csv);
    }

    #[test]
    fn test_negative_user_id() {
        let cli = Cli::try_parse_from([
            "txlog-stats",
            "-f",
            "log.dat",
            "--user-id",
            "-2",
            "--csv",
        ])
        .unwrap();

        assert_eq!(cli.user_id.as_signed(), -2);
        assert!(cli.csv);
    }

    #[test]
    fn test_magic_must_be_four_bytes() {
        for magic in ["MPS", "MPS77", ""] {
            assert!(
                Cli::try_parse_from(["txlog-stats", "-f", "log.dat", "--magic", magic]).is_err(),
                "accepted magic {:?}",
                magic
            );
        }

        let cli = Cli::try_parse_from(["txlog-stats", "-f", "log.dat", "--magic", "ABCD"]).unwrap();
        assert_eq!(&cli.magic, b"ABCD");
    }

    #[test]
    fn test_file_is_required() {
        assert!(Cli::try_parse_from(["txlog-stats"]).is_err());
    }

    #[test]
    fn test_check_magic() {
        let cli = Cli::try_parse_from(["txlog-stats", "-f", "log.dat"]).unwrap();

        assert!(cli.check_magic(&Header::new(*b"MPS7", 1, 0)).is_ok());
        match cli.check_magic(&Header::new(*b"ABCD", 1, 0)) {
            Err(LedgerError::MagicMismatch { expected, actual }) => {
                assert_eq!(expected, "MPS7");
                assert_eq!(actual, "ABCD");
            }
            other => panic!("Expected MagicMismatch, got {:?}", other),
        }
    }
}
