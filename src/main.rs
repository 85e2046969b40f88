//! Transaction log statistics CLI
//!
//! Decodes a binary transaction log and prints aggregate credit and debit
//! totals, autopay counts and the balance of one user.
//!
//! # Usage
//!
//! ```bash
//! cargo run -- --transaction-file txnlog.dat --user-id 2456938384156277127
//! ```
//!
//! # Environment Variables
//!
//! - `RUST_LOG`: Set to `debug` or `warn` to control logging verbosity

use std::fs::File;
use std::io::{self, BufReader, Write};
use std::process;
use txlog_stats::cli::Cli;
use txlog_stats::{summarize_records, Header, Report, Result};

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse_args();

    let mut reader = BufReader::new(File::open(&cli.transaction_file)?);
    let header = Header::read_from(&mut reader)?;
    cli.check_magic(&header)?;
    let log = summarize_records(header, reader, cli.user_id)?;

    if !log.fully_consumed() {
        eprintln!(
            "Warning: file not fully consumed. {} bytes were unprocessed.",
            log.trailing_bytes
        );
    }

    let report = Report::new(&log.summary, cli.user_id);
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    if cli.csv {
        report.write_csv(handle)?;
    } else {
        write!(handle, "{}", report)?;
    }

    Ok(())
}
