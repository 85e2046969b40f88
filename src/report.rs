//! Rendering of a statistics summary for output.

use crate::error::Result;
use crate::money::Dollars;
use crate::record::UserId;
use crate::stats::StatisticsSummary;
use serde::Serialize;
use std::fmt;
use std::io::Write;

/// A summary paired with the user whose balance it reports.
#[derive(Debug, Clone, Copy)]
pub struct Report<'a> {
    summary: &'a StatisticsSummary,
    user_id: UserId,
}

/// One CSV output row. Monetary columns are already rounded to cents.
#[derive(Debug, Serialize)]
struct SummaryRow {
    total_credit: Dollars,
    total_debit: Dollars,
    autopays_started: u64,
    autopays_ended: u64,
    user_id: UserId,
    balance: Dollars,
}

impl<'a> Report<'a> {
    pub fn new(summary: &'a StatisticsSummary, user_id: UserId) -> Self {
        Report { summary, user_id }
    }

    fn row(&self) -> SummaryRow {
        SummaryRow {
            total_credit: Dollars(self.summary.total_credit),
            total_debit: Dollars(self.summary.total_debit),
            autopays_started: self.summary.autopays_started,
            autopays_ended: self.summary.autopays_ended,
            user_id: self.user_id,
            balance: Dollars(self.summary.target_user_balance),
        }
    }

    /// Writes the summary as a header row followed by a single data row.
    pub fn write_csv<W: Write>(&self, writer: W) -> Result<()> {
        let mut csv_writer = csv::Writer::from_writer(writer);
        csv_writer.serialize(self.row())?;
        csv_writer.flush()?;
        Ok(())
    }
}

impl fmt::Display for Report<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let row = self.row();
        writeln!(f, "total credit amount={}", row.total_credit)?;
        writeln!(f, "total debit amount={}", row.total_debit)?;
        writeln!(f, "autopays started={}", row.autopays_started)?;
        writeln!(f, "autopays ended={}", row.autopays_ended)?;
        writeln!(f, "balance for user {}={}", row.user_id, row.balance)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> StatisticsSummary {
        StatisticsSummary {
            total_credit: 10.005,
            total_debit: 40.0,
            autopays_started: 3,
            autopays_ended: 1,
            target_user_balance: -0.125,
        }
    }

    #[test]
    fn test_text_format() {
        let summary = sample();
        let text = Report::new(&summary, UserId::new(5)).to_string();

        assert_eq!(
            text,
            "total credit amount=10.01\n\
             total debit amount=40.00\n\
             autopays started=3\n\
             autopays ended=1\n\
             balance for user 5=-0.12\n"
        );
    }

    #[test]
    fn test_csv_format() {
        let summary = sample();
        let mut output = Vec::new();
        Report::new(&summary, UserId::new(u64::MAX))
            .write_csv(&mut output)
            .unwrap();

        let output_str = String::from_utf8(output).unwrap();
        let lines: Vec<&str> = output_str.lines().collect();
        assert_eq!(
            lines,
            vec![
                "total_credit,total_debit,autopays_started,autopays_ended,user_id,balance",
                "10.01,40.00,3,1,18446744073709551615,-0.12",
            ]
        );
    }

    #[test]
    fn test_empty_summary_renders_zeros() {
        let summary = StatisticsSummary::default();
        let text = Report::new(&summary, UserId::new(1)).to_string();

        assert!(text.contains("total credit amount=0.00"));
        assert!(text.contains("total debit amount=0.00"));
        assert!(text.contains("balance for user 1=0.00"));
    }
}
