//! Statistics fold over decoded records.
//!
//! Totals are exact `f64` sums in record order; rounding happens only when a
//! summary is rendered (see [`crate::money`]).

use crate::error::{LedgerError, Result};
use crate::record::{Record, UserId};
use crate::record_type::RecordType;
use log::trace;

/// View of a record as the aggregator needs it.
///
/// The aggregator validates amounts through this trait instead of relying on
/// the shape guarantees of [`Record`].
pub trait LedgerEntry {
    fn record_type(&self) -> RecordType;

    fn user_id(&self) -> UserId;

    /// Dollar amount, if the entry carries one.
    fn amount(&self) -> Option<f64>;
}

impl LedgerEntry for Record {
    fn record_type(&self) -> RecordType {
        Record::record_type(self)
    }

    fn user_id(&self) -> UserId {
        Record::user_id(self)
    }

    fn amount(&self) -> Option<f64> {
        Record::amount(self)
    }
}

impl<T: LedgerEntry + ?Sized> LedgerEntry for &T {
    fn record_type(&self) -> RecordType {
        (**self).record_type()
    }

    fn user_id(&self) -> UserId {
        (**self).user_id()
    }

    fn amount(&self) -> Option<f64> {
        (**self).amount()
    }
}

/// Final statistics for one log.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct StatisticsSummary {
    pub total_credit: f64,
    pub total_debit: f64,
    pub autopays_started: u64,
    pub autopays_ended: u64,

    /// Credits minus debits for the target user only.
    pub target_user_balance: f64,
}

/// Running totals, fed one entry at a time.
///
/// # Example
///
/// ```
/// use txlog_stats::{MonetaryRecord, Record, StatisticsAggregator, UserId};
///
/// let mut aggregator = StatisticsAggregator::new(UserId::new(5));
/// aggregator
///     .push(&Record::Credit(MonetaryRecord {
///         timestamp: 1000,
///         user_id: UserId::new(5),
///         amount: 100.0,
///     }))
///     .unwrap();
/// let summary = aggregator.finish();
/// assert_eq!(summary.target_user_balance, 100.0);
/// ```
#[derive(Debug, Clone)]
pub struct StatisticsAggregator {
    target: UserId,
    totals: StatisticsSummary,
    index: u64,
}

impl StatisticsAggregator {
    /// Creates an aggregator reporting the balance of `target`.
    pub fn new(target: UserId) -> Self {
        StatisticsAggregator {
            target,
            totals: StatisticsSummary::default(),
            index: 0,
        }
    }

    /// Folds one entry into the running totals.
    pub fn push<E: LedgerEntry + ?Sized>(&mut self, entry: &E) -> Result<()> {
        let record_type = entry.record_type();
        let is_target = entry.user_id() == self.target;

        match record_type {
            RecordType::Debit => {
                let amount = self.require_amount(entry, record_type)?;
                self.totals.total_debit += amount;
                if is_target {
                    self.totals.target_user_balance -= amount;
                }
            }
            RecordType::Credit => {
                let amount = self.require_amount(entry, record_type)?;
                self.totals.total_credit += amount;
                if is_target {
                    self.totals.target_user_balance += amount;
                }
            }
            RecordType::StartAutopay => self.totals.autopays_started += 1,
            RecordType::EndAutopay => self.totals.autopays_ended += 1,
        }

        trace!("Folded entry {} ({})", self.index, record_type);
        self.index += 1;
        Ok(())
    }

    fn require_amount<E: LedgerEntry + ?Sized>(
        &self,
        entry: &E,
        record_type: RecordType,
    ) -> Result<f64> {
        entry.amount().ok_or(LedgerError::MissingAmount {
            index: self.index,
            record_type,
        })
    }

    /// Number of entries folded so far.
    pub fn folded(&self) -> u64 {
        self.index
    }

    /// Finalizes the running totals into a summary.
    pub fn finish(self) -> StatisticsSummary {
        self.totals
    }
}

/// Folds a sequence of entries into a summary for `target`.
///
/// Pure and deterministic: the same entries and target always produce a
/// bit-identical summary.
pub fn fold<I>(records: I, target: UserId) -> Result<StatisticsSummary>
where
    I: IntoIterator,
    I::Item: LedgerEntry,
{
    let mut aggregator = StatisticsAggregator::new(target);
    for record in records {
        aggregator.push(&record)?;
    }
    Ok(aggregator.finish())
}
