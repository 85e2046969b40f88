//! Dollar amount presentation.
//!
//! Sums are accumulated as `f64`. Presentation rounds to two decimal places
//! with round-half-to-even, applied to the exact binary value of the float
//! rather than to its shortest decimal spelling.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Serialize, Serializer};
use std::fmt;

/// A dollar amount that displays with exactly two decimal places.
///
/// # Examples
///
/// ```
/// use txlog_stats::Dollars;
///
/// assert_eq!(Dollars(60.0).to_string(), "60.00");
/// assert_eq!(Dollars(0.125).to_string(), "0.12");
/// assert_eq!(Dollars(0.375).to_string(), "0.38");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct Dollars(pub f64);

impl Dollars {
    /// Number of decimal places shown.
    pub const SCALE: u32 = 2;

    /// Rounds to cents using round-half-to-even.
    ///
    /// Returns `None` for values a `Decimal` cannot hold (NaN, infinities and
    /// magnitudes beyond roughly 7.9e28). A zero result is always positive.
    pub fn to_decimal(self) -> Option<Decimal> {
        let mut rounded = Decimal::from_f64_retain(self.0)?
            .round_dp_with_strategy(Self::SCALE, RoundingStrategy::MidpointNearestEven);
        if rounded.is_zero() {
            rounded.set_sign_positive(true);
        }
        rounded.rescale(Self::SCALE);
        Some(rounded)
    }
}

impl fmt::Display for Dollars {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.to_decimal() {
            Some(decimal) => write!(f, "{:.2}", decimal),
            None => write!(f, "{:.2}", self.0),
        }
    }
}

impl Serialize for Dollars {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_pads_to_two_places() {
        assert_eq!(Dollars(0.0).to_string(), "0.00");
        assert_eq!(Dollars(100.0).to_string(), "100.00");
        assert_eq!(Dollars(1.5).to_string(), "1.50");
        assert_eq!(Dollars(-40.0).to_string(), "-40.00");
    }

    #[test]
    fn test_exact_ties_round_to_even() {
        // Exactly representable in binary, so these are true midpoints.
        assert_eq!(Dollars(0.125).to_string(), "0.12");
        assert_eq!(Dollars(0.375).to_string(), "0.38");
        assert_eq!(Dollars(0.625).to_string(), "0.62");
        assert_eq!(Dollars(0.875).to_string(), "0.88");
        assert_eq!(Dollars(-0.125).to_string(), "-0.12");
        assert_eq!(Dollars(2.5).to_string(), "2.50");
    }

    #[test]
    fn test_rounds_stored_value_not_literal() {
        // 10.005 is stored as 10.00500000000000078..., above the midpoint.
        let stored = Decimal::from_f64_retain(10.005).unwrap();
        assert!(stored > Decimal::from_str("10.005").unwrap());
        assert_eq!(Dollars(10.005).to_string(), "10.01");

        // 1.005 and 2.675 are stored just below their midpoints.
        assert_eq!(Dollars(1.005).to_string(), "1.00");
        assert_eq!(Dollars(2.675).to_string(), "2.67");

        assert_eq!(Dollars(12.955).to_string(), "12.96");
        assert_eq!(Dollars(12.954).to_string(), "12.95");
    }

    #[test]
    fn test_no_negative_zero() {
        assert_eq!(Dollars(-0.0).to_string(), "0.00");
        assert_eq!(Dollars(-0.001).to_string(), "0.00");
        assert_eq!(Dollars(-0.004).to_string(), "0.00");
    }

    #[test]
    fn test_out_of_range_falls_back() {
        assert!(Dollars(f64::NAN).to_decimal().is_none());
        assert_eq!(Dollars(f64::NAN).to_string(), "NaN");
        assert_eq!(Dollars(f64::INFINITY).to_string(), "inf");
        assert_eq!(Dollars(1e30).to_string(), format!("{:.2}", 1e30));
    }

    #[test]
    fn test_accumulated_sum_renders_cleanly() {
        let sum = 0.1 + 0.2;
        assert_ne!(sum, 0.3);
        assert_eq!(Dollars(sum).to_string(), "0.30");
    }
}
