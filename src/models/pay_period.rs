//! Pay period model.
//!
//! This module contains the [`PayPeriod`] type that defines the date range
//! for compensation calculations.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A pay period with an inclusive date range.
///
/// # Example
///
/// ```
/// use roster_engine::models::PayPeriod;
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let period = PayPeriod {
///     start_date: NaiveDate::from_ymd_opt(2026, 1, 1).unwrap(),
///     end_date: NaiveDate::from_ymd_opt(2026, 1, 10).unwrap(),
/// };
/// assert!(period.contains_date(NaiveDate::from_ymd_opt(2026, 1, 5).unwrap()));
/// assert_eq!(period.days_in_period(), Decimal::new(10, 0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayPeriod {
    /// The start date of the pay period (inclusive).
    pub start_date: NaiveDate,
    /// The end date of the pay period (inclusive).
    pub end_date: NaiveDate,
}

impl PayPeriod {
    /// Checks if a given date falls within this pay period.
    ///
    /// The check is inclusive of both start and end dates.
    pub fn contains_date(&self, date: NaiveDate) -> bool {
        date >= self.start_date && date <= self.end_date
    }

    /// Returns the number of calendar days in the period, inclusive of
    /// both endpoints. Salaried proration multiplies the daily rate by
    /// this count regardless of hours actually worked.
    pub fn days_in_period(&self) -> Decimal {
        let days = (self.end_date - self.start_date).num_days() + 1;
        Decimal::new(days.max(0), 0)
    }
}
