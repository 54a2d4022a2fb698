//! Shift assignment model.
//!
//! This module defines the ShiftAssignment struct, the durable unit the
//! engine produces and the pay calculator consumes.

use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single assignment of a staff member to a block of work.
///
/// Created by the generator or by manual entry in the presentation layer.
/// Invariant: `start_time < end_time`. Generated assignments carry no id;
/// the persistence collaborator assigns one on save, which keeps
/// regeneration idempotent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShiftAssignment {
    /// Identifier assigned by the persistence collaborator, if saved.
    #[serde(default)]
    pub id: Option<Uuid>,
    /// The store the shift belongs to.
    pub store_id: String,
    /// The staff member assigned to the shift.
    pub staff_id: String,
    /// The calendar date the shift is scheduled on.
    pub date: NaiveDate,
    /// The start of the shift (local wall-clock, no timezone).
    pub start_time: NaiveDateTime,
    /// The end of the shift. May roll past midnight into the next
    /// calendar date while `date` stays on the scheduled day.
    pub end_time: NaiveDateTime,
    /// Free-form notes attached by a user action.
    #[serde(default)]
    pub notes: Option<String>,
}

impl ShiftAssignment {
    /// Returns the shift's duration in hours.
    ///
    /// # Examples
    ///
    /// ```
    /// use roster_engine::models::ShiftAssignment;
    /// use chrono::{NaiveDate, NaiveDateTime};
    /// use rust_decimal::Decimal;
    ///
    /// let shift = ShiftAssignment {
    ///     id: None,
    ///     store_id: "store_001".to_string(),
    ///     staff_id: "staff_001".to_string(),
    ///     date: NaiveDate::from_ymd_opt(2026, 1, 12).unwrap(),
    ///     start_time: NaiveDateTime::parse_from_str("2026-01-12 10:00:00", "%Y-%m-%d %H:%M:%S").unwrap(),
    ///     end_time: NaiveDateTime::parse_from_str("2026-01-12 14:00:00", "%Y-%m-%d %H:%M:%S").unwrap(),
    ///     notes: None,
    /// };
    /// assert_eq!(shift.duration_hours(), Decimal::new(40, 1)); // 4.0 hours
    /// ```
    pub fn duration_hours(&self) -> Decimal {
        let minutes = (self.end_time - self.start_time).num_minutes();
        Decimal::new(minutes, 0) / Decimal::new(60, 0)
    }

    /// Returns true when the shift's date falls within an inclusive range.
    pub fn in_range(&self, start: NaiveDate, end: NaiveDate) -> bool {
        self.date >= start && self.date <= end
    }
}
