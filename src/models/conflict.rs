//! Scheduling conflict model.
//!
//! Conflicts describe why a desired assignment could not be made. They are
//! produced by a generation run and never persisted as authoritative state.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The category of a scheduling conflict.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConflictKind {
    /// The staff member had fewer available hours than the minimum shift.
    InsufficientHours,
}

/// A non-fatal record describing a skipped assignment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Conflict {
    /// The category of the conflict.
    pub kind: ConflictKind,
    /// The staff member the conflict concerns.
    pub staff_id: String,
    /// The date the assignment was being considered for.
    pub date: NaiveDate,
    /// Human-readable description of the conflict.
    pub message: String,
}

impl Conflict {
    /// Builds an `insufficient_hours` conflict for a skipped staff member.
    pub fn insufficient_hours(
        staff_id: impl Into<String>,
        date: NaiveDate,
        available: Decimal,
        minimum: Decimal,
    ) -> Self {
        Self {
            kind: ConflictKind::InsufficientHours,
            staff_id: staff_id.into(),
            date,
            message: format!(
                "only {}h available this week, below the {}h minimum shift",
                available.normalize(),
                minimum.normalize()
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insufficient_hours_message() {
        let conflict = Conflict::insufficient_hours(
            "staff_001",
            NaiveDate::from_ymd_opt(2026, 1, 12).unwrap(),
            Decimal::new(20, 1),
            Decimal::new(3, 0),
        );
        assert_eq!(conflict.kind, ConflictKind::InsufficientHours);
        assert_eq!(conflict.staff_id, "staff_001");
        assert_eq!(
            conflict.message,
            "only 2h available this week, below the 3h minimum shift"
        );
    }

    #[test]
    fn test_conflict_kind_serialization() {
        let json = serde_json::to_string(&ConflictKind::InsufficientHours).unwrap();
        assert_eq!(json, "\"insufficient_hours\"");
    }

    #[test]
    fn test_conflict_serialization() {
        let conflict = Conflict::insufficient_hours(
            "staff_002",
            NaiveDate::from_ymd_opt(2026, 1, 13).unwrap(),
            Decimal::ZERO,
            Decimal::new(3, 0),
        );
        let json = serde_json::to_string(&conflict).unwrap();
        assert!(json.contains("\"kind\":\"insufficient_hours\""));
        assert!(json.contains("\"staff_id\":\"staff_002\""));
        assert!(json.contains("\"date\":\"2026-01-13\""));
    }
}
