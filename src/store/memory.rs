//! In-memory store implementation.
//!
//! Backs tests and demo embeddings with HashMap state. Ids are assigned
//! on save, the way a real persistence collaborator would.

use std::collections::HashMap;

use chrono::NaiveDate;
use uuid::Uuid;

use crate::error::{EngineError, EngineResult};
use crate::models::{BonusTier, DayHours, ShiftAssignment, StaffMember};

use super::ScheduleStore;

/// A HashMap-backed [`ScheduleStore`].
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    hours: HashMap<String, Vec<DayHours>>,
    staff: HashMap<String, Vec<StaffMember>>,
    tiers: HashMap<String, Vec<BonusTier>>,
    shifts: HashMap<Uuid, ShiftAssignment>,
}

impl MemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds a store's operating hours and roster.
    pub fn insert_store(
        &mut self,
        store_id: impl Into<String>,
        hours: Vec<DayHours>,
        staff: Vec<StaffMember>,
    ) {
        let store_id = store_id.into();
        self.hours.insert(store_id.clone(), hours);
        self.staff.insert(store_id, staff);
    }

    /// Returns the number of persisted shifts.
    pub fn shift_count(&self) -> usize {
        self.shifts.len()
    }
}

impl ScheduleStore for MemoryStore {
    fn store_hours(&self, store_id: &str) -> EngineResult<Vec<DayHours>> {
        self.hours
            .get(store_id)
            .cloned()
            .ok_or_else(|| EngineError::StoreNotFound {
                store_id: store_id.to_string(),
            })
    }

    fn staff_for_store(&self, store_id: &str) -> EngineResult<Vec<StaffMember>> {
        self.staff
            .get(store_id)
            .cloned()
            .ok_or_else(|| EngineError::StoreNotFound {
                store_id: store_id.to_string(),
            })
    }

    fn bonus_tiers(&self, scope_id: &str) -> EngineResult<Vec<BonusTier>> {
        Ok(self.tiers.get(scope_id).cloned().unwrap_or_default())
    }

    fn shifts_in_range(
        &self,
        store_id: &str,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> EngineResult<Vec<ShiftAssignment>> {
        let mut shifts: Vec<ShiftAssignment> = self
            .shifts
            .values()
            .filter(|shift| shift.store_id == store_id && shift.in_range(start_date, end_date))
            .cloned()
            .collect();
        // HashMap iteration order is arbitrary; callers get a stable view.
        shifts.sort_by(|a, b| {
            (a.date, a.start_time, a.staff_id.as_str())
                .cmp(&(b.date, b.start_time, b.staff_id.as_str()))
        });
        Ok(shifts)
    }

    fn save_shift(&mut self, mut shift: ShiftAssignment) -> EngineResult<ShiftAssignment> {
        if shift.start_time >= shift.end_time {
            return Err(EngineError::SaveRejected {
                message: format!(
                    "shift for '{}' ends at or before it starts",
                    shift.staff_id
                ),
            });
        }
        let id = shift.id.unwrap_or_else(Uuid::new_v4);
        shift.id = Some(id);
        self.shifts.insert(id, shift.clone());
        Ok(shift)
    }

    fn delete_shift(&mut self, shift_id: Uuid) -> EngineResult<()> {
        self.shifts
            .remove(&shift_id)
            .map(|_| ())
            .ok_or(EngineError::ShiftNotFound { shift_id })
    }

    fn save_bonus_tiers(&mut self, scope_id: &str, tiers: Vec<BonusTier>) -> EngineResult<()> {
        self.tiers.insert(scope_id.to_string(), tiers);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{PayType, TierScope};
    use chrono::NaiveDateTime;
    use rust_decimal::Decimal;

    fn make_staff(id: &str) -> StaffMember {
        StaffMember {
            id: id.to_string(),
            name: id.to_string(),
            role: "sales_associate".to_string(),
            pay_type: PayType::Hourly,
            hourly_rate: Some(Decimal::new(1850, 2)),
            salary_amount: None,
            preferred_hours_per_week: None,
            max_hours_per_week: None,
            commission_rate: None,
        }
    }

    fn make_shift(store_id: &str, staff_id: &str, date: &str) -> ShiftAssignment {
        ShiftAssignment {
            id: None,
            store_id: store_id.to_string(),
            staff_id: staff_id.to_string(),
            date: NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap(),
            start_time: NaiveDateTime::parse_from_str(
                &format!("{} 10:00:00", date),
                "%Y-%m-%d %H:%M:%S",
            )
            .unwrap(),
            end_time: NaiveDateTime::parse_from_str(
                &format!("{} 18:00:00", date),
                "%Y-%m-%d %H:%M:%S",
            )
            .unwrap(),
            notes: None,
        }
    }

    #[test]
    fn test_save_assigns_id() {
        let mut store = MemoryStore::new();
        let saved = store
            .save_shift(make_shift("store_001", "staff_001", "2026-01-12"))
            .unwrap();
        assert!(saved.id.is_some());
        assert_eq!(store.shift_count(), 1);
    }

    #[test]
    fn test_save_rejects_inverted_times() {
        let mut store = MemoryStore::new();
        let mut shift = make_shift("store_001", "staff_001", "2026-01-12");
        shift.end_time = shift.start_time;
        match store.save_shift(shift) {
            Err(EngineError::SaveRejected { message }) => {
                assert!(message.contains("staff_001"));
            }
            other => panic!("Expected SaveRejected, got {:?}", other.map(|_| ())),
        }
    }

    #[test]
    fn test_delete_round_trip() {
        let mut store = MemoryStore::new();
        let saved = store
            .save_shift(make_shift("store_001", "staff_001", "2026-01-12"))
            .unwrap();
        let id = saved.id.unwrap();

        store.delete_shift(id).unwrap();
        assert_eq!(store.shift_count(), 0);
        assert!(matches!(
            store.delete_shift(id),
            Err(EngineError::ShiftNotFound { .. })
        ));
    }

    #[test]
    fn test_shifts_in_range_filters_and_sorts() {
        let mut store = MemoryStore::new();
        store
            .save_shift(make_shift("store_001", "staff_b", "2026-01-14"))
            .unwrap();
        store
            .save_shift(make_shift("store_001", "staff_a", "2026-01-12"))
            .unwrap();
        store
            .save_shift(make_shift("store_002", "staff_c", "2026-01-13"))
            .unwrap();
        store
            .save_shift(make_shift("store_001", "staff_d", "2026-01-20"))
            .unwrap();

        let start = NaiveDate::from_ymd_opt(2026, 1, 12).unwrap();
        let end = NaiveDate::from_ymd_opt(2026, 1, 17).unwrap();
        let shifts = store.shifts_in_range("store_001", start, end).unwrap();

        let ids: Vec<&str> = shifts.iter().map(|s| s.staff_id.as_str()).collect();
        assert_eq!(ids, vec!["staff_a", "staff_b"]);
    }

    #[test]
    fn test_unknown_store_is_error() {
        let store = MemoryStore::new();
        assert!(matches!(
            store.staff_for_store("store_404"),
            Err(EngineError::StoreNotFound { .. })
        ));
    }

    #[test]
    fn test_bonus_tiers_default_empty_and_replace() {
        let mut store = MemoryStore::new();
        assert!(store.bonus_tiers("store_001").unwrap().is_empty());

        let tiers = vec![BonusTier {
            target_sales_amount: Decimal::new(5000, 0),
            bonus_amount: Decimal::new(100, 0),
            description: "bronze".to_string(),
            is_active: true,
            scope: TierScope::Store,
        }];
        store.save_bonus_tiers("store_001", tiers.clone()).unwrap();
        assert_eq!(store.bonus_tiers("store_001").unwrap(), tiers);
    }

    #[test]
    fn test_insert_store_seeds_reads() {
        let mut store = MemoryStore::new();
        store.insert_store("store_001", vec![], vec![make_staff("staff_001")]);
        assert_eq!(store.staff_for_store("store_001").unwrap().len(), 1);
        assert!(store.store_hours("store_001").unwrap().is_empty());
    }
}
