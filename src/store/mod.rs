//! External persistence contracts.
//!
//! The engine reads rosters, store hours, tiers, and shifts from — and
//! writes generated shifts back to — a persistence collaborator. This
//! module defines that contract as the [`ScheduleStore`] trait (shapes
//! only; transport is the implementor's concern) plus an in-memory
//! implementation for tests and embedding.

mod memory;

pub use memory::MemoryStore;

use chrono::NaiveDate;
use uuid::Uuid;

use crate::error::EngineResult;
use crate::models::{BonusTier, DayHours, ShiftAssignment, StaffMember};

/// The read/write contract between the engine and its persistence
/// collaborator.
///
/// The engine performs no retries: a rejected write surfaces as an error
/// and retrying, if any, is the collaborator's responsibility.
pub trait ScheduleStore {
    /// Returns the per-weekday operating hours for a store.
    fn store_hours(&self, store_id: &str) -> EngineResult<Vec<DayHours>>;

    /// Returns the staff roster for a store, in roster order.
    fn staff_for_store(&self, store_id: &str) -> EngineResult<Vec<StaffMember>>;

    /// Returns the bonus tiers configured for a scope (store or staff).
    fn bonus_tiers(&self, scope_id: &str) -> EngineResult<Vec<BonusTier>>;

    /// Returns the shifts for a store whose dates fall inside an
    /// inclusive range.
    fn shifts_in_range(
        &self,
        store_id: &str,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> EngineResult<Vec<ShiftAssignment>>;

    /// Persists a shift, assigning an id when the shift has none.
    /// Returns the stored record.
    fn save_shift(&mut self, shift: ShiftAssignment) -> EngineResult<ShiftAssignment>;

    /// Deletes a shift by id.
    fn delete_shift(&mut self, shift_id: Uuid) -> EngineResult<()>;

    /// Replaces the bonus tiers for a scope.
    fn save_bonus_tiers(&mut self, scope_id: &str, tiers: Vec<BonusTier>) -> EngineResult<()>;
}
