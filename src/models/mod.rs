//! Core data models for the Shift Scheduling & Compensation Engine.
//!
//! This module contains all the domain models used throughout the engine.

mod bonus;
mod compensation;
mod conflict;
mod pay_period;
mod shift;
mod staff;
mod store_hours;

pub use bonus::{BonusTier, TierScope};
pub use compensation::{CompensationRecord, CompensationReport, PeriodSales, PeriodTotals};
pub use conflict::{Conflict, ConflictKind};
pub use pay_period::PayPeriod;
pub use shift::ShiftAssignment;
pub use staff::{PayType, StaffMember};
pub use store_hours::{default_close_time, default_open_time, DayHours, StoreWeek};
