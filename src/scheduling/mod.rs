//! Scheduling logic for the engine.
//!
//! This module contains the availability calculation that sizes how many
//! hours each staff member can still be assigned in a week, and the shift
//! generator that fills a week of per-day coverage slots from that
//! availability, inserting lunch breaks and recording conflicts.

mod availability;
mod generator;

pub use availability::{available_hours, week_availability, StaffAvailability};
pub use generator::{generate_week, ScheduleResult};
