//! Weekly shift generation.
//!
//! This module fills a week of per-day coverage slots from staff
//! availability: staff with the most remaining hours are assigned first,
//! shifts longer than five hours are split around a lunch break, and
//! staff too short on hours for a minimum shift become conflicts instead
//! of assignments.

use chrono::{Duration, NaiveDate, NaiveDateTime};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::config::SchedulingSettings;
use crate::models::{Conflict, ShiftAssignment, StoreWeek};

use super::availability::StaffAvailability;

/// Shift length a day's staffing requirement is sized against.
fn standard_shift_hours() -> Decimal {
    Decimal::new(8, 0)
}

/// Shift length above which a lunch break splits the assignment.
fn lunch_split_threshold() -> Decimal {
    Decimal::new(5, 0)
}

/// The output of a generation run: the week's assignments plus the
/// conflicts that prevented individual assignments.
///
/// Unmet coverage is not an error: a day whose candidate pool runs dry
/// simply ends up with fewer assignments and no conflict record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleResult {
    /// Generated shift assignments for the whole week, in day order.
    pub shifts: Vec<ShiftAssignment>,
    /// Assignments that could not be made, one record per skipped
    /// staff member per day considered.
    pub conflicts: Vec<Conflict>,
}

/// Generates a full week of shift assignments.
///
/// Walks the week's days in order (closed days produce nothing). For each
/// open day the staffing requirement is `max(min_staffing,
/// ceil(open_hours / 8))`; candidates are taken in descending order of
/// remaining availability, with roster order breaking ties. Each
/// assignment advances the day's cursor to its end time and reduces the
/// candidate's remaining hours for the rest of the week.
///
/// The function operates on a working copy of `availability`; the
/// caller's list is never mutated, and two runs over identical inputs
/// produce identical results.
///
/// # Arguments
///
/// * `store_id` - The store the generated shifts belong to
/// * `week` - The week being scheduled
/// * `availability` - Roster-ordered availability, see
///   [`week_availability`](super::week_availability)
/// * `settings` - Generator options
pub fn generate_week(
    store_id: &str,
    week: &StoreWeek,
    availability: &[StaffAvailability],
    settings: &SchedulingSettings,
) -> ScheduleResult {
    let mut shifts = Vec::new();
    let mut conflicts = Vec::new();
    let mut working: Vec<StaffAvailability> = availability.to_vec();

    for day in &week.days {
        if !day.is_open {
            continue;
        }

        let date = week.date_for(day.weekday);
        let (open, close) = day.effective_hours();
        let total_minutes = (close - open).num_minutes().max(0);
        let total_hours = Decimal::new(total_minutes, 0) / Decimal::new(60, 0);
        let required = required_staff(total_hours, settings.min_staffing);

        // Hours descending; the stable sort keeps roster order on ties.
        let mut order: Vec<usize> = (0..working.len()).collect();
        order.sort_by(|&a, &b| working[b].available_hours.cmp(&working[a].available_hours));

        let mut cursor = date.and_time(open);
        let mut assigned: u32 = 0;

        for idx in order {
            if assigned == required {
                break;
            }

            let available = working[idx].available_hours;
            if available < settings.min_shift_duration_hours {
                conflicts.push(Conflict::insufficient_hours(
                    working[idx].staff.id.clone(),
                    date,
                    available,
                    settings.min_shift_duration_hours,
                ));
                continue;
            }

            let duration = available.min(
                settings
                    .min_shift_duration_hours
                    .max(standard_shift_hours()),
            );
            let blocks = build_assignment(
                store_id,
                &working[idx].staff.id,
                date,
                cursor,
                duration,
                settings,
            );
            if let Some(last) = blocks.last() {
                cursor = last.end_time;
            }
            working[idx].available_hours -= duration;
            shifts.extend(blocks);
            assigned += 1;
        }
    }

    ScheduleResult { shifts, conflicts }
}

/// Sizes a day's staffing requirement from its open hours.
fn required_staff(total_hours: Decimal, min_staffing: u32) -> u32 {
    let by_hours = (total_hours / standard_shift_hours())
        .ceil()
        .to_u32()
        .unwrap_or(0);
    min_staffing.max(by_hours)
}

/// Builds the assignment rows for one staff member on one day.
///
/// A block longer than five hours with lunch breaks enabled becomes two
/// rows split at the midpoint (whole hours before the break, the
/// remainder after), with the break between them. The rows' combined
/// span equals the worked duration plus the break.
fn build_assignment(
    store_id: &str,
    staff_id: &str,
    date: NaiveDate,
    start: NaiveDateTime,
    duration: Decimal,
    settings: &SchedulingSettings,
) -> Vec<ShiftAssignment> {
    let make = |start_time: NaiveDateTime, end_time: NaiveDateTime| ShiftAssignment {
        id: None,
        store_id: store_id.to_string(),
        staff_id: staff_id.to_string(),
        date,
        start_time,
        end_time,
        notes: None,
    };

    if duration > lunch_split_threshold() && settings.lunch_break_required {
        let first_hours = (duration / Decimal::new(2, 0)).floor();
        let second_hours = duration - first_hours;

        let first_end = start + Duration::minutes(minutes_of(first_hours));
        let resume = first_end + Duration::minutes(settings.lunch_break_duration_minutes);
        let second_end = resume + Duration::minutes(minutes_of(second_hours));

        vec![make(start, first_end), make(resume, second_end)]
    } else {
        vec![make(start, start + Duration::minutes(minutes_of(duration)))]
    }
}

/// Converts a Decimal hour count into whole minutes.
fn minutes_of(hours: Decimal) -> i64 {
    (hours * Decimal::new(60, 0)).to_i64().unwrap_or(0)
}
