//! Orchestration over a [`ScheduleStore`].
//!
//! These functions tie the pure scheduling and payroll cores to the
//! persistence contract: read the inputs, run the computation, and (for
//! generation) hand the results back for the caller to persist. A
//! generation run never assumes persistence succeeds and is safe to
//! re-run: identical inputs produce identical output.

use chrono::NaiveDate;
use tracing::info;

use crate::config::{CompensationDefaults, SchedulingSettings};
use crate::error::EngineResult;
use crate::models::{CompensationReport, PayPeriod, PeriodSales, ShiftAssignment, StoreWeek};
use crate::payroll::calculate_period_pay;
use crate::scheduling::{generate_week, week_availability, ScheduleResult};
use crate::store::ScheduleStore;

/// Plans a week of shifts for a store.
///
/// Reads the store's hours, roster, and already-assigned shifts for the
/// week, derives availability, and runs the generator. Nothing is
/// persisted; pass the result to [`persist_schedule`] once the caller
/// decides to keep it.
pub fn plan_week<S: ScheduleStore>(
    store: &S,
    store_id: &str,
    week_start: NaiveDate,
    settings: &SchedulingSettings,
) -> EngineResult<ScheduleResult> {
    let hours = store.store_hours(store_id)?;
    let roster = store.staff_for_store(store_id)?;
    let week = StoreWeek::new(week_start, hours);
    let existing = store.shifts_in_range(store_id, week.week_start, week.week_end())?;

    let availability = week_availability(&roster, &existing, &week, settings);
    let result = generate_week(store_id, &week, &availability, settings);

    info!(
        store_id,
        week_start = %week_start,
        shifts = result.shifts.len(),
        conflicts = result.conflicts.len(),
        "Generated weekly schedule"
    );
    Ok(result)
}

/// Persists a planned schedule.
///
/// Saves shift by shift and stops at the first rejection, surfacing it
/// to the caller; the engine performs no retries. Returns the stored
/// records (with their assigned ids) on success.
pub fn persist_schedule<S: ScheduleStore>(
    store: &mut S,
    shifts: Vec<ShiftAssignment>,
) -> EngineResult<Vec<ShiftAssignment>> {
    let mut saved = Vec::with_capacity(shifts.len());
    for shift in shifts {
        saved.push(store.save_shift(shift)?);
    }
    Ok(saved)
}

/// Builds the compensation report for a store over a period.
///
/// Reads the roster, the period's shifts, and the store's bonus tiers,
/// then runs the pay calculator.
pub fn compensation_report<S: ScheduleStore>(
    store: &S,
    store_id: &str,
    period: &PayPeriod,
    sales: &PeriodSales,
    defaults: &CompensationDefaults,
) -> EngineResult<CompensationReport> {
    let roster = store.staff_for_store(store_id)?;
    let shifts = store.shifts_in_range(store_id, period.start_date, period.end_date)?;
    let tiers = store.bonus_tiers(store_id)?;

    let report = calculate_period_pay(&roster, &shifts, period, &tiers, sales, defaults);
    info!(
        store_id,
        staff = report.per_staff.len(),
        total_pay = %report.totals.total_pay,
        "Calculated compensation report"
    );
    Ok(report)
}
