//! Staff availability calculation.
//!
//! This module derives each staff member's remaining assignable hours for
//! a week from their weekly cap and the hours already assigned to them.

use rust_decimal::Decimal;

use crate::config::SchedulingSettings;
use crate::models::{ShiftAssignment, StaffMember, StoreWeek};

/// A staff member paired with their remaining assignable hours.
///
/// Lists of these preserve roster order; the generator's tie-breaking
/// depends on it.
#[derive(Debug, Clone, PartialEq)]
pub struct StaffAvailability {
    /// The staff member.
    pub staff: StaffMember,
    /// Hours still assignable this week.
    pub available_hours: Decimal,
}

/// Computes a staff member's remaining assignable hours.
///
/// The result is `max(0, cap - assigned)`, where the cap is the staff
/// member's own weekly maximum or, absent one, the configured fallback.
/// Only shifts attributed to the staff member count toward `assigned`.
///
/// # Arguments
///
/// * `staff` - The staff member to size availability for
/// * `week_shifts` - Shifts already assigned within the target week
/// * `settings` - Scheduling settings supplying the fallback cap
///
/// # Examples
///
/// ```
/// use roster_engine::config::SchedulingSettings;
/// use roster_engine::models::{PayType, StaffMember};
/// use roster_engine::scheduling::available_hours;
/// use rust_decimal::Decimal;
///
/// let staff = StaffMember {
///     id: "staff_001".to_string(),
///     name: "Dana".to_string(),
///     role: "sales_associate".to_string(),
///     pay_type: PayType::Hourly,
///     hourly_rate: None,
///     salary_amount: None,
///     preferred_hours_per_week: None,
///     max_hours_per_week: Some(Decimal::new(40, 0)),
///     commission_rate: None,
/// };
/// let hours = available_hours(&staff, &[], &SchedulingSettings::default());
/// assert_eq!(hours, Decimal::new(40, 0));
/// ```
pub fn available_hours(
    staff: &StaffMember,
    week_shifts: &[ShiftAssignment],
    settings: &SchedulingSettings,
) -> Decimal {
    let cap = staff
        .max_hours_per_week
        .unwrap_or(settings.max_hours_per_week);
    let assigned: Decimal = week_shifts
        .iter()
        .filter(|shift| shift.staff_id == staff.id)
        .map(ShiftAssignment::duration_hours)
        .sum();
    (cap - assigned).max(Decimal::ZERO)
}

/// Builds the week's availability list for a roster.
///
/// Shifts outside the scheduled week are ignored. The returned list keeps
/// roster order; the generator relies on that order to break ties.
pub fn week_availability(
    roster: &[StaffMember],
    existing_shifts: &[ShiftAssignment],
    week: &StoreWeek,
    settings: &SchedulingSettings,
) -> Vec<StaffAvailability> {
    let week_shifts: Vec<ShiftAssignment> = existing_shifts
        .iter()
        .filter(|shift| week.contains_date(shift.date))
        .cloned()
        .collect();

    roster
        .iter()
        .map(|staff| StaffAvailability {
            staff: staff.clone(),
            available_hours: available_hours(staff, &week_shifts, settings),
        })
        .collect()
}
