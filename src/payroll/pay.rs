//! Pay calculation.
//!
//! This module combines worked hours, pay terms, and the resolved bonus
//! tier into a per-staff compensation breakdown and period totals.

use rust_decimal::Decimal;

use crate::config::CompensationDefaults;
use crate::models::{
    BonusTier, CompensationRecord, CompensationReport, PayPeriod, PayType, PeriodSales,
    ShiftAssignment, StaffMember,
};

use super::bonus::resolve_staff_bonus_tier;

/// Computes the compensation breakdown for one staff member.
///
/// Hours are the sum of the staff member's shift durations inside the
/// period. Base pay follows the pay type:
///
/// - Hourly: `hours × hourly_rate`.
/// - Salary and salary-plus-bonus: the yearly salary prorated by calendar
///   days, `salary / days_per_year × days_in_period` — independent of
///   hours actually worked.
///
/// The bonus is the resolved tier's flat amount, if any; salary-plus-bonus
/// staff additionally earn `hours × commission_rate / 100`. A missing
/// rate or salary contributes zero rather than failing the calculation.
///
/// # Arguments
///
/// * `staff` - The staff member to calculate for
/// * `shifts` - Shift assignments to draw hours from (any staff; filtered)
/// * `period` - The pay period, inclusive of both endpoints
/// * `tiers` - Bonus tiers in scope for the store
/// * `sales` - Period sales figures
/// * `defaults` - Compensation defaults (proration divisor, commission)
pub fn calculate_staff_pay(
    staff: &StaffMember,
    shifts: &[ShiftAssignment],
    period: &PayPeriod,
    tiers: &[BonusTier],
    sales: &PeriodSales,
    defaults: &CompensationDefaults,
) -> CompensationRecord {
    let total_hours: Decimal = shifts
        .iter()
        .filter(|shift| shift.staff_id == staff.id && period.contains_date(shift.date))
        .map(ShiftAssignment::duration_hours)
        .sum();

    let base_pay = match staff.pay_type {
        PayType::Hourly => total_hours * staff.hourly_rate.unwrap_or(Decimal::ZERO),
        PayType::Salary | PayType::SalaryPlusBonus => {
            let salary = staff.salary_amount.unwrap_or(Decimal::ZERO);
            let daily_rate = salary / defaults.days_per_year;
            daily_rate * period.days_in_period()
        }
    };

    let figure = sales.figure_for(&staff.id);
    let tier_bonus = resolve_staff_bonus_tier(figure, tiers, &staff.id)
        .map(|tier| tier.bonus_amount)
        .unwrap_or(Decimal::ZERO);

    let commission = match staff.pay_type {
        PayType::SalaryPlusBonus => {
            let rate = staff
                .commission_rate
                .unwrap_or(defaults.default_commission_rate);
            total_hours * rate / Decimal::new(100, 0)
        }
        PayType::Hourly | PayType::Salary => Decimal::ZERO,
    };

    let bonus = tier_bonus + commission;

    CompensationRecord {
        staff_id: staff.id.clone(),
        total_hours,
        base_pay,
        bonus,
        total_pay: base_pay + bonus,
    }
}

/// Computes the compensation report for a whole roster.
///
/// Records come back in roster order with a totals row summed across
/// them. The calculation is a pure function of its inputs; two runs over
/// identical inputs produce identical reports.
pub fn calculate_period_pay(
    roster: &[StaffMember],
    shifts: &[ShiftAssignment],
    period: &PayPeriod,
    tiers: &[BonusTier],
    sales: &PeriodSales,
    defaults: &CompensationDefaults,
) -> CompensationReport {
    let per_staff = roster
        .iter()
        .map(|staff| calculate_staff_pay(staff, shifts, period, tiers, sales, defaults))
        .collect();
    CompensationReport::from_records(per_staff)
}
