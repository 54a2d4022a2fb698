//! Compensation report models.
//!
//! This module contains the per-staff [`CompensationRecord`], the report
//! aggregates, and the [`PeriodSales`] figures bonus resolution runs
//! against. All of these are derived values, recomputed on demand — never
//! the source of truth for hours or sales.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// The compensation breakdown for one staff member over a period.
///
/// Reports carry no timestamps or generated identifiers: running the
/// calculator twice on identical inputs yields identical records.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompensationRecord {
    /// The staff member the record is for.
    pub staff_id: String,
    /// Total hours worked across the staff member's shifts in the period.
    pub total_hours: Decimal,
    /// Base pay (hourly or prorated salary).
    pub base_pay: Decimal,
    /// Bonus from the resolved tier plus any commission term.
    pub bonus: Decimal,
    /// Base pay plus bonus.
    pub total_pay: Decimal,
}

/// Summed compensation figures across every staff member in a report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeriodTotals {
    /// Total hours across all staff.
    pub total_hours: Decimal,
    /// Total base pay across all staff.
    pub base_pay: Decimal,
    /// Total bonus across all staff.
    pub bonus: Decimal,
    /// Total pay across all staff.
    pub total_pay: Decimal,
}

/// The complete output of a pay calculation for a period.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompensationReport {
    /// One record per staff member, in roster order.
    pub per_staff: Vec<CompensationRecord>,
    /// Summed totals across the whole roster.
    pub totals: PeriodTotals,
}

impl CompensationReport {
    /// Builds a report from per-staff records, computing the totals row.
    pub fn from_records(per_staff: Vec<CompensationRecord>) -> Self {
        let totals = PeriodTotals {
            total_hours: per_staff.iter().map(|r| r.total_hours).sum(),
            base_pay: per_staff.iter().map(|r| r.base_pay).sum(),
            bonus: per_staff.iter().map(|r| r.bonus).sum(),
            total_pay: per_staff.iter().map(|r| r.total_pay).sum(),
        };
        Self { per_staff, totals }
    }
}

/// Sales figures for a period, as reported by the sales collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct PeriodSales {
    /// The store's total sales for the period.
    pub store_total: Decimal,
    /// Per-staff sales, where individual attribution is tracked.
    #[serde(default)]
    pub by_staff: HashMap<String, Decimal>,
}

impl PeriodSales {
    /// Returns the sales figure bonus resolution uses for a staff member:
    /// their attributed figure when one exists, otherwise the store total.
    pub fn figure_for(&self, staff_id: &str) -> Decimal {
        self.by_staff
            .get(staff_id)
            .copied()
            .unwrap_or(self.store_total)
    }
}
