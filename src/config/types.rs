//! Configuration types for the scheduling and compensation engine.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

fn default_min_staffing() -> u32 {
    1
}

fn default_max_consecutive_hours() -> Decimal {
    Decimal::new(8, 0)
}

fn default_lunch_break_required() -> bool {
    true
}

fn default_lunch_break_duration_minutes() -> i64 {
    30
}

fn default_min_shift_duration_hours() -> Decimal {
    Decimal::new(3, 0)
}

fn default_max_hours_per_week() -> Decimal {
    Decimal::new(40, 0)
}

fn default_preferred_hours_per_week() -> Decimal {
    Decimal::new(32, 0)
}

fn default_days_per_year() -> Decimal {
    Decimal::new(365, 0)
}

fn default_commission_rate() -> Decimal {
    Decimal::ZERO
}

/// Options recognized by the shift generator.
///
/// Every field has a documented default, so a partial configuration file
/// (or a partial API override) fills in the rest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchedulingSettings {
    /// Minimum simultaneous staff per open day.
    #[serde(default = "default_min_staffing")]
    pub min_staffing: u32,
    /// Advisory cap on a single shift. Carried in configuration but not
    /// applied inside the generation loop; shift length is bounded by
    /// remaining availability and the 8-hour ceiling.
    #[serde(default = "default_max_consecutive_hours")]
    pub max_consecutive_hours: Decimal,
    /// Whether shifts longer than five hours are split around a lunch break.
    #[serde(default = "default_lunch_break_required")]
    pub lunch_break_required: bool,
    /// Length of the lunch break, in minutes.
    #[serde(default = "default_lunch_break_duration_minutes")]
    pub lunch_break_duration_minutes: i64,
    /// Staff with less available time than this are skipped and logged
    /// as a conflict.
    #[serde(default = "default_min_shift_duration_hours")]
    pub min_shift_duration_hours: Decimal,
    /// Weekly cap used when a staff member has none of their own.
    #[serde(default = "default_max_hours_per_week")]
    pub max_hours_per_week: Decimal,
    /// Weekly preference used when a staff member has none of their own.
    #[serde(default = "default_preferred_hours_per_week")]
    pub preferred_hours_per_week: Decimal,
}

impl Default for SchedulingSettings {
    fn default() -> Self {
        Self {
            min_staffing: default_min_staffing(),
            max_consecutive_hours: default_max_consecutive_hours(),
            lunch_break_required: default_lunch_break_required(),
            lunch_break_duration_minutes: default_lunch_break_duration_minutes(),
            min_shift_duration_hours: default_min_shift_duration_hours(),
            max_hours_per_week: default_max_hours_per_week(),
            preferred_hours_per_week: default_preferred_hours_per_week(),
        }
    }
}

/// Defaults used by the pay calculator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompensationDefaults {
    /// Divisor converting a yearly salary into a daily rate.
    #[serde(default = "default_days_per_year")]
    pub days_per_year: Decimal,
    /// Commission percentage applied for salary-plus-bonus staff with no
    /// rate of their own.
    #[serde(default = "default_commission_rate")]
    pub default_commission_rate: Decimal,
}

impl Default for CompensationDefaults {
    fn default() -> Self {
        Self {
            days_per_year: default_days_per_year(),
            default_commission_rate: default_commission_rate(),
        }
    }
}

/// The complete engine configuration loaded from YAML files.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct EngineConfig {
    /// Generator options.
    pub scheduling: SchedulingSettings,
    /// Pay-calculation defaults.
    pub compensation: CompensationDefaults,
}
