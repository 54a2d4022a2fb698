//! Request types for the engine API.
//!
//! This module defines the JSON request structures for the
//! `/schedule/generate` and `/pay/calculate` endpoints.

use chrono::{NaiveDate, NaiveDateTime, Weekday};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::config::SchedulingSettings;
use crate::models::{
    BonusTier, DayHours, PayPeriod, PayType, PeriodSales, ShiftAssignment, StaffMember, TierScope,
};

/// Request body for the `/schedule/generate` endpoint.
///
/// Carries everything a generation run needs: the week being scheduled,
/// the store's hours, the roster, and any shifts already assigned within
/// the week. Settings are optional; the server's configured defaults
/// apply when absent.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateScheduleRequest {
    /// The store to schedule for.
    pub store_id: String,
    /// The Monday the week starts on.
    pub week_start: NaiveDate,
    /// Operating hours for Monday through Saturday.
    pub days: Vec<DayHoursRequest>,
    /// The staff roster, in roster order.
    pub staff: Vec<StaffRequest>,
    /// Shifts already assigned within the week (manual entries).
    #[serde(default)]
    pub existing_shifts: Vec<ShiftRequest>,
    /// Generator options; server defaults apply when absent.
    #[serde(default)]
    pub settings: Option<SchedulingSettings>,
}

/// Request body for the `/pay/calculate` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalculatePayRequest {
    /// The pay period, inclusive of both endpoints.
    pub period: PayPeriodRequest,
    /// The staff roster, in roster order.
    pub staff: Vec<StaffRequest>,
    /// The shifts worked during the period.
    #[serde(default)]
    pub shifts: Vec<ShiftRequest>,
    /// The bonus tiers in scope.
    #[serde(default)]
    pub tiers: Vec<BonusTierRequest>,
    /// Period sales figures.
    #[serde(default)]
    pub sales: PeriodSales,
}

/// Day hours information in a generation request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DayHoursRequest {
    /// The weekday these hours apply to.
    pub weekday: Weekday,
    /// Whether the store is open on this weekday.
    pub is_open: bool,
    /// Opening time as "HH:MM".
    #[serde(default)]
    pub open_time: Option<String>,
    /// Closing time as "HH:MM".
    #[serde(default)]
    pub close_time: Option<String>,
}

/// Staff member information in a request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StaffRequest {
    /// Unique identifier for the staff member.
    pub id: String,
    /// The staff member's display name.
    pub name: String,
    /// The staff member's role.
    #[serde(default)]
    pub role: String,
    /// How the staff member is compensated.
    pub pay_type: PayType,
    /// Hourly rate, for hourly staff.
    #[serde(default)]
    pub hourly_rate: Option<Decimal>,
    /// Yearly salary amount, for salaried staff.
    #[serde(default)]
    pub salary_amount: Option<Decimal>,
    /// Hours per week the staff member prefers to work.
    #[serde(default)]
    pub preferred_hours_per_week: Option<Decimal>,
    /// Maximum hours per week the staff member may be assigned.
    #[serde(default)]
    pub max_hours_per_week: Option<Decimal>,
    /// Commission percentage for salary-plus-bonus staff.
    #[serde(default)]
    pub commission_rate: Option<Decimal>,
}

/// Pay period information in a pay calculation request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PayPeriodRequest {
    /// The start date of the pay period (inclusive).
    pub start_date: NaiveDate,
    /// The end date of the pay period (inclusive).
    pub end_date: NaiveDate,
}

/// Shift information in a request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShiftRequest {
    /// Identifier assigned by the persistence collaborator, if any.
    #[serde(default)]
    pub id: Option<Uuid>,
    /// The store the shift belongs to.
    pub store_id: String,
    /// The staff member assigned to the shift.
    pub staff_id: String,
    /// The calendar date the shift is scheduled on.
    pub date: NaiveDate,
    /// The start of the shift.
    pub start_time: NaiveDateTime,
    /// The end of the shift.
    pub end_time: NaiveDateTime,
    /// Free-form notes.
    #[serde(default)]
    pub notes: Option<String>,
}

/// Bonus tier information in a pay calculation request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BonusTierRequest {
    /// The sales amount that must be met or exceeded.
    pub target_sales_amount: Decimal,
    /// The flat bonus paid when the tier applies.
    pub bonus_amount: Decimal,
    /// Human-readable description of the tier.
    #[serde(default)]
    pub description: String,
    /// Whether the tier participates in resolution.
    #[serde(default = "default_is_active")]
    pub is_active: bool,
    /// Store-wide or staff-specific scope.
    #[serde(default = "default_scope")]
    pub scope: TierScope,
}

fn default_is_active() -> bool {
    true
}

fn default_scope() -> TierScope {
    TierScope::Store
}

impl From<DayHoursRequest> for DayHours {
    fn from(req: DayHoursRequest) -> Self {
        // Unparseable times become None; the documented defaults apply.
        let parse = |value: Option<String>| {
            value.and_then(|s| {
                chrono::NaiveTime::parse_from_str(&s, "%H:%M")
                    .or_else(|_| chrono::NaiveTime::parse_from_str(&s, "%H:%M:%S"))
                    .ok()
            })
        };
        DayHours {
            weekday: req.weekday,
            is_open: req.is_open,
            open_time: parse(req.open_time),
            close_time: parse(req.close_time),
        }
    }
}

impl From<StaffRequest> for StaffMember {
    fn from(req: StaffRequest) -> Self {
        StaffMember {
            id: req.id,
            name: req.name,
            role: req.role,
            pay_type: req.pay_type,
            hourly_rate: req.hourly_rate,
            salary_amount: req.salary_amount,
            preferred_hours_per_week: req.preferred_hours_per_week,
            max_hours_per_week: req.max_hours_per_week,
            commission_rate: req.commission_rate,
        }
    }
}

impl From<PayPeriodRequest> for PayPeriod {
    fn from(req: PayPeriodRequest) -> Self {
        PayPeriod {
            start_date: req.start_date,
            end_date: req.end_date,
        }
    }
}

impl From<ShiftRequest> for ShiftAssignment {
    fn from(req: ShiftRequest) -> Self {
        ShiftAssignment {
            id: req.id,
            store_id: req.store_id,
            staff_id: req.staff_id,
            date: req.date,
            start_time: req.start_time,
            end_time: req.end_time,
            notes: req.notes,
        }
    }
}

impl From<BonusTierRequest> for BonusTier {
    fn from(req: BonusTierRequest) -> Self {
        BonusTier {
            target_sales_amount: req.target_sales_amount,
            bonus_amount: req.bonus_amount,
            description: req.description,
            is_active: req.is_active,
            scope: req.scope,
        }
    }
}
