//! Payroll logic for the engine.
//!
//! This module contains bonus tier resolution (the single highest
//! qualifying tier for a sales figure) and the pay calculator that
//! combines worked hours, pay terms, and the resolved bonus into a
//! compensation report.

mod bonus;
mod pay;

pub use bonus::{resolve_bonus_tier, resolve_staff_bonus_tier};
pub use pay::{calculate_period_pay, calculate_staff_pay};
