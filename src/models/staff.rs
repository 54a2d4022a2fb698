//! Staff member model and related types.
//!
//! This module defines the StaffMember struct and PayType enum for
//! representing workers in the scheduling and compensation system.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Represents how a staff member is compensated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PayType {
    /// Paid per hour worked.
    Hourly,
    /// Paid a fixed yearly salary, prorated by calendar days.
    Salary,
    /// Yearly salary plus sales bonus and commission.
    SalaryPlusBonus,
}

/// Represents a staff member on a store's roster.
///
/// Staff records are owned by the staffing collaborator and are read-only
/// to the engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StaffMember {
    /// Unique identifier for the staff member.
    pub id: String,
    /// The staff member's display name.
    pub name: String,
    /// The staff member's role (e.g., "sales_associate", "manager").
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

impl StaffMember {
    /// Returns true if the staff member is paid a yearly salary.
    ///
    /// # Examples
    ///
    /// ```
    /// use roster_engine::models::{PayType, StaffMember};
    ///
    /// let staff = StaffMember {
    ///     id: "staff_001".to_string(),
    ///     name: "Dana".to_string(),
    ///     role: "manager".to_string(),
    ///     pay_type: PayType::Salary,
    ///     hourly_rate: None,
    ///     salary_amount: None,
    ///     preferred_hours_per_week: None,
    ///     max_hours_per_week: None,
    ///     commission_rate: None,
    /// };
    /// assert!(staff.is_salaried());
    /// ```
    pub fn is_salaried(&self) -> bool {
        matches!(self.pay_type, PayType::Salary | PayType::SalaryPlusBonus)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_staff(pay_type: PayType) -> StaffMember {
        StaffMember {
            id: "staff_001".to_string(),
            name: "Dana".to_string(),
            role: "sales_associate".to_string(),
            pay_type,
            hourly_rate: None,
            salary_amount: None,
            preferred_hours_per_week: None,
            max_hours_per_week: None,
            commission_rate: None,
        }
    }

    #[test]
    fn test_deserialize_hourly_staff() {
        let json = r#"{
            "id": "staff_001",
            "name": "Dana",
            "role": "sales_associate",
            "pay_type": "hourly",
            "hourly_rate": "18.50",
            "max_hours_per_week": "40"
        }"#;

        let staff: StaffMember = serde_json::from_str(json).unwrap();
        assert_eq!(staff.id, "staff_001");
        assert_eq!(staff.pay_type, PayType::Hourly);
        assert_eq!(staff.hourly_rate, Some(Decimal::new(1850, 2)));
        assert_eq!(staff.max_hours_per_week, Some(Decimal::new(40, 0)));
        assert_eq!(staff.salary_amount, None);
    }

    #[test]
    fn test_deserialize_salary_plus_bonus_staff() {
        let json = r#"{
            "id": "staff_002",
            "name": "Riley",
            "role": "manager",
            "pay_type": "salary_plus_bonus",
            "salary_amount": "52000",
            "commission_rate": "2.5"
        }"#;

        let staff: StaffMember = serde_json::from_str(json).unwrap();
        assert_eq!(staff.pay_type, PayType::SalaryPlusBonus);
        assert_eq!(staff.salary_amount, Some(Decimal::new(52000, 0)));
        assert_eq!(staff.commission_rate, Some(Decimal::new(25, 1)));
    }

    #[test]
    fn test_serialize_staff_round_trip() {
        let mut staff = create_test_staff(PayType::Hourly);
        staff.hourly_rate = Some(Decimal::new(2075, 2));

        let json = serde_json::to_string(&staff).unwrap();
        let deserialized: StaffMember = serde_json::from_str(&json).unwrap();
        assert_eq!(staff, deserialized);
    }

    #[test]
    fn test_is_salaried_for_salary() {
        assert!(create_test_staff(PayType::Salary).is_salaried());
    }

    #[test]
    fn test_is_salaried_for_salary_plus_bonus() {
        assert!(create_test_staff(PayType::SalaryPlusBonus).is_salaried());
    }

    #[test]
    fn test_is_salaried_for_hourly() {
        assert!(!create_test_staff(PayType::Hourly).is_salaried());
    }

    #[test]
    fn test_pay_type_serialization() {
        assert_eq!(
            serde_json::to_string(&PayType::Hourly).unwrap(),
            "\"hourly\""
        );
        assert_eq!(
            serde_json::to_string(&PayType::Salary).unwrap(),
            "\"salary\""
        );
        assert_eq!(
            serde_json::to_string(&PayType::SalaryPlusBonus).unwrap(),
            "\"salary_plus_bonus\""
        );
    }
}
