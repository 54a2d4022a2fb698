//! Bonus tier model.
//!
//! A tier pairs a sales threshold with a flat bonus amount. At most one
//! tier applies to a given sales figure: the highest target the figure
//! meets or exceeds.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The scope a bonus tier applies to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TierScope {
    /// The tier applies to every staff member of the store.
    Store,
    /// The tier applies to a single staff member.
    Staff(String),
}

/// A sales threshold paired with a flat bonus amount.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BonusTier {
    /// The sales amount that must be met or exceeded.
    pub target_sales_amount: Decimal,
    /// The flat bonus paid when the tier applies.
    pub bonus_amount: Decimal,
    /// Human-readable description of the tier.
    pub description: String,
    /// Whether the tier participates in resolution.
    pub is_active: bool,
    /// Store-wide or staff-specific scope.
    pub scope: TierScope,
}

impl BonusTier {
    /// Returns true when the tier is active and the figure meets its target.
    pub fn qualifies(&self, sales: Decimal) -> bool {
        self.is_active && sales >= self.target_sales_amount
    }

    /// Returns true when the tier is in scope for a staff member.
    ///
    /// Store-wide tiers are in scope for everyone; staff tiers only for
    /// the named staff member.
    pub fn in_scope_for(&self, staff_id: &str) -> bool {
        match &self.scope {
            TierScope::Store => true,
            TierScope::Staff(id) => id == staff_id,
        }
    }
}
