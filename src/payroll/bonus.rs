//! Bonus tier resolution.
//!
//! Given a sales figure and a set of tiers, resolution selects the single
//! highest qualifying tier: active tiers are ordered by target descending
//! (the sort is stable, so tiers with equal targets keep their list
//! order) and the first tier whose target the figure meets wins.

use rust_decimal::Decimal;

use crate::models::{BonusTier, TierScope};

/// Picks the highest qualifying tier out of a candidate pool.
fn highest_qualifying(sales: Decimal, mut pool: Vec<&BonusTier>) -> Option<&BonusTier> {
    pool.retain(|tier| tier.is_active);
    pool.sort_by(|a, b| b.target_sales_amount.cmp(&a.target_sales_amount));
    pool.into_iter()
        .find(|tier| sales >= tier.target_sales_amount)
}

/// Resolves the applicable bonus tier for a sales figure.
///
/// Inactive tiers never apply. When no tier qualifies the result is
/// `None` and the caller pays no bonus.
///
/// # Examples
///
/// ```
/// use roster_engine::models::{BonusTier, TierScope};
/// use roster_engine::payroll::resolve_bonus_tier;
/// use rust_decimal::Decimal;
///
/// let tiers = vec![
///     BonusTier {
///         target_sales_amount: Decimal::new(5000, 0),
///         bonus_amount: Decimal::new(100, 0),
///         description: "bronze".to_string(),
///         is_active: true,
///         scope: TierScope::Store,
///     },
///     BonusTier {
///         target_sales_amount: Decimal::new(10000, 0),
///         bonus_amount: Decimal::new(250, 0),
///         description: "silver".to_string(),
///         is_active: true,
///         scope: TierScope::Store,
///     },
/// ];
///
/// let tier = resolve_bonus_tier(Decimal::new(12000, 0), &tiers).unwrap();
/// assert_eq!(tier.bonus_amount, Decimal::new(250, 0));
/// assert!(resolve_bonus_tier(Decimal::new(4000, 0), &tiers).is_none());
/// ```
pub fn resolve_bonus_tier(sales: Decimal, tiers: &[BonusTier]) -> Option<&BonusTier> {
    highest_qualifying(sales, tiers.iter().collect())
}

/// Resolves the applicable tier for one staff member.
///
/// Staff-scoped tiers, when any exist for the staff member, replace the
/// store-wide set; otherwise resolution runs over the store-wide tiers.
pub fn resolve_staff_bonus_tier<'a>(
    sales: Decimal,
    tiers: &'a [BonusTier],
    staff_id: &str,
) -> Option<&'a BonusTier> {
    let staff_scoped: Vec<&BonusTier> = tiers
        .iter()
        .filter(|tier| matches!(&tier.scope, TierScope::Staff(id) if id == staff_id))
        .collect();

    if staff_scoped.is_empty() {
        highest_qualifying(
            sales,
            tiers
                .iter()
                .filter(|tier| tier.scope == TierScope::Store)
                .collect(),
        )
    } else {
        highest_qualifying(sales, staff_scoped)
    }
}
