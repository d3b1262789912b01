//! Percentage-based budget allocation.
//!
//! An [`AllocationPolicy`] is a table of `(category, percent)` shares plus a rounding
//! mode. Each category amount is rounded on its own, so the parts may not add up to the
//! rounded total.

use crate::{types::Allocation, PlannerError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BudgetCategory {
    Accommodation,
    Food,
    Activities,
    Transportation,
    Emergency,
}

impl fmt::Display for BudgetCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            BudgetCategory::Accommodation => "accommodation",
            BudgetCategory::Food => "food",
            BudgetCategory::Activities => "activities",
            BudgetCategory::Transportation => "transportation",
            BudgetCategory::Emergency => "emergency",
        };
        f.write_str(label)
    }
}

/// How each category amount is turned into whole units
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Rounding {
    /// Nearest whole unit, halves rounded up
    #[default]
    Nearest,
    /// Always round down
    Floor,
}

impl Rounding {
    /// Amounts are expected within [`MAX_BUDGET`](crate::types::MAX_BUDGET).
    pub fn apply(&self, amount: f64) -> i64 {
        match self {
            Rounding::Nearest => amount.round() as i64,
            Rounding::Floor => amount.floor() as i64,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AllocationShare {
    pub category: BudgetCategory,
    pub percent: u32,
}

impl AllocationShare {
    pub const fn new(category: BudgetCategory, percent: u32) -> Self {
        Self { category, percent }
    }
}

const STANDARD_SHARES: [AllocationShare; 5] = [
    AllocationShare::new(BudgetCategory::Accommodation, 40),
    AllocationShare::new(BudgetCategory::Food, 25),
    AllocationShare::new(BudgetCategory::Activities, 20),
    AllocationShare::new(BudgetCategory::Transportation, 10),
    AllocationShare::new(BudgetCategory::Emergency, 5),
];

const COMPACT_SHARES: [AllocationShare; 4] = [
    AllocationShare::new(BudgetCategory::Accommodation, 40),
    AllocationShare::new(BudgetCategory::Food, 20),
    AllocationShare::new(BudgetCategory::Activities, 30),
    AllocationShare::new(BudgetCategory::Emergency, 10),
];

/// Named percentage table used to split a budget
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AllocationPolicy {
    name: String,
    shares: Vec<AllocationShare>,
    rounding: Rounding,
}

impl AllocationPolicy {
    /// Build a policy; shares must name each category at most once and sum to 100.
    pub fn new(
        name: impl Into<String>,
        shares: Vec<AllocationShare>,
        rounding: Rounding,
    ) -> Result<Self> {
        let name = name.into();

        for (idx, share) in shares.iter().enumerate() {
            if shares[..idx]
                .iter()
                .any(|earlier| earlier.category == share.category)
            {
                return Err(PlannerError::Config(format!(
                    "allocation policy `{}` lists `{}` more than once",
                    name, share.category
                )));
            }
        }

        let total: u32 = shares.iter().map(|share| share.percent).sum();
        if total != 100 {
            return Err(PlannerError::Config(format!(
                "allocation policy `{}` shares sum to {}%, expected 100%",
                name, total
            )));
        }

        Ok(Self {
            name,
            shares,
            rounding,
        })
    }

    /// 40/25/20/10/5 split, rounded to nearest
    pub fn standard() -> Self {
        Self {
            name: "standard".to_string(),
            shares: STANDARD_SHARES.to_vec(),
            rounding: Rounding::Nearest,
        }
    }

    /// 40/20/30/10 split with no transportation share, rounded down
    pub fn compact() -> Self {
        Self {
            name: "compact".to_string(),
            shares: COMPACT_SHARES.to_vec(),
            rounding: Rounding::Floor,
        }
    }

    /// Look up one of the built-in policies by name
    pub fn named(name: &str) -> Result<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "standard" => Ok(Self::standard()),
            "compact" => Ok(Self::compact()),
            other => Err(PlannerError::Config(format!(
                "unknown allocation policy `{}` (available: standard, compact)",
                other
            ))),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn shares(&self) -> &[AllocationShare] {
        &self.shares
    }

    pub fn rounding(&self) -> Rounding {
        self.rounding
    }

    /// Nominal fraction of the budget assigned to a category
    pub fn fraction(&self, category: BudgetCategory) -> f64 {
        self.shares
            .iter()
            .find(|share| share.category == category)
            .map(|share| f64::from(share.percent) / 100.0)
            .unwrap_or(0.0)
    }

    /// Split a budget; categories without a share get 0.
    pub fn allocate(&self, budget: f64) -> Allocation {
        let mut allocation = Allocation::default();
        for share in &self.shares {
            let amount = self
                .rounding
                .apply(budget * f64::from(share.percent) / 100.0);
            let slot = match share.category {
                BudgetCategory::Accommodation => &mut allocation.accommodation,
                BudgetCategory::Food => &mut allocation.food,
                BudgetCategory::Activities => &mut allocation.activities,
                BudgetCategory::Transportation => &mut allocation.transportation,
                BudgetCategory::Emergency => &mut allocation.emergency,
            };
            *slot = amount;
        }
        allocation
    }
}

impl Default for AllocationPolicy {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_split() {
        let allocation = AllocationPolicy::standard().allocate(1000.0);
        assert_eq!(
            allocation,
            Allocation {
                accommodation: 400,
                food: 250,
                activities: 200,
                transportation: 100,
                emergency: 50,
            }
        );
    }

    #[test]
    fn test_parts_round_independently() {
        // 0.4*333=133.2, 0.25*333=83.25, 0.2*333=66.6, 0.1*333=33.3, 0.05*333=16.65
        let allocation = AllocationPolicy::standard().allocate(333.0);
        assert_eq!(allocation.accommodation, 133);
        assert_eq!(allocation.food, 83);
        assert_eq!(allocation.activities, 67);
        assert_eq!(allocation.transportation, 33);
        assert_eq!(allocation.emergency, 17);
        assert_eq!(allocation.total(), 333);

        let drifted = AllocationPolicy::standard().allocate(10.0);
        // 4 + 2.5->3 + 2 + 1 + 0.5->1
        assert_eq!(drifted.total(), 11);
    }

    #[test]
    fn test_compact_floors_and_skips_transportation() {
        let allocation = AllocationPolicy::compact().allocate(999.0);
        assert_eq!(allocation.accommodation, 399);
        assert_eq!(allocation.food, 199);
        assert_eq!(allocation.activities, 299);
        assert_eq!(allocation.transportation, 0);
        assert_eq!(allocation.emergency, 99);
    }

    #[test]
    fn test_builtin_fractions_sum_to_one() {
        for policy in [AllocationPolicy::standard(), AllocationPolicy::compact()] {
            let total: u32 = policy.shares().iter().map(|share| share.percent).sum();
            assert_eq!(total, 100, "policy {}", policy.name());
        }
        assert_eq!(
            AllocationPolicy::standard().fraction(BudgetCategory::Emergency),
            0.05
        );
    }

    #[test]
    fn test_new_rejects_bad_tables() {
        let short = AllocationPolicy::new(
            "short",
            vec![AllocationShare::new(BudgetCategory::Food, 90)],
            Rounding::Nearest,
        )
        .unwrap_err();
        assert!(short.to_string().contains("90%"));

        let duplicated = AllocationPolicy::new(
            "dup",
            vec![
                AllocationShare::new(BudgetCategory::Food, 50),
                AllocationShare::new(BudgetCategory::Food, 50),
            ],
            Rounding::Nearest,
        )
        .unwrap_err();
        assert!(duplicated.to_string().contains("more than once"));
    }

    #[test]
    fn test_named_lookup() {
        assert_eq!(AllocationPolicy::named("Compact").unwrap().name(), "compact");
        assert!(AllocationPolicy::named("lavish").is_err());
    }
}
