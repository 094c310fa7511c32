//! The accounting engine: split allocation, balance aggregation and
//! settlement planning, plus the group snapshot they operate on.

pub mod allocation;
pub mod balances;
pub mod group;
pub mod personal;
pub mod settlement;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::currency::Money;

pub use allocation::{allocate_split, allocate_with};
pub use balances::aggregate_balances;
pub use group::{Group, GroupSummary};
pub use personal::monthly_summary;
pub use settlement::{plan_settlements, plan_with, residual_balances};

/// Validation tolerances applied at input boundaries.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Tolerances {
    /// Allowed gap between EXACT amounts and the expense total.
    #[serde(default = "Tolerances::default_exact")]
    pub exact: Money,
    /// Allowed gap between the PERCENT sum and 100.
    #[serde(default = "Tolerances::default_percent")]
    pub percent: Decimal,
    /// Balances within this distance of zero count as settled.
    #[serde(default = "Tolerances::default_settle")]
    pub settle: Money,
}

impl Tolerances {
    fn default_exact() -> Money {
        Money::from_cents(1)
    }

    fn default_percent() -> Decimal {
        Decimal::new(1, 1)
    }

    fn default_settle() -> Money {
        Money::from_cents(1)
    }
}

impl Default for Tolerances {
    fn default() -> Self {
        Self {
            exact: Self::default_exact(),
            percent: Self::default_percent(),
            settle: Self::default_settle(),
        }
    }
}
