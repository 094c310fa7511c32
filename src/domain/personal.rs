use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::currency::Money;

/// Spending buckets for individual (non-group) expenses.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PersonalCategory {
    Food,
    Travel,
    Rent,
    Shopping,
    Bills,
    Misc,
}

impl PersonalCategory {
    pub const ALL: [PersonalCategory; 6] = [
        PersonalCategory::Food,
        PersonalCategory::Travel,
        PersonalCategory::Rent,
        PersonalCategory::Shopping,
        PersonalCategory::Bills,
        PersonalCategory::Misc,
    ];
}

impl fmt::Display for PersonalCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PersonalExpense {
    pub id: Uuid,
    pub amount: Money,
    pub category: PersonalCategory,
    pub description: String,
    pub date: NaiveDate,
    #[serde(default = "PersonalExpense::default_payment_mode")]
    pub payment_mode: String,
}

impl PersonalExpense {
    pub fn new(
        amount: Money,
        category: PersonalCategory,
        description: impl Into<String>,
        date: NaiveDate,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            amount,
            category,
            description: description.into(),
            date,
            payment_mode: Self::default_payment_mode(),
        }
    }

    pub fn default_payment_mode() -> String {
        "UPI".into()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CategorySpend {
    pub category: PersonalCategory,
    pub amount: Money,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MonthlySummary {
    pub month_start: NaiveDate,
    pub total_spent: Money,
    pub category_breakdown: Vec<CategorySpend>,
}
