use chrono::{Datelike, NaiveDate};

use crate::domain::{CategorySpend, MonthlySummary, PersonalCategory, PersonalExpense};

/// Totals personal spending from the first day of `reference`'s month onward.
pub fn monthly_summary(expenses: &[PersonalExpense], reference: NaiveDate) -> MonthlySummary {
    let month_start = reference.with_day(1).unwrap_or(reference);
    let in_month: Vec<&PersonalExpense> = expenses
        .iter()
        .filter(|expense| expense.date >= month_start)
        .collect();

    let category_breakdown: Vec<CategorySpend> = PersonalCategory::ALL
        .iter()
        .filter_map(|category| {
            let mut matching = in_month
                .iter()
                .filter(|expense| expense.category == *category)
                .peekable();
            matching.peek()?;
            Some(CategorySpend {
                category: *category,
                amount: matching.map(|expense| expense.amount).sum(),
            })
        })
        .collect();

    MonthlySummary {
        month_start,
        total_spent: category_breakdown.iter().map(|spend| spend.amount).sum(),
        category_breakdown,
    }
}
