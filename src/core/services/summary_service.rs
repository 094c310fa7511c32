use chrono::NaiveDate;

use crate::domain::{Balance, MonthlySummary, PersonalExpense, Settlement};
use crate::ledger::{monthly_summary, plan_with, Group, GroupSummary, Tolerances};

use super::ServiceResult;

pub struct SummaryService;

impl SummaryService {
    pub fn balances(group: &Group) -> ServiceResult<Vec<Balance>> {
        Ok(group.balances()?)
    }

    pub fn settlements(group: &Group, tolerances: &Tolerances) -> ServiceResult<Vec<Settlement>> {
        let balances = group.balances()?;
        Ok(plan_with(&balances, tolerances.settle))
    }

    pub fn group_summary(group: &Group, tolerances: &Tolerances) -> ServiceResult<GroupSummary> {
        let summary = group.summary(tolerances)?;
        tracing::debug!(
            group = %group.id,
            balances = summary.balances.len(),
            settlements = summary.settlements.len(),
            "group summary computed"
        );
        Ok(summary)
    }

    pub fn personal_month(expenses: &[PersonalExpense], reference: NaiveDate) -> MonthlySummary {
        monthly_summary(expenses, reference)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::services::{ExpenseService, ParticipantService, ServiceError};
    use crate::currency::Money;
    use crate::domain::{ExpenseDraft, Share, SplitPolicy, SplitRequest};
    use crate::errors::LedgerError;

    fn trip() -> Group {
        let mut group = Group::new("Goa", "Asha");
        let asha = group.participants[0].id.clone();
        let ben = ParticipantService::add(&mut group, "Ben").unwrap();
        let chen = ParticipantService::add(&mut group, "Chen").unwrap();
        let date = NaiveDate::from_ymd_opt(2025, 6, 1).unwrap();
        ExpenseService::add(
            &mut group,
            ExpenseDraft {
                description: "Villa".into(),
                amount: Money::from_cents(9_000),
                date,
                paid_by: asha.clone(),
                split: SplitRequest::Equal(vec![asha, ben.clone(), chen.clone()]),
            },
        )
        .unwrap();
        ExpenseService::add(
            &mut group,
            ExpenseDraft {
                description: "Scooters".into(),
                amount: Money::from_cents(3_000),
                date,
                paid_by: ben.clone(),
                split: SplitRequest::Equal(vec![ben, chen]),
            },
        )
        .unwrap();
        group
    }

    #[test]
    fn group_summary_settles_everyone() {
        let group = trip();
        let summary = SummaryService::group_summary(&group, &Tolerances::default()).unwrap();

        assert_eq!(summary.total_spent, Money::from_cents(12_000));
        let nets: Vec<i64> = summary.balances.iter().map(|b| b.net.cents()).collect();
        assert_eq!(nets, vec![6_000, -1_500, -4_500]);
        let plan: Vec<(String, String, i64)> = summary
            .settlements
            .iter()
            .map(|s| (s.from_name.clone(), s.to_name.clone(), s.amount.cents()))
            .collect();
        assert_eq!(
            plan,
            vec![
                ("Chen".into(), "Asha".into(), 4_500),
                ("Ben".into(), "Asha".into(), 1_500),
            ]
        );
    }

    #[test]
    fn settlements_match_group_summary() {
        let group = trip();
        let tolerances = Tolerances::default();
        let summary = SummaryService::group_summary(&group, &tolerances).unwrap();
        let plan = SummaryService::settlements(&group, &tolerances).unwrap();
        assert_eq!(plan, summary.settlements);
    }

    #[test]
    fn corrupted_snapshot_reports_unknown_participant() {
        let mut group = trip();
        let payer = group.participants[0].id.clone();
        group.expenses.push(crate::domain::Expense {
            id: uuid::Uuid::new_v4(),
            description: "Ghost".into(),
            amount: Money::from_cents(100),
            date: NaiveDate::from_ymd_opt(2025, 6, 2).unwrap(),
            paid_by: payer,
            policy: SplitPolicy::Exact,
            shares: vec![Share::new("ghost", Money::from_cents(100))],
        });

        let err = SummaryService::balances(&group).unwrap_err();
        assert!(matches!(err, ServiceError::Ledger(LedgerError::Aggregation(_))));
    }
}
