//! Validated creation and removal of group expenses.

use uuid::Uuid;

use crate::domain::{Expense, ExpenseDraft, ParticipantId};
use crate::errors::{AggregationError, LedgerError};
use crate::ledger::{allocate_with, Group, Tolerances};

use super::{ServiceError, ServiceResult};

/// Turns expense drafts into recorded expenses with finalized shares.
pub struct ExpenseService;

impl ExpenseService {
    /// Allocates and records a draft using the default tolerances.
    pub fn add(group: &mut Group, draft: ExpenseDraft) -> ServiceResult<Uuid> {
        Self::add_with(group, draft, &Tolerances::default())
    }

    pub fn add_with(
        group: &mut Group,
        draft: ExpenseDraft,
        tolerances: &Tolerances,
    ) -> ServiceResult<Uuid> {
        let description = draft.description.trim();
        if description.is_empty() {
            return Err(ServiceError::Invalid("Description is required".into()));
        }
        Self::ensure_member(group, &draft.paid_by)?;
        for id in draft.split.participant_ids() {
            Self::ensure_member(group, id)?;
        }

        let shares = allocate_with(draft.amount, &draft.split, tolerances).map_err(|err| {
            tracing::debug!(group = %group.id, error = %err, "split rejected");
            ServiceError::from(err)
        })?;
        let expense = Expense {
            id: Uuid::new_v4(),
            description: description.to_string(),
            amount: draft.amount,
            date: draft.date,
            paid_by: draft.paid_by,
            policy: draft.split.policy(),
            shares,
        };
        let id = group.add_expense(expense);
        tracing::info!(group = %group.id, expense = %id, "expense recorded");
        Ok(id)
    }

    pub fn remove(group: &mut Group, id: Uuid) -> ServiceResult<Expense> {
        let position = group
            .expenses
            .iter()
            .position(|expense| expense.id == id)
            .ok_or(LedgerError::ExpenseNotFound(id))?;
        let removed = group.expenses.remove(position);
        group.touch();
        Ok(removed)
    }

    /// Expenses ordered newest first, ties in insertion order.
    pub fn list(group: &Group) -> Vec<&Expense> {
        let mut expenses: Vec<&Expense> = group.expenses.iter().collect();
        expenses.sort_by(|a, b| b.date.cmp(&a.date));
        expenses
    }

    fn ensure_member(group: &Group, id: &ParticipantId) -> ServiceResult<()> {
        if group.contains(id) {
            Ok(())
        } else {
            Err(AggregationError::UnknownParticipant { id: id.clone() }.into())
        }
    }
}
