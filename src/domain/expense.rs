use std::fmt;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::currency::Money;
use crate::domain::common::*;

/// Rule determining how an expense amount is divided among participants.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "UPPERCASE")]
pub enum SplitPolicy {
    Equal,
    Exact,
    Percent,
}

impl fmt::Display for SplitPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            SplitPolicy::Equal => "EQUAL",
            SplitPolicy::Exact => "EXACT",
            SplitPolicy::Percent => "PERCENT",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ExactInput {
    pub participant_id: ParticipantId,
    pub amount: Money,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PercentInput {
    pub participant_id: ParticipantId,
    pub percent: Decimal,
}

/// Raw per-participant inputs for one expense, tagged by split policy.
///
/// Input order is significant: the first entry absorbs any rounding remainder.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "policy", content = "inputs", rename_all = "UPPERCASE")]
pub enum SplitRequest {
    Equal(Vec<ParticipantId>),
    Exact(Vec<ExactInput>),
    Percent(Vec<PercentInput>),
}

impl SplitRequest {
    pub fn equal<I, P>(participants: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<ParticipantId>,
    {
        SplitRequest::Equal(participants.into_iter().map(Into::into).collect())
    }

    pub fn exact<I, P>(amounts: I) -> Self
    where
        I: IntoIterator<Item = (P, Money)>,
        P: Into<ParticipantId>,
    {
        SplitRequest::Exact(
            amounts
                .into_iter()
                .map(|(participant_id, amount)| ExactInput {
                    participant_id: participant_id.into(),
                    amount,
                })
                .collect(),
        )
    }

    pub fn percent<I, P>(percentages: I) -> Self
    where
        I: IntoIterator<Item = (P, Decimal)>,
        P: Into<ParticipantId>,
    {
        SplitRequest::Percent(
            percentages
                .into_iter()
                .map(|(participant_id, percent)| PercentInput {
                    participant_id: participant_id.into(),
                    percent,
                })
                .collect(),
        )
    }

    pub fn policy(&self) -> SplitPolicy {
        match self {
            SplitRequest::Equal(_) => SplitPolicy::Equal,
            SplitRequest::Exact(_) => SplitPolicy::Exact,
            SplitRequest::Percent(_) => SplitPolicy::Percent,
        }
    }

    /// Participant ids in input order.
    pub fn participant_ids(&self) -> Vec<&ParticipantId> {
        match self {
            SplitRequest::Equal(ids) => ids.iter().collect(),
            SplitRequest::Exact(inputs) => inputs.iter().map(|i| &i.participant_id).collect(),
            SplitRequest::Percent(inputs) => inputs.iter().map(|i| &i.participant_id).collect(),
        }
    }
}

/// The portion of an expense attributed to one participant.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Share {
    pub participant_id: ParticipantId,
    pub amount: Money,
}

impl Share {
    pub fn new(participant_id: impl Into<ParticipantId>, amount: Money) -> Self {
        Self {
            participant_id: participant_id.into(),
            amount,
        }
    }
}

/// Anything carrying a payer, a total and finalized shares can be folded into balances.
pub trait SharedCharge {
    fn amount(&self) -> Money;
    fn paid_by(&self) -> &ParticipantId;
    fn shares(&self) -> &[Share];
}

/// Minimal caller-supplied expense snapshot used for aggregation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ExpenseRecord {
    pub amount: Money,
    pub paid_by: ParticipantId,
    pub shares: Vec<Share>,
}

impl SharedCharge for ExpenseRecord {
    fn amount(&self) -> Money {
        self.amount
    }

    fn paid_by(&self) -> &ParticipantId {
        &self.paid_by
    }

    fn shares(&self) -> &[Share] {
        &self.shares
    }
}

/// Unvalidated expense input as submitted by the application layer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExpenseDraft {
    pub description: String,
    pub amount: Money,
    pub date: NaiveDate,
    pub paid_by: ParticipantId,
    pub split: SplitRequest,
}

/// A recorded group expense with its finalized shares.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Expense {
    pub id: Uuid,
    pub description: String,
    pub amount: Money,
    pub date: NaiveDate,
    pub paid_by: ParticipantId,
    pub policy: SplitPolicy,
    pub shares: Vec<Share>,
}

impl Expense {
    /// Returns true when the participant paid for or shares in this expense.
    pub fn involves(&self, participant: &ParticipantId) -> bool {
        &self.paid_by == participant
            || self
                .shares
                .iter()
                .any(|share| &share.participant_id == participant)
    }
}

impl SharedCharge for Expense {
    fn amount(&self) -> Money {
        self.amount
    }

    fn paid_by(&self) -> &ParticipantId {
        &self.paid_by
    }

    fn shares(&self) -> &[Share] {
        &self.shares
    }
}

