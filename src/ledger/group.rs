use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::currency::Money;
use crate::domain::{Balance, Expense, Participant, ParticipantId, Settlement};
use crate::errors::AggregationError;

use super::{aggregate_balances, settlement::plan_with, Tolerances};

const CURRENT_SCHEMA_VERSION: u8 = 1;
const DEFAULT_OWNER_NAME: &str = "Owner";

/// Snapshot of a shared-expense group: its members and recorded expenses.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Group {
    pub id: Uuid,
    pub name: String,
    #[serde(default)]
    pub participants: Vec<Participant>,
    #[serde(default)]
    pub expenses: Vec<Expense>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(default = "Group::schema_version_default")]
    pub schema_version: u8,
}

/// Everything a group overview needs, computed in one pass.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct GroupSummary {
    pub total_spent: Money,
    pub balances: Vec<Balance>,
    pub settlements: Vec<Settlement>,
}

impl Group {
    /// Creates a group whose creator becomes the first participant.
    pub fn new(name: impl Into<String>, owner_name: &str) -> Self {
        let now = Utc::now();
        let owner = owner_name.trim();
        let owner = if owner.is_empty() {
            DEFAULT_OWNER_NAME
        } else {
            owner
        };
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            participants: vec![Participant::new(owner)],
            expenses: Vec::new(),
            created_at: now,
            updated_at: now,
            schema_version: CURRENT_SCHEMA_VERSION,
        }
    }

    pub fn owner(&self) -> Option<&Participant> {
        self.participants.first()
    }

    pub fn participant(&self, id: &ParticipantId) -> Option<&Participant> {
        self.participants.iter().find(|p| &p.id == id)
    }

    pub fn contains(&self, id: &ParticipantId) -> bool {
        self.participant(id).is_some()
    }

    pub fn add_participant(&mut self, participant: Participant) -> ParticipantId {
        let id = participant.id.clone();
        self.participants.push(participant);
        self.touch();
        id
    }

    pub fn expense(&self, id: Uuid) -> Option<&Expense> {
        self.expenses.iter().find(|e| e.id == id)
    }

    pub fn add_expense(&mut self, expense: Expense) -> Uuid {
        let id = expense.id;
        self.expenses.push(expense);
        self.touch();
        id
    }

    /// Returns true when the participant paid for or shares in any expense.
    pub fn is_involved(&self, id: &ParticipantId) -> bool {
        self.expenses.iter().any(|expense| expense.involves(id))
    }

    pub fn total_spent(&self) -> Result<Money, AggregationError> {
        Money::checked_sum(self.expenses.iter().map(|expense| expense.amount))
            .ok_or(AggregationError::AmountOverflow)
    }

    pub fn balances(&self) -> Result<Vec<Balance>, AggregationError> {
        aggregate_balances(&self.participants, &self.expenses)
    }

    pub fn summary(&self, tolerances: &Tolerances) -> Result<GroupSummary, AggregationError> {
        let balances = self.balances()?;
        let settlements = plan_with(&balances, tolerances.settle);
        Ok(GroupSummary {
            total_spent: self.total_spent()?,
            balances,
            settlements,
        })
    }

    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }

    fn schema_version_default() -> u8 {
        CURRENT_SCHEMA_VERSION
    }
}
