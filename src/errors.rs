use rust_decimal::Decimal;
use thiserror::Error;
use uuid::Uuid;

use crate::currency::Money;
use crate::domain::ParticipantId;

/// Reasons an expense cannot be divided into shares.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AllocationError {
    #[error("No participants selected for split")]
    NoParticipants,
    #[error("Split amounts ({actual}) do not equal total amount ({expected})")]
    SplitMismatch { expected: Money, actual: Money },
    #[error("Percentages ({total}) must equal 100%")]
    PercentMismatch { total: Decimal },
    #[error("Amount must be positive, got {amount}")]
    NonPositiveAmount { amount: Money },
    #[error("Share for `{participant}` cannot be negative")]
    NegativeShare { participant: ParticipantId },
    #[error("Percentage {percent} for `{participant}` is outside 0..=100")]
    InvalidPercent {
        participant: ParticipantId,
        percent: Decimal,
    },
    #[error("Participant `{id}` appears more than once in the split")]
    DuplicateParticipant { id: ParticipantId },
    #[error("Cannot split between {count} participants")]
    TooManyParticipants { count: usize },
    #[error("Split amounts exceed the supported range")]
    AmountOverflow,
}

/// Reasons a set of expenses cannot be folded into balances.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AggregationError {
    #[error("Unknown participant: {id}")]
    UnknownParticipant { id: ParticipantId },
    #[error("Totals exceed the supported range")]
    AmountOverflow,
}

/// Error type that captures common ledger failures.
#[derive(Debug, Error)]
pub enum LedgerError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
    #[error(transparent)]
    Allocation(#[from] AllocationError),
    #[error(transparent)]
    Aggregation(#[from] AggregationError),
    #[error("Participant `{0}` is part of expenses and cannot be removed")]
    ParticipantInUse(ParticipantId),
    #[error("Expense not found: {0}")]
    ExpenseNotFound(Uuid),
    #[error("Invalid input: {0}")]
    Invalid(String),
}
