pub mod expense_service;
pub mod participant_service;
pub mod summary_service;

pub use expense_service::ExpenseService;
pub use participant_service::ParticipantService;
pub use summary_service::SummaryService;

use crate::errors::{AggregationError, AllocationError, LedgerError};

pub type ServiceResult<T> = Result<T, ServiceError>;

#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    #[error(transparent)]
    Ledger(#[from] LedgerError),
    #[error("{0}")]
    Invalid(String),
}

impl From<AllocationError> for ServiceError {
    fn from(err: AllocationError) -> Self {
        ServiceError::Ledger(err.into())
    }
}

impl From<AggregationError> for ServiceError {
    fn from(err: AggregationError) -> Self {
        ServiceError::Ledger(err.into())
    }
}
