pub mod balance;
pub mod common;
pub mod expense;
pub mod participant;
pub mod personal;

pub use balance::{Balance, Settlement};
pub use common::ParticipantId;
pub use expense::{
    ExactInput, Expense, ExpenseDraft, ExpenseRecord, PercentInput, Share, SharedCharge,
    SplitPolicy, SplitRequest,
};
pub use participant::Participant;
pub use personal::{CategorySpend, MonthlySummary, PersonalCategory, PersonalExpense};
