#![doc(test(attr(deny(warnings))))]

//! Split Core computes who owes whom in a shared-expense group: it divides
//! expenses into per-participant shares, folds them into net balances and
//! plans the payments that settle the group.

pub mod cli;
pub mod config;
pub mod core;
pub mod currency;
pub mod domain;
pub mod errors;
pub mod ledger;
pub mod utils;

pub use currency::Money;
pub use errors::{AggregationError, AllocationError, LedgerError};
pub use ledger::{
    aggregate_balances, allocate_split, plan_settlements, Group, GroupSummary, Tolerances,
};

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Split Core tracing initialized.");
    });
}

#[cfg(test)]
mod tests {
    #[test]
    fn init_does_not_panic() {
        super::init();
    }
}
