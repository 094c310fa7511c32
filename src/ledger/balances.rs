use std::collections::HashMap;

use crate::currency::Money;
use crate::domain::{Balance, Participant, ParticipantId, SharedCharge};
use crate::errors::AggregationError;

/// Folds expenses into one balance per participant, in participant order.
///
/// The payer is credited with the full expense amount whether or not they
/// also appear among the shares. Any payer or share referencing a participant
/// outside `participants` is reported instead of dropped.
pub fn aggregate_balances<E: SharedCharge>(
    participants: &[Participant],
    expenses: &[E],
) -> Result<Vec<Balance>, AggregationError> {
    let mut balances: Vec<Balance> = participants
        .iter()
        .map(|participant| Balance::zero(participant.id.clone(), participant.name.clone()))
        .collect();
    let index: HashMap<&ParticipantId, usize> = participants
        .iter()
        .enumerate()
        .map(|(idx, participant)| (&participant.id, idx))
        .collect();

    let slot = |id: &ParticipantId| {
        index
            .get(id)
            .copied()
            .ok_or_else(|| AggregationError::UnknownParticipant { id: id.clone() })
    };

    for expense in expenses {
        let payer = slot(expense.paid_by())?;
        accumulate(&mut balances[payer].paid, expense.amount())?;
        for share in expense.shares() {
            let owner = slot(&share.participant_id)?;
            accumulate(&mut balances[owner].share, share.amount)?;
        }
    }

    for balance in &mut balances {
        balance.net = balance
            .paid
            .checked_sub(balance.share)
            .ok_or(AggregationError::AmountOverflow)?;
    }
    Ok(balances)
}

fn accumulate(total: &mut Money, amount: Money) -> Result<(), AggregationError> {
    *total = total
        .checked_add(amount)
        .ok_or(AggregationError::AmountOverflow)?;
    Ok(())
}
