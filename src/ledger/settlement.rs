use std::collections::HashMap;

use crate::currency::Money;
use crate::domain::{Balance, ParticipantId, Settlement};

use super::Tolerances;

struct Position<'a> {
    balance: &'a Balance,
    remaining: Money,
}

impl<'a> Position<'a> {
    fn new(balance: &'a Balance) -> Self {
        Self {
            balance,
            remaining: balance.net,
        }
    }
}

/// Plans point-to-point payments that bring every balance to zero.
///
/// Greedy matching of the largest debtor against the largest creditor. This
/// is not a minimum-transaction solver; it emits at most
/// `debtors + creditors - 1` payments and is deterministic for a given
/// input order (ties keep their relative order).
pub fn plan_settlements(balances: &[Balance]) -> Vec<Settlement> {
    plan_with(balances, Tolerances::default().settle)
}

/// Same as [`plan_settlements`] with an explicit "already settled" threshold.
pub fn plan_with(balances: &[Balance], threshold: Money) -> Vec<Settlement> {
    let mut debtors: Vec<Position<'_>> = balances
        .iter()
        .filter(|b| b.net < -threshold)
        .map(Position::new)
        .collect();
    let mut creditors: Vec<Position<'_>> = balances
        .iter()
        .filter(|b| b.net > threshold)
        .map(Position::new)
        .collect();

    debtors.sort_by_key(|p| p.remaining);
    creditors.sort_by(|a, b| b.remaining.cmp(&a.remaining));

    let mut settlements = Vec::with_capacity((debtors.len() + creditors.len()).saturating_sub(1));
    let (mut i, mut j) = (0, 0);

    while i < debtors.len() && j < creditors.len() {
        let debtor = &mut debtors[i];
        let creditor = &mut creditors[j];

        let amount = debtor.remaining.abs().min(creditor.remaining);
        if amount > threshold {
            settlements.push(Settlement {
                from: debtor.balance.participant_id.clone(),
                from_name: debtor.balance.name.clone(),
                to: creditor.balance.participant_id.clone(),
                to_name: creditor.balance.name.clone(),
                amount,
            });
        }

        debtor.remaining += amount;
        creditor.remaining -= amount;

        if debtor.remaining.abs() <= threshold {
            i += 1;
        }
        if creditor.remaining <= threshold {
            j += 1;
        }
    }

    settlements
}

/// Applies `settlements` to `balances` and returns what each participant still holds.
pub fn residual_balances(
    balances: &[Balance],
    settlements: &[Settlement],
) -> Vec<(ParticipantId, Money)> {
    let mut residual: HashMap<&ParticipantId, Money> = balances
        .iter()
        .map(|b| (&b.participant_id, b.net))
        .collect();
    for settlement in settlements {
        if let Some(from) = residual.get_mut(&settlement.from) {
            *from += settlement.amount;
        }
        if let Some(to) = residual.get_mut(&settlement.to) {
            *to -= settlement.amount;
        }
    }
    balances
        .iter()
        .map(|b| {
            let left = residual
                .get(&b.participant_id)
                .copied()
                .unwrap_or(Money::ZERO);
            (b.participant_id.clone(), left)
        })
        .collect()
}
