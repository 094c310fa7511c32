use std::collections::HashSet;

use rust_decimal::Decimal;

use crate::currency::Money;
use crate::domain::{ExactInput, ParticipantId, PercentInput, Share, SplitRequest};
use crate::errors::AllocationError;

use super::Tolerances;

/// Divides `total` among the participants of `request` using default tolerances.
///
/// The returned shares always sum to `total` exactly. Rounding is half away
/// from zero at the minor unit and any remainder lands on the first share.
pub fn allocate_split(total: Money, request: &SplitRequest) -> Result<Vec<Share>, AllocationError> {
    allocate_with(total, request, &Tolerances::default())
}

pub fn allocate_with(
    total: Money,
    request: &SplitRequest,
    tolerances: &Tolerances,
) -> Result<Vec<Share>, AllocationError> {
    if !total.is_positive() {
        return Err(AllocationError::NonPositiveAmount { amount: total });
    }
    ensure_distinct(request.participant_ids())?;

    let mut shares = match request {
        SplitRequest::Equal(ids) => equal_shares(total, ids)?,
        SplitRequest::Exact(inputs) => exact_shares(total, inputs, tolerances.exact)?,
        SplitRequest::Percent(inputs) => percent_shares(total, inputs, tolerances.percent)?,
    };
    absorb_remainder(total, &mut shares)?;
    Ok(shares)
}

fn ensure_distinct(ids: Vec<&ParticipantId>) -> Result<(), AllocationError> {
    if ids.is_empty() {
        return Err(AllocationError::NoParticipants);
    }
    let mut seen = HashSet::with_capacity(ids.len());
    for id in ids {
        if !seen.insert(id) {
            return Err(AllocationError::DuplicateParticipant { id: id.clone() });
        }
    }
    Ok(())
}

fn equal_shares(total: Money, ids: &[ParticipantId]) -> Result<Vec<Share>, AllocationError> {
    let count = i64::try_from(ids.len())
        .map_err(|_| AllocationError::TooManyParticipants { count: ids.len() })?;
    let each = total.div_round(count);
    Ok(ids.iter().map(|id| Share::new(id.clone(), each)).collect())
}

fn exact_shares(
    total: Money,
    inputs: &[ExactInput],
    tolerance: Money,
) -> Result<Vec<Share>, AllocationError> {
    if let Some(negative) = inputs.iter().find(|input| input.amount.is_negative()) {
        return Err(AllocationError::NegativeShare {
            participant: negative.participant_id.clone(),
        });
    }
    let actual = Money::checked_sum(inputs.iter().map(|input| input.amount))
        .ok_or(AllocationError::AmountOverflow)?;
    let drift = actual
        .checked_sub(total)
        .ok_or(AllocationError::AmountOverflow)?;
    if drift.abs() > tolerance {
        return Err(AllocationError::SplitMismatch {
            expected: total,
            actual,
        });
    }
    Ok(inputs
        .iter()
        .map(|input| Share::new(input.participant_id.clone(), input.amount))
        .collect())
}

fn percent_shares(
    total: Money,
    inputs: &[PercentInput],
    tolerance: Decimal,
) -> Result<Vec<Share>, AllocationError> {
    for input in inputs {
        if input.percent < Decimal::ZERO || input.percent > Decimal::ONE_HUNDRED {
            return Err(AllocationError::InvalidPercent {
                participant: input.participant_id.clone(),
                percent: input.percent,
            });
        }
    }
    let sum: Decimal = inputs.iter().map(|input| input.percent).sum();
    if (sum - Decimal::ONE_HUNDRED).abs() > tolerance {
        return Err(AllocationError::PercentMismatch { total: sum });
    }
    inputs
        .iter()
        .map(|input| {
            total
                .percent_of(input.percent)
                .map(|amount| Share::new(input.participant_id.clone(), amount))
                .ok_or(AllocationError::AmountOverflow)
        })
        .collect()
}

/// Forces the exact-sum invariant by charging the rounding remainder to the first share.
fn absorb_remainder(total: Money, shares: &mut [Share]) -> Result<(), AllocationError> {
    let allocated = Money::checked_sum(shares.iter().map(|share| share.amount))
        .ok_or(AllocationError::AmountOverflow)?;
    if let Some(first) = shares.first_mut() {
        first.amount = total
            .checked_sub(allocated)
            .and_then(|remainder| first.amount.checked_add(remainder))
            .ok_or(AllocationError::AmountOverflow)?;
    }
    Ok(())
}
