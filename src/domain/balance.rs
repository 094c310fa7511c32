use serde::{Deserialize, Serialize};

use crate::currency::Money;
use crate::domain::common::*;

/// Net position of one participant: positive is owed, negative owes.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Balance {
    pub participant_id: ParticipantId,
    pub name: String,
    pub paid: Money,
    pub share: Money,
    pub net: Money,
}

impl Balance {
    pub fn zero(participant_id: ParticipantId, name: impl Into<String>) -> Self {
        Self {
            participant_id,
            name: name.into(),
            paid: Money::ZERO,
            share: Money::ZERO,
            net: Money::ZERO,
        }
    }
}

/// A directed payment that moves both parties toward zero.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Settlement {
    pub from: ParticipantId,
    pub from_name: String,
    pub to: ParticipantId,
    pub to_name: String,
    pub amount: Money,
}
