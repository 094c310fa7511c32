use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::common::*;

/// A member of a group who can pay for and share in expenses.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Participant {
    pub id: ParticipantId,
    pub name: String,
}

impl Participant {
    /// Creates a participant with a freshly generated identifier.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: ParticipantId(Uuid::new_v4().to_string()),
            name: name.into(),
        }
    }

    pub fn with_id(id: impl Into<ParticipantId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}
