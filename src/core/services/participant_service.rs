use crate::domain::{Participant, ParticipantId};
use crate::errors::LedgerError;
use crate::ledger::Group;

use super::{ServiceError, ServiceResult};

pub struct ParticipantService;

impl ParticipantService {
    pub fn add(group: &mut Group, name: &str) -> ServiceResult<ParticipantId> {
        let name = name.trim();
        if name.is_empty() {
            return Err(ServiceError::Invalid("Name is required".into()));
        }
        Self::validate_name(group, name)?;
        let id = group.add_participant(Participant::new(name));
        tracing::debug!(group = %group.id, participant = %id, "participant added");
        Ok(id)
    }

    /// Removes a participant who has no expense involvement.
    pub fn remove(group: &mut Group, id: &ParticipantId) -> ServiceResult<Participant> {
        if group.is_involved(id) {
            tracing::warn!(group = %group.id, participant = %id, "refusing to remove participant in use");
            return Err(LedgerError::ParticipantInUse(id.clone()).into());
        }
        let position = group
            .participants
            .iter()
            .position(|p| &p.id == id)
            .ok_or_else(|| ServiceError::Invalid(format!("Participant `{id}` not found")))?;
        let removed = group.participants.remove(position);
        group.touch();
        Ok(removed)
    }

    pub fn list(group: &Group) -> Vec<&Participant> {
        group.participants.iter().collect()
    }

    fn validate_name(group: &Group, candidate: &str) -> ServiceResult<()> {
        let normalized = candidate.to_ascii_lowercase();
        let duplicate = group
            .participants
            .iter()
            .any(|p| p.name.trim().to_ascii_lowercase() == normalized);
        if duplicate {
            Err(ServiceError::Invalid(format!(
                "Participant `{}` already exists",
                candidate
            )))
        } else {
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::currency::Money;
    use crate::domain::{ExpenseDraft, SplitRequest};
    use crate::core::services::ExpenseService;
    use chrono::NaiveDate;

    #[test]
    fn adds_trimmed_unique_names() {
        let mut group = Group::new("Trip", "Asha");
        ParticipantService::add(&mut group, "  Ben ").expect("add participant");
        assert_eq!(group.participants[1].name, "Ben");

        let err = ParticipantService::add(&mut group, "ben").expect_err("duplicate");
        assert!(format!("{err}").contains("already exists"));
        assert!(ParticipantService::add(&mut group, "   ").is_err());
    }

    #[test]
    fn removes_uninvolved_participant() {
        let mut group = Group::new("Trip", "Asha");
        let ben = ParticipantService::add(&mut group, "Ben").unwrap();
        let removed = ParticipantService::remove(&mut group, &ben).expect("remove");
        assert_eq!(removed.name, "Ben");
        assert_eq!(ParticipantService::list(&group).len(), 1);
    }

    #[test]
    fn refuses_to_remove_participant_in_expenses() {
        let mut group = Group::new("Trip", "Asha");
        let asha = group.participants[0].id.clone();
        let ben = ParticipantService::add(&mut group, "Ben").unwrap();
        let draft = ExpenseDraft {
            description: "Taxi".into(),
            amount: Money::from_cents(2_000),
            date: NaiveDate::from_ymd_opt(2025, 5, 1).unwrap(),
            paid_by: asha,
            split: SplitRequest::Equal(vec![ben.clone()]),
        };
        ExpenseService::add(&mut group, draft).unwrap();

        let err = ParticipantService::remove(&mut group, &ben).unwrap_err();
        assert!(matches!(
            err,
            ServiceError::Ledger(LedgerError::ParticipantInUse(_))
        ));
        assert_eq!(group.participants.len(), 2);
    }
}
