//! The participant directory.

use super::model::Participant;
use crate::allocation::Tab;

/// Owns the set of participants by value.
///
/// All mutation goes through directory methods; nothing hands out aliased
/// references to stored records. Lookup is by the participant's stable id.
#[derive(Debug, Clone, Default)]
pub struct ParticipantDirectory {
    participants: Vec<Participant>,
}

impl ParticipantDirectory {
    /// Creates an empty directory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a directory from a previously persisted participant set.
    ///
    /// `None` means no prior set exists (first ever session): the single
    /// self-participant named "YOU" is seeded, exactly once. An existing
    /// set, even an empty one, is taken as-is.
    pub fn from_saved(saved: Option<Vec<Participant>>) -> Self {
        match saved {
            Some(participants) => Self { participants },
            None => {
                tracing::info!("no saved participants, seeding self-participant");
                Self {
                    participants: vec![Participant::self_participant()],
                }
            }
        }
    }

    /// Adds a participant and returns its id.
    pub fn add_participant(
        &mut self,
        name: impl Into<String>,
        contact_address: Option<String>,
    ) -> String {
        let participant = Participant::new(name, contact_address);
        let id = participant.id.clone();
        self.participants.push(participant);
        id
    }

    /// Returns all participants in insertion order.
    pub fn list(&self) -> &[Participant] {
        &self.participants
    }

    /// Looks up a participant by id.
    pub fn get(&self, id: &str) -> Option<&Participant> {
        self.participants.iter().find(|p| p.id == id)
    }

    /// Looks up a participant by display name (first match).
    pub fn find_by_name(&self, name: &str) -> Option<&Participant> {
        self.participants.iter().find(|p| p.name == name)
    }

    /// True if a participant with this id exists.
    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    /// Replaces the stored tab for `id`. Returns false if no such
    /// participant exists.
    pub fn set_tab(&mut self, id: &str, tab: Option<Tab>) -> bool {
        match self.participants.iter_mut().find(|p| p.id == id) {
            Some(participant) => {
                participant.tab = tab;
                true
            }
            None => false,
        }
    }

    /// Clears every participant's tab.
    ///
    /// Invoked once at the start of each new receipt-splitting session,
    /// never mid-session.
    pub fn reset_all_tabs(&mut self) {
        for participant in &mut self.participants {
            participant.tab = None;
        }
    }

    /// Consumes the directory, yielding the participants for persistence.
    pub fn into_participants(self) -> Vec<Participant> {
        self.participants
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::allocation::{ClaimedItem, Tab};
    use crate::participant::SELF_PARTICIPANT_NAME;

    #[test]
    fn test_first_run_seeds_self_participant() {
        let directory = ParticipantDirectory::from_saved(None);
        assert_eq!(directory.list().len(), 1);
        assert_eq!(directory.list()[0].name, SELF_PARTICIPANT_NAME);
        assert!(directory.list()[0].is_self());
    }

    #[test]
    fn test_existing_set_is_not_reseeded() {
        let saved = vec![Participant::new("Alice", None)];
        let directory = ParticipantDirectory::from_saved(Some(saved));
        assert_eq!(directory.list().len(), 1);
        assert_eq!(directory.list()[0].name, "Alice");

        // An explicitly empty set stays empty.
        let empty = ParticipantDirectory::from_saved(Some(Vec::new()));
        assert!(empty.list().is_empty());
    }

    #[test]
    fn test_add_and_lookup() {
        let mut directory = ParticipantDirectory::new();
        let id = directory.add_participant("Bob", Some("+1 555 0100".to_string()));

        let bob = directory.get(&id).unwrap();
        assert_eq!(bob.name, "Bob");
        assert_eq!(bob.contact_address.as_deref(), Some("+1 555 0100"));
        assert_eq!(directory.find_by_name("Bob").unwrap().id, id);
        assert!(directory.contains(&id));
    }

    #[test]
    fn test_reset_all_tabs() {
        let mut directory = ParticipantDirectory::new();
        let id = directory.add_participant("Bob", None);

        let mut tab = Tab::new();
        tab.add_item(ClaimedItem {
            name: "Burger".to_string(),
            quantity: 1.0,
            price: 10.0,
        });
        assert!(directory.set_tab(&id, Some(tab)));
        assert!(directory.get(&id).unwrap().tab.is_some());

        directory.reset_all_tabs();
        assert!(directory.get(&id).unwrap().tab.is_none());
    }

    #[test]
    fn test_set_tab_unknown_id() {
        let mut directory = ParticipantDirectory::new();
        assert!(!directory.set_tab("missing", Some(Tab::new())));
    }
}
