//! Item claim bookkeeping.

use std::collections::BTreeMap;

/// What a [`ClaimRegistry::toggle_claim`] call actually did.
///
/// Hosts mirror this in their presentation layer (e.g. checkbox state)
/// without the registry knowing anything about a UI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClaimOutcome {
    /// The item was free and is now claimed by the caller.
    Claimed,
    /// The caller already held the item; the claim was released.
    Released,
    /// Another participant held the item; the claim moved to the caller.
    Transferred {
        /// The previous claimant's participant id.
        from: String,
    },
}

/// Tracks, per item index, which single participant currently claims it.
///
/// Each index maps to at most one participant at a time; a participant may
/// hold any number of indices. [`ClaimRegistry::claimant_of`] is the single
/// source of truth for mutual exclusivity.
#[derive(Debug, Clone, Default)]
pub struct ClaimRegistry {
    /// BTreeMap so `items_claimed_by` iterates in index order.
    claims: BTreeMap<usize, String>,
}

impl ClaimRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Applies toggle semantics for `participant_id` at `index`:
    ///
    /// - the index is free → claim it
    /// - the same participant holds it → release it
    /// - a different participant holds it → transfer it to the caller
    pub fn toggle_claim(&mut self, index: usize, participant_id: &str) -> ClaimOutcome {
        match self.claims.get(&index) {
            Some(holder) if holder == participant_id => {
                self.claims.remove(&index);
                ClaimOutcome::Released
            }
            Some(holder) => {
                let from = holder.clone();
                self.claims.insert(index, participant_id.to_string());
                ClaimOutcome::Transferred { from }
            }
            None => {
                self.claims.insert(index, participant_id.to_string());
                ClaimOutcome::Claimed
            }
        }
    }

    /// Releases the claim on `index`, returning the previous claimant.
    pub fn unclaim(&mut self, index: usize) -> Option<String> {
        self.claims.remove(&index)
    }

    /// Returns the participant id currently claiming `index`, if any.
    pub fn claimant_of(&self, index: usize) -> Option<&str> {
        self.claims.get(&index).map(String::as_str)
    }

    /// Returns the indices claimed by `participant_id`, in index order.
    pub fn items_claimed_by(&self, participant_id: &str) -> Vec<usize> {
        self.claims
            .iter()
            .filter(|(_, holder)| holder.as_str() == participant_id)
            .map(|(&index, _)| index)
            .collect()
    }

    /// True if nobody has claimed anything yet.
    pub fn is_empty(&self) -> bool {
        self.claims.is_empty()
    }
}
