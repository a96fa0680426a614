//! A single receipt-splitting session.
//!
//! One session owns one ledger, one claim registry, and one participant
//! directory, mutated sequentially by a single logical actor. Hosts that
//! embed the core in a concurrent environment must serialize all mutating
//! calls per session.

use serde::{Deserialize, Serialize};

use crate::allocation::{self, ClaimedItem, Tab};
use crate::claim::{ClaimOutcome, ClaimRegistry};
use crate::error::{Result, SplitError};
use crate::participant::ParticipantDirectory;
use crate::receipt::{LineItem, ReceiptLedger};

/// Per-participant settlement result: the export surface.
///
/// Carries everything a host needs to render or transmit a summary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParticipantShare {
    /// The participant's stable id.
    pub participant_id: String,
    /// Display name.
    pub name: String,
    /// Optional contact address for transmission.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_address: Option<String>,
    /// Amount owed, tax and tip included.
    pub amount_owed: f64,
    /// The items this participant claimed.
    pub items: Vec<ClaimedItem>,
}

/// Drives one receipt through claiming and settlement.
pub struct SplitSession {
    ledger: ReceiptLedger,
    claims: ClaimRegistry,
    directory: ParticipantDirectory,
}

impl SplitSession {
    /// Starts a new session over a decoded ledger.
    ///
    /// Every participant's tab is reset here; claims never carry over
    /// between receipts.
    pub fn new(ledger: ReceiptLedger, mut directory: ParticipantDirectory) -> Self {
        directory.reset_all_tabs();
        Self {
            ledger,
            claims: ClaimRegistry::new(),
            directory,
        }
    }

    /// The live ledger.
    pub fn ledger(&self) -> &ReceiptLedger {
        &self.ledger
    }

    /// Mutable access for user edits (items, totals).
    pub fn ledger_mut(&mut self) -> &mut ReceiptLedger {
        &mut self.ledger
    }

    /// The participant directory.
    pub fn directory(&self) -> &ParticipantDirectory {
        &self.directory
    }

    /// Mutable directory access (e.g. adding a participant mid-session).
    pub fn directory_mut(&mut self) -> &mut ParticipantDirectory {
        &mut self.directory
    }

    /// Applies the toggle-claim command for a participant on an item.
    ///
    /// Fails with `NotFound` if the participant or the item index does not
    /// exist; otherwise claim mutations never fail.
    pub fn toggle_claim(&mut self, index: usize, participant_id: &str) -> Result<ClaimOutcome> {
        if !self.directory.contains(participant_id) {
            return Err(SplitError::not_found("participant", participant_id));
        }
        if self.ledger.item(index).is_none() {
            return Err(SplitError::not_found("item", index.to_string()));
        }

        let outcome = self.claims.toggle_claim(index, participant_id);
        tracing::debug!(index, participant_id, ?outcome, "claim toggled");
        Ok(outcome)
    }

    /// Returns who currently claims `index`, if anyone.
    pub fn claimant_of(&self, index: usize) -> Option<&str> {
        self.claims.claimant_of(index)
    }

    /// The items `participant_id` may select: everything not already
    /// claimed by someone else. Items with an existing claimant are hidden
    /// from all other participants' selection views.
    pub fn selectable_items(&self, participant_id: &str) -> Vec<(usize, &LineItem)> {
        self.ledger
            .items
            .iter()
            .enumerate()
            .filter(|(index, _)| {
                self.claims
                    .claimant_of(*index)
                    .is_none_or(|holder| holder == participant_id)
            })
            .collect()
    }

    /// Materializes every participant's tab, computes owed amounts, and
    /// returns the per-participant shares.
    ///
    /// Participants who claimed nothing get an owed amount of `0.0` and an
    /// empty item list. Unclaimed items contribute to nobody, so the shares
    /// need not sum to the final total.
    ///
    /// The ledger must be valid; settlement fails fast otherwise.
    pub fn settle(&mut self) -> Result<Vec<ParticipantShare>> {
        if !self.ledger.is_valid() {
            return Err(SplitError::precondition(
                "cannot settle an invalid ledger (zero subtotal, tax, or total)",
            ));
        }

        let tabs: Vec<(String, Tab)> = self
            .directory
            .list()
            .iter()
            .map(|p| {
                (
                    p.id.clone(),
                    allocation::tab_from_claims(&self.ledger, &self.claims, &p.id),
                )
            })
            .collect();

        let owed = allocation::allocate_all(
            &self.ledger,
            tabs.iter().map(|(id, tab)| (id.as_str(), tab)),
        )?;

        let mut shares = Vec::with_capacity(tabs.len());
        for (id, tab) in tabs {
            let amount_owed = owed.get(&id).copied().unwrap_or(0.0);
            let participant = self
                .directory
                .get(&id)
                .ok_or_else(|| SplitError::not_found("participant", id.clone()))?;
            let share = ParticipantShare {
                participant_id: id.clone(),
                name: participant.name.clone(),
                contact_address: participant.contact_address.clone(),
                amount_owed,
                items: tab.items.clone(),
            };
            let stored = if tab.is_empty() { None } else { Some(tab) };
            self.directory.set_tab(&id, stored);
            shares.push(share);
        }

        tracing::info!(participants = shares.len(), "session settled");
        Ok(shares)
    }

    /// Ends the session, yielding the directory (with tabs) for persistence.
    pub fn into_directory(self) -> ParticipantDirectory {
        self.directory
    }
}
