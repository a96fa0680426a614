//! Participant domain model.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::allocation::Tab;

/// Display name of the implicit self-participant seeded on first run.
pub const SELF_PARTICIPANT_NAME: &str = "YOU";

/// Someone the bill can be split with.
///
/// Participants persist across sessions; their tab is reset to `None` at the
/// start of every new receipt-splitting session, so claims never carry over
/// between receipts. The seeded self-participant is indistinguishable from a
/// user-added one except by name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Participant {
    /// Stable identity (UUID v4 string).
    pub id: String,
    /// Display name.
    pub name: String,
    /// Optional contact address (phone number, handle, ...).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_address: Option<String>,
    /// This session's materialized tab, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tab: Option<Tab>,
}

impl Participant {
    /// Creates a new participant with a fresh id and no tab.
    pub fn new(name: impl Into<String>, contact_address: Option<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: name.into(),
            contact_address,
            tab: None,
        }
    }

    /// Creates the implicit self-participant.
    pub fn self_participant() -> Self {
        Self::new(SELF_PARTICIPANT_NAME, None)
    }

    /// True if this is the seeded self-participant (by name, which is the
    /// only thing that distinguishes it).
    pub fn is_self(&self) -> bool {
        self.name == SELF_PARTICIPANT_NAME
    }
}
