//! Participant persistence records.
//!
//! The on-disk shape is decoupled from the domain model so the store can
//! evolve without touching core types. Conversions must round-trip name,
//! contact address, and tab state losslessly.

use serde::{Deserialize, Serialize};

use tabsplit_core::allocation::{ClaimedItem, Tab};
use tabsplit_core::participant::Participant;

/// One claimed item as persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClaimedItemRecord {
    pub name: String,
    pub quantity: f64,
    pub price: f64,
}

/// A participant's tab as persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TabRecord {
    pub items: Vec<ClaimedItemRecord>,
}

/// One participant as persisted in `participants.json`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParticipantRecord {
    pub id: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tab: Option<TabRecord>,
}

// ============================================================================
// Domain model conversions
// ============================================================================

impl From<&ClaimedItem> for ClaimedItemRecord {
    fn from(item: &ClaimedItem) -> Self {
        Self {
            name: item.name.clone(),
            quantity: item.quantity,
            price: item.price,
        }
    }
}

impl From<&Tab> for TabRecord {
    fn from(tab: &Tab) -> Self {
        Self {
            items: tab.items.iter().map(ClaimedItemRecord::from).collect(),
        }
    }
}

impl From<&Participant> for ParticipantRecord {
    fn from(participant: &Participant) -> Self {
        Self {
            id: participant.id.clone(),
            name: participant.name.clone(),
            contact_address: participant.contact_address.clone(),
            tab: participant.tab.as_ref().map(TabRecord::from),
        }
    }
}

impl ParticipantRecord {
    /// Converts the record back into the domain model.
    pub fn into_domain(self) -> Participant {
        Participant {
            id: self.id,
            name: self.name,
            contact_address: self.contact_address,
            tab: self.tab.map(|tab| Tab {
                items: tab
                    .items
                    .into_iter()
                    .map(|item| ClaimedItem {
                        name: item.name,
                        quantity: item.quantity,
                        price: item.price,
                    })
                    .collect(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip_preserves_tab_state() {
        let mut participant = Participant::new("Alice", Some("+1 555 0100".to_string()));
        let mut tab = Tab::new();
        tab.add_item(ClaimedItem {
            name: "Burger".to_string(),
            quantity: 1.0,
            price: 10.0,
        });
        participant.tab = Some(tab);

        let record = ParticipantRecord::from(&participant);
        let json = serde_json::to_string(&record).unwrap();
        let back: ParticipantRecord = serde_json::from_str(&json).unwrap();

        assert_eq!(back.into_domain(), participant);
    }

    #[test]
    fn test_absent_optionals_are_omitted() {
        let participant = Participant::new("Bob", None);
        let json = serde_json::to_string(&ParticipantRecord::from(&participant)).unwrap();
        assert!(!json.contains("contactAddress"));
        assert!(!json.contains("tab"));
    }
}
