//! Tab domain models.

use serde::{Deserialize, Serialize};

use crate::receipt::LineItem;

/// One line item as claimed by a participant.
///
/// Quantity is normalized here: an unknown quantity on the ledger becomes
/// `0.0` on the tab.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClaimedItem {
    /// Item name as it appears on the ledger.
    pub name: String,
    /// Claimed quantity (0.0 when the ledger did not carry one).
    pub quantity: f64,
    /// The item's total price (its contribution to the subtotal).
    pub price: f64,
}

impl From<&LineItem> for ClaimedItem {
    fn from(item: &LineItem) -> Self {
        Self {
            name: item.name.clone(),
            quantity: item.quantity.unwrap_or(0.0),
            price: item.total_price,
        }
    }
}

/// The materialized set of one participant's claimed items.
///
/// A tab holds claimed items only; owed amounts are always computed against
/// the live ledger at allocation time, so later edits to the ledger totals
/// are reflected without any snapshot going stale.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tab {
    /// Claimed items in ledger order.
    pub items: Vec<ClaimedItem>,
}

impl Tab {
    /// Creates an empty tab.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a claimed item.
    pub fn add_item(&mut self, item: ClaimedItem) {
        self.items.push(item);
    }

    /// Sum of the claimed items' prices (the allocation numerator).
    pub fn claimed_total(&self) -> f64 {
        self.items.iter().map(|item| item.price).sum()
    }

    /// True if the tab holds no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
