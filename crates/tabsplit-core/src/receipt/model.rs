//! Receipt ledger domain models.

use serde::{Deserialize, Serialize};

/// A single line item on the receipt.
///
/// `total_price` is always the item's total contribution to the subtotal,
/// never a per-unit price. Quantity is optional in the model; the decoder
/// fills `Some(0.0)` when OCR cannot read one, and anything still unknown
/// is treated as `0.0` downstream.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineItem {
    /// Item name as printed on the receipt.
    pub name: String,
    /// Quantity, if the OCR service could read one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity: Option<f64>,
    /// Total price for this line (contribution to the subtotal).
    pub total_price: f64,
}

impl LineItem {
    /// Creates a new line item.
    pub fn new(name: impl Into<String>, quantity: Option<f64>, total_price: f64) -> Self {
        Self {
            name: name.into(),
            quantity,
            total_price,
        }
    }
}

/// The editable record of a single receipt: line items plus totals.
///
/// The ledger deliberately does NOT enforce `sum(items) == subtotal`; items
/// and totals are edited independently so a human can correct OCR noise one
/// field at a time. The only validity requirement is the non-zero check in
/// [`ReceiptLedger::is_valid`].
///
/// Item identity is the positional index, so indices must stay stable once
/// claims reference them; there is no `remove_item`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReceiptLedger {
    /// Line items in receipt order.
    pub items: Vec<LineItem>,
    /// Pre-tax sum of the receipt.
    pub subtotal: f64,
    /// Tax amount.
    pub tax: f64,
    /// Total as printed (assumed to already include tax).
    pub total: f64,
    /// Tip, added on top of the total.
    pub tip: f64,
}

impl ReceiptLedger {
    /// Creates an empty ledger with zeroed totals.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a line item to the end of the ledger.
    pub fn add_item(&mut self, item: LineItem) {
        self.items.push(item);
    }

    /// Replaces the item at `index`. Out-of-range indices are ignored;
    /// the human-facing editor only offers existing rows.
    pub fn update_item(&mut self, index: usize, item: LineItem) {
        if let Some(slot) = self.items.get_mut(index) {
            *slot = item;
        }
    }

    /// Overwrites all four totals at once.
    pub fn set_totals(&mut self, subtotal: f64, tax: f64, total: f64, tip: f64) {
        self.subtotal = subtotal;
        self.tax = tax;
        self.total = total;
        self.tip = tip;
    }

    /// Returns the item at `index`, if it exists.
    pub fn item(&self, index: usize) -> Option<&LineItem> {
        self.items.get(index)
    }

    /// A ledger is valid iff subtotal, tax, and total are all non-zero.
    /// Tip may legitimately be zero. This is the precondition the
    /// allocation engine requires.
    pub fn is_valid(&self) -> bool {
        self.subtotal != 0.0 && self.tax != 0.0 && self.total != 0.0
    }

    /// The amount the table pays in the end: total plus tip.
    pub fn final_total(&self) -> f64 {
        self.total + self.tip
    }
}
