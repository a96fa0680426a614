//! Proportional allocation of subtotal, tax, and tip across participants.

use std::collections::HashMap;

use super::model::{ClaimedItem, Tab};
use crate::claim::ClaimRegistry;
use crate::error::{Result, SplitError};
use crate::receipt::ReceiptLedger;

/// Materializes a participant's tab from their current claims.
///
/// Claimed indices that no longer point at a ledger item are skipped; the
/// ledger never removes items, so this only happens if a registry from a
/// different session is applied to a shorter ledger.
pub fn tab_from_claims(
    ledger: &ReceiptLedger,
    registry: &ClaimRegistry,
    participant_id: &str,
) -> Tab {
    let mut tab = Tab::new();
    for index in registry.items_claimed_by(participant_id) {
        if let Some(item) = ledger.item(index) {
            tab.add_item(ClaimedItem::from(item));
        }
    }
    tab
}

/// Computes the amount owed by the owner of `tab`.
///
/// `owed = claimed_total / subtotal * (total + tip)` — each participant pays
/// their fraction of the pre-tax spend, scaled up by tax (already inside
/// `total`) and tip. An empty tab owes `0.0` regardless of ledger state.
///
/// The ledger must pass [`ReceiptLedger::is_valid`]; a zero subtotal would
/// otherwise divide to infinity, so allocation fails fast with
/// [`SplitError::Precondition`] instead.
pub fn amount_owed(ledger: &ReceiptLedger, tab: &Tab) -> Result<f64> {
    if tab.is_empty() {
        return Ok(0.0);
    }

    if !ledger.is_valid() {
        return Err(SplitError::precondition(
            "allocation requires non-zero subtotal, tax, and total",
        ));
    }

    let share_ratio = tab.claimed_total() / ledger.subtotal;
    Ok(share_ratio * ledger.final_total())
}

/// Computes owed amounts for every participant with a tab.
///
/// The values need not sum to `total + tip`: floating-point rounding and
/// unclaimed items (which contribute to nobody's numerator) both leave a
/// residual, and callers are expected to tolerate it.
pub fn allocate_all<'a>(
    ledger: &ReceiptLedger,
    tabs: impl IntoIterator<Item = (&'a str, &'a Tab)>,
) -> Result<HashMap<String, f64>> {
    let mut owed = HashMap::new();
    for (participant_id, tab) in tabs {
        owed.insert(participant_id.to_string(), amount_owed(ledger, tab)?);
    }
    Ok(owed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::receipt::LineItem;

    fn burger_ledger() -> ReceiptLedger {
        ReceiptLedger {
            items: vec![
                LineItem::new("Burger", Some(1.0), 10.0),
                LineItem::new("Fries", None, 5.0),
            ],
            subtotal: 15.0,
            tax: 1.5,
            total: 16.5,
            tip: 3.0,
        }
    }

    fn claims(pairs: &[(usize, &str)]) -> ClaimRegistry {
        let mut registry = ClaimRegistry::new();
        for &(index, id) in pairs {
            registry.toggle_claim(index, id);
        }
        registry
    }

    #[test]
    fn test_burger_and_fries_split() {
        let ledger = burger_ledger();
        let registry = claims(&[(0, "a"), (1, "b")]);

        let tab_a = tab_from_claims(&ledger, &registry, "a");
        let tab_b = tab_from_claims(&ledger, &registry, "b");

        // a claimed the burger: 10/15 of 19.50
        let owed_a = amount_owed(&ledger, &tab_a).unwrap();
        assert!((owed_a - 13.0).abs() < 1e-9);

        // b claimed the fries: 5/15 of 19.50
        let owed_b = amount_owed(&ledger, &tab_b).unwrap();
        assert!((owed_b - 6.5).abs() < 1e-9);
    }

    #[test]
    fn test_empty_tab_owes_nothing() {
        let ledger = burger_ledger();
        let tab = Tab::new();
        assert_eq!(amount_owed(&ledger, &tab).unwrap(), 0.0);
    }

    #[test]
    fn test_empty_tab_ignores_invalid_ledger() {
        let mut ledger = burger_ledger();
        ledger.set_totals(0.0, 0.0, 0.0, 0.0);
        assert_eq!(amount_owed(&ledger, &Tab::new()).unwrap(), 0.0);
    }

    #[test]
    fn test_zero_subtotal_is_a_precondition_violation() {
        let mut ledger = burger_ledger();
        ledger.set_totals(0.0, 1.5, 16.5, 3.0);
        let registry = claims(&[(0, "a")]);
        let tab = tab_from_claims(&ledger, &registry, "a");

        let err = amount_owed(&ledger, &tab).unwrap_err();
        assert!(err.is_precondition());
    }

    #[test]
    fn test_allocation_is_scale_invariant() {
        let ledger = burger_ledger();
        let registry = claims(&[(0, "a")]);
        let tab = tab_from_claims(&ledger, &registry, "a");
        let owed = amount_owed(&ledger, &tab).unwrap();

        let mut doubled = burger_ledger();
        for item in &mut doubled.items {
            item.total_price *= 2.0;
        }
        doubled.set_totals(30.0, 3.0, 33.0, 6.0);
        let doubled_tab = tab_from_claims(&doubled, &registry, "a");
        let doubled_owed = amount_owed(&doubled, &doubled_tab).unwrap();

        assert!((doubled_owed - 2.0 * owed).abs() < 1e-9);
    }

    #[test]
    fn test_unclaimed_items_leave_a_residual() {
        let ledger = burger_ledger();
        // Only the burger is claimed; the fries' share of tax and tip
        // silently falls to nobody.
        let registry = claims(&[(0, "a")]);
        let tab = tab_from_claims(&ledger, &registry, "a");
        let owed = allocate_all(&ledger, [("a", &tab)]).unwrap();

        let sum: f64 = owed.values().sum();
        assert!(sum < ledger.final_total());
    }

    #[test]
    fn test_stale_claim_index_is_skipped() {
        let ledger = burger_ledger();
        let registry = claims(&[(7, "a")]);
        let tab = tab_from_claims(&ledger, &registry, "a");
        assert!(tab.is_empty());
    }
}
