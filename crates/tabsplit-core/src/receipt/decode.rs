//! Tolerant decoder for the OCR service's receipt payload.
//!
//! The external OCR/LLM service is not strict about numeric types: the same
//! field may arrive as a number (`7`), a numeric string (`"12.5"`), or the
//! sentinel string `"N/A"`. The decoder coerces all three and defaults
//! anything else to `0.0` rather than aborting, because OCR noise is
//! expected and the user corrects it in the editable ledger afterwards.
//!
//! Item name and total price have no tolerant fallback: a silently-zeroed
//! price would corrupt allocation downstream, so a missing one fails the
//! whole decode.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

use super::model::{LineItem, ReceiptLedger};
use crate::error::{Result, SplitError};

/// Decodes the raw OCR response text into a [`ReceiptLedger`].
///
/// The payload is a JSON array; the first receipt object wins and any
/// subsequent elements are ignored. A non-array root, an empty array, or a
/// missing required item field yields [`SplitError::Decode`] with no
/// partial result.
pub fn decode_receipt(raw: &str) -> Result<ReceiptLedger> {
    let receipts: Vec<RawReceipt> =
        serde_json::from_str(raw).map_err(|e| SplitError::decode(e.to_string()))?;

    let first = receipts
        .into_iter()
        .next()
        .ok_or_else(|| SplitError::decode("payload contains no receipt object"))?;

    Ok(first.into_ledger())
}

/// One receipt object as the OCR service emits it.
#[derive(Debug, Deserialize)]
struct RawReceipt {
    #[serde(rename = "Subtotal", default, deserialize_with = "tolerant_f64")]
    subtotal: f64,
    #[serde(rename = "Tax", default, deserialize_with = "tolerant_f64")]
    tax: f64,
    #[serde(rename = "Total", default, deserialize_with = "tolerant_f64")]
    total: f64,
    #[serde(rename = "Tip", default, deserialize_with = "tolerant_f64")]
    tip: f64,
    #[serde(rename = "Items")]
    items: Vec<RawItem>,
}

#[derive(Debug, Deserialize)]
struct RawItem {
    #[serde(rename = "Name")]
    name: String,
    #[serde(
        rename = "Quantity",
        default = "default_quantity",
        deserialize_with = "tolerant_quantity"
    )]
    quantity: Option<f64>,
    #[serde(rename = "Total Price")]
    total_price: f64,
}

/// The 0.0 default applies to an absent quantity too.
fn default_quantity() -> Option<f64> {
    Some(0.0)
}

impl RawReceipt {
    fn into_ledger(self) -> ReceiptLedger {
        ReceiptLedger {
            items: self
                .items
                .into_iter()
                .map(|item| LineItem::new(item.name, item.quantity, item.total_price))
                .collect(),
            subtotal: self.subtotal,
            tax: self.tax,
            total: self.total,
            tip: self.tip,
        }
    }
}

/// Coerces a JSON value into a number per the tolerance rule.
///
/// Numbers pass through; strings other than the `"N/A"` sentinel are parsed
/// if possible; everything else is `None`.
fn coerce_number(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) if s != "N/A" => s.trim().parse().ok(),
        _ => None,
    }
}

fn tolerant_f64<'de, D>(deserializer: D) -> std::result::Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(coerce_number(&value).unwrap_or_else(|| {
        tracing::debug!(%value, "numeric field not parseable, defaulting to 0.0");
        0.0
    }))
}

fn tolerant_quantity<'de, D>(deserializer: D) -> std::result::Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    let parsed = coerce_number(&value);
    if parsed.is_none() {
        tracing::debug!(%value, "quantity not parseable, defaulting to 0.0");
    }
    Ok(Some(parsed.unwrap_or(0.0)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numeric_representations_coerce() {
        let raw = r#"[{
            "Subtotal": "15.00",
            "Tax": 1.5,
            "Total": "16.50",
            "Tip": "N/A",
            "Items": [{"Name": "Burger", "Quantity": "1", "Total Price": 10.0}]
        }]"#;

        let ledger = decode_receipt(raw).unwrap();
        assert_eq!(ledger.subtotal, 15.0);
        assert_eq!(ledger.tax, 1.5);
        assert_eq!(ledger.total, 16.5);
        assert_eq!(ledger.tip, 0.0);
        assert_eq!(ledger.items.len(), 1);
        assert_eq!(ledger.items[0].name, "Burger");
        assert_eq!(ledger.items[0].quantity, Some(1.0));
        assert_eq!(ledger.items[0].total_price, 10.0);
    }

    #[test]
    fn test_genuine_number_decodes_as_is() {
        let raw = r#"[{"Subtotal": 7, "Tax": 1, "Total": 8, "Tip": 0, "Items": []}]"#;
        let ledger = decode_receipt(raw).unwrap();
        assert_eq!(ledger.subtotal, 7.0);
    }

    #[test]
    fn test_garbage_numeric_field_defaults_to_zero() {
        let raw = r#"[{"Subtotal": "abc", "Tax": true, "Total": null, "Items": []}]"#;
        let ledger = decode_receipt(raw).unwrap();
        assert_eq!(ledger.subtotal, 0.0);
        assert_eq!(ledger.tax, 0.0);
        assert_eq!(ledger.total, 0.0);
        assert_eq!(ledger.tip, 0.0); // absent
    }

    #[test]
    fn test_absent_quantity_defaults_to_zero() {
        let raw = r#"[{"Subtotal": 1, "Tax": 1, "Total": 2, "Tip": 0,
            "Items": [{"Name": "Soda", "Total Price": 2.5}]}]"#;
        let ledger = decode_receipt(raw).unwrap();
        assert_eq!(ledger.items[0].quantity, Some(0.0));
    }

    #[test]
    fn test_unparseable_quantity_defaults_to_zero() {
        let raw = r#"[{"Subtotal": 1, "Tax": 1, "Total": 2, "Tip": 0,
            "Items": [{"Name": "Soda", "Quantity": "a few", "Total Price": 2.5}]}]"#;
        let ledger = decode_receipt(raw).unwrap();
        assert_eq!(ledger.items[0].quantity, Some(0.0));
    }

    #[test]
    fn test_missing_price_is_a_hard_error() {
        let raw = r#"[{"Subtotal": 1, "Tax": 1, "Total": 2,
            "Items": [{"Name": "Soda"}]}]"#;
        let err = decode_receipt(raw).unwrap_err();
        assert!(err.is_decode());
    }

    #[test]
    fn test_missing_name_is_a_hard_error() {
        let raw = r#"[{"Subtotal": 1, "Tax": 1, "Total": 2,
            "Items": [{"Total Price": 2.5}]}]"#;
        assert!(decode_receipt(raw).unwrap_err().is_decode());
    }

    #[test]
    fn test_empty_array_is_a_hard_error() {
        assert!(decode_receipt("[]").unwrap_err().is_decode());
    }

    #[test]
    fn test_non_array_root_is_a_hard_error() {
        assert!(decode_receipt(r#"{"Subtotal": 1}"#).unwrap_err().is_decode());
        assert!(decode_receipt("not json").unwrap_err().is_decode());
    }

    #[test]
    fn test_first_receipt_wins() {
        let raw = r#"[
            {"Subtotal": 1, "Tax": 1, "Total": 2, "Items": []},
            {"Subtotal": 99, "Tax": 9, "Total": 108, "Items": []}
        ]"#;
        let ledger = decode_receipt(raw).unwrap();
        assert_eq!(ledger.subtotal, 1.0);
    }

    #[test]
    fn test_decode_is_idempotent_on_normalized_input() {
        let raw = r#"[{"Subtotal": 15.0, "Tax": 1.5, "Total": 16.5, "Tip": 3.0,
            "Items": [{"Name": "Burger", "Quantity": 1.0, "Total Price": 10.0}]}]"#;
        let once = decode_receipt(raw).unwrap();
        let twice = decode_receipt(raw).unwrap();
        assert_eq!(once, twice);
    }
}
