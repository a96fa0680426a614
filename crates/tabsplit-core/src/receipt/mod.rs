//! Receipt ledger domain models and the tolerant OCR payload decoder.

mod decode;
mod model;

pub use decode::decode_receipt;
pub use model::{LineItem, ReceiptLedger};
