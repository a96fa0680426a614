//! tabsplit core: receipt normalization and bill-splitting engine.
//!
//! Ingests a semi-structured receipt extraction result from an external OCR
//! service, turns it into an editable line-item ledger, partitions the items
//! among participants via mutually exclusive claims, and computes each
//! participant's owed amount with a proportional share of tax and tip.
//!
//! The core is single-threaded, synchronous, and has no I/O of its own; the
//! only async boundaries are the [`scanner::ReceiptScanner`] upload
//! collaborator and the [`participant::ParticipantRepository`] persistence
//! collaborator, both implemented by other crates.

pub mod allocation;
pub mod claim;
pub mod config;
pub mod error;
pub mod participant;
pub mod receipt;
pub mod scanner;
pub mod session;

// Re-export common error type
pub use error::{Result, SplitError};
pub use session::{ParticipantShare, SplitSession};
