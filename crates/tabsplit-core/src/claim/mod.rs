//! Mutually-exclusive item claims.

mod registry;

pub use registry::{ClaimOutcome, ClaimRegistry};
