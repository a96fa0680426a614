//! Tab materialization and the proportional allocation engine.

mod engine;
mod model;

pub use engine::{allocate_all, amount_owed, tab_from_claims};
pub use model::{ClaimedItem, Tab};
