//! Persistence DTOs.

mod participant;

pub use participant::{ClaimedItemRecord, ParticipantRecord, TabRecord};
