//! Participant domain models, directory, and repository trait.

mod directory;
mod model;
mod repository;

pub use directory::ParticipantDirectory;
pub use model::{Participant, SELF_PARTICIPANT_NAME};
pub use repository::ParticipantRepository;
