//! Participant repository trait.

use async_trait::async_trait;

use super::model::Participant;
use crate::error::Result;

/// Repository trait for participant persistence.
///
/// The store must round-trip name, contact address, and tab state
/// losslessly. `load_all` distinguishes "no prior participant set exists"
/// (`None`, which makes the directory seed the self-participant) from an
/// existing, possibly empty, set.
#[async_trait]
pub trait ParticipantRepository: Send + Sync {
    /// Loads the persisted participant set, or `None` if none exists yet.
    async fn load_all(&self) -> Result<Option<Vec<Participant>>>;

    /// Persists the full participant set.
    async fn save_all(&self, participants: &[Participant]) -> Result<()>;
}
