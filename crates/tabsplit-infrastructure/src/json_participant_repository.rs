//! JSON-file-backed participant repository.

use std::path::PathBuf;

use async_trait::async_trait;

use tabsplit_core::participant::{Participant, ParticipantRepository};
use tabsplit_core::Result;

use crate::dto::ParticipantRecord;
use crate::paths::TabsplitPaths;
use crate::storage::{AtomicFile, FileFormat};

/// Stores the participant set as a JSON array of records.
///
/// A missing file is reported as `None` from `load_all`, which is what makes
/// the directory seed the self-participant on the first ever run.
pub struct JsonParticipantRepository {
    file: AtomicFile<Vec<ParticipantRecord>>,
}

impl JsonParticipantRepository {
    /// Creates a repository at the default platform path
    /// (`~/.config/tabsplit/participants.json`).
    pub fn new() -> Result<Self> {
        let path = TabsplitPaths::participants_file()
            .map_err(|e| tabsplit_core::SplitError::io(e.to_string()))?;
        Ok(Self::with_path(path))
    }

    /// Creates a repository at an explicit path (used by tests).
    pub fn with_path(path: PathBuf) -> Self {
        Self {
            file: AtomicFile::new(path, FileFormat::Json),
        }
    }
}

#[async_trait]
impl ParticipantRepository for JsonParticipantRepository {
    async fn load_all(&self) -> Result<Option<Vec<Participant>>> {
        let records = self.file.load()?;
        tracing::debug!(
            path = %self.file.path().display(),
            found = records.is_some(),
            "loaded participant store"
        );
        Ok(records.map(|records| {
            records
                .into_iter()
                .map(ParticipantRecord::into_domain)
                .collect()
        }))
    }

    async fn save_all(&self, participants: &[Participant]) -> Result<()> {
        let records: Vec<ParticipantRecord> =
            participants.iter().map(ParticipantRecord::from).collect();
        self.file.save(&records)?;
        tracing::debug!(
            path = %self.file.path().display(),
            count = records.len(),
            "saved participant store"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tabsplit_core::allocation::{ClaimedItem, Tab};
    use tabsplit_core::participant::ParticipantDirectory;

    #[tokio::test]
    async fn test_missing_file_loads_none() {
        let dir = tempfile::tempdir().unwrap();
        let repo = JsonParticipantRepository::with_path(dir.path().join("participants.json"));
        assert!(repo.load_all().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_save_and_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let repo = JsonParticipantRepository::with_path(dir.path().join("participants.json"));

        let mut alice = Participant::new("Alice", Some("+1 555 0100".to_string()));
        let mut tab = Tab::new();
        tab.add_item(ClaimedItem {
            name: "Burger".to_string(),
            quantity: 1.0,
            price: 10.0,
        });
        alice.tab = Some(tab);
        let bob = Participant::new("Bob", None);

        repo.save_all(&[alice.clone(), bob.clone()]).await.unwrap();
        let loaded = repo.load_all().await.unwrap().unwrap();

        assert_eq!(loaded, vec![alice, bob]);
    }

    #[tokio::test]
    async fn test_first_run_seeds_you_through_directory() {
        let dir = tempfile::tempdir().unwrap();
        let repo = JsonParticipantRepository::with_path(dir.path().join("participants.json"));

        let directory = ParticipantDirectory::from_saved(repo.load_all().await.unwrap());
        assert_eq!(directory.list().len(), 1);
        assert_eq!(directory.list()[0].name, "YOU");

        // Persist and reload: no second seeding.
        repo.save_all(directory.list()).await.unwrap();
        let again = ParticipantDirectory::from_saved(repo.load_all().await.unwrap());
        assert_eq!(again.list().len(), 1);
    }
}
