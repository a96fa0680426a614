use anyhow::Result;

use tabsplit_core::participant::{ParticipantDirectory, ParticipantRepository};
use tabsplit_infrastructure::JsonParticipantRepository;

pub async fn add(name: String, contact: Option<String>) -> Result<()> {
    let repo = JsonParticipantRepository::new()?;
    let mut directory = ParticipantDirectory::from_saved(repo.load_all().await?);

    let id = directory.add_participant(&name, contact);
    repo.save_all(directory.list()).await?;

    println!("Added participant '{}' ({})", name, id);
    Ok(())
}

pub async fn list() -> Result<()> {
    let repo = JsonParticipantRepository::new()?;
    let directory = ParticipantDirectory::from_saved(repo.load_all().await?);
    // Seeding on first run is persisted immediately so the YOU participant
    // exists for every later command.
    repo.save_all(directory.list()).await?;

    for participant in directory.list() {
        let contact = participant.contact_address.as_deref().unwrap_or("-");
        println!("{:<24} {:<20} {}", participant.name, contact, participant.id);
    }
    Ok(())
}
