use std::fs;
use std::path::Path;

use anyhow::{bail, Context, Result};

use tabsplit_core::participant::{ParticipantDirectory, ParticipantRepository};
use tabsplit_core::receipt::decode_receipt;
use tabsplit_core::SplitSession;
use tabsplit_infrastructure::JsonParticipantRepository;

use super::utils::print_ledger;

pub async fn run(file: &Path, claims: &[String], tip: Option<f64>) -> Result<()> {
    let raw = fs::read_to_string(file)?;
    let mut ledger = decode_receipt(&raw)?;
    if let Some(tip) = tip {
        ledger.tip = tip;
    }
    print_ledger(&ledger);
    println!();

    let repo = JsonParticipantRepository::new()?;
    let directory = ParticipantDirectory::from_saved(repo.load_all().await?);
    let mut session = SplitSession::new(ledger, directory);

    for claim in claims {
        let (index, name) = parse_claim(claim)?;
        let participant_id = session
            .directory()
            .find_by_name(&name)
            .with_context(|| format!("no participant named '{}'", name))?
            .id
            .clone();
        session.toggle_claim(index, &participant_id)?;
    }

    let shares = session.settle()?;
    for share in &shares {
        if share.items.is_empty() {
            continue;
        }
        for item in &share.items {
            println!("  {} ({:.1} x {:.2})", item.name, item.quantity, item.price);
        }
        // The self-participant reads naturally: "YOU owe", everyone else "owes".
        let verb = if share.name == "YOU" { "owe" } else { "owes" };
        println!("{} {} {:.2}", share.name, verb, share.amount_owed);
        println!();
    }

    repo.save_all(session.into_directory().list()).await?;
    Ok(())
}

/// Parses one `--claim` argument of the form `INDEX=NAME`.
fn parse_claim(claim: &str) -> Result<(usize, String)> {
    let Some((index, name)) = claim.split_once('=') else {
        bail!("invalid claim '{}', expected INDEX=NAME", claim);
    };
    let index: usize = index
        .trim()
        .parse()
        .with_context(|| format!("invalid item index in claim '{}'", claim))?;
    Ok((index, name.trim().to_string()))
}

#[cfg(test)]
mod tests {
    use super::parse_claim;

    #[test]
    fn test_parse_claim() {
        assert_eq!(parse_claim("0=YOU").unwrap(), (0, "YOU".to_string()));
        assert_eq!(parse_claim("12 = Alice").unwrap(), (12, "Alice".to_string()));
        assert!(parse_claim("Alice").is_err());
        assert!(parse_claim("x=Alice").is_err());
    }
}
