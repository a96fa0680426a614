use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "tabsplit")]
#[command(about = "tabsplit - receipt scanning and proportional bill splitting", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Manage the participant directory
    Participants {
        #[command(subcommand)]
        action: ParticipantsAction,
    },
    /// Decode a saved OCR response into a ledger
    Decode {
        /// Path to the raw OCR response JSON
        file: PathBuf,
    },
    /// Upload a receipt image to the OCR service and decode the result
    Scan {
        /// Path to the receipt image (JPEG)
        image: PathBuf,
        /// Override the configured OCR endpoint
        #[arg(long)]
        endpoint: Option<String>,
    },
    /// Split a decoded receipt among participants
    Split {
        /// Path to the raw OCR response JSON
        file: PathBuf,
        /// Item claims as INDEX=NAME (repeatable)
        #[arg(long = "claim", value_name = "INDEX=NAME")]
        claims: Vec<String>,
        /// Override the tip before settling
        #[arg(long)]
        tip: Option<f64>,
    },
}

#[derive(Subcommand)]
enum ParticipantsAction {
    /// Add a participant
    Add {
        name: String,
        /// Contact address (phone number, handle, ...)
        #[arg(long)]
        contact: Option<String>,
    },
    /// List participants
    List,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Participants { action } => match action {
            ParticipantsAction::Add { name, contact } => {
                commands::participants::add(name, contact).await?
            }
            ParticipantsAction::List => commands::participants::list().await?,
        },
        Commands::Decode { file } => commands::decode::run(&file)?,
        Commands::Scan { image, endpoint } => commands::scan::run(&image, endpoint).await?,
        Commands::Split { file, claims, tip } => commands::split::run(&file, &claims, tip).await?,
    }

    Ok(())
}
