//! Command-line tarot reading.
//!
//! Loads a JSON catalog, draws cards, and prints the interpretation as
//! plain text or JSON.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use tarot_reading::{CardCatalog, Reading, ReadingConfig, Result};

#[derive(Parser, Debug)]
#[command(name = "tarot", about = "Draw tarot cards and interpret the spread")]
struct Cli {
    /// Path to the JSON card catalog.
    #[arg(long, default_value = "data/tarot_cards.json")]
    catalog: PathBuf,

    /// Number of cards to draw (1-10). Invalid values fall back to 3.
    #[arg(short, long)]
    count: Option<String>,

    /// Print the reading as JSON.
    #[arg(long)]
    json: bool,

    /// Enable debug logging.
    #[arg(short, long)]
    verbose: bool,
}

fn init_logger(verbose: bool) {
    let filter = if verbose {
        EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("tarot_reading=debug,info"))
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("tarot_reading=info"))
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr)
                .compact(),
        )
        .init();
}

fn run(cli: &Cli) -> Result<()> {
    let catalog = CardCatalog::load(&cli.catalog)?;
    tracing::info!(path = %cli.catalog.display(), cards = catalog.len(), "catalog loaded");

    let config = ReadingConfig::default();
    let reading = Reading::perform(
        &catalog,
        cli.count.as_deref(),
        &config,
        &mut rand::thread_rng(),
    )?;

    if cli.json {
        println!("{}", reading.to_json_pretty()?);
        return Ok(());
    }

    println!("Cards drawn:");
    for card in &reading.cards {
        println!("  {} ({})", card.name, card.orientation);
    }
    println!();
    print!("{}", reading.report);
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logger(cli.verbose);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{}", e);
            ExitCode::FAILURE
        }
    }
}
