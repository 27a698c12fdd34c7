//! top4crawler CLI
//!
//! Thin wrapper around the resolver: parses arguments, wires the
//! optional IEEE API key from the environment into the config, and
//! serializes whatever record list comes back.

use std::path::PathBuf;

use clap::Parser;
use top4crawler::{error::Result, models::Config, resolve};

/// top4crawler - Top4 Security Conference Paper Fetcher
#[derive(Parser, Debug)]
#[command(
    name = "top4crawler",
    version,
    about = "Fetch accepted-paper metadata for sp, ccs, usenix, or ndss"
)]
struct Cli {
    /// Year of the conference
    year: u16,

    /// Conference code: sp, ccs, usenix, or ndss
    conference: String,

    /// Output JSON file (prints to stdout when omitted)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Path to config file
    #[arg(short, long, default_value = "config.toml")]
    config: PathBuf,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

/// Initialize logging based on verbosity flag.
fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp_secs()
        .init();
}

/// Main entry point for the CLI application.
#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let mut config = Config::load_or_default(&cli.config);
    config.validate()?;

    // The credential stays an explicit config value; only the CLI touches env.
    if config.ieee.api_key.is_none() {
        if let Ok(key) = std::env::var("IEEE_API_KEY") {
            if !key.trim().is_empty() {
                config.ieee.api_key = Some(key);
            }
        }
    }

    let papers = resolve(&config, &cli.conference, cli.year).await?;
    log::info!(
        "Resolved {} papers for {} {}",
        papers.len(),
        cli.conference,
        cli.year
    );

    // An empty result serializes as [], it is not an error
    let json = serde_json::to_string_pretty(&papers)?;
    match cli.output {
        Some(path) => {
            std::fs::write(&path, json)?;
            log::info!("Wrote {}", path.display());
        }
        None => println!("{json}"),
    }

    Ok(())
}
