//! Drape CLI - derive apparel tags from image-analysis detector output.
//!
//! Drape reads the labels and dominant colors an external detector produced
//! for an image and prints the clothing tags derived from them.
//!
//! # Usage
//!
//! ```bash
//! # Tag a single detector response
//! drape tag response.json
//!
//! # Tag a directory of responses
//! drape tag ./responses/ --output tags.jsonl --format jsonl
//!
//! # Read a response from stdin
//! cat response.json | drape tag -
//!
//! # Inspect the effective vocabulary
//! drape vocab show
//! ```

use clap::{Parser, Subcommand};

mod cli;
mod logging;

/// Drape - derive apparel tags from detected labels and dominant colors.
#[derive(Parser, Debug)]
#[command(name = "drape")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose (debug) logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Output logs in JSON format
    #[arg(long, global = true)]
    json_logs: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Available commands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Derive tags from one or more detector responses
    Tag(cli::tag::TagArgs),

    /// Inspect the label vocabulary
    Vocab(cli::vocab::VocabArgs),

    /// View and manage configuration
    Config(cli::config::ConfigArgs),
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Logging isn't initialized yet, so config warnings go through eprintln.
    let config = match drape_core::Config::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!(
                "Warning: Failed to load config: {e}\n  \
                 Using default configuration. Check your config file with `drape config path`."
            );
            drape_core::Config::default()
        }
    };
    logging::init_from_config(&config, cli.verbose, cli.json_logs);

    tracing::debug!("Drape v{}", drape_core::VERSION);

    match cli.command {
        Commands::Tag(args) => cli::tag::execute(args, config).await,
        Commands::Vocab(args) => cli::vocab::execute(args, &config),
        Commands::Config(args) => cli::config::execute(args),
    }
}
