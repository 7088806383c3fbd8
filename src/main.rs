//! Command-line interface for form-seed
//!
//! # Usage Examples
//!
//! ## Generate to stdout
//! ```bash
//! form-seed generate --form contact.json --count 5 --seed 42
//!
//! # Stored submission shape, with a fixed answer
//! form-seed generate --form contact.json --stored --set email='"qa@example.com"'
//! ```
//!
//! ## Populate a seed file
//! ```bash
//! form-seed populate jsonl --form contact.yaml --output seed/contact.jsonl --count 1000
//!
//! # Continue an existing file
//! form-seed populate jsonl --form contact.yaml --output seed/contact.jsonl --count 1000 --append
//! ```
//!
//! Logging is configured with `RUST_LOG` and goes to stderr.

use clap::{Parser, Subcommand};
use form_seed::{run_generate, run_populate_jsonl};
use submission_populate_jsonl::{CommonGenerateArgs, JSONLPopulateArgs};

#[derive(Parser)]
#[command(name = "form-seed")]
#[command(about = "Generate synthetic form submission data for tests and seeding")]
#[command(long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print generated submissions to stdout as JSON Lines
    Generate {
        #[command(flatten)]
        args: CommonGenerateArgs,
    },

    /// Write generated submissions to a seed file
    Populate {
        #[command(subcommand)]
        target: PopulateTarget,
    },
}

/// Output format to populate
#[derive(Subcommand)]
enum PopulateTarget {
    /// Populate a JSONL file
    #[command(name = "jsonl")]
    Jsonl {
        #[command(flatten)]
        args: JSONLPopulateArgs,
    },
}

fn main() -> anyhow::Result<()> {
    if let Err(e) = run() {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
    Ok(())
}

fn run() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Generate { args } => {
            let stdout = std::io::stdout();
            run_generate(&args, stdout.lock())?;
        }
        Commands::Populate { target } => match target {
            PopulateTarget::Jsonl { args } => {
                run_populate_jsonl(&args)?;
            }
        },
    }

    Ok(())
}
