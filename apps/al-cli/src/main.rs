//! # al-cli
//!
//! Command-line interface for the agent ledger.
//!
//! - `al log` — record an action (redacted before it is written)
//! - `al tail/show/search` — read the ledger back
//! - `al check` — report every invalid line in the ledger
//! - `al scan` — redact or reject JSON from stdin

mod commands;
mod config;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use config::LedgerConfig;

/// Agent ledger — what was done, what was assumed, what is uncertain.
#[derive(Parser)]
#[command(name = "al", version, about)]
struct Cli {
    /// Project root directory (defaults to current directory).
    #[arg(long, default_value = ".")]
    project_root: PathBuf,

    /// Ledger file (overrides config.toml and AGENT_LEDGER_PATH).
    #[arg(long, global = true)]
    ledger: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Append an entry to the ledger.
    Log(commands::log::LogArgs),
    /// Show the most recent entries.
    Tail {
        /// Number of entries to show.
        #[arg(short, default_value = "10")]
        n: usize,
        /// Skip (and log) invalid lines instead of failing.
        #[arg(long)]
        skip_invalid: bool,
    },
    /// Print one entry as JSON.
    Show {
        id: String,
        #[arg(long)]
        skip_invalid: bool,
    },
    /// List entries whose text mentions a query (case-insensitive).
    Search {
        query: String,
        #[arg(long)]
        skip_invalid: bool,
    },
    /// Validate every line of the ledger.
    Check,
    /// Redact JSON from stdin and print it.
    Scan {
        /// Fail instead of redacting if anything looks like a secret.
        #[arg(long)]
        strict: bool,
    },
}

fn main() -> anyhow::Result<()> {
    // Logs go to stderr so they don't mix with command output on stdout.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env()
                .add_directive("al_ledger=warn".parse()?)
                .add_directive("al_redact=warn".parse()?),
        )
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();

    let cli = Cli::parse();
    let project_root = cli.project_root.canonicalize().unwrap_or(cli.project_root);
    let mut config = LedgerConfig::load(&project_root)?;
    if let Some(ledger) = cli.ledger {
        config.ledger_path = ledger;
    }
    tracing::debug!(path = %config.ledger_path.display(), "resolved ledger path");

    match &cli.command {
        Commands::Log(args) => commands::log::execute(args, &config),
        Commands::Tail { n, skip_invalid } => commands::read::tail(&config, *n, *skip_invalid),
        Commands::Show { id, skip_invalid } => commands::read::show(&config, id, *skip_invalid),
        Commands::Search {
            query,
            skip_invalid,
        } => commands::read::search(&config, query, *skip_invalid),
        Commands::Check => commands::check::execute(&config),
        Commands::Scan { strict } => commands::scan::execute(&config, *strict),
    }
}
