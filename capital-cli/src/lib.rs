//! Command-line interface for Capital Quest.
//!
//! Loads the country table once, then lists, searches or draws countries as
//! JSON, generates quiz questions, or runs an interactive quiz.
#![forbid(unsafe_code)]

use std::io::{self, BufRead, Write};

use capital_core::CountryStore;
use clap::{Parser, Subcommand};
use log::{LevelFilter, debug, warn};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

mod commands;
mod config;
mod error;
mod play;

use config::{AppConfig, GlobalArgs, PlayArgs};
pub use error::CliError;

/// Run the CLI with the current process arguments and environment.
///
/// # Errors
/// Returns [`CliError`] when arguments or configuration are invalid, the
/// country file cannot be read, or the command itself fails.
pub fn run() -> Result<(), CliError> {
    let cli = Cli::try_parse().map_err(CliError::ArgumentParsing)?;
    let config = cli.global.into_config()?;
    init_logging(config.log_level);
    let mut stdin = io::stdin().lock();
    let mut stdout = io::stdout().lock();
    execute(&config, cli.command, &mut stdin, &mut stdout)
}

#[derive(Debug, Parser)]
#[command(
    name = "capital-quest",
    about = "Browse country data and play a capital city quiz",
    version
)]
struct Cli {
    #[command(flatten)]
    global: GlobalArgs,
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Print every loaded country as JSON.
    Countries,
    /// Print one random country as JSON.
    Random(SeedArgs),
    /// Find a country by name or code and print it as JSON.
    Search(SearchArgs),
    /// Print one multiple-choice quiz question as JSON.
    Question(SeedArgs),
    /// Play a quiz in the terminal.
    Play(PlayArgs),
}

#[derive(Debug, Clone, clap::Args)]
struct SeedArgs {
    /// Seed for reproducible output.
    #[arg(long = config::ARG_SEED, value_name = "seed")]
    seed: Option<u64>,
}

#[derive(Debug, Clone, clap::Args)]
struct SearchArgs {
    /// Country name or code, matched case-insensitively.
    #[arg(value_name = "query")]
    query: String,
}

fn execute(
    config: &AppConfig,
    command: Command,
    input: &mut dyn BufRead,
    output: &mut dyn Write,
) -> Result<(), CliError> {
    let store = load_store(config)?;
    match command {
        Command::Countries => commands::list_countries(&store, output),
        Command::Random(args) => {
            commands::random_country(&store, &config.data, &mut rng_for(args.seed), output)
        }
        Command::Search(args) => commands::search_country(&store, &args.query, output),
        Command::Question(args) => {
            commands::quiz_question(&store, &mut rng_for(args.seed), output)
        }
        Command::Play(args) => {
            let play_config = args.into_config()?;
            let mut rng = rng_for(play_config.seed);
            play::play(&store, play_config, &mut rng, input, output).map(|_| ())
        }
    }
}

fn load_store(config: &AppConfig) -> Result<CountryStore, CliError> {
    config.validate_sources()?;
    let (store, report) = capital_data::load_countries(&config.data);
    if let Some(source) = report.source_error {
        return Err(CliError::ReadData {
            path: config.data.clone(),
            source,
        });
    }
    if !report.rejections.is_empty() {
        warn!(
            "{} rows in {} were rejected",
            report.rejections.len(),
            config.data
        );
    }
    debug!("Loaded {} countries from {}", store.len(), config.data);
    Ok(store)
}

fn rng_for(seed: Option<u64>) -> ChaCha8Rng {
    seed.map_or_else(ChaCha8Rng::from_entropy, ChaCha8Rng::seed_from_u64)
}

/// Install `env_logger`; an explicit level overrides `RUST_LOG`.
fn init_logging(explicit: Option<LevelFilter>) {
    let mut builder = match explicit {
        Some(filter) => {
            let mut configured = env_logger::Builder::new();
            configured.filter_level(filter);
            configured
        }
        None => {
            env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        }
    };
    if builder.try_init().is_err() {
        debug!("Logger already initialised");
    }
}

#[cfg(test)]
mod tests;
