//! Layered configuration for the CLI.
//!
//! Options come from flags, `CAPITAL_QUEST_*` environment variables, or a
//! configuration file, merged by `ortho_config` and then resolved into
//! validated config types with `TryFrom`.

use std::str::FromStr;

use camino::{Utf8Path, Utf8PathBuf};
use capital_core::quiz::DEFAULT_QUESTIONS;
use capital_data::DEFAULT_DATA_FILE;
use clap::Parser;
use log::LevelFilter;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};

use crate::CliError;

pub(crate) const ARG_DATA: &str = "data";
pub(crate) const ARG_LOG_LEVEL: &str = "log-level";
pub(crate) const ARG_QUESTIONS: &str = "questions";
pub(crate) const ARG_SEED: &str = "seed";

/// Options shared by every subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[ortho_config(prefix = "CAPITAL_QUEST")]
pub(crate) struct GlobalArgs {
    /// Path to the country CSV file.
    #[arg(long = ARG_DATA, value_name = "path", global = true)]
    #[serde(default)]
    pub(crate) data: Option<Utf8PathBuf>,
    /// Log level filter: off, error, warn, info, debug or trace.
    #[arg(long = ARG_LOG_LEVEL, value_name = "level", global = true)]
    #[serde(default)]
    pub(crate) log_level: Option<String>,
}

impl GlobalArgs {
    pub(crate) fn into_config(self) -> Result<AppConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        AppConfig::try_from(merged)
    }
}

/// Resolved global configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct AppConfig {
    /// Country CSV file to load.
    pub(crate) data: Utf8PathBuf,
    /// Explicit log filter; `None` defers to `RUST_LOG`.
    pub(crate) log_level: Option<LevelFilter>,
}

impl AppConfig {
    pub(crate) fn validate_sources(&self) -> Result<(), CliError> {
        require_existing(&self.data, ARG_DATA)
    }
}

impl TryFrom<GlobalArgs> for AppConfig {
    type Error = CliError;

    fn try_from(args: GlobalArgs) -> Result<Self, Self::Error> {
        let data = args
            .data
            .unwrap_or_else(|| Utf8PathBuf::from(DEFAULT_DATA_FILE));
        let log_level = args
            .log_level
            .map(|value| {
                LevelFilter::from_str(value.trim()).map_err(|_| CliError::InvalidLogLevel { value })
            })
            .transpose()?;
        Ok(Self { data, log_level })
    }
}

/// CLI arguments for the `play` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Play a multiple-choice capital quiz in the terminal. Answer \
                 each question with the choice number or the capital's name.",
    about = "Play a capital quiz"
)]
#[ortho_config(prefix = "CAPITAL_QUEST")]
pub(crate) struct PlayArgs {
    /// Number of questions, between 5 and 100.
    #[arg(long = ARG_QUESTIONS, value_name = "count")]
    #[serde(default)]
    pub(crate) questions: Option<u32>,
    /// Seed for a reproducible game.
    #[arg(long = ARG_SEED, value_name = "seed")]
    #[serde(default)]
    pub(crate) seed: Option<u64>,
}

impl PlayArgs {
    pub(crate) fn into_config(self) -> Result<PlayConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        Ok(PlayConfig::from(merged))
    }
}

/// Resolved `play` configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct PlayConfig {
    /// Questions in the game; range-checked when the session starts.
    pub(crate) questions: u32,
    /// Seed for the game's RNG.
    pub(crate) seed: Option<u64>,
}

impl From<PlayArgs> for PlayConfig {
    fn from(args: PlayArgs) -> Self {
        Self {
            questions: args.questions.unwrap_or(DEFAULT_QUESTIONS),
            seed: args.seed,
        }
    }
}

pub(crate) fn require_existing(path: &Utf8Path, field: &'static str) -> Result<(), CliError> {
    match capital_fs::is_regular_file(path) {
        Ok(true) => Ok(()),
        Ok(false) => Err(CliError::MissingSourceFile {
            field,
            path: path.to_path_buf(),
        }),
        Err(source) => Err(CliError::InspectSourcePath {
            field,
            path: path.to_path_buf(),
            source,
        }),
    }
}

#[cfg(test)]
pub(crate) fn config_from_layers_for_test(
    layers: Vec<ortho_config::MergeLayer<'static>>,
) -> Result<AppConfig, CliError> {
    let merged = GlobalArgs::merge_from_layers(layers).map_err(CliError::from)?;
    AppConfig::try_from(merged)
}
