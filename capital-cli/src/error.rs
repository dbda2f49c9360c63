//! Error types emitted by the Capital Quest CLI.
//!
//! Many helpers return `Result<_, CliError>`, so variants stay small enough
//! for `clippy::result_large_err`.

use std::sync::Arc;

use camino::Utf8PathBuf;
use capital_core::{QuizError, SessionError, SourceError};
use thiserror::Error;

/// Errors emitted by the Capital Quest CLI.
#[derive(Debug, Error)]
pub enum CliError {
    /// Provided arguments failed Clap validation.
    #[error(transparent)]
    ArgumentParsing(#[from] clap::Error),
    /// Configuration layering failed (files, env, CLI).
    #[error("failed to load configuration: {0}")]
    Configuration(#[from] Arc<ortho_config::OrthoError>),
    /// The log level option did not name a known level.
    #[error("unknown log level {value:?} (expected off, error, warn, info, debug or trace)")]
    InvalidLogLevel {
        /// Value as supplied.
        value: String,
    },
    /// A referenced input path does not exist on disk or is not a file.
    #[error("{field} path {path:?} does not exist or is not a file")]
    MissingSourceFile {
        /// Option naming the path.
        field: &'static str,
        /// Offending path.
        path: Utf8PathBuf,
    },
    /// A referenced input path could not be inspected due to an IO error.
    #[error("failed to inspect {field} path {path:?}: {source}")]
    InspectSourcePath {
        /// Option naming the path.
        field: &'static str,
        /// Offending path.
        path: Utf8PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
    /// The country file exists but could not be read as CSV.
    #[error("failed to read country data from {path:?}: {source}")]
    ReadData {
        /// Path of the country file.
        path: Utf8PathBuf,
        /// Reason reported by the loader.
        #[source]
        source: SourceError,
    },
    /// No country matched a search query.
    #[error("no country matches {query:?}")]
    CountryNotFound {
        /// Query as supplied.
        query: String,
    },
    /// The country file held no usable rows.
    #[error("no countries were loaded from {path:?}")]
    NoCountries {
        /// Path of the country file.
        path: Utf8PathBuf,
    },
    /// A quiz question could not be generated.
    #[error("failed to generate a question: {0}")]
    Quiz(#[from] QuizError),
    /// The quiz session rejected a request.
    #[error("quiz session error: {0}")]
    Session(#[from] SessionError),
    /// Reading answers from the terminal failed.
    #[error("failed to read answer: {0}")]
    ReadInput(#[source] std::io::Error),
    /// Serializing command output failed.
    #[error("failed to serialize output: {0}")]
    SerializeOutput(#[source] serde_json::Error),
    /// Writing command output failed.
    #[error("failed to write output: {0}")]
    WriteOutput(#[source] std::io::Error),
}
