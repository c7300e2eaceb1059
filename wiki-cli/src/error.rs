//! Errors surfaced by the `wiki` binary.

use thiserror::Error;
use wiki_babel::FormatError;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("reading '{path}': {source}")]
    ReadInput {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("writing '{path}': {source}")]
    WriteOutput {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("could not detect format from filename '{0}', please specify --from explicitly")]
    UndetectedFormat(String),

    #[error("no default target format for '{0}', please specify --to explicitly")]
    NoTarget(String),

    #[error("invalid value '{value}' for --extra-{flag}")]
    InvalidOverride { flag: String, value: String },

    #[error("{0}")]
    Transform(String),

    #[error(transparent)]
    Format(#[from] FormatError),

    #[error("failed to load configuration: {0}")]
    Config(#[from] wiki_config::ConfigError),
}
