use camino::Utf8PathBuf;
use inicheck_parser::{IniError, RulesError};
use thiserror::Error;

/// Fatal conditions of the `check` use case. Every one of them is raised before any issue is
/// produced, so a failed run never carries partial results.
#[derive(Debug, Error)]
pub enum CheckError {
    #[error("file not found: {path}")]
    FileNotFound { path: Utf8PathBuf },

    #[error("not a regular file: {path}")]
    NotAFile { path: Utf8PathBuf },

    #[error("{path} is {size} bytes, over the {limit} byte limit")]
    TooLarge {
        path: Utf8PathBuf,
        size: u64,
        limit: u64,
    },

    #[error("failed to read {path}")]
    Io {
        path: Utf8PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse settings file {path}")]
    Settings {
        path: Utf8PathBuf,
        #[source]
        source: IniError,
    },

    #[error("failed to load rules from {origin}")]
    Rules {
        origin: String,
        #[source]
        source: RulesError,
    },

    #[error("invalid configuration: {0}")]
    Config(String),
}
