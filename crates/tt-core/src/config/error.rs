use std::path::PathBuf;

use thiserror::Error;

use crate::text::PatternError;

/// Configuration failures. All of them are fatal at startup.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Cannot open config file: {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{0}")]
    Parse(#[from] toml::de::Error),

    #[error("replace must be an array of tables")]
    NotAnArray,

    #[error("Unexpected replace pattern! (entry #{index})")]
    UnexpectedEntry { index: usize },

    #[error("Missing {key} key! (entry #{index})")]
    MissingKey { index: usize, key: &'static str },

    #[error("{key} key is not a string! (entry #{index})")]
    NotAString { index: usize, key: &'static str },

    #[error("entry #{index}: {source}")]
    Pattern {
        index: usize,
        #[source]
        source: PatternError,
    },

    #[error("invalid [{section}] section: {source}")]
    InvalidSection {
        section: &'static str,
        #[source]
        source: toml::de::Error,
    },
}
