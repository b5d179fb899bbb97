use std::path::PathBuf;
use thiserror::Error;

/// Failure to read a `#rrggbb` color
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ColorError {
    #[error("expected 6 hex digits, got {0:?}")]
    Length(String),

    #[error("invalid hex digit in {0:?}")]
    Digit(String),
}

/// Failure to load or validate the startup configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("cannot read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid color in config: {0}")]
    Color(#[from] ColorError),

    #[error("invalid config: {0}")]
    Invalid(String),
}
