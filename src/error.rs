//! Error types for mask compilation and configuration.
//!
//! Only caller misconfiguration is reported as an error. Rejected keystrokes,
//! backspace on an empty buffer and similar conditions are silent no-ops in
//! the edit engine and never surface here.

use std::path::PathBuf;

/// Configuration error raised while compiling a mask or loading config.
#[derive(Debug, thiserror::Error)]
pub enum MaskError {
    /// The mask string contains no characters
    #[error("mask is empty")]
    EmptyMask,

    /// The mask ends with a `\` that escapes nothing
    #[error("mask ends with a dangling escape at position {position}")]
    DanglingEscape { position: usize },

    /// A typed slot names a class symbol that is not in the class table
    #[error("slot {position} references unknown character class '{symbol}'")]
    UnknownClass { symbol: char, position: usize },

    /// A regex-backed class failed to compile
    #[error("invalid regex '{pattern}' for character class: {reason}")]
    InvalidClassRegex { pattern: String, reason: String },

    /// A configured class is neither enumerated nor regex-backed (or is both)
    #[error("character class '{symbol}': {reason}")]
    InvalidClassConfig { symbol: char, reason: String },

    /// The same class symbol is configured twice
    #[error("character class '{symbol}' is defined more than once")]
    DuplicateClass { symbol: char },

    /// A named mask was requested that the configuration does not define
    #[error("no mask named '{0}' in configuration")]
    UnknownMask(String),

    /// No platform config directory could be determined
    #[error("no config directory available")]
    NoConfigDir,

    #[error("failed to access {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

impl MaskError {
    /// Wrap an I/O error together with the path that caused it
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        MaskError::Io {
            path: path.into(),
            source,
        }
    }
}
