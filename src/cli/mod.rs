// CLI module for oggdur
//
// Command-line surface over the duration probing library: per-file duration
// reports and CfgSounds config generation. Only compiled into the binary.

pub mod commands;
pub mod config;
pub mod output;

pub use config::{Commands, Config};
pub use output::OutputFormatter;

/// Result alias for CLI operations
pub type CliResult<T> = Result<T, CliError>;

/// Errors surfaced at the CLI boundary
///
/// Per-file probe failures are not errors at this level; the batch policy is
/// to log and skip. These cover everything that stops a command outright.
#[derive(Debug)]
pub enum CliError {
    NoFilesSpecified,
    InvalidPattern(glob::PatternError),
    IoError(std::io::Error),
    SerializeError(serde_json::Error),
    Other(String),
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CliError::NoFilesSpecified => write!(f, "No files specified"),
            CliError::InvalidPattern(e) => write!(f, "Invalid glob pattern: {}", e),
            CliError::IoError(e) => write!(f, "I/O error: {}", e),
            CliError::SerializeError(e) => write!(f, "Serialization error: {}", e),
            CliError::Other(msg) => write!(f, "Error: {}", msg),
        }
    }
}

impl std::error::Error for CliError {}

impl From<std::io::Error> for CliError {
    fn from(e: std::io::Error) -> Self {
        CliError::IoError(e)
    }
}

impl From<serde_json::Error> for CliError {
    fn from(e: serde_json::Error) -> Self {
        CliError::SerializeError(e)
    }
}

impl From<glob::PatternError> for CliError {
    fn from(e: glob::PatternError) -> Self {
        CliError::InvalidPattern(e)
    }
}
