//! Command-line errors

use std::path::PathBuf;

/// Errors reported by the `essieux` binary.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error(transparent)]
    Lib(#[from] essieux_lib::error::Error),

    /// The data file could not be read or parsed.
    #[error("Cannot load {}: {source}", .path.display())]
    Data {
        path: PathBuf,
        #[source]
        source: essieux_lib::error::Error,
    },

    /// The settings file is not valid.
    #[error("Invalid config file {}: {source}", .path.display())]
    Config {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to initialize logger: {0}")]
    Logger(#[from] log::SetLoggerError),
}
