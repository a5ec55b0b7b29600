//! # CLI Error Type
//!
//! Everything that can stop a command, with the exit code it maps to.
//!
//! ```text
//! CoreError::Validation   ──► exit 2
//! CoreError::BookNotFound ──► exit 3
//! CoreError::PaymentFailed──► exit 4
//! Usage / Config          ──► exit 64 / 78
//! ```

use bookshop_core::{CoreError, ErrorKind};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    /// Unknown command or missing argument.
    #[error("{0}")]
    Usage(String),

    /// Config file could not be read.
    #[error("Cannot read config file {path}: {source}")]
    ConfigRead {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Config file is not valid JSON for `ShopConfig`.
    #[error("Invalid config file {path}: {source}")]
    ConfigParse {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    /// Config file parsed but holds an unusable value.
    #[error("Invalid config file {path}: {reason}")]
    ConfigInvalid { path: String, reason: String },

    #[error(transparent)]
    Core(#[from] CoreError),
}

impl CliError {
    pub fn usage(message: impl Into<String>) -> Self {
        CliError::Usage(message.into())
    }

    /// Process exit code for this error (sysexits-style for usage/config).
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Usage(_) => 64,
            CliError::ConfigRead { .. }
            | CliError::ConfigParse { .. }
            | CliError::ConfigInvalid { .. } => 78,
            CliError::Core(e) => match e.kind() {
                ErrorKind::InvalidInput => 2,
                ErrorKind::NotFound => 3,
                ErrorKind::Payment => 4,
            },
        }
    }
}

pub type CliResult<T> = Result<T, CliError>;
