//! Configuration-related errors.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur while interpreting configuration values.
#[derive(Debug, Clone, Error, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", content = "details")]
pub enum ConfigError {
    /// A release channel outside latest/beta/alpha
    #[error("Unknown release channel: {value}")]
    UnknownChannel {
        /// The rejected channel string
        value: String,
    },

    /// A debug level outside the supported set
    #[error("Unknown debug level: {value}")]
    UnknownDebugLevel {
        /// The rejected level string
        value: String,
    },
}
