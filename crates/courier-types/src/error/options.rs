//! Launch-option scanning errors.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors produced while scanning launch arguments.
#[derive(Debug, Clone, Error, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", content = "details")]
pub enum OptionsError {
    /// A valued option appeared as the last argument with nothing left to consume
    #[error("Option {name} expects a value")]
    MissingValue {
        /// Long name of the option
        name: String,
    },

    /// An integer-typed option received a non-numeric value
    #[error("Option {name} expects an integer, got \"{value}\"")]
    InvalidInteger {
        /// Long name of the option
        name: String,
        /// The raw value that failed to parse
        value: String,
    },

    /// An integer-typed option received a value outside its accepted range
    #[error("Option {name} value {value} is out of range")]
    OutOfRange {
        /// Long name of the option
        name: String,
        /// The parsed value that was rejected
        value: i64,
    },
}
