//! Typed error definitions for Courier.
//!
//! This module provides a structured error hierarchy with specific error
//! types for the domains that carry executable logic. All errors are
//! designed to be:
//!
//! - **Serializable** for IPC responses via serde
//! - **Displayable** for logging via Display trait
//! - **Matchable** for error handling logic via enum variants
//! - **Composable** via thiserror derive macros

mod config;
mod options;
mod protocol;

pub use config::ConfigError;
pub use options::OptionsError;
pub use protocol::ProtocolError;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Unified error type that wraps all domain-specific errors.
///
/// Use this when a single error type has to represent any Courier
/// contract error, for example when folding launch options into a
/// configuration.
#[derive(Debug, Clone, Error, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "domain", content = "error")]
pub enum TypedError {
    /// Wraps a launch-option scanning error
    #[error("Options error: {0}")]
    Options(#[from] OptionsError),

    /// Wraps a protocol-handler decoding error
    #[error("Protocol error: {0}")]
    Protocol(#[from] ProtocolError),

    /// Wraps a configuration error
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),
}

/// Standard Result type using TypedError.
pub type Result<T> = std::result::Result<T, TypedError>;

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_error_serialization() {
        let err = TypedError::Protocol(ProtocolError::UnsupportedScheme {
            scheme: "https".to_string(),
            expected: "courier-file".to_string(),
        });

        let json = serde_json::to_string(&err).unwrap();
        assert!(json.contains("Protocol"));
        assert!(json.contains("courier-file"));

        let deserialized: TypedError = serde_json::from_str(&json).unwrap();
        assert_eq!(err, deserialized);
    }

    #[test]
    fn test_error_display() {
        let err = OptionsError::MissingValue { name: "--settings-file".to_string() };

        let msg = format!("{}", err);
        assert!(msg.contains("--settings-file"));
    }
}
