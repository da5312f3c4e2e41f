//! Protocol-handler decoding errors.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors produced while decoding a protocol-handler invocation.
#[derive(Debug, Clone, Error, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", content = "details")]
pub enum ProtocolError {
    /// The invocation could not be parsed as a URL at all
    #[error("Invalid protocol URL: {message}")]
    InvalidUrl {
        /// Description of the parse failure
        message: String,
    },

    /// The URL carries a scheme other than the registered one
    #[error("Unsupported scheme \"{scheme}\", expected \"{expected}\"")]
    UnsupportedScheme {
        /// Scheme found on the URL
        scheme: String,
        /// Scheme the handler is registered for
        expected: String,
    },

    /// The URL is missing one of its source, action, or id segments
    #[error("Protocol URL is missing its {segment} segment")]
    MissingSegment {
        /// Name of the missing segment
        segment: String,
    },
}

impl ProtocolError {
    /// Create a missing-segment error for the named segment.
    pub fn missing(segment: &str) -> Self {
        Self::MissingSegment { segment: segment.to_string() }
    }
}
