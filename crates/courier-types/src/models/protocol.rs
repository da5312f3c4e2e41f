//! Protocol-handler invocations.
//!
//! External open requests arrive through the operating system as URLs of
//! the form `courier-file://source/action/id`, for example
//! `courier-file://google-drive/open/1Xy4...`.

use serde::{Deserialize, Serialize};
use std::fmt;
use url::Url;

use crate::error::ProtocolError;

/// URL scheme the desktop shell registers for external open requests.
pub const PROTOCOL_SCHEME: &str = "courier-file";

/// A content reference decoded from a protocol-handler invocation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProtocolFile {
    /// Origin of the content, for example `google-drive`
    pub source: String,
    /// Action to perform, for example `open`
    pub action: String,
    /// Identifier of the content at the source
    pub id: String,
}

impl ProtocolFile {
    pub fn new(
        source: impl Into<String>,
        action: impl Into<String>,
        id: impl Into<String>,
    ) -> Self {
        Self { source: source.into(), action: action.into(), id: id.into() }
    }

    /// Decode an invocation using the registered scheme.
    pub fn parse(input: &str) -> Result<Self, ProtocolError> {
        Self::parse_with_scheme(input, PROTOCOL_SCHEME)
    }

    /// Decode an invocation using an explicit scheme.
    ///
    /// The source is the URL authority, the action is the first path
    /// segment, and the id is everything after it. Ids containing `/`
    /// separators are kept whole.
    pub fn parse_with_scheme(input: &str, scheme: &str) -> Result<Self, ProtocolError> {
        let url = Url::parse(input)
            .map_err(|e| ProtocolError::InvalidUrl { message: e.to_string() })?;

        if url.scheme() != scheme {
            return Err(ProtocolError::UnsupportedScheme {
                scheme: url.scheme().to_string(),
                expected: scheme.to_string(),
            });
        }

        let source = url
            .host_str()
            .filter(|host| !host.is_empty())
            .ok_or_else(|| ProtocolError::missing("source"))?;

        let mut segments =
            url.path_segments().ok_or_else(|| ProtocolError::missing("action"))?;
        let action = segments
            .next()
            .filter(|segment| !segment.is_empty())
            .ok_or_else(|| ProtocolError::missing("action"))?;

        let id = segments.collect::<Vec<_>>().join("/");
        if id.is_empty() {
            return Err(ProtocolError::missing("id"));
        }

        Ok(Self::new(source, action, id))
    }

    /// Whether the input decodes as a protocol invocation of the shell.
    pub fn is_protocol_url(input: &str) -> bool {
        Self::parse(input).is_ok()
    }
}

impl fmt::Display for ProtocolFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}://{}/{}/{}", PROTOCOL_SCHEME, self.source, self.action, self.id)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_protocol_url() {
        let file = ProtocolFile::parse("courier-file://google-drive/open/file-123").unwrap();
        assert_eq!(file, ProtocolFile::new("google-drive", "open", "file-123"));
    }

    #[test]
    fn test_parse_keeps_slashes_in_id() {
        let file = ProtocolFile::parse("courier-file://drive/open/folder/file-123").unwrap();
        assert_eq!(file.action, "open");
        assert_eq!(file.id, "folder/file-123");
    }

    #[test]
    fn test_parse_rejects_wrong_scheme() {
        let err = ProtocolFile::parse("https://drive/open/file-123").unwrap_err();
        assert_eq!(
            err,
            ProtocolError::UnsupportedScheme {
                scheme: "https".to_string(),
                expected: "courier-file".to_string(),
            }
        );
    }

    #[test]
    fn test_parse_rejects_missing_segments() {
        assert_eq!(
            ProtocolFile::parse("courier-file://drive/open").unwrap_err(),
            ProtocolError::missing("id")
        );
        assert_eq!(
            ProtocolFile::parse("courier-file://drive/open/").unwrap_err(),
            ProtocolError::missing("id")
        );
        assert_eq!(
            ProtocolFile::parse("courier-file://drive").unwrap_err(),
            ProtocolError::missing("action")
        );
    }

    #[test]
    fn test_parse_rejects_non_urls() {
        assert!(matches!(
            ProtocolFile::parse("not a url"),
            Err(ProtocolError::InvalidUrl { .. })
        ));
        assert!(!ProtocolFile::is_protocol_url("/home/user/export.json"));
        assert!(ProtocolFile::is_protocol_url("courier-file://drive/open/id1"));
    }

    #[test]
    fn test_display_round_trip() {
        let file = ProtocolFile::new("google-drive", "open", "file-123");
        let url = file.to_string();
        assert_eq!(url, "courier-file://google-drive/open/file-123");
        assert_eq!(ProtocolFile::parse(&url).unwrap(), file);
    }
}
