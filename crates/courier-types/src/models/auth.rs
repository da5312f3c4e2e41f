//! OAuth 2 authorization payload for cloud-export requests.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// Token type assumed when the payload does not carry one.
pub const DEFAULT_TOKEN_TYPE: &str = "Bearer";

/// Authorization configuration attached to an export request.
///
/// Data only. The authorization flow runs in an external collaborator;
/// when `access_token` is already present the collaborator skips the flow
/// and uses the token directly.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct OAuth2Authorization {
    /// OAuth grant type, for example `authorization_code`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub grant_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client_secret: Option<String>,
    /// User authorization endpoint
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub authorization_uri: Option<String>,
    /// Token exchange endpoint
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub access_token_uri: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub redirect_uri: Option<String>,
    /// Requested scopes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scopes: Option<Vec<String>>,
    /// Opaque state echoed back by the provider
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    /// Whether the flow may show interactive UI
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub interactive: Option<bool>,
    /// Previously obtained access token. Skips authorization when set.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub access_token: Option<String>,
    /// Token type, `Bearer` when unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token_type: Option<String>,
    /// Token validity in seconds
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expires_in: Option<i64>,
}

impl OAuth2Authorization {
    /// Payload that short-circuits authorization with an existing token.
    pub fn from_token(access_token: impl Into<String>) -> Self {
        Self { access_token: Some(access_token.into()), ..Default::default() }
    }

    /// Whether the payload already carries a usable token.
    pub fn is_authorized(&self) -> bool {
        self.access_token.is_some()
    }

    /// Token type of the payload, falling back to `Bearer`.
    pub fn token_type_or_default(&self) -> &str {
        self.token_type.as_deref().unwrap_or(DEFAULT_TOKEN_TYPE)
    }

    /// Absolute expiry for a token obtained at `issued_at`.
    pub fn expires_at(&self, issued_at: DateTime<Utc>) -> Option<DateTime<Utc>> {
        self.expires_in.map(|seconds| issued_at + Duration::seconds(seconds))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_token_short_circuit() {
        let auth = OAuth2Authorization::from_token("ya29.token");
        assert!(auth.is_authorized());
        assert_eq!(auth.token_type_or_default(), "Bearer");

        assert!(!OAuth2Authorization::default().is_authorized());
    }

    #[test]
    fn test_expires_at() {
        let issued_at = Utc::now();
        let auth = OAuth2Authorization { expires_in: Some(3600), ..Default::default() };
        assert_eq!(auth.expires_at(issued_at), Some(issued_at + Duration::seconds(3600)));
        assert_eq!(OAuth2Authorization::default().expires_at(issued_at), None);
    }

    #[test]
    fn test_auth_wire_names() {
        let auth = OAuth2Authorization {
            grant_type: Some("authorization_code".to_string()),
            client_id: Some("client-1".to_string()),
            access_token_uri: Some("https://oauth2.googleapis.com/token".to_string()),
            scopes: Some(vec!["https://www.googleapis.com/auth/drive.file".to_string()]),
            ..Default::default()
        };

        let json = serde_json::to_string(&auth).unwrap();
        assert!(json.contains("\"grantType\":\"authorization_code\""));
        assert!(json.contains("\"clientId\":\"client-1\""));
        assert!(json.contains("\"accessTokenUri\""));
        assert!(!json.contains("\"accessToken\""));
    }
}
