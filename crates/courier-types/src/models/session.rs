//! Session-manager configuration and cookie change records.

use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};

/// Session manager configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct SessionManagerConfig {
    /// Application-internal URLs for which certificate errors must not
    /// be ignored
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub app_urls: Option<Vec<String>>,
}

impl SessionManagerConfig {
    /// Whether certificate errors for `url` must surface to the user
    /// instead of being ignored.
    pub fn is_app_url(&self, url: &str) -> bool {
        self.app_urls
            .as_ref()
            .is_some_and(|urls| urls.iter().any(|u| u == url))
    }
}

/// Same-site enforcement policy on a cookie.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum SameSitePolicy {
    #[default]
    Unspecified,
    NoRestriction,
    Lax,
    Strict,
}

/// A cookie exchanged with the embedded browser session.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct Cookie {
    pub name: String,
    pub value: String,
    /// Domain the cookie is visible to
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub domain: Option<String>,
    /// Whether the cookie is scoped to the exact host
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub host_only: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secure: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub http_only: Option<bool>,
    /// Session cookies are dropped when the session ends and carry no
    /// expiration date
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub session: Option<bool>,
    /// Expiration as fractional seconds since the epoch
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expiration_date: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub same_site: Option<SameSitePolicy>,
}

impl Cookie {
    /// Create a cookie with just a name and value.
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self { name: name.into(), value: value.into(), ..Default::default() }
    }

    /// Expiration instant. None for session cookies and cookies without
    /// an expiration date.
    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        if self.session == Some(true) {
            return None;
        }
        let seconds = self.expiration_date?;
        Utc.timestamp_millis_opt((seconds * 1000.0) as i64).single()
    }

    /// Whether the cookie is expired at the given instant.
    pub fn is_expired_at(&self, at: DateTime<Utc>) -> bool {
        self.expires_at().is_some_and(|expires| expires <= at)
    }
}

/// Why a cookie changed.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum CookieChangeCause {
    /// Changed directly by a consumer action
    Explicit,
    /// Removed by an insert operation that overwrote it
    Overwrite,
    /// Removed because it expired
    Expired,
    /// Evicted during garbage collection
    Evicted,
    /// Overwritten with an already-expired expiration date
    ExpiredOverwrite,
}

/// Notification of a cookie change in the browser session.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CookieChangeRecord {
    /// The cookie that was changed
    pub cookie: Cookie,
    /// The cause of the change
    pub cause: CookieChangeCause,
    /// Whether the cookie was removed
    pub removed: bool,
}

impl CookieChangeRecord {
    /// Record for a cookie that was set or updated.
    pub fn updated(cookie: Cookie) -> Self {
        Self { cookie, cause: CookieChangeCause::Explicit, removed: false }
    }

    /// Record for a cookie that was removed for the given cause.
    pub fn removed(cookie: Cookie, cause: CookieChangeCause) -> Self {
        Self { cookie, cause, removed: true }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_is_app_url() {
        let config = SessionManagerConfig {
            app_urls: Some(vec!["https://install.courier.app".to_string()]),
        };
        assert!(config.is_app_url("https://install.courier.app"));
        assert!(!config.is_app_url("https://example.com"));
        assert!(!SessionManagerConfig::default().is_app_url("https://install.courier.app"));
    }

    #[test]
    fn test_cookie_expiry() {
        let mut cookie = Cookie::new("sid", "abc");
        assert_eq!(cookie.expires_at(), None);
        assert!(!cookie.is_expired_at(Utc::now()));

        cookie.expiration_date = Some(1_600_000_000.5);
        let expires = cookie.expires_at().unwrap();
        assert_eq!(expires.timestamp_millis(), 1_600_000_000_500);
        assert!(cookie.is_expired_at(Utc::now()));

        // Session cookies never expire by date.
        cookie.session = Some(true);
        assert_eq!(cookie.expires_at(), None);
    }

    #[test]
    fn test_cookie_wire_names() {
        let cookie = Cookie {
            host_only: Some(true),
            http_only: Some(true),
            expiration_date: Some(1.0),
            same_site: Some(SameSitePolicy::NoRestriction),
            ..Cookie::new("sid", "abc")
        };

        let json = serde_json::to_string(&cookie).unwrap();
        assert!(json.contains("\"hostOnly\":true"));
        assert!(json.contains("\"httpOnly\":true"));
        assert!(json.contains("\"expirationDate\":1.0"));
        assert!(json.contains("\"sameSite\":\"no_restriction\""));
    }

    #[test]
    fn test_change_cause_literals() {
        let pairs = [
            (CookieChangeCause::Explicit, "\"explicit\""),
            (CookieChangeCause::Overwrite, "\"overwrite\""),
            (CookieChangeCause::Expired, "\"expired\""),
            (CookieChangeCause::Evicted, "\"evicted\""),
            (CookieChangeCause::ExpiredOverwrite, "\"expired-overwrite\""),
        ];
        for (cause, wire) in pairs {
            assert_eq!(serde_json::to_string(&cause).unwrap(), wire);
            assert_eq!(serde_json::from_str::<CookieChangeCause>(wire).unwrap(), cause);
        }
        assert!(serde_json::from_str::<CookieChangeCause>("\"unknown\"").is_err());
    }

    #[test]
    fn test_change_record_constructors() {
        let record = CookieChangeRecord::updated(Cookie::new("sid", "abc"));
        assert!(!record.removed);
        assert_eq!(record.cause, CookieChangeCause::Explicit);

        let record =
            CookieChangeRecord::removed(Cookie::new("sid", "abc"), CookieChangeCause::Expired);
        assert!(record.removed);
        assert_eq!(record.cause, CookieChangeCause::Expired);
    }
}
