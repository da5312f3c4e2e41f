//! Application-level configuration distributed to all windows.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ConfigError;

/// The effective configuration every window receives.
///
/// All fields are optional on the wire; accessors expose the effective
/// values the shell acts on.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationConfig {
    /// Whether telemetry is enabled
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub telemetry: Option<bool>,
    /// Application release channel
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub release_channel: Option<ReleaseChannel>,
    /// Whether automatic updates are enabled. Enabled when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auto_update: Option<bool>,
}

impl ApplicationConfig {
    /// Effective auto-update setting. Updates run unless explicitly disabled.
    pub fn auto_update_enabled(&self) -> bool {
        self.auto_update.unwrap_or(true)
    }

    /// Effective telemetry setting. Telemetry is off unless opted in.
    pub fn telemetry_enabled(&self) -> bool {
        self.telemetry.unwrap_or(false)
    }

    /// Effective release channel.
    pub fn channel(&self) -> ReleaseChannel {
        self.release_channel.unwrap_or_default()
    }
}

/// Application release channel.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum ReleaseChannel {
    /// Stable releases
    #[default]
    Latest,
    /// Pre-release builds
    Beta,
    /// Unstable development builds
    Alpha,
}

impl fmt::Display for ReleaseChannel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::Latest => write!(f, "latest"),
            Self::Beta => write!(f, "beta"),
            Self::Alpha => write!(f, "alpha"),
        }
    }
}

impl FromStr for ReleaseChannel {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "latest" => Ok(Self::Latest),
            "beta" => Ok(Self::Beta),
            "alpha" => Ok(Self::Alpha),
            _ => Err(ConfigError::UnknownChannel { value: s.to_string() }),
        }
    }
}

/// Verbosity of the shell's diagnostic output.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum DebugLevel {
    Debug,
    Error,
    Info,
    Silly,
    Verbose,
    Warn,
}

impl fmt::Display for DebugLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::Debug => write!(f, "debug"),
            Self::Error => write!(f, "error"),
            Self::Info => write!(f, "info"),
            Self::Silly => write!(f, "silly"),
            Self::Verbose => write!(f, "verbose"),
            Self::Warn => write!(f, "warn"),
        }
    }
}

impl FromStr for DebugLevel {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "debug" => Ok(Self::Debug),
            "error" => Ok(Self::Error),
            "info" => Ok(Self::Info),
            "silly" => Ok(Self::Silly),
            "verbose" => Ok(Self::Verbose),
            "warn" => Ok(Self::Warn),
            _ => Err(ConfigError::UnknownDebugLevel { value: s.to_string() }),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_auto_update_defaults_on() {
        let config = ApplicationConfig::default();
        assert!(config.auto_update_enabled());
        assert!(!config.telemetry_enabled());
        assert_eq!(config.channel(), ReleaseChannel::Latest);

        let config = ApplicationConfig { auto_update: Some(false), ..Default::default() };
        assert!(!config.auto_update_enabled());
    }

    #[test]
    fn test_config_wire_names() {
        let config = ApplicationConfig {
            telemetry: Some(true),
            release_channel: Some(ReleaseChannel::Beta),
            auto_update: Some(true),
        };

        let json = serde_json::to_string(&config).unwrap();
        assert!(json.contains("\"releaseChannel\":\"beta\""));
        assert!(json.contains("\"autoUpdate\":true"));
    }

    #[test]
    fn test_config_optional_fields_absent() {
        let config: ApplicationConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, ApplicationConfig::default());
        assert_eq!(serde_json::to_string(&config).unwrap(), "{}");
    }

    #[test]
    fn test_channel_parse() {
        assert_eq!("alpha".parse::<ReleaseChannel>().unwrap(), ReleaseChannel::Alpha);
        assert_eq!(ReleaseChannel::Latest.to_string(), "latest");
        assert!("nightly".parse::<ReleaseChannel>().is_err());
    }

    #[test]
    fn test_debug_level_literals() {
        for level in ["debug", "error", "info", "silly", "verbose", "warn"] {
            let parsed: DebugLevel = level.parse().unwrap();
            assert_eq!(parsed.to_string(), level);
            assert_eq!(serde_json::to_string(&parsed).unwrap(), format!("\"{}\"", level));
        }
        assert!("trace".parse::<DebugLevel>().is_err());
    }
}
