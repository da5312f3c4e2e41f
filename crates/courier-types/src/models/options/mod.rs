//! Launch options: descriptors, scan results, and the folded configuration.
//!
//! The shell describes every argument it understands with an
//! [`ApplicationOption`] descriptor. Scanning raw launch arguments against
//! the descriptor table produces [`ProcessedApplicationOption`] entries,
//! which fold into the [`ApplicationOptionsConfig`] record the rest of the
//! application consumes.

mod parser;

pub use parser::{supported_options, OptionsParser};

use serde::{Deserialize, Serialize};

use super::config::{DebugLevel, ReleaseChannel};

/// Kind of value a launch option carries.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum OptionKind {
    String,
    Integer,
    Boolean,
}

/// Descriptor for a single supported launch option.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationOption {
    /// Long form, including the leading dashes (`--settings-file`)
    pub name: String,
    /// Single-dash shortcut (`-s`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shortcut: Option<String>,
    /// Kind of value the option carries
    #[serde(rename = "type")]
    pub kind: OptionKind,
    /// Whether the option may repeat and accumulate values
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_array: Option<bool>,
}

impl ApplicationOption {
    /// Whether this descriptor matches the given argv token.
    pub fn matches(&self, token: &str) -> bool {
        self.name == token || self.shortcut.as_deref() == Some(token)
    }

    /// Whether the option accumulates repeated values.
    pub fn is_array(&self) -> bool {
        self.is_array == Some(true)
    }
}

/// A parsed option value.
///
/// Serializes untagged so the wire form stays the loose value the
/// renderer expects.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum OptionValue {
    Boolean(bool),
    Integer(i64),
    String(String),
    List(Vec<String>),
}

/// A descriptor after matching against launch arguments.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ProcessedApplicationOption {
    #[serde(flatten)]
    pub option: ApplicationOption,
    /// Value consumed for the option, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<OptionValue>,
    /// Whether the following argv entry was consumed as this option's value
    pub skip_next: bool,
}

impl ProcessedApplicationOption {
    /// The value as a string, when it is one.
    pub fn as_str(&self) -> Option<&str> {
        match &self.value {
            Some(OptionValue::String(s)) => Some(s),
            _ => None,
        }
    }

    /// The value as an integer, when it is one.
    pub fn as_integer(&self) -> Option<i64> {
        match self.value {
            Some(OptionValue::Integer(i)) => Some(i),
            _ => None,
        }
    }

    /// The value as a boolean, when it is one.
    pub fn as_boolean(&self) -> Option<bool> {
        match self.value {
            Some(OptionValue::Boolean(b)) => Some(b),
            _ => None,
        }
    }

    /// The accumulated values of a repeatable option.
    pub fn as_list(&self) -> Option<&[String]> {
        match &self.value {
            Some(OptionValue::List(values)) => Some(values),
            _ => None,
        }
    }
}

/// Launch configuration distributed to the rest of the application.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationOptionsConfig {
    /// Settings file to use instead of the default one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub settings_file: Option<String>,
    /// State file to use instead of the default one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state_file: Option<String>,
    /// Directory the installed themes are read from
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub themes_path: Option<String>,
    /// Directory the workspace files are read from
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub workspace_path: Option<String>,
    /// Run in development mode
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dev: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub debug_level: Option<DebugLevel>,
    /// Open developer tools with each window
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub with_devtools: Option<bool>,
    /// Development only: port of the local renderer server
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub port: Option<u16>,
    /// The request file to open on launch
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub open: Option<String>,
    /// Prohibit automatic application updates
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub skip_app_update: Option<bool>,
    /// Prohibit automatic theme updates
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub skip_themes_update: Option<bool>,
    /// Directory used for application data instead of the platform default
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_data_dir: Option<String>,
    /// Override the configured release channel
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub release_channel: Option<ReleaseChannel>,
    /// Protocol invocation to dispatch after startup
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub open_protocol_file: Option<String>,
    /// Do not render the cookie consent dialog
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub skip_cookie_consent: Option<bool>,
    /// Do not run the database upgrade flow
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub skip_database_upgrade: Option<bool>,
}
