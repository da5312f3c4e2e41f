//! Scanner that turns raw launch arguments into the options configuration.

use tracing::{debug, warn};

use super::{
    ApplicationOption, ApplicationOptionsConfig, OptionKind, OptionValue,
    ProcessedApplicationOption,
};
use crate::error::{OptionsError, Result};
use crate::models::protocol::ProtocolFile;

pub(crate) const SETTINGS_FILE: &str = "--settings-file";
pub(crate) const STATE_FILE: &str = "--state-file";
pub(crate) const THEMES_PATH: &str = "--themes-path";
pub(crate) const WORKSPACE_PATH: &str = "--workspace-path";
pub(crate) const DEV: &str = "--dev";
pub(crate) const DEBUG_LEVEL: &str = "--debug-level";
pub(crate) const WITH_DEVTOOLS: &str = "--with-devtools";
pub(crate) const PORT: &str = "--port";
pub(crate) const OPEN: &str = "--open";
pub(crate) const SKIP_APP_UPDATE: &str = "--skip-app-update";
pub(crate) const SKIP_THEMES_UPDATE: &str = "--skip-themes-update";
pub(crate) const USER_DATA_DIR: &str = "--user-data-dir";
pub(crate) const RELEASE_CHANNEL: &str = "--release-channel";
pub(crate) const OPEN_PROTOCOL_FILE: &str = "--open-protocol-file";
pub(crate) const SKIP_COOKIE_CONSENT: &str = "--skip-cookie-consent";
pub(crate) const SKIP_DATABASE_UPGRADE: &str = "--skip-database-upgrade";

/// The options understood by the shell.
pub fn supported_options() -> Vec<ApplicationOption> {
    vec![
        valued(SETTINGS_FILE, Some("-s"), OptionKind::String),
        valued(STATE_FILE, None, OptionKind::String),
        valued(THEMES_PATH, Some("-t"), OptionKind::String),
        valued(WORKSPACE_PATH, Some("-w"), OptionKind::String),
        flag(DEV, Some("-d")),
        valued(DEBUG_LEVEL, Some("-l"), OptionKind::String),
        flag(WITH_DEVTOOLS, None),
        valued(PORT, Some("-p"), OptionKind::Integer),
        valued(OPEN, Some("-o"), OptionKind::String),
        flag(SKIP_APP_UPDATE, None),
        flag(SKIP_THEMES_UPDATE, None),
        valued(USER_DATA_DIR, None, OptionKind::String),
        valued(RELEASE_CHANNEL, Some("-r"), OptionKind::String),
        valued(OPEN_PROTOCOL_FILE, None, OptionKind::String),
        flag(SKIP_COOKIE_CONSENT, None),
        flag(SKIP_DATABASE_UPGRADE, None),
    ]
}

fn valued(name: &str, shortcut: Option<&str>, kind: OptionKind) -> ApplicationOption {
    ApplicationOption {
        name: name.to_string(),
        shortcut: shortcut.map(str::to_string),
        kind,
        is_array: None,
    }
}

fn flag(name: &str, shortcut: Option<&str>) -> ApplicationOption {
    ApplicationOption {
        name: name.to_string(),
        shortcut: shortcut.map(str::to_string),
        kind: OptionKind::Boolean,
        is_array: None,
    }
}

/// Scans launch arguments against a descriptor table.
#[derive(Debug, Clone)]
pub struct OptionsParser {
    options: Vec<ApplicationOption>,
}

impl Default for OptionsParser {
    fn default() -> Self {
        Self::new(supported_options())
    }
}

impl OptionsParser {
    /// Create a parser for the given descriptor table.
    pub fn new(options: Vec<ApplicationOption>) -> Self {
        Self { options }
    }

    /// Scan raw launch arguments into processed options.
    ///
    /// Unrecognized tokens are skipped with a warning. A valued option
    /// consumes the following entry and marks `skip_next`; repeatable
    /// options accumulate into a list; a repeated scalar option keeps its
    /// last value.
    pub fn parse<I, S>(&self, argv: I) -> std::result::Result<Vec<ProcessedApplicationOption>, OptionsError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let argv: Vec<String> = argv.into_iter().map(|a| a.as_ref().to_string()).collect();
        let mut processed: Vec<ProcessedApplicationOption> = Vec::new();

        let mut index = 0;
        while index < argv.len() {
            let token = &argv[index];
            index += 1;

            let Some(option) = self.options.iter().find(|o| o.matches(token)) else {
                warn!("Unrecognized launch argument: {}", token);
                continue;
            };

            if option.kind == OptionKind::Boolean {
                upsert(&mut processed, option, OptionValue::Boolean(true), false);
                continue;
            }

            let raw = argv
                .get(index)
                .ok_or_else(|| OptionsError::MissingValue { name: option.name.clone() })?;
            index += 1;

            if option.is_array() {
                append_list(&mut processed, option, raw.clone());
                continue;
            }

            let value = match option.kind {
                OptionKind::Integer => {
                    let parsed: i64 = raw.parse().map_err(|_| OptionsError::InvalidInteger {
                        name: option.name.clone(),
                        value: raw.clone(),
                    })?;
                    OptionValue::Integer(parsed)
                }
                _ => OptionValue::String(raw.clone()),
            };
            upsert(&mut processed, option, value, true);
        }

        debug!("Processed {} launch options", processed.len());
        Ok(processed)
    }

    /// Scan launch arguments and fold them into the launch configuration.
    ///
    /// An `--open` value that is itself a protocol invocation is routed to
    /// `openProtocolFile`, matching how the shell dispatches external open
    /// requests.
    pub fn parse_config<I, S>(&self, argv: I) -> Result<ApplicationOptionsConfig>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let processed = self.parse(argv)?;
        let mut config = ApplicationOptionsConfig::default();

        for entry in &processed {
            match entry.option.name.as_str() {
                SETTINGS_FILE => config.settings_file = owned(entry),
                STATE_FILE => config.state_file = owned(entry),
                THEMES_PATH => config.themes_path = owned(entry),
                WORKSPACE_PATH => config.workspace_path = owned(entry),
                DEV => config.dev = entry.as_boolean(),
                DEBUG_LEVEL => {
                    if let Some(raw) = entry.as_str() {
                        config.debug_level = Some(raw.parse()?);
                    }
                }
                WITH_DEVTOOLS => config.with_devtools = entry.as_boolean(),
                PORT => {
                    if let Some(value) = entry.as_integer() {
                        let port = u16::try_from(value).map_err(|_| {
                            OptionsError::OutOfRange { name: PORT.to_string(), value }
                        })?;
                        config.port = Some(port);
                    }
                }
                OPEN => config.open = owned(entry),
                SKIP_APP_UPDATE => config.skip_app_update = entry.as_boolean(),
                SKIP_THEMES_UPDATE => config.skip_themes_update = entry.as_boolean(),
                USER_DATA_DIR => config.user_data_dir = owned(entry),
                RELEASE_CHANNEL => {
                    if let Some(raw) = entry.as_str() {
                        config.release_channel = Some(raw.parse()?);
                    }
                }
                OPEN_PROTOCOL_FILE => config.open_protocol_file = owned(entry),
                SKIP_COOKIE_CONSENT => config.skip_cookie_consent = entry.as_boolean(),
                SKIP_DATABASE_UPGRADE => config.skip_database_upgrade = entry.as_boolean(),
                other => debug!("No configuration field for option {}", other),
            }
        }

        let opens_protocol_file =
            config.open.as_deref().is_some_and(ProtocolFile::is_protocol_url);
        if opens_protocol_file {
            config.open_protocol_file = config.open.take();
        }

        Ok(config)
    }
}

fn owned(entry: &ProcessedApplicationOption) -> Option<String> {
    entry.as_str().map(str::to_string)
}

fn upsert(
    processed: &mut Vec<ProcessedApplicationOption>,
    option: &ApplicationOption,
    value: OptionValue,
    skip_next: bool,
) {
    match processed.iter_mut().find(|p| p.option.name == option.name) {
        Some(existing) => {
            existing.value = Some(value);
            existing.skip_next = skip_next;
        }
        None => processed.push(ProcessedApplicationOption {
            option: option.clone(),
            value: Some(value),
            skip_next,
        }),
    }
}

fn append_list(
    processed: &mut Vec<ProcessedApplicationOption>,
    option: &ApplicationOption,
    raw: String,
) {
    match processed.iter_mut().find(|p| p.option.name == option.name) {
        Some(existing) => {
            if let Some(OptionValue::List(values)) = existing.value.as_mut() {
                values.push(raw);
            } else {
                existing.value = Some(OptionValue::List(vec![raw]));
            }
            existing.skip_next = true;
        }
        None => processed.push(ProcessedApplicationOption {
            option: option.clone(),
            value: Some(OptionValue::List(vec![raw])),
            skip_next: true,
        }),
    }
}
