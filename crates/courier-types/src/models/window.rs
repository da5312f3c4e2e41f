//! Window session persistence and page-open instruction shapes.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Page loaded when a window does not name one.
pub const DEFAULT_PAGE: &str = "app.html";
/// Preload script loaded with the default page.
pub const DEFAULT_PRELOAD: &str = "courier-preload.js";

/// Persisted size and position of a single window.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct WindowSession {
    /// The id of the window
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub x: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub y: Option<i32>,
}

impl WindowSession {
    /// Create a session entry for the given window id.
    pub fn for_window(id: u64) -> Self {
        Self { id: Some(id), ..Default::default() }
    }
}

/// The persisted window-session file, restored on relaunch.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct WindowsSessionSchema {
    /// Geometry entries for the application's windows
    pub windows: Vec<WindowSession>,
}

impl WindowsSessionSchema {
    pub fn new() -> Self {
        Self::default()
    }

    /// Find the persisted entry for a window id.
    /// Entries without an id never match.
    pub fn find(&self, id: u64) -> Option<&WindowSession> {
        self.windows.iter().find(|w| w.id == Some(id))
    }

    /// Replace the entry with the same id, or append when new.
    /// Entries without an id are always appended.
    pub fn upsert(&mut self, session: WindowSession) {
        let existing = session
            .id
            .and_then(|id| self.windows.iter_mut().find(|w| w.id == Some(id)));
        match existing {
            Some(slot) => *slot = session,
            None => self.windows.push(session),
        }
    }

    /// Drop the entry for a window id.
    pub fn forget(&mut self, id: u64) {
        self.windows.retain(|w| w.id != Some(id));
    }
}

/// Instructions for opening a renderer page in a new window.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct OpenPageOptions {
    /// The renderer page to load. Defaults to `app.html`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page: Option<String>,
    /// A string appended to the hash part of the loaded URL
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub route: Option<String>,
    /// The preload script to load with the page. When not set, no preload
    /// script is loaded unless the default page is being loaded.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preload: Option<String>,
    /// Init parameters appended to the loaded page's query string
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub params: Option<HashMap<String, String>>,
    /// The workspace file requested to open with the window.
    /// Only set for the main application window.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub workspace_file: Option<String>,
    /// Ignore persisted window sizing and position for this open
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ignore_window_session_settings: Option<bool>,
    /// Remove the default menu from the window
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub no_menu: Option<bool>,
    /// Size and position to set on the window
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sizing: Option<WindowSession>,
    /// Disable web security on the window. The cloud picker window needs
    /// this because the storage provider only accepts http and https
    /// origins.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub no_web_security: Option<bool>,
    /// Id of the window to make this window a child of
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent: Option<u64>,
}

impl OpenPageOptions {
    /// The page to load, falling back to the default page.
    pub fn page_or_default(&self) -> &str {
        self.page.as_deref().unwrap_or(DEFAULT_PAGE)
    }

    /// The preload script to load, if any. The default page always gets
    /// the default preload script.
    pub fn effective_preload(&self) -> Option<&str> {
        match (&self.preload, &self.page) {
            (Some(preload), _) => Some(preload),
            (None, None) => Some(DEFAULT_PRELOAD),
            (None, Some(_)) => None,
        }
    }
}

/// Data handed to a renderer window at bootstrap.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct AppInitOptions {
    /// The backend id of the workspace file
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub workspace_id: Option<String>,
}
