//! Core contract models for the Courier desktop shell.
//!
//! This module contains the data structures passed between the shell
//! process, its renderer windows, and the cloud-export collaborator.

mod auth;
mod config;
mod drive;
mod options;
mod protocol;
mod session;
mod theme;
mod window;

// Re-export all models
pub use auth::{OAuth2Authorization, DEFAULT_TOKEN_TYPE};
pub use config::{ApplicationConfig, DebugLevel, ReleaseChannel};
pub use drive::{
    AppFolderListResponse, DriveExportInit, FileCreateItem, FileMedia, FileResource,
    FolderListItem, SaveDriveFileOptions, DEFAULT_EXPORT_MIME, FILE_KIND, FILE_LIST_KIND,
};
pub use options::{
    supported_options, ApplicationOption, ApplicationOptionsConfig, OptionKind, OptionValue,
    OptionsParser, ProcessedApplicationOption,
};
pub use protocol::{ProtocolFile, PROTOCOL_SCHEME};
pub use session::{
    Cookie, CookieChangeCause, CookieChangeRecord, SameSitePolicy, SessionManagerConfig,
};
pub use theme::SystemThemeInfo;
pub use window::{
    AppInitOptions, OpenPageOptions, WindowSession, WindowsSessionSchema, DEFAULT_PAGE,
    DEFAULT_PRELOAD,
};
