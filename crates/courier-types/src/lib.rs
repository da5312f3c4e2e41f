//! # Courier Types
//!
//! Core types, models, and error definitions for the Courier desktop shell.
//!
//! This crate provides the contracts exchanged between the pieces of the
//! Courier application:
//!
//! - **`error`** - Typed error hierarchy for launch options, protocol
//!   invocations, and configuration
//! - **`models`** - Contract models (launch options, window sessions,
//!   protocol files, cookies, cloud export)
//!
//! ## Architecture Role
//!
//! `courier-types` sits at the bottom of the dependency graph:
//!
//! ```text
//!          courier-types (this crate)
//!                  │
//!      ┌───────────┼───────────────┐
//!      ▼           ▼               ▼
//!  shell process   renderer    cloud-export
//!  (windows, IPC)  windows     collaborator
//! ```
//!
//! The shell, the renderers, and the export collaborator live in their own
//! repositories; what they share is the shape of the records they pass
//! around. All types are designed to be:
//!
//! - **Serializable** via serde, with camelCase wire names
//! - **Clone** for cheap sharing across IPC boundaries
//! - **PartialEq** for testing and comparison

pub mod error;
pub mod models;

// Re-export error types for convenience
pub use error::{ConfigError, OptionsError, ProtocolError, Result, TypedError};

// Re-export core model types
pub use models::{
    ApplicationConfig, ApplicationOptionsConfig, Cookie, CookieChangeRecord, DriveExportInit,
    FileResource, OpenPageOptions, OptionsParser, ProtocolFile, SaveDriveFileOptions,
    SystemThemeInfo, WindowSession, WindowsSessionSchema,
};
