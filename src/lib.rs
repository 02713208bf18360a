//! Twitch Clip Backup - export every clip of a Twitch channel to disk.
//!
//! # Features
//!
//! - App credentials cached in a local JSON file, re-prompted when rejected
//! - Channel lookup by login name
//! - Full cursor-paginated clip enumeration
//! - Sequential video downloads with an incrementally written `index.csv`
//!
//! # Example
//!
//! ```no_run
//! use std::path::Path;
//! use twitch_clip_backup::{
//!     api::build_http_client, build_session, enumerate_clips, export_clips, resolve_channel,
//!     ConsolePrompter, CredentialStore, Endpoints, ExportLayout, ExportOptions,
//! };
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let http = build_http_client()?;
//!     let store = CredentialStore::new("twitch.json");
//!     let mut prompter = ConsolePrompter::new();
//!
//!     let api = build_session(&http, &Endpoints::default(), &store, &mut prompter).await?;
//!     let identity = resolve_channel(&api, &mut prompter, None).await?;
//!     let clips = enumerate_clips(&api, &identity).await?;
//!
//!     let layout = ExportLayout::new(Path::new("."), &identity.name)?;
//!     export_clips(&api, &layout, &clips, ExportOptions::default()).await?;
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod cli;
pub mod config;
pub mod download;
pub mod error;
pub mod fs;
pub mod media;
pub mod output;
pub mod session;

// Re-exports for convenience
pub use api::{Clip, HelixClient, Identity};
pub use cli::{ConsolePrompter, Prompter};
pub use config::{Config, CredentialStore, Credentials, Endpoints, FailurePolicy};
pub use download::{enumerate_clips, export_clips, ExportOptions, ExportSummary};
pub use error::{Error, Result};
pub use fs::ExportLayout;
pub use session::{build_session, resolve_channel};
