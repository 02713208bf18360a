//! Configuration module for twitch-clip-backup.
//!
//! This module handles:
//! - The persisted Twitch application credentials
//! - Runtime settings merged from CLI arguments
//! - Configuration validation

pub mod credentials;
pub mod loader;
pub mod modes;
pub mod validation;

pub use credentials::{CredentialStore, Credentials};
pub use loader::{Config, Endpoints, DEFAULT_AUTH_BASE, DEFAULT_CREDENTIALS_FILE, DEFAULT_HELIX_BASE};
pub use modes::FailurePolicy;
pub use validation::validate_config;
