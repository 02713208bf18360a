//! Interactive session setup.
//!
//! This module provides:
//! - Credential acquisition (stored file or prompt)
//! - Session building with eager token validation
//! - Channel name resolution

pub mod acquire;
pub mod builder;
pub mod resolve;

pub use acquire::{acquire_credentials, CLIENT_ID_LABEL, CLIENT_SECRET_LABEL};
pub use builder::build_session;
pub use resolve::{resolve_channel, STREAMER_LABEL};
