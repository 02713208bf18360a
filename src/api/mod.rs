//! Twitch API module.
//!
//! This module provides:
//! - App access token exchange against the identity provider
//! - Helix REST client (users, clips, raw downloads)
//! - API response types

pub mod auth;
pub mod client;
pub mod types;

pub use auth::{request_app_token, AccessToken};
pub use client::{build_http_client, HelixClient, CLIP_PAGE_SIZE};
pub use types::*;
