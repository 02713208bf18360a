//! Media module for clip video locations.
//!
//! Provides:
//! - Download URL derivation from clip thumbnails
//! - Per-clip video file naming

pub mod item;

pub use item::{derive_download_url, ClipMedia, VIDEO_EXTENSION};
