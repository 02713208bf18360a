//! Clip video representation.

use std::sync::OnceLock;

use regex::Regex;

use crate::api::Clip;
use crate::error::Result;
use crate::fs::sanitize_filename;

/// File extension of downloaded clip videos (without dot).
pub const VIDEO_EXTENSION: &str = "mp4";

fn preview_suffix() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"-preview-.+$").expect("preview suffix pattern is valid"))
}

/// Derive the video URL of a clip from its thumbnail URL.
///
/// Replaces a trailing `-preview-<anything>` with `.mp4`. URLs without that suffix are
/// returned unchanged, which yields a link that does not point at a video.
pub fn derive_download_url(thumbnail_url: &str) -> String {
    preview_suffix()
        .replace(thumbnail_url, ".mp4")
        .into_owned()
}

/// A downloadable clip video.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClipMedia {
    /// Clip ID.
    pub clip_id: String,

    /// Derived video URL.
    pub download_url: String,

    /// File name inside the videos directory, `<clip id>.mp4`.
    pub file_name: String,
}

impl ClipMedia {
    /// Build the download description for a clip.
    ///
    /// Fails if the clip ID cannot be used as a file name.
    pub fn from_clip(clip: &Clip) -> Result<Self> {
        let file_name = sanitize_filename(&format!("{}.{}", clip.id, VIDEO_EXTENSION))?;

        if !preview_suffix().is_match(&clip.thumbnail_url) {
            tracing::warn!(
                "Thumbnail URL of clip {} has no preview suffix: {}",
                clip.id,
                clip.thumbnail_url
            );
        }

        Ok(Self {
            clip_id: clip.id.clone(),
            download_url: derive_download_url(&clip.thumbnail_url),
            file_name,
        })
    }
}
