//! Export directory layout.

use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::fs::naming::{export_folder_name, sanitize_filename};

/// Name of the subdirectory holding clip videos.
pub const VIDEOS_DIR: &str = "videos";

/// Name of the ledger file at the export root.
pub const LEDGER_FILE: &str = "index.csv";

/// Location of one channel export on disk.
///
/// ```text
/// <base>/clips-<channel>/
///     index.csv
///     videos/<clip id>.mp4
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportLayout {
    root: PathBuf,
}

impl ExportLayout {
    /// Layout for `channel` under `base_dir`.
    pub fn new(base_dir: &Path, channel: &str) -> Result<Self> {
        Ok(Self {
            root: base_dir.join(export_folder_name(channel)?),
        })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn videos_dir(&self) -> PathBuf {
        self.root.join(VIDEOS_DIR)
    }

    pub fn ledger_path(&self) -> PathBuf {
        self.root.join(LEDGER_FILE)
    }

    /// Path of a video file inside the videos directory.
    pub fn video_path(&self, file_name: &str) -> Result<PathBuf> {
        Ok(self.videos_dir().join(sanitize_filename(file_name)?))
    }

    /// Create the directory tree. Existing directories are fine.
    pub async fn create(&self) -> Result<()> {
        tokio::fs::create_dir_all(self.videos_dir()).await?;
        Ok(())
    }
}
