//! Export progress tracking.

use std::path::PathBuf;

/// Outcome of one channel export.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ExportSummary {
    /// Export root directory.
    pub root: PathBuf,

    /// Clips whose download was started.
    pub attempted: u64,

    /// Clips written to disk and recorded in the ledger.
    pub downloaded: u64,

    /// Clips skipped after a failed download.
    pub failed: u64,

    /// Total bytes written.
    pub bytes: u64,
}

impl ExportSummary {
    pub fn new(root: PathBuf) -> Self {
        Self {
            root,
            ..Default::default()
        }
    }

    /// Mark a clip as attempted.
    pub fn start_clip(&mut self) {
        self.attempted += 1;
    }

    /// Record a finished download.
    pub fn record_download(&mut self, bytes: u64) {
        self.downloaded += 1;
        self.bytes += bytes;
    }

    /// Record a skipped failure.
    pub fn record_failure(&mut self) {
        self.failed += 1;
    }
}
