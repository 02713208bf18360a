//! Clip index ledger (`index.csv`).
//!
//! Semicolon-delimited with every field quoted so spreadsheet tools import it as-is.

use std::fs::File;
use std::path::Path;

use chrono::SecondsFormat;
use csv::{QuoteStyle, Terminator, Writer, WriterBuilder};

use crate::api::Clip;
use crate::error::Result;

/// Column titles, in order.
pub const LEDGER_HEADER: [&str; 5] = ["File", "Title", "View Count", "Creator Name", "Created at"];

/// One ledger row describing a downloaded clip.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LedgerRow {
    pub file: String,
    pub title: String,
    pub view_count: u64,
    pub creator_name: String,
    pub created_at: String,
}

impl LedgerRow {
    /// Row for `clip` stored as `file_name`.
    pub fn for_clip(clip: &Clip, file_name: &str) -> Self {
        Self {
            file: file_name.to_string(),
            title: clip.title.clone(),
            view_count: clip.views,
            creator_name: clip.creator_display_name.clone(),
            created_at: clip.creation_date.to_rfc3339_opts(SecondsFormat::Secs, true),
        }
    }
}

/// Append-only ledger writer. Every row is flushed to disk as it is written.
pub struct Ledger {
    writer: Writer<File>,
    rows: u64,
}

impl Ledger {
    /// Create (or truncate) the ledger at `path` and write the header.
    pub fn create(path: &Path) -> Result<Self> {
        let writer = WriterBuilder::new()
            .delimiter(b';')
            .quote_style(QuoteStyle::Always)
            .terminator(Terminator::Any(b'\n'))
            .has_headers(false)
            .from_path(path)?;

        let mut ledger = Self { writer, rows: 0 };
        ledger.writer.write_record(LEDGER_HEADER)?;
        ledger.writer.flush()?;
        Ok(ledger)
    }

    /// Append one row.
    pub fn append(&mut self, row: &LedgerRow) -> Result<()> {
        let view_count = row.view_count.to_string();
        self.writer.write_record([
            row.file.as_str(),
            row.title.as_str(),
            view_count.as_str(),
            row.creator_name.as_str(),
            row.created_at.as_str(),
        ])?;
        self.writer.flush()?;
        self.rows += 1;
        Ok(())
    }

    /// Number of data rows written.
    pub fn rows(&self) -> u64 {
        self.rows
    }
}
