//! Download module for clip exports.
//!
//! This module provides:
//! - Paginated clip enumeration
//! - The sequential export pipeline
//! - Export statistics

pub mod enumerate;
pub mod export;
pub mod state;

pub use enumerate::{clip_pages, enumerate_clips};
pub use export::{export_clips, ExportOptions};
pub use state::ExportSummary;
