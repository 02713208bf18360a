//! Filesystem module.
//!
//! Provides:
//! - Export directory layout
//! - File and folder naming
//! - The clip index ledger

pub mod ledger;
pub mod naming;
pub mod paths;

pub use ledger::{Ledger, LedgerRow, LEDGER_HEADER};
pub use naming::{export_folder_name, sanitize_filename, sanitize_path_component};
pub use paths::{ExportLayout, LEDGER_FILE, VIDEOS_DIR};
