//! Loading dashboard inputs: the analysis snapshot and issue JSONL.

pub mod issues;
pub mod snapshot;

pub use issues::{load_issues_jsonl, parse_issues_jsonl};
pub use snapshot::{load_inputs, load_snapshot, parse_snapshot, DashboardInputs, Snapshot};

use anyhow::Result;
use std::fs;
use std::path::Path;

/// UTF-8 byte order mark.
const BOM: char = '\u{feff}';

/// The byte order mark as it appears in UTF-8 input.
const BOM_BYTES: &[u8] = "\u{feff}".as_bytes();

/// Drop a leading byte order mark, if any.
pub fn strip_bom(text: &str) -> &str {
    text.strip_prefix(BOM).unwrap_or(text)
}

pub fn write_file(path: &Path, content: &str) -> Result<()> {
    fs::write(path, content)?;
    Ok(())
}

pub fn file_exists(path: &Path) -> bool {
    path.exists() && path.is_file()
}
