//! Note export loading
//!
//! The note store comes from emanote's JSON export, either fetched from a
//! running instance or read from a file saved earlier.

mod client;
mod model;

use anyhow::{Context, Result};
use std::path::Path;

pub use client::{fetch_notes, parse_notes};
pub use model::{ExportDocument, LinkRecord, Note, NoteStore};

/// Default export endpoint of `emanote run`
pub const DEFAULT_EXPORT_URL: &str = "http://127.0.0.1:8000/-/export.json";

/// Where the note store is loaded from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NoteSource {
    Url { url: String, timeout_secs: u64 },
    File(std::path::PathBuf),
}

impl NoteSource {
    pub fn load(&self) -> Result<NoteStore> {
        match self {
            NoteSource::Url { url, timeout_secs } => fetch_notes(url, *timeout_secs),
            NoteSource::File(path) => load_file(path),
        }
    }
}

/// Load a saved export document from disk.
pub fn load_file(path: &Path) -> Result<NoteStore> {
    let bytes = std::fs::read(path)
        .with_context(|| format!("Failed to read export file {}", path.display()))?;
    parse_notes(&bytes).with_context(|| format!("Invalid export document {}", path.display()))
}
