//! Shared test helpers for the note graph integration tests

use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// A small Zettelkasten export in emanote's format.
///
/// `Topics/` is the part under test. `Topics/Rust.md` links to a sibling, to
/// a note outside `Topics/`, to an external URL, to an image and through a
/// link whose resolved target is malformed. `Topics/Archive/` must never
/// appear.
pub const SAMPLE_EXPORT: &str = r#"{
  "version": 1,
  "files": {
    "Topics/Rust.md": {
      "title": "Rust",
      "tags": [],
      "links": [
        {"resolvedRelTarget": {"tag": "RRTFound", "contents": "Topics/Rust%20Ownership.html"}},
        {"resolvedRelTarget": {"tag": "RRTFound", "contents": "People/Graydon.html"}},
        {"unresolvedRelTarget": {"tag": "URTURI", "contents": "https://www.rust-lang.org"}},
        {"resolvedRelTarget": {"tag": "RRTFound", "contents": "Topics/ferris.png"}},
        {"resolvedRelTarget": {"tag": "RRTMissing"}},
        {"resolvedRelTarget": {"tag": "RRTFound", "contents": "Topics/Archive/Old.html"}}
      ]
    },
    "Topics/Rust Ownership.md": {
      "title": "Rust Ownership",
      "tags": ["unvisited"],
      "links": [
        {"resolvedRelTarget": {"tag": "RRTFound", "contents": "Topics/Rust.html"}}
      ]
    },
    "Topics/Haskell.md": {
      "title": "Haskell",
      "tags": [],
      "links": []
    },
    "People/Graydon.md": {
      "title": "Graydon Hoare",
      "tags": ["unvisited"],
      "links": []
    },
    "Topics/Archive/Old.md": {
      "title": "Old",
      "tags": [],
      "links": [
        {"resolvedRelTarget": {"tag": "RRTFound", "contents": "Topics/Rust.html"}}
      ]
    }
  }
}"#;

/// Test helper: write `content` as `export.json` into a fresh temp directory
pub fn write_export(content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let path = temp_dir.path().join("export.json");
    fs::write(&path, content).expect("Failed to write export.json");
    (temp_dir, path)
}

/// Test helper: empty directory for rendered artifacts
pub fn output_dir() -> TempDir {
    TempDir::new().expect("Failed to create temp directory")
}
