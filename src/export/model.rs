//! Types mirroring the emanote `/-/export.json` document

use serde::Deserialize;
use serde_json::Value;
use std::collections::{BTreeMap, BTreeSet};

/// Top-level export document.
///
/// Only the `files` map is kept; the Zettelkasten metadata emanote ships next
/// to it (`version` and friends) is ignored.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ExportDocument {
    #[serde(default)]
    pub files: BTreeMap<String, Note>,
}

/// A single note keyed by its source path (e.g. `Topics/Rust.md`)
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Note {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub tags: BTreeSet<String>,
    #[serde(default)]
    pub links: Vec<LinkRecord>,
}

impl Note {
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.contains(tag)
    }
}

/// Raw outgoing link as emanote reports it.
///
/// Entries are kept as raw JSON: an absent target and a target of the wrong
/// shape resolve differently, and no single entry may fail the document.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(from = "Value")]
pub enum LinkRecord {
    /// A link object with its `resolvedRelTarget`, if any
    Link { resolved_rel_target: Option<Value> },
    /// An entry that is not a JSON object
    Malformed(Value),
}

impl From<Value> for LinkRecord {
    fn from(value: Value) -> Self {
        match value {
            Value::Object(mut fields) => LinkRecord::Link {
                resolved_rel_target: fields.remove("resolvedRelTarget"),
            },
            other => LinkRecord::Malformed(other),
        }
    }
}

impl LinkRecord {
    /// Link whose resolved target points at the given rendered path
    pub fn to_rendered(path: &str) -> Self {
        LinkRecord::Link {
            resolved_rel_target: Some(serde_json::json!({
                "tag": "RRTFound",
                "contents": path,
            })),
        }
    }

    /// Link emanote could not resolve, such as an external URL
    pub fn unresolved() -> Self {
        LinkRecord::Link {
            resolved_rel_target: None,
        }
    }
}

/// In-memory note store: identifier -> note
pub type NoteStore = BTreeMap<String, Note>;
