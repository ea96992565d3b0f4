//! Working-set selection by path prefix and exclusion pattern

use regex::Regex;
use std::collections::BTreeMap;
use thiserror::Error;

use crate::export::{Note, NoteStore};

/// Notes below an `Archive` directory are never part of the graph
const ARCHIVE_PATTERN: &str = r"(^|/)Archive/";

#[derive(Debug, Error)]
pub enum FilterError {
    #[error("Invalid exclusion pattern '{pattern}': {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },
}

/// Decides which note identifiers belong to the working set
#[derive(Debug, Clone)]
pub struct InclusionFilter {
    prefix: String,
    exclude: Regex,
    exclude_source: String,
    archive: Regex,
}

impl InclusionFilter {
    /// Build a filter for `prefix`.
    ///
    /// When `exclude` is `None` the depth-limiting pattern from
    /// [`default_exclusion_pattern`] is used. User patterns are tested from
    /// the start of the identifier.
    pub fn new(prefix: &str, exclude: Option<&str>) -> Result<Self, FilterError> {
        let exclude_source = exclude
            .map(str::to_string)
            .unwrap_or_else(|| default_exclusion_pattern(prefix));
        let anchored = format!("^(?:{exclude_source})");
        let exclude = Regex::new(&anchored).map_err(|source| FilterError::InvalidPattern {
            pattern: exclude_source.clone(),
            source,
        })?;
        let archive = Regex::new(ARCHIVE_PATTERN).map_err(|source| FilterError::InvalidPattern {
            pattern: ARCHIVE_PATTERN.to_string(),
            source,
        })?;

        Ok(Self {
            prefix: prefix.to_string(),
            exclude,
            exclude_source,
            archive,
        })
    }

    /// The exclusion rule in effect, as given or derived
    pub fn exclusion_rule(&self) -> &str {
        &self.exclude_source
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    pub fn include(&self, identifier: &str) -> bool {
        identifier.starts_with(&self.prefix)
            && !self.exclude.is_match(identifier)
            && !self.archive.is_match(identifier)
    }
}

/// Derive the exclusion pattern used when none is configured.
///
/// The result matches every identifier with at least `n` separators, where
/// `n` is the separator count of `prefix`, plus one, plus one more when the
/// prefix does not end in `/`.
pub fn default_exclusion_pattern(prefix: &str) -> String {
    let depth = prefix.matches('/').count() + 1 + usize::from(!prefix.ends_with('/'));
    format!("^{}.*$", ".*/".repeat(depth))
}

/// Notes passing the inclusion filter, keyed by identifier
#[derive(Debug, Clone, Default)]
pub struct WorkingSet<'a> {
    notes: BTreeMap<&'a str, &'a Note>,
}

impl<'a> WorkingSet<'a> {
    pub fn collect(store: &'a NoteStore, filter: &InclusionFilter) -> Self {
        let notes = store
            .iter()
            .filter(|(id, _)| filter.include(id))
            .map(|(id, note)| (id.as_str(), note))
            .collect();
        Self { notes }
    }

    pub fn contains(&self, identifier: &str) -> bool {
        self.notes.contains_key(identifier)
    }

    pub fn get(&self, identifier: &str) -> Option<&'a Note> {
        self.notes.get(identifier).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'a str, &'a Note)> + '_ {
        self.notes.iter().map(|(id, note)| (*id, *note))
    }

    pub fn len(&self) -> usize {
        self.notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }
}
