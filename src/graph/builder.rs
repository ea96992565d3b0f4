//! Graph construction from the working set

use tracing::{debug, info, warn};

use super::filter::WorkingSet;
use super::nodes::NodeAttributes;
use super::resolve::{resolve, ResolveError};
use super::NoteGraph;
use crate::export::{LinkRecord, Note, NoteStore};

/// Tag marking notes that still need a first read
pub const UNVISITED_TAG: &str = "unvisited";

/// What to do with link targets outside the working set
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum BoundaryPolicy {
    /// Add them as visually distinguished boundary nodes
    Include,
    /// Leave them out and report each dropped link
    #[default]
    Omit,
}

impl BoundaryPolicy {
    pub fn from_flag(include_edge_notes: bool) -> Self {
        if include_edge_notes {
            BoundaryPolicy::Include
        } else {
            BoundaryPolicy::Omit
        }
    }
}

/// Non-fatal problems found while building the graph
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    /// A link whose resolution metadata could not be read
    BrokenLink { source: String, reason: String },
    /// A link to a known note that the filter and boundary policy dropped
    Excluded { source: String, target: String },
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Diagnostic::BrokenLink { source, reason } => {
                write!(f, "broken link in {source}: {reason}")
            }
            Diagnostic::Excluded { source, target } => {
                write!(f, "excluded {target} (linked from {source})")
            }
        }
    }
}

/// Result of a graph build
#[derive(Debug, Clone, Default)]
pub struct BuildOutcome {
    pub graph: NoteGraph,
    pub diagnostics: Vec<Diagnostic>,
}

impl BuildOutcome {
    pub fn broken_links(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics
            .iter()
            .filter(|d| matches!(d, Diagnostic::BrokenLink { .. }))
    }

    pub fn exclusions(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics
            .iter()
            .filter(|d| matches!(d, Diagnostic::Excluded { .. }))
    }
}

/// Builds the note graph for a working set
#[derive(Debug, Clone, Copy, Default)]
pub struct GraphBuilder {
    policy: BoundaryPolicy,
}

impl GraphBuilder {
    pub fn new(policy: BoundaryPolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> BoundaryPolicy {
        self.policy
    }

    /// Build the graph of `working` notes and the links between them.
    ///
    /// Link problems never abort the build; they are logged and collected in
    /// [`BuildOutcome::diagnostics`].
    pub fn build(&self, working: &WorkingSet<'_>, all_notes: &NoteStore) -> BuildOutcome {
        let mut outcome = BuildOutcome::default();

        // First pass: every working-set note is a node
        for (id, note) in working.iter() {
            outcome
                .graph
                .add_node(id, &note.title, unvisited_attributes(note));
        }

        // Second pass: edges
        for (source, note) in working.iter() {
            for link in &note.links {
                self.add_link(source, link, working, all_notes, &mut outcome);
            }
        }

        debug!(
            nodes = outcome.graph.node_count(),
            edges = outcome.graph.edge_count(),
            diagnostics = outcome.diagnostics.len(),
            "graph built"
        );
        outcome
    }

    fn add_link(
        &self,
        source: &str,
        link: &LinkRecord,
        working: &WorkingSet<'_>,
        all_notes: &NoteStore,
        outcome: &mut BuildOutcome,
    ) {
        let target = match resolve(link) {
            Ok(target) => target,
            Err(ResolveError::NoTarget) => return,
            Err(ResolveError::Malformed(reason)) => {
                warn!(source, %reason, "skipping broken link");
                outcome.diagnostics.push(Diagnostic::BrokenLink {
                    source: source.to_string(),
                    reason,
                });
                return;
            }
        };

        // Assets and pseudo-pages emanote does not export as notes
        let Some(target_note) = all_notes.get(&target) else {
            debug!(source, %target, "link target is not a note");
            return;
        };

        let attributes = if working.contains(&target) {
            unvisited_attributes(target_note)
        } else if self.policy == BoundaryPolicy::Include {
            NodeAttributes::boundary().with_unvisited(is_unvisited(target_note))
        } else {
            info!(source, %target, "excluding link to filtered note");
            outcome.diagnostics.push(Diagnostic::Excluded {
                source: source.to_string(),
                target,
            });
            return;
        };

        outcome.graph.add_node(&target, &target_note.title, attributes);
        outcome.graph.add_edge(source, &target);
    }
}

fn is_unvisited(note: &Note) -> bool {
    note.has_tag(UNVISITED_TAG)
}

fn unvisited_attributes(note: &Note) -> NodeAttributes {
    NodeAttributes::default().with_unvisited(is_unvisited(note))
}
