//! Note graph construction
//!
//! ## Module Organization
//!
//! - `filter`: working-set selection (prefix, exclusion pattern, archive rule)
//! - `resolve`: link target -> canonical note identifier
//! - `builder`: node and edge construction with the boundary-note policy
//! - `reachability`: in-degree post-pass flagging unreachable notes
//! - `nodes`: node and attribute types

mod builder;
mod filter;
mod nodes;
mod reachability;
mod resolve;


use std::collections::{BTreeMap, BTreeSet};

pub use builder::{BoundaryPolicy, BuildOutcome, Diagnostic, GraphBuilder, UNVISITED_TAG};
pub use filter::{default_exclusion_pattern, FilterError, InclusionFilter, WorkingSet};
pub use nodes::{GraphNode, NodeAttributes, NodeColor, NodeFill};
pub use reachability::annotate;
pub use resolve::{resolve, ResolveError, RENDERED_EXTENSION, SOURCE_EXTENSION};

/// Directed graph of notes.
///
/// Edges are a set, so parallel identical edges collapse to one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NoteGraph {
    nodes: BTreeMap<String, GraphNode>,
    edges: BTreeSet<(String, String)>,
}

impl NoteGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create the node or merge `attributes` into the existing one.
    ///
    /// The label is replaced; attributes accumulate.
    pub fn add_node(&mut self, id: &str, label: &str, attributes: NodeAttributes) {
        match self.nodes.get_mut(id) {
            Some(node) => {
                node.label = label.to_string();
                node.attributes.merge(attributes);
            }
            None => {
                self.nodes.insert(
                    id.to_string(),
                    GraphNode {
                        id: id.to_string(),
                        label: label.to_string(),
                        attributes,
                    },
                );
            }
        }
    }

    /// Merge attributes into an existing node, keeping its label
    pub fn mark(&mut self, id: &str, attributes: NodeAttributes) {
        if let Some(node) = self.nodes.get_mut(id) {
            node.attributes.merge(attributes);
        }
    }

    /// Add a directed edge between two existing nodes.
    ///
    /// Returns false (and adds nothing) when either endpoint is missing.
    pub fn add_edge(&mut self, source: &str, target: &str) -> bool {
        if !self.nodes.contains_key(source) || !self.nodes.contains_key(target) {
            return false;
        }
        self.edges.insert((source.to_string(), target.to_string()));
        true
    }

    pub fn node(&self, id: &str) -> Option<&GraphNode> {
        self.nodes.get(id)
    }

    pub fn contains_node(&self, id: &str) -> bool {
        self.nodes.contains_key(id)
    }

    pub fn contains_edge(&self, source: &str, target: &str) -> bool {
        self.edges.contains(&(source.to_string(), target.to_string()))
    }

    /// Nodes in identifier order
    pub fn nodes(&self) -> impl Iterator<Item = &GraphNode> {
        self.nodes.values()
    }

    /// Edges in (source, target) order
    pub fn edges(&self) -> impl Iterator<Item = (&str, &str)> {
        self.edges.iter().map(|(s, t)| (s.as_str(), t.as_str()))
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Number of incoming edges per node, including nodes with none
    pub fn in_degrees(&self) -> BTreeMap<&str, usize> {
        let mut degrees: BTreeMap<&str, usize> =
            self.nodes.keys().map(|id| (id.as_str(), 0)).collect();
        for (_, target) in &self.edges {
            if let Some(degree) = degrees.get_mut(target.as_str()) {
                *degree += 1;
            }
        }
        degrees
    }
}
