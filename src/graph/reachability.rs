//! Unreachable-note marking

use tracing::debug;

use super::nodes::NodeAttributes;
use super::NoteGraph;

/// Flag every node without incoming edges as unreachable.
///
/// Must run after all edges are added. Returns the flagged identifiers in
/// identifier order.
pub fn annotate(graph: &mut NoteGraph) -> Vec<String> {
    let unreachable: Vec<String> = graph
        .in_degrees()
        .into_iter()
        .filter(|(_, degree)| *degree == 0)
        .map(|(id, _)| id.to_string())
        .collect();

    let marker = NodeAttributes {
        unreachable: true,
        ..NodeAttributes::default()
    };
    for id in &unreachable {
        graph.mark(id, marker);
    }

    debug!(count = unreachable.len(), "marked unreachable notes");
    unreachable
}
