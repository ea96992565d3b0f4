//! Graphviz DOT serialization of the note graph

use crate::graph::{GraphNode, NoteGraph};

/// Label color of unreachable notes, which also get a double border
const UNREACHABLE_COLOR: &str = "red";

/// Serialize `graph` as a DOT digraph.
///
/// Output is deterministic: nodes and edges appear in identifier order.
pub fn to_dot(graph: &NoteGraph) -> String {
    let mut out = String::from("digraph {\n");

    for node in graph.nodes() {
        out.push_str(&format!("  {} [{}];\n", quote(&node.id), node_attributes(node)));
    }
    for (source, target) in graph.edges() {
        out.push_str(&format!("  {} -> {};\n", quote(source), quote(target)));
    }

    out.push_str("}\n");
    out
}

fn node_attributes(node: &GraphNode) -> String {
    let attrs = &node.attributes;
    let mut parts = vec![format!("label={}", quote(&node.label))];

    if let Some(color) = attrs.color {
        parts.push(format!("color={}", quote(color.as_graphviz())));
    }
    if let Some(fill) = attrs.fill {
        parts.push(format!("style={}", quote("filled")));
        parts.push(format!("fillcolor={}", quote(fill.as_graphviz())));
    }
    if attrs.unreachable {
        parts.push("peripheries=2".to_string());
        parts.push(format!("fontcolor={}", quote(UNREACHABLE_COLOR)));
    }

    parts.join(", ")
}

/// Quote a DOT identifier, escaping quotes, backslashes and newlines
fn quote(s: &str) -> String {
    let mut quoted = String::with_capacity(s.len() + 2);
    quoted.push('"');
    for c in s.chars() {
        match c {
            '"' => quoted.push_str("\\\""),
            '\\' => quoted.push_str("\\\\"),
            '\n' => quoted.push_str("\\n"),
            '\r' => {}
            c => quoted.push(c),
        }
    }
    quoted.push('"');
    quoted
}
