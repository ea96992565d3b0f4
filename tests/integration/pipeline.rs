//! End-to-end graph construction from a saved export

use emagraph::commands::build_note_graph;
use emagraph::export::{load_file, NoteSource};
use emagraph::graph::{BoundaryPolicy, Diagnostic, InclusionFilter, NodeColor, NodeFill};
use emagraph::render::to_dot;

use super::helpers::*;

#[test]
fn test_topics_without_edge_notes() {
    let (_dir, path) = write_export(SAMPLE_EXPORT);
    let store = load_file(&path).expect("Failed to load export");
    let filter = InclusionFilter::new("Topics/", None).unwrap();

    let annotated = build_note_graph(&store, &filter, BoundaryPolicy::Omit);
    let graph = &annotated.outcome.graph;

    // Archive notes are dropped even though they match the prefix
    assert_eq!(annotated.working_set_size, 3);
    assert!(!graph.contains_node("Topics/Archive/Old.md"));

    assert_eq!(graph.node_count(), 3);
    assert!(graph.contains_edge("Topics/Rust.md", "Topics/Rust Ownership.md"));
    assert!(graph.contains_edge("Topics/Rust Ownership.md", "Topics/Rust.md"));
    assert_eq!(graph.edge_count(), 2);
    assert!(!graph.contains_node("People/Graydon.md"));

    let broken: Vec<_> = annotated.outcome.broken_links().collect();
    assert_eq!(broken.len(), 1);
    assert!(matches!(
        broken[0],
        Diagnostic::BrokenLink { source, .. } if source == "Topics/Rust.md"
    ));

    let excluded: Vec<_> = annotated.outcome.exclusions().collect();
    assert_eq!(
        excluded,
        vec![
            &Diagnostic::Excluded {
                source: "Topics/Rust.md".to_string(),
                target: "People/Graydon.md".to_string(),
            },
            &Diagnostic::Excluded {
                source: "Topics/Rust.md".to_string(),
                target: "Topics/Archive/Old.md".to_string(),
            },
        ]
    );

    // Only Haskell has no incoming link
    assert_eq!(annotated.unreachable, vec!["Topics/Haskell.md"]);
    assert_eq!(
        graph.node("Topics/Rust Ownership.md").unwrap().attributes.fill,
        Some(NodeFill::Unvisited)
    );
}

#[test]
fn test_topics_with_edge_notes() {
    let (_dir, path) = write_export(SAMPLE_EXPORT);
    let store = load_file(&path).expect("Failed to load export");
    let filter = InclusionFilter::new("Topics/", None).unwrap();

    let annotated = build_note_graph(&store, &filter, BoundaryPolicy::Include);
    let graph = &annotated.outcome.graph;

    assert!(graph.contains_edge("Topics/Rust.md", "People/Graydon.md"));
    let graydon = graph.node("People/Graydon.md").unwrap();
    assert_eq!(graydon.label, "Graydon Hoare");
    assert_eq!(graydon.attributes.color, Some(NodeColor::Boundary));
    assert_eq!(graydon.attributes.fill, Some(NodeFill::Unvisited));
    assert!(!graydon.attributes.unreachable);

    // Boundary notes contribute no outgoing links of their own
    let archived = graph.node("Topics/Archive/Old.md").unwrap();
    assert!(archived.attributes.boundary);
    assert!(!graph.contains_edge("Topics/Archive/Old.md", "Topics/Rust.md"));

    assert_eq!(annotated.outcome.exclusions().count(), 0);
    assert_eq!(annotated.outcome.broken_links().count(), 1);
}

#[test]
fn test_dot_output_for_sample() {
    let (_dir, path) = write_export(SAMPLE_EXPORT);
    let store = NoteSource::File(path).load().expect("Failed to load export");
    let filter = InclusionFilter::new("Topics/", None).unwrap();

    let annotated = build_note_graph(&store, &filter, BoundaryPolicy::Include);
    let dot = to_dot(&annotated.outcome.graph);

    assert!(dot.starts_with("digraph {\n"));
    assert!(dot.contains("\"Topics/Rust.md\" -> \"People/Graydon.md\";"));
    assert!(dot.contains(
        "\"Topics/Haskell.md\" [label=\"Haskell\", peripheries=2, fontcolor=\"red\"];"
    ));
    assert!(dot.contains(
        "\"People/Graydon.md\" [label=\"Graydon Hoare\", color=\"blue\", style=\"filled\", fillcolor=\"lightgrey\"];"
    ));
}

#[test]
fn test_whole_store_default_depth() {
    let (_dir, path) = write_export(SAMPLE_EXPORT);
    let store = load_file(&path).expect("Failed to load export");
    let filter = InclusionFilter::new("", None).unwrap();

    let annotated = build_note_graph(&store, &filter, BoundaryPolicy::Omit);

    // Two levels deep: everything except the archive
    assert_eq!(annotated.working_set_size, 4);
    assert!(annotated
        .outcome
        .graph
        .contains_edge("Topics/Rust.md", "People/Graydon.md"));
}

#[test]
fn test_missing_export_file_is_error() {
    let dir = tempfile::TempDir::new().unwrap();
    let err = load_file(&dir.path().join("missing.json")).unwrap_err();
    assert!(err.to_string().contains("Failed to read export file"));
}
