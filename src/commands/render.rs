//! `emagraph render`: fetch, filter, build, annotate, render

use anyhow::{Context, Result};
use colored::Colorize;
use tracing::info;

use super::settings::RenderSettings;
use crate::export::NoteStore;
use crate::graph::{annotate, BoundaryPolicy, BuildOutcome, GraphBuilder, InclusionFilter, WorkingSet};
use crate::render::{Artifact, RenderDispatcher};

/// A built and annotated note graph
#[derive(Debug, Clone)]
pub struct AnnotatedGraph {
    pub outcome: BuildOutcome,
    pub working_set_size: usize,
    pub unreachable: Vec<String>,
}

/// Filter the store, build the graph and mark unreachable notes.
pub fn build_note_graph(
    store: &NoteStore,
    filter: &InclusionFilter,
    policy: BoundaryPolicy,
) -> AnnotatedGraph {
    let working = WorkingSet::collect(store, filter);
    info!(
        notes = store.len(),
        included = working.len(),
        "selected working set"
    );

    let mut outcome = GraphBuilder::new(policy).build(&working, store);
    let unreachable = annotate(&mut outcome.graph);

    AnnotatedGraph {
        outcome,
        working_set_size: working.len(),
        unreachable,
    }
}

/// Execute the render command
pub fn execute(settings: RenderSettings) -> Result<()> {
    println!(
        "{} Using exclusion rule {}",
        "→".cyan().bold(),
        settings.filter.exclusion_rule().bold()
    );

    println!("{} Fetching notes...", "→".cyan().bold());
    let store = settings.source.load()?;

    let annotated = build_note_graph(&store, &settings.filter, settings.policy);
    print_summary(&annotated);

    std::fs::create_dir_all(&settings.output_dir).with_context(|| {
        format!(
            "Failed to create output directory {}",
            settings.output_dir.display()
        )
    })?;
    let dispatcher = RenderDispatcher::graphviz(&settings.output_dir, settings.format);

    if settings.emit_dot {
        let path = dispatcher.write_dot(&annotated.outcome.graph)?;
        println!("{} Wrote {}", "✓".green().bold(), path.display());
    }

    let artifacts = dispatcher.render(&annotated.outcome.graph, settings.engines)?;
    print_artifacts(&artifacts);
    Ok(())
}

fn print_summary(annotated: &AnnotatedGraph) {
    let graph = &annotated.outcome.graph;
    println!(
        "{} Built graph: {} notes included, {} nodes, {} edges",
        "✓".green().bold(),
        annotated.working_set_size,
        graph.node_count(),
        graph.edge_count()
    );

    let broken = annotated.outcome.broken_links().count();
    if broken > 0 {
        println!("{} {} broken links skipped", "!".yellow().bold(), broken);
    }
    let excluded = annotated.outcome.exclusions().count();
    if excluded > 0 {
        println!(
            "{} {} links to excluded notes dropped (use --include-edge-notes to keep them)",
            "─".dimmed(),
            excluded
        );
    }
    println!(
        "{} {} unreachable notes marked",
        "─".dimmed(),
        annotated.unreachable.len()
    );
}

fn print_artifacts(artifacts: &[Artifact]) {
    for artifact in artifacts {
        println!(
            "{} {} -> {}",
            "✓".green().bold(),
            artifact.engine,
            artifact.path.display()
        );
    }
}
