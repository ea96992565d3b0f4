//! Render fan-out through the public dispatcher API

use anyhow::{bail, Result};
use std::fs;
use std::path::Path;

use emagraph::commands::build_note_graph;
use emagraph::export::parse_notes;
use emagraph::graph::{BoundaryPolicy, InclusionFilter};
use emagraph::render::{
    Engine, EngineSelection, LayoutRunner, OutputFormat, RenderDispatcher, DOT_FILE_NAME,
};

use super::helpers::*;

/// Writes the DOT text it receives instead of laying it out
struct CopyRunner {
    broken: Option<Engine>,
}

impl LayoutRunner for CopyRunner {
    fn run(&self, engine: Engine, _format: OutputFormat, dot: &str, output: &Path) -> Result<()> {
        if self.broken == Some(engine) {
            bail!("{engine}: syntax error in line 1");
        }
        fs::write(output, dot)?;
        Ok(())
    }
}

#[test]
fn test_all_engines_write_one_file_each() {
    let dir = output_dir();
    let store = parse_notes(SAMPLE_EXPORT.as_bytes()).unwrap();
    let filter = InclusionFilter::new("Topics/", None).unwrap();
    let annotated = build_note_graph(&store, &filter, BoundaryPolicy::Omit);

    let runner = CopyRunner { broken: None };
    let dispatcher = RenderDispatcher::new(runner, dir.path(), OutputFormat::Svg);
    let artifacts = dispatcher
        .render(&annotated.outcome.graph, EngineSelection::All)
        .unwrap();

    assert_eq!(artifacts.len(), Engine::ALL.len());
    for engine in Engine::ALL {
        let path = dir.path().join(format!("graph-{engine}.svg"));
        let content = fs::read_to_string(&path).unwrap();
        assert!(content.contains("\"Topics/Rust.md\""));
    }
}

#[test]
fn test_broken_engine_does_not_stop_the_others() {
    let dir = output_dir();
    let store = parse_notes(SAMPLE_EXPORT.as_bytes()).unwrap();
    let filter = InclusionFilter::new("Topics/", None).unwrap();
    let annotated = build_note_graph(&store, &filter, BoundaryPolicy::Omit);

    let runner = CopyRunner {
        broken: Some(Engine::Circo),
    };
    let dispatcher = RenderDispatcher::new(runner, dir.path(), OutputFormat::Png);
    let err = dispatcher
        .render(&annotated.outcome.graph, EngineSelection::All)
        .unwrap_err();

    assert!(err.to_string().contains("circo"));
    assert!(!dir.path().join("graph-circo.png").exists());
    assert!(dir.path().join("graph-twopi.png").exists());
    assert!(dir.path().join("graph-osage.png").exists());
}

#[test]
fn test_emit_dot_file() {
    let dir = output_dir();
    let store = parse_notes(SAMPLE_EXPORT.as_bytes()).unwrap();
    let filter = InclusionFilter::new("", None).unwrap();
    let annotated = build_note_graph(&store, &filter, BoundaryPolicy::Omit);

    let dispatcher = RenderDispatcher::graphviz(dir.path(), OutputFormat::Svg);
    let path = dispatcher.write_dot(&annotated.outcome.graph).unwrap();

    assert_eq!(path.file_name().unwrap(), DOT_FILE_NAME);
    let dot = fs::read_to_string(path).unwrap();
    assert!(dot.contains("\"People/Graydon.md\""));
}
