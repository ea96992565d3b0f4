//! Rendering the note graph with Graphviz
//!
//! - `dot`: DOT serialization
//! - `engine`: layout engine and output format selection
//! - `runner`: the process seam to the Graphviz binaries

mod dot;
mod engine;
mod runner;

use anyhow::{bail, Context, Result};
use std::path::{Path, PathBuf};
use tracing::{error, info};

use crate::graph::NoteGraph;

pub use dot::to_dot;
pub use engine::{Engine, EngineSelection, OutputFormat, ALL_ENGINES};
pub use runner::{GraphvizRunner, LayoutRunner};

/// File name of the DOT source written by `--emit-dot`
pub const DOT_FILE_NAME: &str = "graph.dot";

/// One image produced by a layout engine
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
    pub engine: Engine,
    pub path: PathBuf,
}

/// Deterministic artifact name for an engine, e.g. `graph-fdp.svg`
pub fn artifact_name(engine: Engine, format: OutputFormat) -> String {
    format!("graph-{}.{}", engine.name(), format.extension())
}

/// Fans a finished graph out to the selected layout engines
#[derive(Debug, Clone)]
pub struct RenderDispatcher<R = GraphvizRunner> {
    runner: R,
    output_dir: PathBuf,
    format: OutputFormat,
}

impl RenderDispatcher<GraphvizRunner> {
    pub fn graphviz(output_dir: impl Into<PathBuf>, format: OutputFormat) -> Self {
        Self::new(GraphvizRunner::new(), output_dir, format)
    }
}

impl<R: LayoutRunner> RenderDispatcher<R> {
    pub fn new(runner: R, output_dir: impl Into<PathBuf>, format: OutputFormat) -> Self {
        Self {
            runner,
            output_dir: output_dir.into(),
            format,
        }
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Render `graph` with every engine in `selection`.
    ///
    /// A single engine's failure is returned as is. With several engines
    /// every one is attempted, and the run fails afterwards if any of them
    /// did.
    pub fn render(&self, graph: &NoteGraph, selection: EngineSelection) -> Result<Vec<Artifact>> {
        let dot = to_dot(graph);

        if let EngineSelection::One(engine) = selection {
            return Ok(vec![self.render_one(engine, &dot)?]);
        }

        let mut artifacts = Vec::new();
        let mut failed = Vec::new();
        for engine in selection.engines() {
            match self.render_one(engine, &dot) {
                Ok(artifact) => artifacts.push(artifact),
                Err(e) => {
                    error!(engine = engine.name(), "layout failed: {e:#}");
                    failed.push(engine.name());
                }
            }
        }

        if !failed.is_empty() {
            bail!(
                "{} of {} engines failed: {}",
                failed.len(),
                failed.len() + artifacts.len(),
                failed.join(", ")
            );
        }
        Ok(artifacts)
    }

    fn render_one(&self, engine: Engine, dot: &str) -> Result<Artifact> {
        let path = self.output_dir.join(artifact_name(engine, self.format));
        info!(engine = engine.name(), path = %path.display(), "rendering");
        self.runner
            .run(engine, self.format, dot, &path)
            .with_context(|| format!("Rendering with {engine} failed"))?;
        Ok(Artifact { engine, path })
    }

    /// Write the DOT source next to the images
    pub fn write_dot(&self, graph: &NoteGraph) -> Result<PathBuf> {
        let path = self.output_dir.join(DOT_FILE_NAME);
        std::fs::write(&path, to_dot(graph))
            .with_context(|| format!("Failed to write {}", path.display()))?;
        Ok(path)
    }
}
