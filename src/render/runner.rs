//! Graphviz command runner
//!
//! The layout itself is done by the Graphviz executables. Each engine ships
//! as its own binary (`dot`, `fdp`, ...), which reads DOT on stdin.

use anyhow::{anyhow, bail, Context, Result};
use std::ffi::OsString;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};
use std::thread;
use tracing::debug;

use super::engine::{Engine, OutputFormat};

/// Turns DOT source into an image file with one layout engine
pub trait LayoutRunner {
    fn run(&self, engine: Engine, format: OutputFormat, dot: &str, output: &Path) -> Result<()>;
}

/// Runs the Graphviz binaries found on `PATH`
#[derive(Debug, Clone, Default)]
pub struct GraphvizRunner {
    search_path: Option<OsString>,
}

impl GraphvizRunner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Look engines up in `search_path` (same syntax as `PATH`) instead
    pub fn with_search_path(search_path: impl Into<OsString>) -> Self {
        Self {
            search_path: Some(search_path.into()),
        }
    }

    fn locate(&self, program: &str) -> Result<PathBuf> {
        let found = match &self.search_path {
            Some(paths) => which::which_in(program, Some(paths), Path::new(".")),
            None => which::which(program),
        };
        found.map_err(|_| {
            anyhow!("Graphviz engine '{program}' not found in PATH. Is Graphviz installed?")
        })
    }
}

impl LayoutRunner for GraphvizRunner {
    fn run(&self, engine: Engine, format: OutputFormat, dot: &str, output: &Path) -> Result<()> {
        let program = engine.name();
        let binary = self.locate(program)?;

        let type_arg = format!("-T{}", format.extension());
        debug!(program, binary = %binary.display(), output = %output.display(), "running layout engine");

        let mut child = Command::new(&binary)
            .arg(&type_arg)
            .arg("-o")
            .arg(output)
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::piped())
            .spawn()
            .with_context(|| format!("Failed to execute: {program} {type_arg}"))?;

        let mut stdin = child
            .stdin
            .take()
            .with_context(|| format!("Failed to open stdin of {program}"))?;

        // stdin is fed from its own thread so a chatty stderr cannot block the engine
        let (written, result) = thread::scope(|scope| {
            let writer = scope.spawn(move || stdin.write_all(dot.as_bytes()));
            let result = child.wait_with_output();
            let written = writer
                .join()
                .unwrap_or_else(|_| Err(io::Error::other("stdin writer panicked")));
            (written, result)
        });

        let result = result.with_context(|| format!("Failed to wait for {program}"))?;
        if !result.status.success() {
            let stderr = String::from_utf8_lossy(&result.stderr);
            bail!("{program} failed ({}): {}", result.status, stderr.trim());
        }

        match written {
            Err(e) if e.kind() != io::ErrorKind::BrokenPipe => {
                Err(e).with_context(|| format!("Failed to write graph to {program}"))
            }
            _ => Ok(()),
        }
    }
}
