//! Effective run settings: command-line flags layered over the config file

use anyhow::Result;
use std::path::PathBuf;

use crate::config::Config;
use crate::export::NoteSource;
use crate::graph::{BoundaryPolicy, InclusionFilter};
use crate::render::{EngineSelection, OutputFormat};

/// Where to read notes from, as given on the command line
#[derive(Debug, Clone, Default)]
pub struct SourceArgs {
    pub url: Option<String>,
    pub from_file: Option<PathBuf>,
}

impl SourceArgs {
    pub fn note_source(&self, config: &Config) -> NoteSource {
        match &self.from_file {
            Some(path) => NoteSource::File(path.clone()),
            None => NoteSource::Url {
                url: self
                    .url
                    .clone()
                    .unwrap_or_else(|| config.export_url().to_string()),
                timeout_secs: config.timeout_secs(),
            },
        }
    }
}

/// Working-set selection flags
#[derive(Debug, Clone, Default)]
pub struct FilterArgs {
    pub path: String,
    pub exclude: Option<String>,
}

impl FilterArgs {
    pub fn inclusion_filter(&self) -> Result<InclusionFilter> {
        Ok(InclusionFilter::new(&self.path, self.exclude.as_deref())?)
    }
}

/// Render flags; `None` falls back to the config file, then the default
#[derive(Debug, Clone, Default)]
pub struct RenderArgs {
    pub source: SourceArgs,
    pub filter: FilterArgs,
    pub engine: Option<String>,
    pub format: Option<String>,
    pub output_dir: Option<PathBuf>,
    pub include_edge_notes: Option<bool>,
    pub emit_dot: bool,
}

/// Fully resolved settings for a render run
#[derive(Debug, Clone)]
pub struct RenderSettings {
    pub source: NoteSource,
    pub filter: InclusionFilter,
    pub policy: BoundaryPolicy,
    pub engines: EngineSelection,
    pub format: OutputFormat,
    pub output_dir: PathBuf,
    pub emit_dot: bool,
}

impl RenderSettings {
    pub fn resolve(args: &RenderArgs, config: &Config) -> Result<Self> {
        let engines = match args.engine.as_ref().or(config.render.engine.as_ref()) {
            Some(engine) => engine.parse()?,
            None => EngineSelection::default(),
        };
        let format = match args.format.as_ref().or(config.render.format.as_ref()) {
            Some(format) => format.parse()?,
            None => OutputFormat::default(),
        };
        let output_dir = args
            .output_dir
            .clone()
            .or_else(|| config.render.output_dir.clone())
            .unwrap_or_else(|| PathBuf::from("."));
        let include_edge_notes = args
            .include_edge_notes
            .or(config.render.include_edge_notes)
            .unwrap_or(false);

        Ok(Self {
            source: args.source.note_source(config),
            filter: args.filter.inclusion_filter()?,
            policy: BoundaryPolicy::from_flag(include_edge_notes),
            engines,
            format,
            output_dir,
            emit_dot: args.emit_dot,
        })
    }
}
