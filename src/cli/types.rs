use clap::{ArgAction, Args, Parser, Subcommand};
use clap_complete::Shell;
use emagraph::commands::{FilterArgs, RenderArgs, SourceArgs};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "emagraph")]
#[command(about = "Render the link graph of an emanote Zettelkasten", long_about = None)]
#[command(version)]
#[command(subcommand_help_heading = "Commands")]
pub struct Cli {
    /// Increase log verbosity (-v info, -vv debug); RUST_LOG overrides
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Config file (default: ~/.config/emagraph/config.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Build the note graph and render it with Graphviz
    Render {
        #[command(flatten)]
        source: SourceOpts,

        #[command(flatten)]
        filter: FilterOpts,

        /// Graphviz layout engine to use, or "all" for every engine
        #[arg(long)]
        engine: Option<String>,

        /// Image format: svg, png or pdf
        #[arg(long)]
        format: Option<String>,

        /// Directory for the rendered images
        #[arg(short, long)]
        output_dir: Option<PathBuf>,

        /// Include excluded notes that are linked by included notes (marked in blue)
        #[arg(long, overrides_with = "exclude_edge_notes")]
        include_edge_notes: bool,

        /// Drop links to excluded notes (default)
        #[arg(long, overrides_with = "include_edge_notes")]
        exclude_edge_notes: bool,

        /// Also write the DOT source as graph.dot
        #[arg(long)]
        emit_dot: bool,
    },

    /// Show the exclusion rule and which notes it includes
    Inspect {
        #[command(flatten)]
        source: SourceOpts,

        #[command(flatten)]
        filter: FilterOpts,
    },

    /// Generate shell completions
    Completions {
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Args, Debug, Clone)]
pub struct SourceOpts {
    /// Export endpoint of a running emanote instance
    #[arg(long, conflicts_with = "from_file")]
    pub url: Option<String>,

    /// Read a saved export.json instead of fetching it
    #[arg(long)]
    pub from_file: Option<PathBuf>,
}

#[derive(Args, Debug, Clone)]
pub struct FilterOpts {
    /// Only notes with this prefix are included
    #[arg(short, long, default_value = "")]
    pub path: String,

    /// Regular expression, notes matching this are excluded
    #[arg(short, long)]
    pub exclude: Option<String>,
}

impl From<SourceOpts> for SourceArgs {
    fn from(opts: SourceOpts) -> Self {
        SourceArgs {
            url: opts.url,
            from_file: opts.from_file,
        }
    }
}

impl From<FilterOpts> for FilterArgs {
    fn from(opts: FilterOpts) -> Self {
        FilterArgs {
            path: opts.path,
            exclude: opts.exclude,
        }
    }
}

/// Collapse the include/exclude flag pair; `None` when neither was given
pub fn edge_notes_flag(include: bool, exclude: bool) -> Option<bool> {
    match (include, exclude) {
        (true, _) => Some(true),
        (_, true) => Some(false),
        _ => None,
    }
}

#[allow(clippy::too_many_arguments)]
pub fn render_args(
    source: SourceOpts,
    filter: FilterOpts,
    engine: Option<String>,
    format: Option<String>,
    output_dir: Option<PathBuf>,
    include_edge_notes: bool,
    exclude_edge_notes: bool,
    emit_dot: bool,
) -> RenderArgs {
    RenderArgs {
        source: source.into(),
        filter: filter.into(),
        engine,
        format,
        output_dir,
        include_edge_notes: edge_notes_flag(include_edge_notes, exclude_edge_notes),
        emit_dot,
    }
}
