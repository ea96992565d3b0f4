use anyhow::Result;
use clap::CommandFactory;
use emagraph::commands::{inspect, render, FilterArgs, RenderSettings, SourceArgs};
use emagraph::completions::generate_completions;
use emagraph::config::Config;

use super::types::{render_args, Cli, Commands};

pub fn dispatch(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Render {
            source,
            filter,
            engine,
            format,
            output_dir,
            include_edge_notes,
            exclude_edge_notes,
            emit_dot,
        } => {
            let config = Config::load(cli.config.as_deref())?;
            let args = render_args(
                source,
                filter,
                engine,
                format,
                output_dir,
                include_edge_notes,
                exclude_edge_notes,
                emit_dot,
            );
            render::execute(RenderSettings::resolve(&args, &config)?)
        }
        Commands::Inspect { source, filter } => {
            let config = Config::load(cli.config.as_deref())?;
            let source = SourceArgs::from(source).note_source(&config);
            let filter = FilterArgs::from(filter).inclusion_filter()?;
            inspect::execute(source, filter)
        }
        Commands::Completions { shell } => {
            let mut cmd = Cli::command();
            generate_completions(&mut cmd, shell);
            Ok(())
        }
    }
}
