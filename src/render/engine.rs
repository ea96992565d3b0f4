//! Graphviz layout engines and output formats

use anyhow::{anyhow, Result};
use std::fmt;
use std::str::FromStr;

/// Selector value meaning "every supported engine"
pub const ALL_ENGINES: &str = "all";

/// Supported Graphviz layout engines
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Engine {
    Dot,
    Neato,
    Fdp,
    Sfdp,
    Circo,
    Twopi,
    Nop,
    Osage,
}

impl Engine {
    /// Every engine, in the order `all` runs them
    pub const ALL: [Engine; 8] = [
        Engine::Dot,
        Engine::Neato,
        Engine::Fdp,
        Engine::Sfdp,
        Engine::Circo,
        Engine::Twopi,
        Engine::Nop,
        Engine::Osage,
    ];

    /// Name of the engine and of its executable
    pub fn name(self) -> &'static str {
        match self {
            Engine::Dot => "dot",
            Engine::Neato => "neato",
            Engine::Fdp => "fdp",
            Engine::Sfdp => "sfdp",
            Engine::Circo => "circo",
            Engine::Twopi => "twopi",
            Engine::Nop => "nop",
            Engine::Osage => "osage",
        }
    }
}

impl fmt::Display for Engine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Engine {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        let lower = s.to_lowercase();
        Engine::ALL
            .into_iter()
            .find(|engine| engine.name() == lower)
            .ok_or_else(|| {
                anyhow!(
                    "Unsupported engine: {s}. Supported engines: {}, {ALL_ENGINES}",
                    Engine::ALL.map(Engine::name).join(", ")
                )
            })
    }
}

/// Which engines a render run uses
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineSelection {
    All,
    One(Engine),
}

impl EngineSelection {
    pub fn engines(self) -> Vec<Engine> {
        match self {
            EngineSelection::All => Engine::ALL.to_vec(),
            EngineSelection::One(engine) => vec![engine],
        }
    }
}

impl Default for EngineSelection {
    fn default() -> Self {
        EngineSelection::One(Engine::Fdp)
    }
}

impl FromStr for EngineSelection {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        if s.eq_ignore_ascii_case(ALL_ENGINES) {
            Ok(EngineSelection::All)
        } else {
            s.parse().map(EngineSelection::One)
        }
    }
}

/// Image format passed to Graphviz as `-T<format>`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Svg,
    Png,
    Pdf,
}

impl OutputFormat {
    pub fn extension(self) -> &'static str {
        match self {
            OutputFormat::Svg => "svg",
            OutputFormat::Png => "png",
            OutputFormat::Pdf => "pdf",
        }
    }
}

impl FromStr for OutputFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "svg" => Ok(OutputFormat::Svg),
            "png" => Ok(OutputFormat::Png),
            "pdf" => Ok(OutputFormat::Pdf),
            _ => Err(anyhow!("Unsupported format: {s}. Supported formats: svg, png, pdf")),
        }
    }
}
