//! Build and render the link graph of an emanote Zettelkasten.
//!
//! Pipeline: fetch the export ([`export`]), select the working set and build
//! the graph ([`graph`]), mark unreachable notes, hand the result to Graphviz
//! ([`render`]).

pub mod commands;
pub mod completions;
pub mod config;
pub mod export;
pub mod graph;
pub mod logging;
pub mod render;
