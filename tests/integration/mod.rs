//! Integration tests for emagraph
//!
//! These tests run the graph pipeline on a saved export document: loading,
//! working-set selection, graph construction, reachability marking and DOT
//! output.

pub mod helpers;
pub mod pipeline;
pub mod render;
