//! `emagraph inspect`: show the exclusion rule and the resulting working set

use anyhow::Result;
use colored::Colorize;

use crate::export::{NoteSource, NoteStore};
use crate::graph::{InclusionFilter, WorkingSet};

/// Lines describing the working set, one note per line
pub fn describe_working_set(store: &NoteStore, filter: &InclusionFilter) -> Vec<String> {
    WorkingSet::collect(store, filter)
        .iter()
        .map(|(id, note)| {
            if note.title.is_empty() {
                id.to_string()
            } else {
                format!("{id}  ({})", note.title)
            }
        })
        .collect()
}

/// Execute the inspect command
pub fn execute(source: NoteSource, filter: InclusionFilter) -> Result<()> {
    println!(
        "{} Using exclusion rule {}",
        "→".cyan().bold(),
        filter.exclusion_rule().bold()
    );

    let store = source.load()?;
    let lines = describe_working_set(&store, &filter);

    println!();
    println!("Working set ({} of {} notes):", lines.len(), store.len());
    for line in &lines {
        println!("  {line}");
    }
    println!();

    Ok(())
}
