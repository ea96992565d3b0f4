//! Shell completion scripts for the `emagraph` command line
//!
//! The shell is chosen on the command line through clap's `ValueEnum` support
//! on [`clap_complete::Shell`], so every shell clap_complete knows is offered.

use clap::Command;
use clap_complete::{generate, Shell};
use std::io;

/// Write the completion script for `cmd` to `out`
pub fn write_completions(cmd: &mut Command, shell: Shell, out: &mut dyn io::Write) {
    let bin_name = cmd.get_name().to_string();
    generate(shell, cmd, bin_name, out);
}

pub fn generate_completions(cmd: &mut Command, shell: Shell) {
    write_completions(cmd, shell, &mut io::stdout());
}
