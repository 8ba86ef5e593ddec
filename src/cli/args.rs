//! CLI argument definitions.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Top-level argument parser.
#[derive(Parser)]
#[command(name = "libkleene")]
#[command(about = "Translate finite-state automata into regular expressions")]
#[command(version)]
pub struct Cli {
    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Commands {
    /// Translate an automaton description into a regular expression
    Translate {
        /// Description file (six `name=[...]` declarations)
        #[arg(default_value = "input.txt")]
        input: PathBuf,
    },

    /// Validate a description without producing a regular expression
    Check {
        /// Description file (six `name=[...]` declarations)
        #[arg(default_value = "input.txt")]
        input: PathBuf,
    },
}
