//! libkleene - Translate finite-state automata into regular expressions
//!
//! Reads a six-declaration description file, validates the automaton, and
//! prints the equivalent regular expression.

use clap::Parser;
use colored::Colorize;
use std::process;

use libkleene::cli::{execute, Cli};

fn main() {
    let cli = Cli::parse();

    if let Err(e) = execute(cli.command) {
        eprintln!("{} {e:#}", "error:".red().bold());
        process::exit(1);
    }
}
