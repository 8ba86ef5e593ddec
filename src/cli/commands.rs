//! CLI command execution.

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

use super::Commands;
use crate::format::parse_description;
use crate::regex::synthesize;
use crate::validation::{validate, ValidatedFsa};

/// Run a subcommand. Any validation failure aborts the translation with no
/// partial output.
pub fn execute(command: Commands) -> Result<()> {
    match command {
        Commands::Translate { input } => {
            let fsa = load(&input)?;
            println!("{}", synthesize(&fsa));
            Ok(())
        }
        Commands::Check { input } => {
            let fsa = load(&input)?;
            println!(
                "ok: {} states, {} accepting",
                fsa.states().len(),
                fsa.accepting().len()
            );
            Ok(())
        }
    }
}

fn load(path: &Path) -> Result<ValidatedFsa> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("cannot read '{}'", path.display()))?;
    let fsa = parse_description(&text)?;
    Ok(validate(fsa)?)
}
