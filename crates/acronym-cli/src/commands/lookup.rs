//! Lookup command - print the definition of one acronym

use acronym_core::AcronymStore;
use anyhow::{Context, Result};
use colored::Colorize;

pub fn run(acronym: &str) -> Result<()> {
    let store = AcronymStore::in_working_dir();
    let definition = store
        .lookup(acronym)
        .context("Error parsing YAML file")?;

    match definition {
        Some(definition) => println!("Definition of {}: {}", acronym.bold(), definition),
        None => println!("Acronym '{}' not found", acronym.yellow()),
    }

    Ok(())
}
