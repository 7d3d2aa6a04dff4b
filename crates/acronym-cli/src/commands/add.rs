//! Add command - insert or overwrite one acronym

use acronym_core::AcronymStore;
use anyhow::Result;
use colored::Colorize;
use tracing::info;

pub fn run(acronym: &str, definition: &str) -> Result<()> {
    let store = AcronymStore::in_working_dir();
    let previous = store.upsert(acronym, definition).map_err(|e| {
        let action = if e.is_unwritable() {
            "Error saving to YAML file"
        } else {
            "Error parsing YAML file"
        };
        anyhow::Error::new(e).context(action)
    })?;

    if let Some(previous) = previous {
        info!("Replaced previous definition: {}", previous);
    }
    println!(
        "{} {} = {}",
        "Added acronym:".green(),
        acronym.bold(),
        definition
    );

    Ok(())
}
