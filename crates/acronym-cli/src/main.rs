//! Acronyms CLI
//!
//! Look up or add acronyms in `acronyms.yaml`, or serve the web form.

mod commands;

use anyhow::Result;
use clap::Parser;
use colored::Colorize;
use tracing::{debug, error};
use tracing_subscriber::EnvFilter;

/// Log filters; the binary's own target is `acronyms`
const VERBOSE_FILTER: &str =
    "acronyms=debug,acronym_core=debug,acronym_server=debug,tower_http=debug";
const DEFAULT_FILTER: &str = "acronyms=info,acronym_server=info,tower_http=info";

#[derive(Parser)]
#[command(name = "acronyms")]
#[command(author, version, about = "Look up and register acronyms", long_about = None)]
struct Cli {
    /// The acronym to look up or add
    #[arg(short, long)]
    acronym: Option<String>,

    /// The definition of the acronym (switches to add mode)
    #[arg(short, long)]
    definition: Option<String>,

    /// Run the application in HTTP mode (launches a web server)
    #[arg(long)]
    http: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(if cli.verbose {
            EnvFilter::new(VERBOSE_FILTER)
        } else {
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
        })
        .with_writer(std::io::stderr)
        .with_target(false)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;
    debug!("Starting acronyms CLI");

    let result = if cli.http {
        commands::serve::run().await
    } else {
        match cli.acronym.filter(|acronym| !acronym.is_empty()) {
            Some(acronym) => match cli.definition.filter(|definition| !definition.is_empty()) {
                Some(definition) => commands::add::run(&acronym, &definition),
                None => commands::lookup::run(&acronym),
            },
            None => Err(anyhow::anyhow!(
                "Please provide an acronym using the --acronym flag"
            )),
        }
    };

    if let Err(ref e) = result {
        error!("Command failed: {:#}", e);
        eprintln!("{} {:#}", "Error:".red().bold(), e);
        std::process::exit(1);
    }

    result
}
