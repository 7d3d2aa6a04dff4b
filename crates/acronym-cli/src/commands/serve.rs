//! Serve command - run the web front-end

use acronym_server::{serve, ServerConfig};
use anyhow::Result;
use colored::Colorize;

pub async fn run() -> Result<()> {
    let config = ServerConfig::from_env();
    let port = config.port().unwrap_or(3000);

    println!(
        "{}",
        format!("Starting the web server on http://localhost:{}", port).cyan()
    );

    serve(config).await
}
