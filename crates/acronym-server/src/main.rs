//! Standalone acronym web server
//!
//! Same server as `acronyms --http`, configured from the environment only.

use acronym_server::{serve, ServerConfig};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    install_panic_hook();

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("acronym_server=info,tower_http=info")),
        )
        .finish();
    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("[FATAL] Failed to initialize logging: {}", e);
        std::process::exit(1);
    }

    info!("Starting acronym server v{}", env!("CARGO_PKG_VERSION"));

    if let Err(e) = serve(ServerConfig::from_env()).await {
        error!("Server failed: {:#}", e);
        std::process::exit(1);
    }
}

/// Log panics through tracing before the default hook prints them
fn install_panic_hook() {
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic| {
        error!("{}", panic);
        default_hook(panic);
    }));
}
