//! Server configuration

use std::net::SocketAddr;
use std::path::PathBuf;
use tracing::info;

pub const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:3000";
pub const DEFAULT_STATIC_DIR: &str = "./static";
pub const DEFAULT_TEMPLATES_DIR: &str = "./templates";

/// Settings for the web server.
///
/// The acronym file itself is always `acronyms.yaml` in the working
/// directory and is not part of this configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub bind_address: String,
    pub static_dir: PathBuf,
    pub templates_dir: PathBuf,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_address: DEFAULT_BIND_ADDRESS.to_string(),
            static_dir: PathBuf::from(DEFAULT_STATIC_DIR),
            templates_dir: PathBuf::from(DEFAULT_TEMPLATES_DIR),
        }
    }
}

impl ServerConfig {
    /// Load configuration from the environment, falling back to defaults
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let bind_address = lookup("ACRONYMS_BIND_ADDRESS").unwrap_or(defaults.bind_address);
        let static_dir = lookup("ACRONYMS_STATIC_DIR")
            .map(PathBuf::from)
            .unwrap_or(defaults.static_dir);
        let templates_dir = lookup("ACRONYMS_TEMPLATES_DIR")
            .map(PathBuf::from)
            .unwrap_or(defaults.templates_dir);

        let config = Self {
            bind_address,
            static_dir,
            templates_dir,
        };
        info!(
            "Config loaded: bind={}, static={}, templates={}",
            config.bind_address,
            config.static_dir.display(),
            config.templates_dir.display()
        );
        config
    }

    /// Port part of the bind address, if it parses
    pub fn port(&self) -> Option<u16> {
        self.bind_address
            .parse::<SocketAddr>()
            .ok()
            .map(|addr| addr.port())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_defaults() {
        let config = ServerConfig::from_lookup(|_| None);
        assert_eq!(config, ServerConfig::default());
        assert_eq!(config.port(), Some(3000));
    }

    #[test]
    fn test_env_overrides() {
        let env: HashMap<&str, &str> = [
            ("ACRONYMS_BIND_ADDRESS", "127.0.0.1:8080"),
            ("ACRONYMS_STATIC_DIR", "/srv/acronyms/static"),
        ]
        .into_iter()
        .collect();

        let config = ServerConfig::from_lookup(|key| env.get(key).map(|v| v.to_string()));

        assert_eq!(config.bind_address, "127.0.0.1:8080");
        assert_eq!(config.port(), Some(8080));
        assert_eq!(config.static_dir, PathBuf::from("/srv/acronyms/static"));
        assert_eq!(config.templates_dir, PathBuf::from(DEFAULT_TEMPLATES_DIR));
    }

    #[test]
    fn test_unparseable_bind_address_has_no_port() {
        let config = ServerConfig {
            bind_address: "localhost".to_string(),
            ..ServerConfig::default()
        };
        assert_eq!(config.port(), None);
    }
}
