//! Configuration loading and resolution
//!
//! Each setting resolves through four tiers, highest priority first:
//! 1. Command-line argument
//! 2. Environment variable (handled by clap's `env` attribute in the binary)
//! 3. TOML config file
//! 4. Compiled default
//!
//! A missing or partial config file never aborts startup; unresolved
//! settings fall through to the compiled defaults.

use crate::{Error, Result};
use serde::Deserialize;
use std::path::PathBuf;
use tracing::warn;

/// Compiled defaults, lowest resolution tier
pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 8000;
pub const DEFAULT_FRONTEND_PORT: u16 = 3000;
/// Upper bound on accepted upload bodies; the whole file is buffered
/// in memory before parsing
pub const DEFAULT_MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

/// Resolved service configuration
#[derive(Debug, Clone)]
pub struct ServiceConfig {
    /// Address the HTTP server binds to
    pub host: String,
    /// Port the HTTP server listens on
    pub port: u16,
    /// Port the demo frontend is served on, used to build the QR handoff URL
    pub frontend_port: u16,
    /// Maximum accepted upload body size in bytes
    pub max_upload_bytes: usize,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            frontend_port: DEFAULT_FRONTEND_PORT,
            max_upload_bytes: DEFAULT_MAX_UPLOAD_BYTES,
        }
    }
}

/// Partial configuration as read from the TOML file; every field optional
#[derive(Debug, Default, Deserialize)]
pub struct TomlConfig {
    pub host: Option<String>,
    pub port: Option<u16>,
    pub frontend_port: Option<u16>,
    pub max_upload_bytes: Option<usize>,
}

impl TomlConfig {
    /// Load from the default platform location, returning an empty config
    /// when no file exists or it fails to parse (with a warning)
    pub fn load() -> Self {
        let Some(path) = find_config_file() else {
            return Self::default();
        };
        match Self::load_from(&path) {
            Ok(config) => config,
            Err(e) => {
                warn!("Ignoring config file {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Load and parse a specific config file
    pub fn load_from(path: &PathBuf) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| Error::Config(e.to_string()))
    }
}

/// Resolve the full service configuration from CLI-provided overrides
/// (already merged with environment variables by clap) and the TOML tier
pub fn resolve_config(
    cli_host: Option<String>,
    cli_port: Option<u16>,
    cli_frontend_port: Option<u16>,
    cli_max_upload_bytes: Option<usize>,
) -> ServiceConfig {
    let file = TomlConfig::load();
    let defaults = ServiceConfig::default();

    ServiceConfig {
        host: cli_host.or(file.host).unwrap_or(defaults.host),
        port: cli_port.or(file.port).unwrap_or(defaults.port),
        frontend_port: cli_frontend_port
            .or(file.frontend_port)
            .unwrap_or(defaults.frontend_port),
        max_upload_bytes: cli_max_upload_bytes
            .or(file.max_upload_bytes)
            .unwrap_or(defaults.max_upload_bytes),
    }
}

/// Locate the config file for the platform
///
/// Linux tries ~/.config/payflow/config.toml then /etc/payflow/config.toml;
/// macOS and Windows use the user config directory only.
fn find_config_file() -> Option<PathBuf> {
    let user_config = dirs::config_dir().map(|d| d.join("payflow").join("config.toml"));

    if let Some(path) = &user_config {
        if path.exists() {
            return user_config;
        }
    }

    if cfg!(target_os = "linux") {
        let system_config = PathBuf::from("/etc/payflow/config.toml");
        if system_config.exists() {
            return Some(system_config);
        }
    }

    None
}
