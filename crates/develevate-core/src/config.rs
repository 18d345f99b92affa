//! Server configuration (`develevate.toml`)
//!
//! Every field has a default, so a missing or partial file is fine. CLI flags
//! override whatever is loaded here.

use crate::error::CoreError;
use serde::{Deserialize, Serialize};
use std::net::{IpAddr, SocketAddr};
use std::path::{Path, PathBuf};
use tracing::{info, warn};

pub const CONFIG_FILE: &str = "develevate.toml";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Interface to bind
    pub host: String,

    pub port: u16,

    /// Built frontend (trunk output) served at `/`
    pub dist_dir: PathBuf,

    /// Allow cross-origin API calls (frontend dev server on another port)
    pub cors: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 3000,
            dist_dir: PathBuf::from("crates/develevate-web/dist"),
            cors: true,
        }
    }
}

impl ServerConfig {
    /// Parse a config file
    pub fn load(path: &Path) -> Result<Self, CoreError> {
        let content = std::fs::read_to_string(path).map_err(|source| CoreError::FileRead {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&content).map_err(|source| CoreError::TomlParse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Load `<config_dir>/develevate.toml`, falling back to defaults
    pub fn load_or_default(config_dir: &Path) -> Self {
        let path = config_dir.join(CONFIG_FILE);
        if !path.exists() {
            return Self::default();
        }
        match Self::load(&path) {
            Ok(config) => {
                info!(path = %path.display(), "Loaded server config");
                config
            }
            Err(e) => {
                warn!(error = %e, "Using default server config");
                Self::default()
            }
        }
    }

    /// Write this config as TOML, creating the directory if needed
    pub fn save(&self, path: &Path) -> Result<(), CoreError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|source| CoreError::FileWrite {
                path: parent.to_path_buf(),
                source,
            })?;
        }
        let content = toml::to_string_pretty(self).map_err(|e| CoreError::InvalidConfig {
            message: e.to_string(),
        })?;
        std::fs::write(path, content).map_err(|source| CoreError::FileWrite {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn socket_addr(&self) -> Result<SocketAddr, CoreError> {
        let ip: IpAddr = self.host.parse().map_err(|_| CoreError::InvalidConfig {
            message: format!("host must be an IP address, got '{}'", self.host),
        })?;
        Ok(SocketAddr::new(ip, self.port))
    }
}

/// `~/.config/develevate` (platform equivalent)
pub fn default_config_dir() -> Result<PathBuf, CoreError> {
    dirs::config_dir()
        .map(|dir| dir.join("develevate"))
        .ok_or(CoreError::ConfigDirNotFound)
}
