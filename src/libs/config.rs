//! Configuration management for the todolist server.
//!
//! Settings come from four layers, later ones winning:
//!
//! 1. built-in defaults (`127.0.0.1:8000`, database in the data directory)
//! 2. `config.json` in the platform data directory
//! 3. environment variables (`TODOLIST_HOST`, `TODOLIST_PORT`, `TODOLIST_DB`),
//!    including those loaded from a `.env` file
//! 4. command-line flags of `todolist serve`
//!
//! ## Usage Examples
//!
//! ```rust,no_run
//! use todolist::libs::config::Config;
//!
//! let config = Config::read()?.apply_env()?;
//! println!("listening on {}", config.socket_addr());
//! # Ok::<(), anyhow::Error>(())
//! ```

use super::data_storage::DataStorage;
use crate::db::db::DB_FILE_NAME;
use crate::libs::messages::Message;
use crate::{msg_debug, msg_error_anyhow};
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::path::{Path, PathBuf};

/// Configuration file name inside the data directory.
pub const CONFIG_FILE_NAME: &str = "config.json";

pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 8000;

pub const ENV_HOST: &str = "TODOLIST_HOST";
pub const ENV_PORT: &str = "TODOLIST_PORT";
pub const ENV_DB: &str = "TODOLIST_DB";

/// Listen address of the HTTP server.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        ServerConfig {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
        }
    }
}

/// Root configuration object, stored as pretty-printed JSON.
///
/// Every field is optional in the file; missing ones fall back to defaults.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,

    /// Explicit database file. When absent the database lives next to the
    /// configuration file.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub database: Option<PathBuf>,
}

impl Config {
    /// Reads `config.json` from the data directory, or defaults when there is none.
    pub fn read() -> Result<Config> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        Self::read_from(&config_file_path)
    }

    pub fn read_from(path: &Path) -> Result<Config> {
        if !path.exists() {
            msg_debug!(Message::ConfigNotFound);
            return Ok(Config::default());
        }

        let config_str = fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&config_str)?;
        msg_debug!(Message::ConfigLoaded(path.display().to_string()));
        Ok(config)
    }

    /// Writes the configuration to `config.json` in the data directory and
    /// returns the path written.
    pub fn save(&self) -> Result<PathBuf> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        self.save_to(&config_file_path)?;
        Ok(config_file_path)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        let config_file = File::create(path)?;
        serde_json::to_writer_pretty(&config_file, &self)?;
        Ok(())
    }

    /// Applies overrides from the process environment.
    pub fn apply_env(self) -> Result<Config> {
        self.apply_env_from(|key| std::env::var(key).ok())
    }

    /// Applies overrides looked up through `lookup`. Empty values are ignored.
    pub fn apply_env_from<F>(mut self, lookup: F) -> Result<Config>
    where
        F: Fn(&str) -> Option<String>,
    {
        let value = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        if let Some(host) = value(ENV_HOST) {
            self.server.host = host;
        }
        if let Some(port) = value(ENV_PORT) {
            self.server.port = parse_port(&port)?;
        }
        if let Some(db) = value(ENV_DB) {
            self.database = Some(PathBuf::from(db));
        }

        Ok(self)
    }

    /// `host:port` string suitable for binding.
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    /// Database file to open: the configured one, or the default file in the
    /// data directory.
    pub fn database_path(&self) -> Result<PathBuf> {
        match &self.database {
            Some(path) => Ok(path.clone()),
            None => DataStorage::new().get_path(DB_FILE_NAME),
        }
    }
}

pub fn parse_port(raw: &str) -> Result<u16> {
    raw.trim().parse::<u16>().map_err(|_| msg_error_anyhow!(Message::InvalidPort(raw.to_string())))
}
