use crate::error::{FridgeError, Result};
use crate::storage::SqlitePool;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

pub const CONFIG_FILE_NAME: &str = ".fridge.toml";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FridgeConfig {
    #[serde(default)]
    pub database: DatabaseSettings,

    #[serde(default)]
    pub server: ServerSettings,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseSettings {
    /// Relative paths resolve against the directory holding the config file.
    #[serde(default = "default_db_path")]
    pub path: String,

    #[serde(default = "default_busy_timeout_secs")]
    pub busy_timeout_secs: u64,

    /// Idle connections kept open between requests.
    #[serde(default = "default_max_idle")]
    pub max_idle: usize,
}

fn default_db_path() -> String {
    "fridge.db".to_string()
}

fn default_busy_timeout_secs() -> u64 {
    5
}

fn default_max_idle() -> usize {
    4
}

impl Default for DatabaseSettings {
    fn default() -> Self {
        Self {
            path: default_db_path(),
            busy_timeout_secs: default_busy_timeout_secs(),
            max_idle: default_max_idle(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    4000
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl FridgeConfig {
    /// Searches upward from `start_path` for a config file.
    pub fn load(start_path: &Path) -> Result<(Self, PathBuf)> {
        let config_path = Self::find_config_file(start_path)?;
        Self::load_from(&config_path)
    }

    /// Loads a specific config file; the project root is its parent directory.
    pub fn load_from(config_path: &Path) -> Result<(Self, PathBuf)> {
        let content = std::fs::read_to_string(config_path)?;
        let config: FridgeConfig = toml::from_str(&content)?;
        let project_root = config_path
            .parent()
            .ok_or_else(|| FridgeError::Config("Config file has no parent directory".to_string()))?
            .to_path_buf();
        Ok((config, project_root))
    }

    pub fn find_config_file(start_path: &Path) -> Result<PathBuf> {
        let mut current = start_path.to_path_buf();
        loop {
            let config_path = current.join(CONFIG_FILE_NAME);
            if config_path.exists() {
                return Ok(config_path);
            }
            if !current.pop() {
                return Err(FridgeError::NotInitialized);
            }
        }
    }

    pub fn database_path(&self, project_root: &Path) -> PathBuf {
        project_root.join(&self.database.path)
    }

    pub fn busy_timeout(&self) -> Duration {
        Duration::from_secs(self.database.busy_timeout_secs)
    }

    pub fn open_pool(&self, project_root: &Path) -> Result<SqlitePool> {
        SqlitePool::open(
            &self.database_path(project_root),
            self.busy_timeout(),
            self.database.max_idle,
        )
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}
