use std::{fs, path::PathBuf};

use eyre::Result;
use serde::{Deserialize, Serialize};

use crate::misc::shared_init::config_path;

pub const DEFAULT_RPC_URL: &str = "http://127.0.0.1:8332";
pub const DEFAULT_TIMEOUT_MS: u64 = 10_000;
pub const DEFAULT_WINDOW_ROWS: u16 = 10;

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub rpc: RpcConfig,
    #[serde(default)]
    pub browser: BrowserConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RpcConfig {
    pub url: Option<String>,
    pub user: Option<String>,
    pub password: Option<String>,
    pub timeout_ms: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BrowserConfig {
    #[serde(default = "default_window_rows")]
    pub window_rows: u16,
}

impl Default for BrowserConfig {
    fn default() -> Self {
        Self {
            window_rows: DEFAULT_WINDOW_ROWS,
        }
    }
}

fn default_window_rows() -> u16 {
    DEFAULT_WINDOW_ROWS
}

impl Config {
    pub fn config_file_path() -> Result<PathBuf> {
        Ok(config_path()?.join("config.toml"))
    }

    pub fn load() -> Result<Self> {
        let path = Self::config_file_path()?;
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(&path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    pub fn init_if_missing() -> Result<()> {
        let path = Self::config_file_path()?;
        if !path.exists() {
            fs::create_dir_all(config_path()?)?;
            fs::write(&path, "")?;
        }
        Ok(())
    }
}
