use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{IoResultExt, Result};
use crate::ops::TreeStrategy;

/// default zlib compression level
pub const DEFAULT_COMPRESSION: u32 = 6;

/// repository configuration stored in config.toml
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// zlib compression level for newly written objects (0-9)
    #[serde(default = "default_compression")]
    pub compression: u32,
    /// default tree construction strategy for snapshots
    #[serde(default)]
    pub strategy: TreeStrategy,
}

fn default_compression() -> u32 {
    DEFAULT_COMPRESSION
}

impl Config {
    /// load config from file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).with_path(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// save config to file
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content).with_path(path)?;
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            compression: DEFAULT_COMPRESSION,
            strategy: TreeStrategy::Flat,
        }
    }
}
