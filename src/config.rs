use crate::common::NodeAddress;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Address of the grid node, as you would open it in a browser.
    /// The API root is derived from it once at startup.
    #[serde(default = "default_node_address")]
    pub node_address: String,
}

#[inline(always)]
fn default_node_address() -> String {
    // conventional port of a grid node
    "http://localhost:5000".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            node_address: default_node_address(),
        }
    }
}

impl Config {
    /// Load config from either current directory or `~/.opengrid/` directory
    pub fn load() -> color_eyre::Result<Self> {
        // try current directory first
        let local_path = PathBuf::from("grid.json");
        if local_path.exists() {
            let content = fs::read_to_string(&local_path)?;
            let config: Config = serde_json::from_str(&content)?;
            return Ok(config);
        }

        // try ~/.opengrid/ directory
        let home_path = Self::home_config_path();
        if home_path.exists() {
            let content = fs::read_to_string(&home_path)?;
            let config: Config = serde_json::from_str(&content)?;
            return Ok(config);
        }

        // if neither exists, create default config in current directory
        let config = Self::default();
        let content = serde_json::to_string_pretty(&config)?;
        fs::write(&local_path, content)?;
        Ok(config)
    }

    /// Save config to `~/.opengrid/` directory
    pub fn save_to_home(&self) -> color_eyre::Result<()> {
        let config_path = Self::home_config_path();

        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        fs::write(&config_path, content)?;
        Ok(())
    }

    /// Get the path to `$HOME/.opengrid/grid.json`
    ///
    /// FIXME: this is not cross-platform
    fn home_config_path() -> PathBuf {
        let mut path = match std::env::var("HOME") {
            Ok(home) => PathBuf::from(home),
            Err(_) => PathBuf::from("."),
        };
        path.push(".opengrid");
        path.push("grid.json");
        path
    }

    /// Get the current config location (for display purposes)
    pub fn current_location() -> String {
        let local_path = PathBuf::from("grid.json");
        if local_path.exists() {
            return "./grid.json".to_string();
        }

        let home_path = Self::home_config_path();
        if home_path.exists() {
            return home_path.to_string_lossy().to_string();
        }

        "./grid.json (not found)".to_string()
    }

    /// The configured address split into its protocol/host/path components.
    pub fn parsed_address(&self) -> NodeAddress {
        NodeAddress::parse(&self.node_address)
    }
}
