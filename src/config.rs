//! Configuration management for Lumo Wallet
//!
//! Handles loading and saving configuration shared between the GUI and any
//! future headless tooling.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Chain the wallet operates on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Chain {
    Testnet,
    Mainnet,
}

impl Chain {
    pub fn as_str(&self) -> &'static str {
        match self {
            Chain::Testnet => "testnet",
            Chain::Mainnet => "mainnet",
        }
    }

    pub fn chain_id(&self) -> u64 {
        match self {
            Chain::Testnet => 84532,
            Chain::Mainnet => 8453,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Chain::Testnet => "Base Sepolia",
            Chain::Mainnet => "Base",
        }
    }

    pub fn token_symbol(&self) -> &'static str {
        "USDC"
    }
}

impl std::fmt::Display for Chain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Chain {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "testnet" | "base-sepolia" => Ok(Chain::Testnet),
            "mainnet" | "base" => Ok(Chain::Mainnet),
            _ => Err(anyhow::anyhow!("Invalid chain: {}", s)),
        }
    }
}

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Chain to operate on
    pub chain: Chain,

    /// Base URL of the wallet API service
    #[serde(default = "default_api_url")]
    pub api_url: String,

    /// Base URL used when formatting shareable links
    #[serde(default = "default_link_base")]
    pub link_base: String,

    /// Directory where account data is stored
    pub data_dir: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            chain: Chain::Testnet,
            api_url: default_api_url(),
            link_base: default_link_base(),
            data_dir: default_data_dir(),
        }
    }
}

impl Config {
    /// Load configuration from file, or create default if it doesn't exist
    pub fn load() -> Result<Self> {
        let config_path = config_file_path();

        if config_path.exists() {
            let contents = fs::read_to_string(&config_path)
                .with_context(|| format!("Failed to read config file: {}", config_path.display()))?;

            let config: Config = toml::from_str(&contents)
                .with_context(|| format!("Failed to parse config file: {}", config_path.display()))?;

            tracing::info!("Loaded config from: {}", config_path.display());
            Ok(config)
        } else {
            tracing::info!(
                "No config file found, creating default at: {}",
                config_path.display()
            );
            let config = Self::default();
            config.save()?;
            Ok(config)
        }
    }

    /// Save configuration to file
    pub fn save(&self) -> Result<()> {
        let config_path = config_file_path();

        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let contents = toml::to_string_pretty(self).context("Failed to serialize config")?;

        fs::write(&config_path, contents)
            .with_context(|| format!("Failed to write config file: {}", config_path.display()))?;

        tracing::info!("Saved config to: {}", config_path.display());
        Ok(())
    }

    /// Account data directory for the configured chain
    pub fn chain_data_dir(&self) -> PathBuf {
        self.data_dir.join(self.chain.as_str())
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if !self.api_url.starts_with("http://") && !self.api_url.starts_with("https://") {
            return Err(anyhow::anyhow!("API URL must be http(s): {}", self.api_url));
        }
        if self.link_base.ends_with('/') {
            return Err(anyhow::anyhow!(
                "Link base must not end with a slash: {}",
                self.link_base
            ));
        }

        if !self.data_dir.exists() {
            fs::create_dir_all(&self.data_dir).with_context(|| {
                format!("Cannot create data directory: {}", self.data_dir.display())
            })?;
        }

        Ok(())
    }
}

fn default_api_url() -> String {
    "https://api.lumo.cash".to_string()
}

fn default_link_base() -> String {
    "https://lumo.cash/l".to_string()
}

/// Get the default account data directory
fn default_data_dir() -> PathBuf {
    directories::ProjectDirs::from("", "", "lumo")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .unwrap_or_else(|| {
            let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".lumo")
        })
}

/// Get the configuration file path
fn config_file_path() -> PathBuf {
    directories::ProjectDirs::from("", "", "lumo")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .unwrap_or_else(|| {
            let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".config").join("lumo")
        })
        .join("config.toml")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chain_conversion() {
        assert_eq!(Chain::Testnet.as_str(), "testnet");
        assert_eq!(Chain::Mainnet.as_str(), "mainnet");
        assert_eq!(Chain::Testnet.chain_id(), 84532);
        assert_eq!(Chain::Mainnet.chain_id(), 8453);
    }

    #[test]
    fn test_chain_from_str() {
        assert_eq!("testnet".parse::<Chain>().unwrap(), Chain::Testnet);
        assert_eq!("MAINNET".parse::<Chain>().unwrap(), Chain::Mainnet);
        assert_eq!("base".parse::<Chain>().unwrap(), Chain::Mainnet);
        assert!("goerli".parse::<Chain>().is_err());
    }

    #[test]
    fn test_config_serialization() {
        let config = Config {
            chain: Chain::Mainnet,
            api_url: "https://api.example.com".to_string(),
            link_base: "https://example.com/l".to_string(),
            data_dir: PathBuf::from("/tmp/lumo"),
        };

        let toml = toml::to_string(&config).unwrap();
        assert!(toml.contains("chain = \"mainnet\""));
        assert!(toml.contains("api_url = \"https://api.example.com\""));

        let deserialized: Config = toml::from_str(&toml).unwrap();
        assert_eq!(deserialized.chain, Chain::Mainnet);
        assert_eq!(deserialized.link_base, "https://example.com/l");
    }

    #[test]
    fn test_validation() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = Config {
            data_dir: dir.path().join("data"),
            ..Config::default()
        };
        assert!(config.validate().is_ok());

        config.api_url = "ftp://nope".to_string();
        assert!(config.validate().is_err());

        config.api_url = default_api_url();
        config.link_base = "https://lumo.cash/l/".to_string();
        assert!(config.validate().is_err());
    }
}
