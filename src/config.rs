use crate::languages;
use crate::log_debug;
use crate::transport::{DEFAULT_API_BASE, DEFAULT_MODEL, TransportMode};

use anyhow::{Result, anyhow};
use dirs::config_dir;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Configuration structure for the CodeForge application
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq, Eq)]
pub struct Config {
    /// Model used when none is given on the command line
    #[serde(default = "default_model")]
    pub default_model: String,
    /// Base URL of the local inference server
    #[serde(default = "default_api_base")]
    pub api_base: String,
    /// Language assumed when none is given on the command line
    #[serde(default = "default_language")]
    pub default_language: String,
    /// Transport selection: auto probes for the native client at startup
    #[serde(default)]
    pub transport: TransportMode,
}

fn default_model() -> String {
    DEFAULT_MODEL.to_string()
}

fn default_api_base() -> String {
    DEFAULT_API_BASE.to_string()
}

fn default_language() -> String {
    languages::DEFAULT_LANGUAGE.to_string()
}

impl Config {
    /// Load the configuration from the user config file
    pub fn load() -> Result<Self> {
        let config_path = Self::get_config_path()?;
        Self::load_from(&config_path)
    }

    /// Load the configuration from a specific path, falling back to
    /// defaults when the file does not exist
    pub fn load_from(path: &Path) -> Result<Self> {
        let config = if path.exists() {
            let config_content = fs::read_to_string(path)?;
            toml::from_str(&config_content)?
        } else {
            Self::default()
        };

        log_debug!("Configuration loaded: {:?}", config);
        Ok(config)
    }

    /// Save the configuration to the user config file
    pub fn save(&self) -> Result<()> {
        let config_path = Self::get_config_path()?;
        self.save_to(&config_path)
    }

    /// Save the configuration to a specific path
    pub fn save_to(&self, path: &Path) -> Result<()> {
        let config_content = toml::to_string(self)?;
        fs::write(path, config_content)?;
        log_debug!("Configuration saved: {:?}", self);
        Ok(())
    }

    /// Get the path to the configuration file
    fn get_config_path() -> Result<PathBuf> {
        let mut path =
            config_dir().ok_or_else(|| anyhow!("Unable to determine config directory"))?;
        path.push("codeforge");
        std::fs::create_dir_all(&path)?;
        path.push("config.toml");
        Ok(path)
    }

    /// Update the configuration with new values
    pub fn update(
        &mut self,
        model: Option<String>,
        api_base: Option<String>,
        language: Option<String>,
        transport: Option<TransportMode>,
    ) -> Result<()> {
        if let Some(model) = model {
            self.default_model = model;
        }
        if let Some(api_base) = api_base {
            self.api_base = api_base;
        }
        if let Some(language) = language {
            if !languages::is_known(&language) {
                return Err(anyhow!(
                    "Unknown language: {}. Available: {}",
                    language,
                    languages::selectable_names().join(", ")
                ));
            }
            self.default_language = language.to_lowercase();
        }
        if let Some(transport) = transport {
            self.transport = transport;
        }

        log_debug!("Configuration updated: {:?}", self);
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_model: default_model(),
            api_base: default_api_base(),
            default_language: default_language(),
            transport: TransportMode::default(),
        }
    }
}
