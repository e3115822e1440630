//! Configuration system for Stinote
//!
//! Loads configuration from TOML file at `~/.config/stinote/config.toml`
//! Auto-generates default config file on first run if missing.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub window: WindowConfig,
    pub dialog: DialogConfig,
    pub placement: PlacementConfig,
    pub editor: EditorConfig,
}

impl Config {
    /// Load configuration from file, or use defaults if file doesn't exist
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            info!("Config file not found at {:?}, using defaults", config_path);
            if let Err(e) = Self::save_default(&config_path) {
                warn!("Failed to create default config file: {}", e);
            }
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path)
            .context("Failed to read config file")?;
        let config = Self::from_toml(&content)?;

        info!("Configuration loaded from {:?}", config_path);
        debug!("Config: {:?}", config);

        Ok(config)
    }

    /// Parse a configuration document. Missing sections and keys keep
    /// their defaults.
    pub fn from_toml(content: &str) -> Result<Self> {
        toml::from_str(content).context("Failed to parse config file")
    }

    /// Get the path to the config file
    fn config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Failed to get config directory")?
            .join("stinote");

        Ok(config_dir.join("config.toml"))
    }

    /// Save default configuration to file
    fn save_default(path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .context("Failed to create config directory")?;
        }

        let toml_string = toml::to_string_pretty(&Self::default())
            .context("Failed to serialize default config")?;

        fs::write(path, toml_string)
            .context("Failed to write default config file")?;

        info!("Created default config file at {:?}", path);
        Ok(())
    }
}

/// Note window size
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    /// Width in pixels, also used to compute the top-right position
    pub width: u32,
    /// Height in pixels
    pub height: u32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 320,
            height: 320,
        }
    }
}

/// Size the window grows to while a file dialog is open
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DialogConfig {
    pub width: u32,
    pub height: u32,
}

impl Default for DialogConfig {
    fn default() -> Self {
        Self {
            width: 800,
            height: 600,
        }
    }
}

/// Window placement configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlacementConfig {
    /// Pin and move the window at all; `false` selects the no-op provider
    pub enabled: bool,
    /// Request `_NET_WM_STATE_ABOVE` when the window comes to the foreground
    pub always_on_top: bool,
}

impl Default for PlacementConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            always_on_top: true,
        }
    }
}

/// Text area configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    /// Render the note in a monospace font
    pub monospace: bool,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self { monospace: true }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_document_is_default() {
        assert_eq!(Config::from_toml("").unwrap(), Config::default());
    }

    #[test]
    fn test_partial_document_keeps_defaults() {
        let config = Config::from_toml(
            r#"
            [window]
            width = 400

            [placement]
            enabled = false
            "#,
        )
        .unwrap();

        assert_eq!(config.window, WindowConfig { width: 400, height: 320 });
        assert!(!config.placement.enabled);
        assert!(config.placement.always_on_top);
        assert_eq!(config.dialog, DialogConfig::default());
        assert!(config.editor.monospace);
    }

    #[test]
    fn test_invalid_document_is_rejected() {
        assert!(Config::from_toml("[window]\nwidth = \"wide\"").is_err());
    }

    #[test]
    fn test_default_roundtrips_through_toml() {
        let text = toml::to_string_pretty(&Config::default()).unwrap();
        assert_eq!(Config::from_toml(&text).unwrap(), Config::default());
    }

    #[test]
    fn test_save_default_creates_directories() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("stinote").join("config.toml");

        Config::save_default(&path).unwrap();

        let written = fs::read_to_string(&path).unwrap();
        assert_eq!(Config::from_toml(&written).unwrap(), Config::default());
    }
}
