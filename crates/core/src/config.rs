// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Gathering configuration
//!
//! Loaded from `<config dir>/gatherbuddy/config.toml`. Every key is
//! optional; missing keys fall back to their defaults.

use crate::message::Color;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Default template for identified item and fish messages
pub const DEFAULT_IDENTIFIED_FORMAT: &str = "Identified [{Id}: {Name}] for \"{Input}\".";

/// Errors from loading configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Read-only switches consumed by the gather stages
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Teleport to the closest aetheryte of the target location
    pub use_teleport: bool,
    /// Skip the teleport when already closer to the node than the aetheryte is
    pub skip_teleport_if_close: bool,
    /// Switch to the configured gear set for the location's job
    pub use_gear_change: bool,
    pub miner_set_name: String,
    pub botanist_set_name: String,
    pub fisher_set_name: String,
    /// Print the location's map link to chat
    pub write_coordinates: bool,
    /// Place the in-game map flag on the location
    pub use_coordinates: bool,
    /// Print when the target is up next
    pub print_uptime: bool,
    /// Empty disables the message
    pub identified_item_format: String,
    /// Empty disables the message
    pub identified_fish_format: String,
    pub argument_color: Color,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            use_teleport: true,
            skip_teleport_if_close: true,
            use_gear_change: true,
            miner_set_name: "Miner".to_string(),
            botanist_set_name: "Botanist".to_string(),
            fisher_set_name: "Fisher".to_string(),
            write_coordinates: true,
            use_coordinates: true,
            print_uptime: true,
            identified_item_format: DEFAULT_IDENTIFIED_FORMAT.to_string(),
            identified_fish_format: DEFAULT_IDENTIFIED_FORMAT.to_string(),
            argument_color: Color::default(),
        }
    }
}

impl Config {
    /// Parse configuration from TOML content
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    /// Load configuration, falling back to defaults when the file is missing
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }
        Self::load(path)
    }

    /// The default config file path
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("gatherbuddy").join("config.toml"))
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
