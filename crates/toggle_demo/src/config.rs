//! Demo configuration file handling
//!
//! The demo reads an optional `toggle-demo.toml`:
//!
//! ```toml
//! max_clicks = 5
//! uncontrolled_initial_on = false
//!
//! [labels]
//! first = "Controlled A"
//! second = "Controlled B"
//! free = "Uncontrolled"
//! ```
//!
//! Every key is optional.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Default config file name, looked up in the working directory
pub const CONFIG_FILE: &str = "toggle-demo.toml";

/// Demo settings
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct DemoConfig {
    /// Accepted toggles before the shared handler starts refusing them
    #[serde(default = "default_max_clicks")]
    pub max_clicks: u32,
    /// Starting value of the uncontrolled switch
    #[serde(default)]
    pub uncontrolled_initial_on: bool,
    #[serde(default)]
    pub labels: LabelsConfig,
}

fn default_max_clicks() -> u32 {
    5
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            max_clicks: default_max_clicks(),
            uncontrolled_initial_on: false,
            labels: LabelsConfig::default(),
        }
    }
}

/// Switch labels
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct LabelsConfig {
    #[serde(default = "default_first_label")]
    pub first: String,
    #[serde(default = "default_second_label")]
    pub second: String,
    #[serde(default = "default_free_label")]
    pub free: String,
}

fn default_first_label() -> String {
    "Controlled A".to_string()
}

fn default_second_label() -> String {
    "Controlled B".to_string()
}

fn default_free_label() -> String {
    "Uncontrolled".to_string()
}

impl Default for LabelsConfig {
    fn default() -> Self {
        Self {
            first: default_first_label(),
            second: default_second_label(),
            free: default_free_label(),
        }
    }
}

impl DemoConfig {
    /// Parse a config from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).context("Failed to parse demo config")
    }

    /// Load a config file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;

        Self::from_toml_str(&content).with_context(|| format!("Failed to load {}", path.display()))
    }

    /// Load `toggle-demo.toml` from a directory, falling back to defaults
    pub fn load_from_dir(dir: &Path) -> Result<Self> {
        let path = dir.join(CONFIG_FILE);
        if path.exists() {
            return Self::load(&path);
        }

        tracing::debug!("No {} in {}, using defaults", CONFIG_FILE, dir.display());
        Ok(Self::default())
    }
}
