//! Configuration handling for the TUI

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

/// Environment variable that overrides the configured webhook URL
pub const WEBHOOK_URL_ENV: &str = "LEAD_INTAKE_WEBHOOK_URL";

/// User configuration for the TUI
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct IntakeConfig {
    /// Webhook that receives submitted leads
    pub webhook_url: Option<String>,
    /// Initial form values keyed by payload field name, e.g.
    /// `{"serviceRequested": "Kitchen"}`
    #[serde(default)]
    pub prefill: BTreeMap<String, String>,
}

impl IntakeConfig {
    fn project_dirs() -> Option<ProjectDirs> {
        ProjectDirs::from("com", "lead-intake", "lead-intake")
    }

    /// Get the config file path
    pub fn config_path() -> Option<PathBuf> {
        Self::project_dirs().map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Directory the log file is written to
    pub fn log_dir() -> Option<PathBuf> {
        Self::project_dirs().map(|dirs| dirs.data_local_dir().to_path_buf())
    }

    /// Load configuration from the default location.
    ///
    /// On first run an empty config file is written so the user has a place
    /// to paste the webhook URL.
    pub fn load() -> Result<Self> {
        match Self::config_path() {
            Some(path) => Self::load_or_init(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load from `path`, writing a default file there first when missing
    fn load_or_init(path: &Path) -> Result<Self> {
        if !path.exists() {
            let config = Self::default();
            if let Err(e) = config.save_to(path) {
                tracing::warn!("Could not create {}: {e:#}", path.display());
            }
            return Ok(config);
        }
        Self::load_from(path)
    }

    /// Load configuration from a file, defaulting when it does not exist
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let config = serde_json::from_str(&content)
            .with_context(|| format!("Invalid config file {}", path.display()))?;
        Ok(config)
    }

    /// Save configuration to a file, creating parent directories
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Webhook URL to use: environment first, then the file, else empty
    pub fn resolved_webhook_url(&self) -> String {
        Self::resolve_with(std::env::var(WEBHOOK_URL_ENV).ok(), self.webhook_url.as_deref())
    }

    fn resolve_with(env_value: Option<String>, file_value: Option<&str>) -> String {
        env_value
            .filter(|v| !v.trim().is_empty())
            .or_else(|| file_value.map(str::to_string))
            .map(|v| v.trim().to_string())
            .unwrap_or_default()
    }
}
