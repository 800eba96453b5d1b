use crate::error::{ArticulateError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "config.json";

pub const KEY_EXPORT_DIR: &str = "export-dir";

/// Configuration for articulate, stored in `<data dir>/config.json`
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ArticulateConfig {
    /// Directory exported sheets are written to. Unset means the current
    /// working directory.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub export_dir: Option<PathBuf>,
}

impl ArticulateConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(ArticulateError::Io)?;
        let config: ArticulateConfig =
            serde_json::from_str(&content).map_err(ArticulateError::Serialization)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(ArticulateError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(ArticulateError::Serialization)?;
        fs::write(config_path, content).map_err(ArticulateError::Io)?;
        Ok(())
    }

    pub fn export_dir_or(&self, fallback: &Path) -> PathBuf {
        self.export_dir
            .clone()
            .unwrap_or_else(|| fallback.to_path_buf())
    }

    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            KEY_EXPORT_DIR => Some(
                self.export_dir
                    .as_ref()
                    .map(|p| p.display().to_string())
                    .unwrap_or_else(|| "(current directory)".to_string()),
            ),
            _ => None,
        }
    }

    pub fn set(&mut self, key: &str, value: &str) -> std::result::Result<(), String> {
        match key {
            KEY_EXPORT_DIR => {
                let value = value.trim();
                self.export_dir = if value.is_empty() {
                    None
                } else {
                    Some(PathBuf::from(value))
                };
                Ok(())
            }
            _ => Err(format!("Unknown config key: {}", key)),
        }
    }
}
