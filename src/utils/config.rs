//! Configuration loading.
//!
//! Sources are layered with increasing priority: built-in defaults, a JSON
//! file, then environment variables. Each layer only overrides the keys it
//! sets.

use crate::bip39::{CorrectionScope, Language};
use crate::types::{LogLevel, MnemonicConfig};
use crate::{MnemonicError, Result};
use serde_json::{Map, Value};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

pub const DEFAULT_ENV_PREFIX: &str = "MNEMONIC";

/// Configuration source priority (higher number = higher priority)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ConfigSource {
    Default = 0,
    File = 1,
    Environment = 2,
}

/// Loads a [`MnemonicConfig`] from defaults, a JSON file and the environment.
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    file_path: Option<PathBuf>,
    env_prefix: String,
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self {
            file_path: None,
            env_prefix: DEFAULT_ENV_PREFIX.to_string(),
        }
    }
}

impl ConfigLoader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Read the JSON file at `path` if it exists.
    pub fn with_file<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.file_path = Some(path.into());
        self
    }

    /// Read `<prefix>_LANGUAGE` and friends instead of `MNEMONIC_*`.
    pub fn with_env_prefix(mut self, prefix: &str) -> Self {
        self.env_prefix = prefix.to_string();
        self
    }

    /// Load configuration from all sources
    pub fn load(&self) -> Result<MnemonicConfig> {
        self.load_from(env::vars())
    }

    fn load_from<I>(&self, vars: I) -> Result<MnemonicConfig>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let mut config_value = serde_json::to_value(MnemonicConfig::default())?;

        if let Some(path) = &self.file_path {
            if path.exists() {
                let file_config = load_from_file(path)?;
                merge_config_values(&mut config_value, file_config, ConfigSource::File);
            } else {
                log::debug!("Config file {:?} not found, using defaults", path);
            }
        }

        let env_config = self.load_from_environment(vars)?;
        merge_config_values(&mut config_value, env_config, ConfigSource::Environment);

        serde_json::from_value(config_value)
            .map_err(|e| MnemonicError::Config(format!("Failed to deserialize config: {}", e)))
    }

    /// Save configuration to the loader's file as pretty JSON
    pub fn save(&self, config: &MnemonicConfig) -> Result<()> {
        let path = self
            .file_path
            .as_ref()
            .ok_or_else(|| MnemonicError::Config("No config file path set".to_string()))?;

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }

        fs::write(path, serde_json::to_string_pretty(config)?)?;
        log::info!("Configuration saved to {:?}", path);
        Ok(())
    }

    fn load_from_environment<I>(&self, vars: I) -> Result<Value>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let prefix = format!("{}_", self.env_prefix);
        let mut env_config = Map::new();

        for (key, value) in vars {
            let Some(name) = key.strip_prefix(&prefix) else {
                continue;
            };
            let parsed = match name {
                "LANGUAGE" => serde_json::to_value(value.parse::<Language>()?)?,
                "LOG_LEVEL" => serde_json::to_value(value.parse::<LogLevel>()?)?,
                "CORRECTION_SCOPE" => {
                    serde_json::to_value(value.parse::<CorrectionScope>()?)?
                }
                "CORRECTION_POSITIONS" => parse_positions(&key, &value)?,
                _ => continue,
            };
            env_config.insert(name.to_lowercase(), parsed);
        }

        Ok(Value::Object(env_config))
    }
}

fn parse_positions(key: &str, value: &str) -> Result<Value> {
    let positions = value
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| {
            s.parse::<usize>().map(Value::from).map_err(|e| {
                MnemonicError::Config(format!("{}: invalid position '{}': {}", key, s, e))
            })
        })
        .collect::<Result<Vec<_>>>()?;

    if positions.is_empty() {
        return Err(MnemonicError::Config(format!("{}: empty correction position set", key)));
    }
    Ok(Value::Array(positions))
}

/// Load configuration from a file
fn load_from_file(file_path: &Path) -> Result<Value> {
    let content = fs::read_to_string(file_path)?;
    serde_json::from_str(&content).map_err(|e| {
        MnemonicError::Config(format!("Failed to parse config file {:?}: {}", file_path, e))
    })
}

fn merge_config_values(base: &mut Value, overlay: Value, source: ConfigSource) {
    match (base, overlay) {
        (Value::Object(base_map), Value::Object(overlay_map)) => {
            for (key, value) in overlay_map {
                log::trace!("Config key '{}' set from {:?}", key, source);
                base_map.insert(key, value);
            }
        }
        (base, overlay) => *base = overlay,
    }
}
