//! Configuration loading and defaults.

use crate::defaults;
use crate::error::{Result, VoxbriefError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Root configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct Config {
    pub api: ApiConfig,
    pub chunking: ChunkingConfig,
    pub merge: MergeConfig,
}

/// Remote API configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ApiConfig {
    /// API key; usually supplied via the OPENAI_API_KEY environment variable.
    pub api_key: Option<String>,
    pub base_url: String,
    pub transcribe_model: String,
    pub transcribe_fallback_model: String,
    pub rewrite_model: String,
}

/// Audio chunking configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ChunkingConfig {
    pub max_chunk_mib: u64,
}

/// Transcript merge configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct MergeConfig {
    pub token_budget: usize,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: defaults::API_BASE_URL.to_string(),
            transcribe_model: defaults::TRANSCRIBE_MODEL.to_string(),
            transcribe_fallback_model: defaults::TRANSCRIBE_FALLBACK_MODEL.to_string(),
            rewrite_model: defaults::REWRITE_MODEL.to_string(),
        }
    }
}

impl Default for ChunkingConfig {
    fn default() -> Self {
        Self {
            max_chunk_mib: defaults::MAX_CHUNK_SIZE_MIB,
        }
    }
}

impl Default for MergeConfig {
    fn default() -> Self {
        Self {
            token_budget: defaults::TOKEN_BUDGET,
        }
    }
}

impl Config {
    /// Load configuration from a TOML file.
    ///
    /// Missing fields use default values; invalid TOML is an error.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                VoxbriefError::ConfigFileNotFound {
                    path: path.display().to_string(),
                }
            } else {
                VoxbriefError::Io(e)
            }
        })?;
        let config: Config = toml::from_str(&contents)?;
        Ok(config)
    }

    /// Load configuration from a file, falling back to defaults only when the
    /// file does not exist. Invalid TOML still fails.
    pub fn load_or_default(path: &Path) -> Result<Self> {
        match Self::load(path) {
            Ok(config) => Ok(config),
            Err(VoxbriefError::ConfigFileNotFound { .. }) => Ok(Self::default()),
            Err(e) => Err(e),
        }
    }

    /// Default config file location: `~/.config/voxbrief/config.toml`.
    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from(".config"))
            .join("voxbrief")
            .join("config.toml")
    }

    /// Apply environment variable overrides.
    ///
    /// Supported environment variables:
    /// - OPENAI_API_KEY → api.api_key
    /// - VOXBRIEF_API_BASE → api.base_url
    /// - VOXBRIEF_TRANSCRIBE_MODEL → api.transcribe_model
    /// - VOXBRIEF_REWRITE_MODEL → api.rewrite_model
    pub fn with_env_overrides(mut self) -> Self {
        if let Ok(key) = std::env::var("OPENAI_API_KEY")
            && !key.is_empty()
        {
            self.api.api_key = Some(key);
        }
        if let Ok(base) = std::env::var("VOXBRIEF_API_BASE")
            && !base.is_empty()
        {
            self.api.base_url = base;
        }
        if let Ok(model) = std::env::var("VOXBRIEF_TRANSCRIBE_MODEL")
            && !model.is_empty()
        {
            self.api.transcribe_model = model;
        }
        if let Ok(model) = std::env::var("VOXBRIEF_REWRITE_MODEL")
            && !model.is_empty()
        {
            self.api.rewrite_model = model;
        }
        self
    }
}
