//! Layered hashing configuration
//!
//! Values are resolved in priority order: environment > config file > defaults.

use crate::hashing::HashAlgorithm;
use crate::{Result, error::ValidationError};
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use log::debug;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Prefix for environment variable overrides, e.g. `SHA1_STREAM_CHUNK_SIZE`
pub const ENV_PREFIX: &str = "SHA1_STREAM_";

/// Default read size when streaming readers and files
pub const DEFAULT_CHUNK_SIZE: usize = 64 * 1024;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HashingConfig {
    /// Algorithm used when the caller does not name one
    pub algorithm: HashAlgorithm,
    /// Bytes read per write when hashing readers and files
    pub chunk_size: usize,
}

impl Default for HashingConfig {
    fn default() -> Self {
        Self {
            algorithm: HashAlgorithm::SHA1,
            chunk_size: DEFAULT_CHUNK_SIZE,
        }
    }
}

impl HashingConfig {
    /// Build the layered figment without extracting it
    pub fn figment(config_path: Option<&Path>) -> Figment {
        let mut figment = Figment::new().merge(Serialized::defaults(Self::default()));

        if let Some(path) = config_path.filter(|path| path.exists()) {
            debug!("Loading hashing configuration from {}", path.display());
            figment = figment.merge(Toml::file(path));
        }

        figment.merge(Env::prefixed(ENV_PREFIX))
    }

    /// Load and validate configuration
    pub fn load(config_path: Option<&Path>) -> Result<Self> {
        let config: Self = Self::figment(config_path).extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values the calculator cannot run with
    pub fn validate(&self) -> Result<()> {
        if self.chunk_size == 0 {
            return Err(
                ValidationError::invalid_parameter("chunk_size", "must be greater than zero")
                    .into(),
            );
        }
        if !self.algorithm.is_available() {
            return Err(ValidationError::unsupported_algorithm(self.algorithm.to_string()).into());
        }
        Ok(())
    }
}
