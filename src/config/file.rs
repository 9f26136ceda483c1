use crate::domain::ports::ConfigProvider;
use crate::utils::error::{AdviceError, Result};
use crate::utils::validation::{self, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileConfig {
    pub service: ServiceConfig,
    pub defaults: Option<DefaultsConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceConfig {
    pub endpoint: String,
    pub timeout_seconds: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DefaultsConfig {
    pub favorite_color: Option<String>,
}

impl FileConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: FileConfig = toml::from_str(&content).map_err(|e| AdviceError::ConfigError {
            message: format!("Failed to parse config file: {}", e),
        })?;
        Ok(config)
    }

    pub fn default_favorite_color(&self) -> Option<&str> {
        self.defaults
            .as_ref()
            .and_then(|d| d.favorite_color.as_deref())
    }
}

impl ConfigProvider for FileConfig {
    fn advice_endpoint(&self) -> &str {
        &self.service.endpoint
    }

    fn timeout_seconds(&self) -> u64 {
        self.service.timeout_seconds.unwrap_or(30)
    }
}

impl Validate for FileConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_url("service.endpoint", &self.service.endpoint)?;

        if let Some(timeout) = self.service.timeout_seconds {
            validation::validate_range("service.timeout_seconds", timeout, 1, 300)?;
        }

        if let Some(color) = self.default_favorite_color() {
            validation::validate_hex_color("defaults.favorite_color", color)?;
        }

        Ok(())
    }
}
