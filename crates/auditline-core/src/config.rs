use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::constants::timestamps::DEFAULT_PATTERN;
use crate::timestamps::{display_offset, validate_pattern, TimestampError};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct DisplayConfig {
    #[serde(default)]
    pub show_deleted: bool,
    #[serde(default)]
    pub compact: bool,
    #[serde(default)]
    pub timestamps: TimestampConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimestampConfig {
    #[serde(default = "default_pattern")]
    pub pattern: String,
    #[serde(default)]
    pub utc_offset_minutes: i32,
}

impl Default for TimestampConfig {
    fn default() -> Self {
        Self {
            pattern: default_pattern(),
            utc_offset_minutes: 0,
        }
    }
}

fn default_pattern() -> String {
    DEFAULT_PATTERN.to_string()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutMode {
    Compact,
    Expanded,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid yaml config: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("invalid json config: {0}")]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Timestamp(#[from] TimestampError),
}

impl DisplayConfig {
    pub fn compact() -> Self {
        Self {
            compact: true,
            ..Self::default()
        }
    }

    pub fn with_deleted(mut self, show_deleted: bool) -> Self {
        self.show_deleted = show_deleted;
        self
    }

    pub fn mode(&self) -> LayoutMode {
        if self.compact {
            LayoutMode::Compact
        } else {
            LayoutMode::Expanded
        }
    }

    pub fn from_yaml_str(input: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yaml::from_str(input)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_json_str(input: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(input)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        validate_pattern(&self.timestamps.pattern)?;
        display_offset(self.timestamps.utc_offset_minutes)?;
        Ok(())
    }
}
