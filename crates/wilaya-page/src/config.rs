//! Page configuration
//!
//! Element hooks and timings used by the page script. The defaults match
//! the markup of the published rankings site; a JSON file can override any
//! subset of them.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

/// Errors raised while loading a [`PageConfig`]
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid config: {0}")]
    Invalid(&'static str),
}

const MAX_ANIMATION_STEPS: u32 = 10_000;
const MAX_TICK_INTERVAL_MS: u64 = 60_000;

/// Selectors, thresholds and animation timings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageConfig {
    /// Id of the card grid container
    pub grid_id: String,
    /// Id of the search field
    pub search_id: String,
    /// Id of the "last updated" element
    pub last_update_id: String,
    /// Class marking animated stat displays
    pub stat_class: String,
    /// Attribute holding a stat's target value
    pub stat_target_attr: String,
    /// Class of the navigation bar
    pub navbar_class: String,
    /// Scroll offset above which the navbar gets its shadow
    pub shadow_threshold: f64,
    /// `box-shadow` applied past the threshold
    pub navbar_shadow: String,
    /// Stat counter tick period
    pub tick_interval_ms: u64,
    /// Ticks a stat counter takes to reach its target
    pub animation_steps: u32,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            grid_id: "wilayasGrid".to_string(),
            search_id: "wilayaSearch".to_string(),
            last_update_id: "lastUpdate".to_string(),
            stat_class: "stat-value".to_string(),
            stat_target_attr: "data-target".to_string(),
            navbar_class: "navbar".to_string(),
            shadow_threshold: 100.0,
            navbar_shadow: "0 2px 10px rgba(0,0,0,0.1)".to_string(),
            tick_interval_ms: 30,
            animation_steps: 50,
        }
    }
}

impl PageConfig {
    /// Parse and validate a JSON document
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a JSON file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&json)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.animation_steps == 0 {
            return Err(ConfigError::Invalid("animation_steps must be at least 1"));
        }
        if self.animation_steps > MAX_ANIMATION_STEPS {
            return Err(ConfigError::Invalid("animation_steps must be at most 10000"));
        }
        if self.tick_interval_ms == 0 {
            return Err(ConfigError::Invalid("tick_interval_ms must be at least 1"));
        }
        if self.tick_interval_ms > MAX_TICK_INTERVAL_MS {
            return Err(ConfigError::Invalid("tick_interval_ms must be at most 60000"));
        }
        if !self.shadow_threshold.is_finite() {
            return Err(ConfigError::Invalid("shadow_threshold must be finite"));
        }
        Ok(())
    }

    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }
}
