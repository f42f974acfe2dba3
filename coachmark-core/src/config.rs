// SPDX-License-Identifier: LGPL-3.0-only

//! # Layout Configuration
//!
//! [LayoutConfig] holds the knobs of the layout helpers: the containment
//! tolerance and the layout direction used to resolve leading/trailing edges.
//!
//! It can be built programmatically, parsed from TOML, or read from the
//! environment:
//!
//! ```bash
//! export COACHMARK_LAYOUT_TOLERANCE=0.5
//! export COACHMARK_LAYOUT_DIRECTION=rtl
//! export COACHMARK_LAYOUT_CONFIG=./layout.toml
//! ```
//!
//! ```toml
//! [layout]
//! containment_tolerance = 1.0
//! direction = "ltr"
//! ```

use serde::Deserialize;
use std::env;
use std::fs;
use std::path::Path;

use crate::error::ConfigError;
use crate::layout::{LayoutDirection, CONTAINMENT_TOLERANCE};

/// Configuration for containment checks and constraint resolution.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Maximum difference, exclusive, between a frame and its visible part.
    pub containment_tolerance: f32,
    /// Direction used to resolve leading and trailing edges.
    pub direction: LayoutDirection,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            containment_tolerance: CONTAINMENT_TOLERANCE,
            direction: LayoutDirection::Ltr,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
struct ConfigFile {
    #[serde(default)]
    layout: LayoutConfig,
}

impl LayoutConfig {
    /// Set the containment tolerance.
    pub fn with_tolerance(mut self, tolerance: f32) -> Self {
        self.containment_tolerance = tolerance;
        self
    }

    /// Set the layout direction.
    pub fn with_direction(mut self, direction: LayoutDirection) -> Self {
        self.direction = direction;
        self
    }

    /// Check that the tolerance is finite and positive.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.containment_tolerance.is_finite() && self.containment_tolerance > 0.0 {
            Ok(())
        } else {
            Err(ConfigError::InvalidTolerance(self.containment_tolerance))
        }
    }

    /// Parse a configuration from TOML content with a `[layout]` table.
    ///
    /// Missing keys keep their default values.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let file: ConfigFile = toml::from_str(content)?;
        file.layout.validate()?;
        Ok(file.layout)
    }

    /// Load a configuration from a `.toml` file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if path.extension().and_then(|s| s.to_str()) != Some("toml") {
            return Err(ConfigError::UnsupportedFormat(path.to_path_buf()));
        }

        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Read(path.to_path_buf(), err))?;
        Self::from_toml(&content)
    }

    /// Build a configuration from environment variables, falling back to defaults.
    ///
    /// Reads `COACHMARK_LAYOUT_CONFIG` first, then lets
    /// `COACHMARK_LAYOUT_TOLERANCE` and `COACHMARK_LAYOUT_DIRECTION` override
    /// single values. Invalid values are logged and ignored.
    pub fn from_env_or_default() -> Self {
        let mut config = Self::default();

        if let Ok(path) = env::var("COACHMARK_LAYOUT_CONFIG") {
            match Self::from_file(&path) {
                Ok(file_config) => config = file_config,
                Err(err) => log::warn!("Ignoring layout config {}: {}", path, err),
            }
        }

        if let Ok(value) = env::var("COACHMARK_LAYOUT_TOLERANCE") {
            match value.trim().parse::<f32>() {
                Ok(tolerance) if config.with_tolerance(tolerance).validate().is_ok() => {
                    config.containment_tolerance = tolerance;
                },
                _ => log::warn!("Ignoring invalid COACHMARK_LAYOUT_TOLERANCE: {}", value),
            }
        }

        if let Ok(value) = env::var("COACHMARK_LAYOUT_DIRECTION") {
            match value.parse::<LayoutDirection>() {
                Ok(direction) => config.direction = direction,
                Err(err) => log::warn!("Ignoring COACHMARK_LAYOUT_DIRECTION: {}", err),
            }
        }

        config
    }
}
