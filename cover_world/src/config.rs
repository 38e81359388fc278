//! Tuning values for cover classification, loadable from TOML.

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Errors raised while loading or validating a [`CoverConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("{field} must be finite and non-negative, got {value}")]
    InvalidValue { field: &'static str, value: f32 },

    #[error("distance band is empty: min {min} must be below max {max}")]
    EmptyBand { min: f32, max: f32 },
}

/// Configuration for cover classification and cluster generation.
///
/// Distances are in world units.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CoverConfig {
    /// Lower bound (exclusive) of the distance band around the target.
    pub min_distance_from_target: f32,

    /// Upper bound (exclusive) of the distance band around the target.
    pub max_distance_from_target: f32,

    /// How far from the requester a Normal cover point may be (inclusive).
    pub normal_search_radius: f32,

    /// Standoff used for obstacles that do not set their own range.
    pub default_cover_range: f32,
}

impl Default for CoverConfig {
    fn default() -> Self {
        Self {
            min_distance_from_target: 400.0,
            max_distance_from_target: 1500.0,
            normal_search_radius: 800.0,
            default_cover_range: 10.0,
        }
    }
}

impl CoverConfig {
    /// Parse and validate a TOML document. Missing keys take their defaults.
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        let config: CoverConfig = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let source = std::fs::read_to_string(path)?;
        Self::from_toml_str(&source)
    }

    /// Set the distance band around the target.
    pub fn with_band(mut self, min: f32, max: f32) -> Self {
        self.min_distance_from_target = min;
        self.max_distance_from_target = max;
        self
    }

    /// Set the Normal search radius.
    pub fn with_normal_radius(mut self, radius: f32) -> Self {
        self.normal_search_radius = radius;
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let fields = [
            ("min_distance_from_target", self.min_distance_from_target),
            ("max_distance_from_target", self.max_distance_from_target),
            ("normal_search_radius", self.normal_search_radius),
            ("default_cover_range", self.default_cover_range),
        ];
        for (field, value) in fields {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::InvalidValue { field, value });
            }
        }
        if self.min_distance_from_target >= self.max_distance_from_target {
            return Err(ConfigError::EmptyBand {
                min: self.min_distance_from_target,
                max: self.max_distance_from_target,
            });
        }
        Ok(())
    }

    /// Whether `distance` lies strictly inside the target band.
    pub fn in_band(&self, distance: f32) -> bool {
        distance > self.min_distance_from_target && distance < self.max_distance_from_target
    }
}
