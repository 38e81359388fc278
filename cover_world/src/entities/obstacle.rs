//! Obstacle definitions.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::ObstacleId;
use crate::geometry::{is_finite, Rotator, Vec3};

/// Archetype name given to obstacles created with [`Obstacle::new`].
pub const DEFAULT_COVER_ARCHETYPE: &str = "cover";

/// Axis-aligned bounds of an obstacle measured in its local frame.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    /// Full edge lengths.
    pub size: Vec3,
    /// Half edge lengths.
    pub extent: Vec3,
}

impl Bounds {
    /// Bounds from full edge lengths; the extent is half the size.
    pub fn from_size(size: Vec3) -> Self {
        Self {
            size,
            extent: size / 2.0,
        }
    }
}

/// Problems with obstacle geometry that prevent cluster generation.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GeometryError {
    #[error("obstacle origin or rotation is not finite")]
    NonFiniteTransform,

    #[error("obstacle bounds are not finite")]
    NonFiniteBounds,

    #[error("obstacle bounds have a negative component: {0:?}")]
    NegativeBounds(Vec3),

    #[error("cover range must be finite and non-negative, got {0}")]
    InvalidRange(f32),
}

/// An obstacle in the world that cover points are generated around.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Obstacle {
    pub id: ObstacleId,
    pub name: String,
    pub origin: Vec3,
    pub rotation: Rotator,
    pub bounds: Bounds,

    /// How far each cover point stands off the bounds.
    /// `None` falls back to the configured default range.
    pub cover_range: Option<f32>,

    /// Which cover point template to spawn. Obstacles without one produce no
    /// cover points.
    pub cover_archetype: Option<String>,
}

impl Obstacle {
    /// Create an unrotated obstacle with the default cover archetype.
    pub fn new(name: impl Into<String>, origin: Vec3, size: Vec3) -> Self {
        Self {
            id: ObstacleId::new(),
            name: name.into(),
            origin,
            rotation: Rotator::IDENTITY,
            bounds: Bounds::from_size(size),
            cover_range: None,
            cover_archetype: Some(DEFAULT_COVER_ARCHETYPE.to_string()),
        }
    }

    /// Set the rotation.
    pub fn with_rotation(mut self, rotation: Rotator) -> Self {
        self.rotation = rotation;
        self
    }

    /// Set the cover range.
    pub fn with_range(mut self, range: f32) -> Self {
        self.cover_range = Some(range);
        self
    }

    /// Override the extent independently of the size.
    pub fn with_extent(mut self, extent: Vec3) -> Self {
        self.bounds.extent = extent;
        self
    }

    /// Remove the cover archetype so no points are generated.
    pub fn without_cover(mut self) -> Self {
        self.cover_archetype = None;
        self
    }

    /// Whether this obstacle is configured to spawn cover points.
    pub fn has_cover(&self) -> bool {
        self.cover_archetype.is_some()
    }

    /// Range to use for this obstacle, given the configured default.
    pub fn effective_range(&self, default_range: f32) -> f32 {
        self.cover_range.unwrap_or(default_range)
    }

    /// Check the geometry needed to place cover points.
    pub fn validate(&self, range: f32) -> Result<(), GeometryError> {
        if !is_finite(&self.origin) || !self.rotation.is_finite() {
            return Err(GeometryError::NonFiniteTransform);
        }
        if !is_finite(&self.bounds.size) || !is_finite(&self.bounds.extent) {
            return Err(GeometryError::NonFiniteBounds);
        }
        for v in [self.bounds.size, self.bounds.extent] {
            if v.iter().any(|c| *c < 0.0) {
                return Err(GeometryError::NegativeBounds(v));
            }
        }
        if !range.is_finite() || range < 0.0 {
            return Err(GeometryError::InvalidRange(range));
        }
        Ok(())
    }
}
