//! Read-only view of the director for debugging and visualisation.

use cover_world::{CoverPoint, ObstacleId, Vec3};
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// One cover point and whether it can currently be handed out.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CoverPointStatus {
    pub point: CoverPoint,
    pub available: bool,
}

/// One cluster as drawn by a debug overlay.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClusterSnapshot {
    pub obstacle: ObstacleId,
    pub origin: Vec3,
    pub range: f32,
    pub points: Vec<CoverPointStatus>,
}

/// Every cluster with per-point availability.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DirectorSnapshot {
    pub clusters: Vec<ClusterSnapshot>,
    pub available: usize,
    pub reserved: usize,
}

impl DirectorSnapshot {
    /// Serialize as pretty-printed JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Points currently held by some agent.
    pub fn reserved_points(&self) -> impl Iterator<Item = &CoverPoint> {
        self.clusters
            .iter()
            .flat_map(|c| c.points.iter())
            .filter(|s| !s.available)
            .map(|s| &s.point)
    }
}
