//! Cover point definitions.

use serde::{Deserialize, Serialize};

use super::{CoverPointId, ObstacleId};
use crate::geometry::{direction, distance, Vec3};

/// A single reservable standing position next to an obstacle.
///
/// Equality and hashing use the id only: two values with the same id are the
/// same cover point, whatever else they carry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CoverPoint {
    pub id: CoverPointId,
    pub position: Vec3,
    /// Unit vector facing the cluster origin.
    pub orientation: Vec3,
    /// The obstacle this point belongs to.
    pub cluster: ObstacleId,
    /// Half extent of the protected box around the point.
    pub footprint: Vec3,
}

impl CoverPoint {
    /// Create a cover point at `position` facing `cluster_origin`.
    pub fn new(cluster: ObstacleId, position: Vec3, cluster_origin: Vec3, footprint: Vec3) -> Self {
        Self {
            id: CoverPointId::new(),
            position,
            orientation: direction(&position, &cluster_origin),
            cluster,
            footprint,
        }
    }

    /// Distance from this point to `position`.
    pub fn distance_to(&self, position: &Vec3) -> f32 {
        distance(&self.position, position)
    }
}

impl PartialEq for CoverPoint {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for CoverPoint {}

impl std::hash::Hash for CoverPoint {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}
