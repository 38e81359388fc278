//! Cluster Registry - every cluster the director has generated.

use cover_world::{CoverPoint, CoverPointId, ObstacleId};
use std::collections::HashMap;

use super::CoverCluster;

/// All generated clusters, with reverse indexes by obstacle and point.
///
/// The registry only grows; cover points are never destroyed during play.
#[derive(Debug, Clone, Default)]
pub struct ClusterRegistry {
    clusters: Vec<CoverCluster>,

    /// Index: obstacle -> position in `clusters`.
    by_obstacle: HashMap<ObstacleId, usize>,

    /// Reverse index: point -> owning obstacle.
    by_point: HashMap<CoverPointId, ObstacleId>,
}

impl ClusterRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a cluster. Returns `false` and leaves the registry untouched if
    /// its obstacle is already registered.
    pub fn register(&mut self, cluster: CoverCluster) -> bool {
        if self.by_obstacle.contains_key(&cluster.obstacle) {
            return false;
        }
        for point in cluster.points() {
            self.by_point.insert(point.id, cluster.obstacle);
        }
        self.by_obstacle.insert(cluster.obstacle, self.clusters.len());
        self.clusters.push(cluster);
        true
    }

    /// Get the cluster generated for an obstacle.
    pub fn cluster(&self, obstacle: ObstacleId) -> Option<&CoverCluster> {
        self.by_obstacle.get(&obstacle).map(|&i| &self.clusters[i])
    }

    /// Look up a generated point by id.
    pub fn point(&self, id: CoverPointId) -> Option<&CoverPoint> {
        let owner = self.owner_of(id)?;
        self.cluster(owner)?.points().iter().find(|p| p.id == id)
    }

    /// Which obstacle a point belongs to.
    pub fn owner_of(&self, point: CoverPointId) -> Option<ObstacleId> {
        self.by_point.get(&point).copied()
    }

    pub fn contains_obstacle(&self, obstacle: ObstacleId) -> bool {
        self.by_obstacle.contains_key(&obstacle)
    }

    /// Check if a point was generated by any registered cluster.
    pub fn is_known(&self, point: CoverPointId) -> bool {
        self.by_point.contains_key(&point)
    }

    /// Iterate over clusters in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &CoverCluster> {
        self.clusters.iter()
    }

    pub fn cluster_count(&self) -> usize {
        self.clusters.len()
    }

    /// Total number of generated points, reserved or not.
    pub fn point_count(&self) -> usize {
        self.by_point.len()
    }
}
