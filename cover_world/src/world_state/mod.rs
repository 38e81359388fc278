//! World state as seen by the cover director: the target pose and the obstacles.

use serde::{Deserialize, Serialize};

use crate::entities::{Obstacle, ObstacleId};
use crate::geometry::{is_finite, Vec3};

/// Where the target (the player) stands and which way it faces.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TargetPose {
    pub position: Vec3,
    pub forward: Vec3,
}

impl TargetPose {
    pub fn new(position: Vec3, forward: Vec3) -> Self {
        Self { position, forward }
    }

    pub fn is_finite(&self) -> bool {
        is_finite(&self.position) && is_finite(&self.forward)
    }
}

/// Read access to the live world.
///
/// The director polls `target_pose` on every request and reads `obstacles`
/// only when building or rescanning its clusters.
pub trait WorldQuery {
    /// Current target pose, or `None` when no target can be resolved.
    fn target_pose(&self) -> Option<TargetPose>;

    /// All obstacles in the world, in a stable order.
    fn obstacles(&self) -> &[Obstacle];
}

/// A plain in-memory world.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct WorldState {
    /// Current target pose.
    pub target: Option<TargetPose>,

    /// Obstacles in spawn order.
    pub obstacles: Vec<Obstacle>,
}

impl WorldState {
    /// Create a new empty world state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a world with the target at `position` facing `forward`.
    pub fn with_target(position: Vec3, forward: Vec3) -> Self {
        Self {
            target: Some(TargetPose::new(position, forward)),
            obstacles: Vec::new(),
        }
    }

    /// Move the target.
    pub fn set_target(&mut self, position: Vec3, forward: Vec3) {
        self.target = Some(TargetPose::new(position, forward));
    }

    /// Forget the target.
    pub fn clear_target(&mut self) {
        self.target = None;
    }

    /// Add an obstacle to the world.
    pub fn add_obstacle(&mut self, obstacle: Obstacle) -> ObstacleId {
        let id = obstacle.id;
        self.obstacles.push(obstacle);
        id
    }

    /// Get obstacle by ID.
    pub fn get_obstacle(&self, id: ObstacleId) -> Option<&Obstacle> {
        self.obstacles.iter().find(|o| o.id == id)
    }
}

impl WorldQuery for WorldState {
    fn target_pose(&self) -> Option<TargetPose> {
        self.target
    }

    fn obstacles(&self) -> &[Obstacle] {
        &self.obstacles
    }
}
