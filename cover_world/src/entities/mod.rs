//! Entity definitions: obstacles and the cover points generated around them.

mod cover_point;
mod obstacle;

pub use cover_point::*;
pub use obstacle::*;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for obstacles (one obstacle = one cover cluster).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ObstacleId(pub Uuid);

impl ObstacleId {
    /// Create a new random obstacle ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Create a nil/empty obstacle ID (useful for defaults).
    pub fn nil() -> Self {
        Self(Uuid::nil())
    }
}

impl Default for ObstacleId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for ObstacleId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Unique identifier for cover points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CoverPointId(pub Uuid);

impl CoverPointId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for CoverPointId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for CoverPointId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
