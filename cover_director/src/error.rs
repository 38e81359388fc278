//! Error types raised by the cover director.

use cover_world::{ConfigError, CoverPointId, GeometryError, ObstacleId};
use thiserror::Error;

/// Failures that stop a director operation from being evaluated.
///
/// Running out of candidates is not one of them: that outcome is reported as
/// [`crate::CoverAssignment::Fallback`].
#[derive(Debug, Error)]
pub enum CoverError {
    #[error("no target pose is available")]
    TargetUnavailable,

    #[error("target pose is not finite")]
    InvalidTargetPose,

    #[error("invalid request: {0}")]
    InvalidRequest(&'static str),

    #[error("cover point {0} does not belong to any registered cluster")]
    UnknownCoverPoint(CoverPointId),

    #[error("obstacle {0} is not registered")]
    UnknownObstacle(ObstacleId),

    #[error("obstacle {id} has malformed geometry: {source}")]
    MalformedObstacle {
        id: ObstacleId,
        #[source]
        source: GeometryError,
    },

    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, CoverError>;
