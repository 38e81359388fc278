//! Classifier - filters the pool down to the cover points usable for an intent.
//!
//! Every intent shares the same validity gate:
//! 1. **Gate**: distance to the target strictly between the configured bounds
//!
//! and then adds one test of its own:
//! - **Flanking**: behind the target, relative to where the target faces
//! - **Normal**: within the search radius of the requester
//! - **Retreating**: behind the requester
//! - **Advancing**: ahead of the requester and not past the target
//!
//! Candidates are recomputed on every call from the current pool contents.

mod predicates;

pub use predicates::*;

use cover_world::{CoverConfig, CoverIntent, CoverPoint, TargetPose, Vec3};
use serde::{Deserialize, Serialize};

use crate::cover_pool::CoverPool;

/// Everything a classification needs to know about the request.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ClassificationContext {
    pub target: TargetPose,
    pub requester_position: Vec3,
    pub requester_forward: Vec3,
}

impl ClassificationContext {
    pub fn new(target: TargetPose, requester_position: Vec3, requester_forward: Vec3) -> Self {
        Self {
            target,
            requester_position,
            requester_forward,
        }
    }
}

/// Applies the validity gate and the per-intent predicates.
#[derive(Debug, Clone, Default)]
pub struct Classifier {
    config: CoverConfig,
}

impl Classifier {
    /// Create a classifier with the given configuration.
    pub fn new(config: CoverConfig) -> Self {
        Self { config }
    }

    /// Create a classifier with default configuration.
    pub fn with_defaults() -> Self {
        Self::new(CoverConfig::default())
    }

    pub fn config(&self) -> &CoverConfig {
        &self.config
    }

    /// Whether the point lies inside the distance band around the target.
    pub fn passes_gate(&self, point: &CoverPoint, target: &TargetPose) -> bool {
        self.config.in_band(point.distance_to(&target.position))
    }

    /// Whether `point` is a candidate for `intent`.
    pub fn qualifies(
        &self,
        intent: CoverIntent,
        point: &CoverPoint,
        ctx: &ClassificationContext,
    ) -> bool {
        if !self.passes_gate(point, &ctx.target) {
            return false;
        }

        let position = &point.position;
        match intent {
            CoverIntent::Flanking => {
                is_behind(&ctx.target.position, &ctx.target.forward, position)
            }
            CoverIntent::Normal => within_radius(
                &ctx.requester_position,
                position,
                self.config.normal_search_radius,
            ),
            CoverIntent::Retreating => {
                is_behind(&ctx.requester_position, &ctx.requester_forward, position)
            }
            CoverIntent::Advancing => {
                is_ahead(&ctx.requester_position, &ctx.requester_forward, position)
                    && short_of_target(&ctx.requester_position, &ctx.target.position, position)
            }
        }
    }

    /// All pool points that qualify for `intent`, in pool order.
    pub fn candidates<'a>(
        &self,
        pool: &'a CoverPool,
        intent: CoverIntent,
        ctx: &ClassificationContext,
    ) -> Vec<&'a CoverPoint> {
        pool.iter()
            .filter(|point| self.qualifies(intent, point, ctx))
            .collect()
    }
}
