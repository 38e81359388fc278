//! Cover Director - the request protocol over the pool, classifier and selector.
//!
//! A request runs in this order:
//! 1. **Release**: the point the agent holds (if any) goes back into the pool
//! 2. **Fallback**: with nothing held, the nearest pool point stands in (unreserved)
//! 3. **Classify**: filter the pool for the requested intent
//! 4. **Select**: tie-break among the candidates
//! 5. **Reserve**: remove the winner from the pool and hand it out
//!
//! With no candidates the fallback is returned and the pool ends up exactly
//! as it was before the request: a held point stays held, and the nearest
//! point stand-in is not reserved.

use cover_world::{
    is_finite, CoverConfig, CoverIntent, CoverPoint, CoverPointId, ObstacleId, TargetPose, Vec3,
    WorldQuery,
};
use serde::{Deserialize, Serialize};

use crate::classifier::{ClassificationContext, Classifier};
use crate::cover_pool::{ClusterRegistry, CoverCluster, CoverPool};
use crate::error::{CoverError, Result};
use crate::selector::select_for_intent;
use crate::snapshot::{ClusterSnapshot, CoverPointStatus, DirectorSnapshot};

/// An agent asking for cover.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CoverRequest {
    pub requester_position: Vec3,
    pub requester_forward: Vec3,
    /// The point the agent currently occupies.
    pub held_point: Option<CoverPoint>,
    pub intent: CoverIntent,
}

impl CoverRequest {
    /// Create a request from an agent that holds no cover yet.
    pub fn new(requester_position: Vec3, requester_forward: Vec3, intent: CoverIntent) -> Self {
        Self {
            requester_position,
            requester_forward,
            held_point: None,
            intent,
        }
    }

    /// Set the point the agent currently holds.
    pub fn holding(mut self, point: Option<CoverPoint>) -> Self {
        self.held_point = point;
        self
    }
}

/// Result of a cover request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum CoverAssignment {
    /// A point was taken out of the pool for this agent.
    Reserved(CoverPoint),

    /// No candidate qualified. Carries the held point (still held), else the
    /// nearest pool point (not reserved), else nothing. The pool is unchanged.
    Fallback(Option<CoverPoint>),
}

impl CoverAssignment {
    /// The point the agent should occupy, if any.
    pub fn point(&self) -> Option<&CoverPoint> {
        match self {
            CoverAssignment::Reserved(point) => Some(point),
            CoverAssignment::Fallback(point) => point.as_ref(),
        }
    }

    pub fn into_point(self) -> Option<CoverPoint> {
        match self {
            CoverAssignment::Reserved(point) => Some(point),
            CoverAssignment::Fallback(point) => point,
        }
    }

    pub fn is_reserved(&self) -> bool {
        matches!(self, CoverAssignment::Reserved(_))
    }
}

/// Owns every cover cluster and hands out cover points exclusively.
///
/// Requests take `&mut self`, so they are processed one at a time and the
/// first requester to ask for a point gets it.
#[derive(Debug, Clone)]
pub struct CoverDirector {
    classifier: Classifier,
    registry: ClusterRegistry,
    pool: CoverPool,
}

impl CoverDirector {
    /// Create a director with no clusters.
    pub fn new(config: CoverConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            classifier: Classifier::new(config),
            registry: ClusterRegistry::new(),
            pool: CoverPool::new(),
        })
    }

    /// Create a director and generate clusters for every obstacle in `world`.
    pub fn from_world(world: &impl WorldQuery, config: CoverConfig) -> Result<Self> {
        let mut director = Self::new(config)?;
        director.rescan(world)?;
        Ok(director)
    }

    /// Generate clusters for obstacles not seen before and add their points
    /// to the pool. Returns how many clusters were added.
    ///
    /// Nothing is registered if any new obstacle has malformed geometry.
    pub fn rescan(&mut self, world: &impl WorldQuery) -> Result<usize> {
        let default_range = self.config().default_cover_range;

        let mut clusters = Vec::new();
        for obstacle in world.obstacles() {
            if self.registry.contains_obstacle(obstacle.id) {
                continue;
            }
            if !obstacle.has_cover() {
                tracing::debug!(
                    "Obstacle {} has no cover archetype, no points generated",
                    obstacle.name
                );
            }
            let cluster = CoverCluster::generate(obstacle, default_range).map_err(|source| {
                tracing::warn!("Obstacle {} rejected: {}", obstacle.name, source);
                CoverError::MalformedObstacle {
                    id: obstacle.id,
                    source,
                }
            })?;
            clusters.push(cluster);
        }

        let mut added = 0;
        for cluster in clusters {
            let points = cluster.points().to_vec();
            if self.registry.register(cluster) {
                added += 1;
                for point in points {
                    self.pool.release(point);
                }
            }
        }

        tracing::debug!(
            "Registered {} clusters, {} cover points available",
            added,
            self.pool.len()
        );
        Ok(added)
    }

    pub fn config(&self) -> &CoverConfig {
        self.classifier.config()
    }

    /// The unreserved points.
    pub fn pool(&self) -> &CoverPool {
        &self.pool
    }

    pub fn registry(&self) -> &ClusterRegistry {
        &self.registry
    }

    pub fn is_available(&self, point: CoverPointId) -> bool {
        self.pool.contains(point)
    }

    /// Assign cover to an agent.
    ///
    /// Errors are raised before the pool is touched, so a failed request
    /// leaves every reservation as it was.
    pub fn request_cover(
        &mut self,
        world: &impl WorldQuery,
        request: CoverRequest,
    ) -> Result<CoverAssignment> {
        let CoverRequest {
            requester_position: position,
            requester_forward: forward,
            held_point,
            intent,
        } = request;

        Self::check_requester(&position, &forward)?;
        let held = match held_point {
            Some(point) => Some(self.known_point(point.id)?),
            None => None,
        };
        let target = Self::target(world)?;

        let mut reinserted = None;
        let fallback = match held {
            Some(point) => {
                if self.pool.release(point.clone()) {
                    reinserted = Some(point.id);
                }
                Some(point)
            }
            None => self.pool.closest_to(&position).cloned(),
        };

        let ctx = ClassificationContext::new(target, position, forward);
        let winner = {
            let candidates = self.classifier.candidates(&self.pool, intent, &ctx);
            tracing::trace!("{} {} cover candidates", candidates.len(), intent);
            select_for_intent(&candidates, &position, intent).map(|p| p.id)
        };

        let assignment = match winner.and_then(|id| self.pool.reserve(id)) {
            Some(point) => {
                tracing::debug!(
                    "Reserved {} cover {} at {:?} ({} left)",
                    intent,
                    point.id,
                    point.position,
                    self.pool.len()
                );
                CoverAssignment::Reserved(point)
            }
            None => {
                // The agent stays where it is, so its point goes back out.
                if let Some(id) = reinserted {
                    self.pool.reserve(id);
                }
                tracing::debug!(
                    "No {} cover qualified, falling back to {:?}",
                    intent,
                    fallback.as_ref().map(|p| p.id)
                );
                CoverAssignment::Fallback(fallback)
            }
        };
        Ok(assignment)
    }

    /// Put a held point back into the pool without asking for a new one.
    ///
    /// Returns `false` if it was already available.
    pub fn release(&mut self, point: &CoverPoint) -> Result<bool> {
        let point = self.known_point(point.id)?;
        let id = point.id;
        let released = self.pool.release(point);
        if released {
            tracing::debug!("Released cover {} ({} available)", id, self.pool.len());
        }
        Ok(released)
    }

    /// The available point nearest to `position`. Reserves nothing.
    pub fn closest_cover(&self, position: &Vec3) -> Option<&CoverPoint> {
        self.pool.closest_to(position)
    }

    /// Current candidates for `intent`, without reserving anything.
    pub fn candidates_for(
        &self,
        world: &impl WorldQuery,
        intent: CoverIntent,
        position: Vec3,
        forward: Vec3,
    ) -> Result<Vec<CoverPoint>> {
        Self::check_requester(&position, &forward)?;
        let target = Self::target(world)?;
        let ctx = ClassificationContext::new(target, position, forward);
        Ok(self
            .classifier
            .candidates(&self.pool, intent, &ctx)
            .into_iter()
            .cloned()
            .collect())
    }

    /// Available points behind the target.
    pub fn flanking_candidates(&self, world: &impl WorldQuery) -> Result<Vec<CoverPoint>> {
        self.candidates_for(world, CoverIntent::Flanking, Vec3::zeros(), Vec3::zeros())
    }

    /// Available points within the Normal radius of `position`.
    pub fn normal_candidates(
        &self,
        world: &impl WorldQuery,
        position: Vec3,
    ) -> Result<Vec<CoverPoint>> {
        self.candidates_for(world, CoverIntent::Normal, position, Vec3::zeros())
    }

    /// Available points behind an agent at `position` facing `forward`.
    pub fn retreating_candidates(
        &self,
        world: &impl WorldQuery,
        position: Vec3,
        forward: Vec3,
    ) -> Result<Vec<CoverPoint>> {
        self.candidates_for(world, CoverIntent::Retreating, position, forward)
    }

    /// Available points ahead of an agent and short of the target.
    pub fn advancing_candidates(
        &self,
        world: &impl WorldQuery,
        position: Vec3,
        forward: Vec3,
    ) -> Result<Vec<CoverPoint>> {
        self.candidates_for(world, CoverIntent::Advancing, position, forward)
    }

    /// Distance from `position` to the target.
    pub fn distance_to_target(&self, world: &impl WorldQuery, position: &Vec3) -> Result<f32> {
        let target = Self::target(world)?;
        Ok((target.position - position).norm())
    }

    /// The point of an obstacle's cluster farthest from the target, which is
    /// the side shielded from it. Reserved points are included.
    pub fn furthest_cover_from_target(
        &self,
        world: &impl WorldQuery,
        obstacle: ObstacleId,
    ) -> Result<Option<&CoverPoint>> {
        let cluster = self
            .registry
            .cluster(obstacle)
            .ok_or(CoverError::UnknownObstacle(obstacle))?;
        let target = Self::target(world)?;
        Ok(cluster.furthest_from(&target.position))
    }

    /// Every cluster with per-point availability.
    pub fn snapshot(&self) -> DirectorSnapshot {
        let clusters: Vec<_> = self
            .registry
            .iter()
            .map(|cluster| ClusterSnapshot {
                obstacle: cluster.obstacle,
                origin: cluster.origin,
                range: cluster.range,
                points: cluster
                    .points()
                    .iter()
                    .map(|point| CoverPointStatus {
                        point: point.clone(),
                        available: self.pool.contains(point.id),
                    })
                    .collect(),
            })
            .collect();

        let available = self.pool.len();
        DirectorSnapshot {
            clusters,
            available,
            reserved: self.registry.point_count().saturating_sub(available),
        }
    }

    /// The registered copy of a point.
    fn known_point(&self, id: CoverPointId) -> Result<CoverPoint> {
        self.registry
            .point(id)
            .cloned()
            .ok_or(CoverError::UnknownCoverPoint(id))
    }

    fn check_requester(position: &Vec3, forward: &Vec3) -> Result<()> {
        if !is_finite(position) || !is_finite(forward) {
            return Err(CoverError::InvalidRequest(
                "requester position or forward is not finite",
            ));
        }
        Ok(())
    }

    fn target(world: &impl WorldQuery) -> Result<TargetPose> {
        let target = world.target_pose().ok_or(CoverError::TargetUnavailable)?;
        if !target.is_finite() {
            return Err(CoverError::InvalidTargetPose);
        }
        Ok(target)
    }
}
