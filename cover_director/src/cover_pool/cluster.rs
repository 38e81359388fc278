//! Cover cluster generation - four cover points around one obstacle.

use cover_world::{CoverPoint, GeometryError, Obstacle, ObstacleId, Rotator, Vec3};
use serde::{Deserialize, Serialize};

/// Number of cover points generated for an obstacle with a cover archetype.
pub const POINTS_PER_CLUSTER: usize = 4;

/// One obstacle and the cover points generated around it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CoverCluster {
    pub obstacle: ObstacleId,
    pub origin: Vec3,
    pub rotation: Rotator,
    /// Standoff distance from the obstacle bounds.
    pub range: f32,
    points: Vec<CoverPoint>,
}

impl CoverCluster {
    /// Generate the cluster for `obstacle`.
    ///
    /// Points are laid out in the obstacle's local frame, two on the X axis
    /// and two on the Y axis, each half the obstacle size plus the range away
    /// from the origin. They are then rotated about the origin by the
    /// obstacle's rotation, so placement does not depend on how the obstacle
    /// is turned. Obstacles without a cover archetype yield an empty cluster.
    pub fn generate(obstacle: &Obstacle, default_range: f32) -> Result<Self, GeometryError> {
        let range = obstacle.effective_range(default_range);
        let mut cluster = Self {
            obstacle: obstacle.id,
            origin: obstacle.origin,
            rotation: obstacle.rotation,
            range,
            points: Vec::new(),
        };

        if !obstacle.has_cover() {
            return Ok(cluster);
        }
        obstacle.validate(range)?;

        let origin = obstacle.origin;
        let size = obstacle.bounds.size;
        let extent = obstacle.bounds.extent;

        let mut local = Vec::with_capacity(POINTS_PER_CLUSTER);
        for sign in [-1.0_f32, 1.0] {
            let offset = Vec3::new(sign * (size.x / 2.0 + range), 0.0, 0.0);
            local.push((origin + offset, Vec3::new(range, extent.y, extent.z)));
        }
        for sign in [-1.0_f32, 1.0] {
            let offset = Vec3::new(0.0, sign * (size.y / 2.0 + range), 0.0);
            local.push((origin + offset, Vec3::new(range, extent.x, extent.z)));
        }

        cluster.points = local
            .into_iter()
            .map(|(position, footprint)| {
                let position = obstacle.rotation.rotate_about(&position, &origin);
                CoverPoint::new(obstacle.id, position, origin, footprint)
            })
            .collect();

        Ok(cluster)
    }

    /// The generated points (four, or none without an archetype).
    pub fn points(&self) -> &[CoverPoint] {
        &self.points
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Check whether a point belongs to this cluster.
    pub fn contains(&self, point: &CoverPoint) -> bool {
        self.points.iter().any(|p| p.id == point.id)
    }

    /// The point farthest from `position`, first one on ties.
    ///
    /// With the target's position this is the side of the obstacle facing
    /// away from the target.
    pub fn furthest_from(&self, position: &Vec3) -> Option<&CoverPoint> {
        let mut points = self.points.iter();
        let mut best = points.next()?;
        let mut best_distance = best.distance_to(position);
        for point in points {
            let d = point.distance_to(position);
            if d > best_distance {
                best = point;
                best_distance = d;
            }
        }
        Some(best)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn crate_obstacle() -> Obstacle {
        Obstacle::new("Crate", Vec3::new(1000.0, 0.0, 50.0), Vec3::new(100.0, 60.0, 80.0))
            .with_range(10.0)
    }

    fn assert_near(a: &Vec3, b: &Vec3) {
        assert!((a - b).norm() < 1e-3, "{:?} != {:?}", a, b);
    }

    #[test]
    fn test_generates_four_points() {
        let cluster = CoverCluster::generate(&crate_obstacle(), 10.0).unwrap();
        assert_eq!(cluster.points().len(), POINTS_PER_CLUSTER);
    }

    #[test]
    fn test_point_layout() {
        let obstacle = crate_obstacle();
        let cluster = CoverCluster::generate(&obstacle, 10.0).unwrap();
        let points = cluster.points();

        // -X, +X, -Y, +Y
        assert_near(&points[0].position, &Vec3::new(940.0, 0.0, 50.0));
        assert_near(&points[1].position, &Vec3::new(1060.0, 0.0, 50.0));
        assert_near(&points[2].position, &Vec3::new(1000.0, -40.0, 50.0));
        assert_near(&points[3].position, &Vec3::new(1000.0, 40.0, 50.0));

        assert!(points.iter().all(|p| p.cluster == obstacle.id));
    }

    #[test]
    fn test_footprints() {
        let cluster = CoverCluster::generate(&crate_obstacle(), 10.0).unwrap();
        let points = cluster.points();

        assert_eq!(points[0].footprint, Vec3::new(10.0, 30.0, 40.0));
        assert_eq!(points[3].footprint, Vec3::new(10.0, 50.0, 40.0));
    }

    #[test]
    fn test_footprints_use_extent_not_size() {
        let obstacle = crate_obstacle().with_extent(Vec3::new(20.0, 10.0, 5.0));
        let cluster = CoverCluster::generate(&obstacle, 10.0).unwrap();
        let points = cluster.points();

        // Placement still follows the size.
        assert_near(&points[0].position, &Vec3::new(940.0, 0.0, 50.0));
        assert_near(&points[2].position, &Vec3::new(1000.0, -40.0, 50.0));

        assert_eq!(points[0].footprint, Vec3::new(10.0, 10.0, 5.0));
        assert_eq!(points[1].footprint, Vec3::new(10.0, 10.0, 5.0));
        assert_eq!(points[2].footprint, Vec3::new(10.0, 20.0, 5.0));
        assert_eq!(points[3].footprint, Vec3::new(10.0, 20.0, 5.0));
    }

    #[test]
    fn test_orientation_faces_origin() {
        let cluster = CoverCluster::generate(&crate_obstacle(), 10.0).unwrap();
        let points = cluster.points();

        assert_near(&points[0].orientation, &Vec3::new(1.0, 0.0, 0.0));
        assert_near(&points[3].orientation, &Vec3::new(0.0, -1.0, 0.0));
    }

    #[test]
    fn test_rotation_invariant_in_local_frame() {
        let obstacle = crate_obstacle().with_rotation(Rotator::from_yaw(90.0));
        let cluster = CoverCluster::generate(&obstacle, 10.0).unwrap();
        let points = cluster.points();

        // Local +X now points along world +Y.
        assert_near(&points[1].position, &Vec3::new(1000.0, 60.0, 50.0));
        assert_near(&points[3].position, &Vec3::new(960.0, 0.0, 50.0));

        for point in points {
            let expected = (obstacle.origin - point.position).normalize();
            assert_near(&point.orientation, &expected);
        }
    }

    #[test]
    fn test_default_range_applies() {
        let obstacle = Obstacle::new("Wall", Vec3::zeros(), Vec3::new(20.0, 20.0, 20.0));
        let cluster = CoverCluster::generate(&obstacle, 30.0).unwrap();

        assert_eq!(cluster.range, 30.0);
        assert_near(&cluster.points()[1].position, &Vec3::new(40.0, 0.0, 0.0));
    }

    #[test]
    fn test_zero_range() {
        let obstacle =
            Obstacle::new("Pillar", Vec3::zeros(), Vec3::new(20.0, 20.0, 20.0)).with_range(0.0);
        let cluster = CoverCluster::generate(&obstacle, 10.0).unwrap();
        assert_near(&cluster.points()[1].position, &Vec3::new(10.0, 0.0, 0.0));
    }

    #[test]
    fn test_no_archetype_yields_empty_cluster() {
        let obstacle = crate_obstacle().without_cover();
        let cluster = CoverCluster::generate(&obstacle, 10.0).unwrap();
        assert!(cluster.is_empty());
    }

    #[test]
    fn test_malformed_geometry() {
        let obstacle = crate_obstacle().with_range(-3.0);
        let err = CoverCluster::generate(&obstacle, 10.0).unwrap_err();
        assert_eq!(err, GeometryError::InvalidRange(-3.0));
    }

    #[test]
    fn test_furthest_from() {
        let cluster = CoverCluster::generate(&crate_obstacle(), 10.0).unwrap();

        // Target on the -X side: the +X point is the far side.
        let far = cluster.furthest_from(&Vec3::new(0.0, 0.0, 50.0)).unwrap();
        assert_eq!(far.id, cluster.points()[1].id);
        assert!(cluster.contains(far));
    }
}
