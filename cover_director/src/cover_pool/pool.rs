//! Cover Pool - the set of cover points nobody holds.

use cover_world::{CoverPoint, CoverPointId, Vec3};
use std::collections::HashSet;

/// The availability index.
///
/// A point is available exactly when it is a member. Points keep their
/// insertion order, released points go to the back, and inserting a point
/// that is already present does nothing.
#[derive(Debug, Clone, Default)]
pub struct CoverPool {
    /// Available points in iteration order.
    points: Vec<CoverPoint>,

    /// Index: ids of the points above.
    members: HashSet<CoverPointId>,
}

impl CoverPool {
    /// Create a new empty pool.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a pool holding `points`, skipping duplicates.
    pub fn from_points(points: impl IntoIterator<Item = CoverPoint>) -> Self {
        let mut pool = Self::new();
        for point in points {
            pool.release(point);
        }
        pool
    }

    /// Make a point available again.
    ///
    /// Returns `false` if it was already in the pool.
    pub fn release(&mut self, point: CoverPoint) -> bool {
        if !self.members.insert(point.id) {
            return false;
        }
        self.points.push(point);
        true
    }

    /// Take a point out of the pool.
    ///
    /// Returns `None` if it was not available.
    pub fn reserve(&mut self, id: CoverPointId) -> Option<CoverPoint> {
        if !self.members.remove(&id) {
            return None;
        }
        let index = self.points.iter().position(|p| p.id == id)?;
        Some(self.points.remove(index))
    }

    /// Check if a point is available.
    pub fn contains(&self, id: CoverPointId) -> bool {
        self.members.contains(&id)
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Iterate over available points in pool order.
    pub fn iter(&self) -> impl Iterator<Item = &CoverPoint> {
        self.points.iter()
    }

    /// The available point nearest to `position`, first one on ties.
    pub fn closest_to(&self, position: &Vec3) -> Option<&CoverPoint> {
        let mut points = self.points.iter();
        let mut best = points.next()?;
        let mut best_distance = best.distance_to(position);
        for point in points {
            let d = point.distance_to(position);
            if d < best_distance {
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
    use cover_world::ObstacleId;

    fn point_at(x: f32) -> CoverPoint {
        CoverPoint::new(ObstacleId::nil(), Vec3::new(x, 0.0, 0.0), Vec3::zeros(), Vec3::zeros())
    }

    #[test]
    fn test_release_and_reserve() {
        let mut pool = CoverPool::new();
        let point = point_at(10.0);
        let id = point.id;

        assert!(pool.release(point));
        assert!(pool.contains(id));
        assert_eq!(pool.len(), 1);

        let reserved = pool.reserve(id);
        assert_eq!(reserved.map(|p| p.id), Some(id));
        assert!(!pool.contains(id));
        assert!(pool.is_empty());
    }

    #[test]
    fn test_release_is_idempotent() {
        let point = point_at(10.0);
        let mut pool = CoverPool::from_points([point.clone()]);

        assert!(!pool.release(point.clone()));
        assert!(!pool.release(point));
        assert_eq!(pool.len(), 1);
    }

    #[test]
    fn test_reserve_missing_point() {
        let mut pool = CoverPool::from_points([point_at(1.0)]);
        assert!(pool.reserve(CoverPointId::new()).is_none());
        assert_eq!(pool.len(), 1);
    }

    #[test]
    fn test_released_points_go_to_the_back() {
        let a = point_at(1.0);
        let b = point_at(2.0);
        let mut pool = CoverPool::from_points([a.clone(), b.clone()]);

        pool.reserve(a.id);
        pool.release(a.clone());

        let order: Vec<_> = pool.iter().map(|p| p.id).collect();
        assert_eq!(order, vec![b.id, a.id]);
    }

    #[test]
    fn test_closest_to() {
        let pool = CoverPool::from_points([point_at(100.0), point_at(-20.0), point_at(50.0)]);
        let closest = pool.closest_to(&Vec3::zeros()).unwrap();
        assert_eq!(closest.position.x, -20.0);
    }

    #[test]
    fn test_closest_to_tie_keeps_first() {
        let first = point_at(10.0);
        let pool = CoverPool::from_points([first.clone(), point_at(-10.0)]);
        assert_eq!(pool.closest_to(&Vec3::zeros()).map(|p| p.id), Some(first.id));
    }

    #[test]
    fn test_closest_to_empty_pool() {
        assert!(CoverPool::new().closest_to(&Vec3::zeros()).is_none());
    }
}
