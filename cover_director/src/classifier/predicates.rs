//! Geometric predicates used by the classifier.
//!
//! Each takes plain positions so they can be checked in isolation.

use cover_world::{direction, distance, Vec3};

/// `point` lies in the half-space behind `origin` as seen along `forward`.
pub fn is_behind(origin: &Vec3, forward: &Vec3, point: &Vec3) -> bool {
    forward.dot(&direction(origin, point)) < 0.0
}

/// `point` lies in the half-space in front of `origin` as seen along `forward`.
pub fn is_ahead(origin: &Vec3, forward: &Vec3, point: &Vec3) -> bool {
    forward.dot(&direction(origin, point)) > 0.0
}

/// `point` is at most `radius` away from `origin`.
pub fn within_radius(origin: &Vec3, point: &Vec3, radius: f32) -> bool {
    distance(origin, point) <= radius
}

/// `point` sees `target` from the same side as `requester` does, i.e. the
/// target does not stand between them.
pub fn short_of_target(requester: &Vec3, target: &Vec3, point: &Vec3) -> bool {
    direction(point, target).dot(&direction(requester, target)) > 0.0
}
