//! Vector helpers and obstacle rotation.

use nalgebra::{UnitQuaternion, Vector3};
use serde::{Deserialize, Serialize};

/// World-space vector in game units.
pub type Vec3 = Vector3<f32>;

/// Euclidean distance between two points.
pub fn distance(a: &Vec3, b: &Vec3) -> f32 {
    (a - b).norm()
}

/// Unit vector pointing from `from` towards `to`.
///
/// Coincident points yield the zero vector, so any dot product against the
/// result is `0.0` and fails strict sign tests.
pub fn direction(from: &Vec3, to: &Vec3) -> Vec3 {
    (to - from).try_normalize(f32::EPSILON).unwrap_or_else(Vec3::zeros)
}

/// Check that every component is finite (no NaN or infinity).
pub fn is_finite(v: &Vec3) -> bool {
    v.iter().all(|c| c.is_finite())
}

/// Obstacle rotation in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct Rotator {
    pub pitch: f32,
    pub yaw: f32,
    pub roll: f32,
}

impl Rotator {
    /// No rotation.
    pub const IDENTITY: Rotator = Rotator {
        pitch: 0.0,
        yaw: 0.0,
        roll: 0.0,
    };

    /// Create a rotation from pitch, yaw and roll in degrees.
    pub fn new(pitch: f32, yaw: f32, roll: f32) -> Self {
        Self { pitch, yaw, roll }
    }

    /// Rotation around the vertical axis only.
    pub fn from_yaw(yaw: f32) -> Self {
        Self {
            yaw,
            ..Self::IDENTITY
        }
    }

    pub fn is_identity(&self) -> bool {
        *self == Self::IDENTITY
    }

    pub fn is_finite(&self) -> bool {
        self.pitch.is_finite() && self.yaw.is_finite() && self.roll.is_finite()
    }

    /// Convert to a quaternion.
    ///
    /// Engine convention with Z up: positive yaw turns +X towards +Y,
    /// positive pitch lifts +X towards +Z, positive roll tips +Y towards -Z.
    /// Roll is applied first, then pitch, then yaw.
    pub fn to_quaternion(&self) -> UnitQuaternion<f32> {
        UnitQuaternion::from_euler_angles(
            -self.roll.to_radians(),
            -self.pitch.to_radians(),
            self.yaw.to_radians(),
        )
    }

    /// Rotate `point` around `pivot`.
    pub fn rotate_about(&self, point: &Vec3, pivot: &Vec3) -> Vec3 {
        if self.is_identity() {
            return *point;
        }
        pivot + self.to_quaternion() * (point - pivot)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distance() {
        let a = Vec3::new(0.0, 0.0, 0.0);
        let b = Vec3::new(3.0, 4.0, 0.0);
        assert!((distance(&a, &b) - 5.0).abs() < 1e-5);
    }

    #[test]
    fn test_direction_is_unit() {
        let dir = direction(&Vec3::zeros(), &Vec3::new(10.0, 0.0, 0.0));
        assert!((dir - Vec3::x()).norm() < 1e-6);
    }

    #[test]
    fn test_direction_of_coincident_points_is_zero() {
        let p = Vec3::new(5.0, 5.0, 5.0);
        assert_eq!(direction(&p, &p), Vec3::zeros());
    }

    #[test]
    fn test_yaw_rotation_about_pivot() {
        let pivot = Vec3::new(100.0, 0.0, 0.0);
        let point = Vec3::new(110.0, 0.0, 0.0);

        let rotated = Rotator::from_yaw(90.0).rotate_about(&point, &pivot);

        assert!((rotated - Vec3::new(100.0, 10.0, 0.0)).norm() < 1e-3);
    }

    #[test]
    fn test_pitch_lifts_forward_axis() {
        let point = Vec3::new(10.0, 0.0, 0.0);

        let rotated = Rotator::new(90.0, 0.0, 0.0).rotate_about(&point, &Vec3::zeros());

        assert!((rotated - Vec3::new(0.0, 0.0, 10.0)).norm() < 1e-3);
    }

    #[test]
    fn test_roll_tips_right_axis_down() {
        let point = Vec3::new(0.0, 10.0, 0.0);

        let rotated = Rotator::new(0.0, 0.0, 90.0).rotate_about(&point, &Vec3::zeros());

        assert!((rotated - Vec3::new(0.0, 0.0, -10.0)).norm() < 1e-3);
    }

    #[test]
    fn test_roll_then_pitch_then_yaw() {
        // Roll leaves +X alone, pitch lifts it to +Z, yaw leaves +Z alone.
        let point = Vec3::new(10.0, 0.0, 0.0);

        let rotated = Rotator::new(90.0, 90.0, 90.0).rotate_about(&point, &Vec3::zeros());

        assert!((rotated - Vec3::new(0.0, 0.0, 10.0)).norm() < 1e-3);
    }

    #[test]
    fn test_identity_rotation_is_noop() {
        let point = Vec3::new(1.0, 2.0, 3.0);
        assert_eq!(Rotator::IDENTITY.rotate_about(&point, &Vec3::zeros()), point);
    }

    #[test]
    fn test_is_finite() {
        assert!(is_finite(&Vec3::new(1.0, 2.0, 3.0)));
        assert!(!is_finite(&Vec3::new(f32::NAN, 0.0, 0.0)));
        assert!(!Rotator::new(0.0, f32::INFINITY, 0.0).is_finite());
    }
}
