//! World-space position type and the plane a grid is laid over.
//!
//! `Vec3` uses `f32` like the rest of the workspace.  The ground plane is
//! `x`/`z`; `y` is height and is ignored by movement arrival checks.

use std::ops::{Add, Mul, Sub};

/// A world-space position stored as single-precision floats.
#[derive(Copy, Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vec3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Vec3 {
    pub const ZERO: Vec3 = Vec3 { x: 0.0, y: 0.0, z: 0.0 };

    #[inline]
    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    /// Straight-line distance in all three axes.
    #[inline]
    pub fn distance(self, other: Vec3) -> f32 {
        (other - self).length()
    }

    /// Distance on the ground plane, ignoring height.
    #[inline]
    pub fn distance_xz(self, other: Vec3) -> f32 {
        let dx = other.x - self.x;
        let dz = other.z - self.z;
        (dx * dx + dz * dz).sqrt()
    }

    #[inline]
    pub fn length(self) -> f32 {
        (self.x * self.x + self.y * self.y + self.z * self.z).sqrt()
    }

    /// Copy of `self` with the height replaced.
    #[inline]
    pub fn with_y(self, y: f32) -> Self {
        Self { y, ..self }
    }

    /// Move from `self` toward `target` by at most `max_delta`.
    ///
    /// Lands exactly on `target` when it is within reach, so repeated calls
    /// never overshoot or oscillate around it.
    pub fn move_towards(self, target: Vec3, max_delta: f32) -> Vec3 {
        let delta = target - self;
        let dist = delta.length();
        if dist <= max_delta || dist == 0.0 {
            return target;
        }
        self + delta * (max_delta / dist)
    }
}

impl Add for Vec3 {
    type Output = Vec3;
    #[inline]
    fn add(self, rhs: Vec3) -> Vec3 {
        Vec3::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl Sub for Vec3 {
    type Output = Vec3;
    #[inline]
    fn sub(self, rhs: Vec3) -> Vec3 {
        Vec3::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl Mul<f32> for Vec3 {
    type Output = Vec3;
    #[inline]
    fn mul(self, rhs: f32) -> Vec3 {
        Vec3::new(self.x * rhs, self.y * rhs, self.z * rhs)
    }
}

impl std::fmt::Display for Vec3 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.3}, {:.3}, {:.3})", self.x, self.y, self.z)
    }
}

// ── PlaneBounds ───────────────────────────────────────────────────────────────

/// Axis-aligned rectangle on the ground plane that a grid is generated over.
///
/// `center` is the middle of the surface; `size_x` and `size_z` are its full
/// extents.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlaneBounds {
    pub center: Vec3,
    pub size_x: f32,
    pub size_z: f32,
}

impl PlaneBounds {
    #[inline]
    pub fn new(center: Vec3, size_x: f32, size_z: f32) -> Self {
        Self { center, size_x, size_z }
    }

    /// Corner with the smallest `x` and `z`, at the center's height.
    #[inline]
    pub fn bottom_left(&self) -> Vec3 {
        self.center - Vec3::new(self.size_x * 0.5, 0.0, self.size_z * 0.5)
    }
}
