//! World-space vectors and the playable-field rectangle.
//!
//! World units are the game's native units ("uu").  The pitch is centred on
//! the origin with X across the field and Y along it, goals at ±Y.

use std::ops::{Add, Mul, Sub};

/// A 3-D world position or velocity.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vec3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Vec3 {
    pub const ZERO: Vec3 = Vec3 { x: 0.0, y: 0.0, z: 0.0 };

    #[inline]
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    #[inline]
    pub fn length(self) -> f32 {
        (self.x * self.x + self.y * self.y + self.z * self.z).sqrt()
    }

    /// Straight-line distance.  Used both as the route edge cost and as the
    /// A* goal estimate, so the two can never disagree.
    #[inline]
    pub fn distance(self, other: Vec3) -> f32 {
        (self - other).length()
    }

    #[inline]
    pub fn to_array(self) -> [f32; 3] {
        [self.x, self.y, self.z]
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
        write!(f, "({:.1}, {:.1}, {:.1})", self.x, self.y, self.z)
    }
}

/// A 2-D screen-space point (pixels, origin top-left).
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

// ── FieldBounds ───────────────────────────────────────────────────────────────

/// Axis-aligned playable rectangle in the XY plane.
///
/// The lower bounds are inclusive and the upper bounds exclusive, so a
/// position exactly on `max_x` or `max_y` is outside.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FieldBounds {
    pub min_x: f32,
    pub max_x: f32,
    pub min_y: f32,
    pub max_y: f32,
}

impl FieldBounds {
    /// Standard soccar pitch: X ∈ [-4096, 4096), Y ∈ [-5120, 5120).
    pub const STANDARD: FieldBounds = FieldBounds {
        min_x: -4096.0,
        max_x: 4096.0,
        min_y: -5120.0,
        max_y: 5120.0,
    };

    #[inline]
    pub fn width(&self) -> f32 {
        self.max_x - self.min_x
    }

    #[inline]
    pub fn length(&self) -> f32 {
        self.max_y - self.min_y
    }

    /// Map `pos` onto an `n × n` grid and return `(col, row)`, or `None`
    /// if the position falls outside the rectangle.
    ///
    /// Uses `floor` so positions just below the lower bound land on a
    /// negative cell and are rejected instead of being truncated into cell 0.
    pub fn cell_of(&self, pos: Vec3, n: usize) -> Option<(usize, usize)> {
        let fx = ((pos.x - self.min_x) / self.width() * n as f32).floor();
        let fy = ((pos.y - self.min_y) / self.length() * n as f32).floor();
        if !(fx >= 0.0 && fy >= 0.0) {
            // Also rejects NaN.
            return None;
        }
        let (cx, cy) = (fx as usize, fy as usize);
        (cx < n && cy < n).then_some((cx, cy))
    }
}

impl Default for FieldBounds {
    fn default() -> Self {
        Self::STANDARD
    }
}
