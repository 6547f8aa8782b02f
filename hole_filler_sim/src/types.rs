// Core spatial types shared across the hole filler.
//
// Defines grid coordinates (`VoxelCoord`), continuous world positions
// (`WorldPos`), the horizontal direction vector (`Vec2`) used for movement
// prediction, and the `AgentId` handle. All types derive `Serialize` and
// `Deserialize` so replay scenarios can be stored as JSON.
//
// Coordinate conventions follow the host world:
// - X: east  (positive) / west  (negative)
// - Y: up    (positive) / down  (negative)
// - Z: south (positive) / north (negative)
//
// A cell `(x, y, z)` covers the continuous range `[x, x + 1) × [y, y + 1) ×
// [z, z + 1)`, so its centre sits at `+0.5` on every axis.

use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// Grid coordinates
// ---------------------------------------------------------------------------

/// A position in the 3D voxel grid. Each component is in cell units.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct VoxelCoord {
    pub x: i32,
    pub y: i32,
    pub z: i32,
}

impl VoxelCoord {
    pub const fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }

    /// Offset by the given deltas, saturating at the `i32` bounds.
    pub const fn offset(self, dx: i32, dy: i32, dz: i32) -> Self {
        Self::new(
            self.x.saturating_add(dx),
            self.y.saturating_add(dy),
            self.z.saturating_add(dz),
        )
    }

    /// Centre of the cell in continuous world space.
    pub fn center(self) -> WorldPos {
        WorldPos::new(
            self.x as f64 + 0.5,
            self.y as f64 + 0.5,
            self.z as f64 + 0.5,
        )
    }

    /// Componentwise `self <= other`.
    pub fn all_le(self, other: Self) -> bool {
        self.x <= other.x && self.y <= other.y && self.z <= other.z
    }
}

impl fmt::Display for VoxelCoord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}

// ---------------------------------------------------------------------------
// Continuous positions
// ---------------------------------------------------------------------------

/// A continuous position in world space (feet position for agents).
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct WorldPos {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl WorldPos {
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// The grid cell containing this position.
    pub fn cell(self) -> VoxelCoord {
        VoxelCoord::new(
            self.x.floor() as i32,
            self.y.floor() as i32,
            self.z.floor() as i32,
        )
    }

    pub fn squared_distance(self, other: Self) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        let dz = self.z - other.z;
        dx * dx + dy * dy + dz * dz
    }

    /// Horizontal (x, z) component of `self - other`.
    pub fn horizontal_delta(self, other: Self) -> Vec2 {
        Vec2::new(self.x - other.x, self.z - other.z)
    }
}

/// A 2D vector on the horizontal (x, z) plane.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Vec2 {
    pub x: f64,
    pub z: f64,
}

impl Vec2 {
    pub const ZERO: Self = Self::new(0.0, 0.0);

    pub const fn new(x: f64, z: f64) -> Self {
        Self { x, z }
    }

    pub fn length(self) -> f64 {
        self.x.hypot(self.z)
    }

    pub fn dot(self, other: Self) -> f64 {
        self.x * other.x + self.z * other.z
    }

    /// Unit vector in the same direction, or `None` for a zero-length (or
    /// non-finite) vector.
    pub fn normalized(self) -> Option<Self> {
        let len = self.length();
        if len > 0.0 && len.is_finite() {
            Some(Self::new(self.x / len, self.z / len))
        } else {
            None
        }
    }
}

// ---------------------------------------------------------------------------
// Entity handles
// ---------------------------------------------------------------------------

/// Identifier of an agent as reported by the world query interface.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct AgentId(pub u32);

impl fmt::Display for AgentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AgentId({})", self.0)
    }
}
