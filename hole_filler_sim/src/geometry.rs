// Geometry utilities: axis-aligned regions and direction angles.
//
// `Region` is an inclusive box of cells. It serves both as a hole's extent
// (footprint plus depth) and as the search area around an agent's feet built
// fresh for every query by `region_around()`. Intersection is inclusive on
// every axis, so two regions sharing a single cell overlap.
//
// `direction_angle()` measures how far an agent's horizontal velocity points
// away from a target. A zero-length input on either side yields `0.0`: a
// stationary agent (or an agent standing exactly on the target) counts as
// perfectly aligned instead of producing a NaN.
//
// See also: `hole.rs` which stores its extent as a `Region`, `guard.rs` and
// `movement.rs` which are the main consumers.

use crate::types::{Vec2, VoxelCoord};
use serde::{Deserialize, Serialize};
use std::f64::consts::FRAC_PI_6;

/// An agent is "moving toward" a target when its velocity is within this
/// many radians (30°) of the direction to the target.
pub const MOVING_TOWARD_MAX_ANGLE: f64 = FRAC_PI_6;

/// Inclusive axis-aligned box of cells.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Region {
    pub min: VoxelCoord,
    pub max: VoxelCoord,
}

impl Region {
    /// Build a region from two corners given in any order.
    pub fn from_corners(a: VoxelCoord, b: VoxelCoord) -> Self {
        Self {
            min: VoxelCoord::new(a.x.min(b.x), a.y.min(b.y), a.z.min(b.z)),
            max: VoxelCoord::new(a.x.max(b.x), a.y.max(b.y), a.z.max(b.z)),
        }
    }

    /// A region covering exactly one cell.
    pub fn single(cell: VoxelCoord) -> Self {
        Self {
            min: cell,
            max: cell,
        }
    }

    pub fn contains(&self, cell: VoxelCoord) -> bool {
        self.min.all_le(cell) && cell.all_le(self.max)
    }

    pub fn intersects(&self, other: &Region) -> bool {
        self.min.x <= other.max.x
            && other.min.x <= self.max.x
            && self.min.y <= other.max.y
            && other.min.y <= self.max.y
            && self.min.z <= other.max.z
            && other.min.z <= self.max.z
    }

    /// Number of cells on the horizontal (x, z) footprint. Zero if the
    /// corners are inverted.
    pub fn footprint_area(&self) -> u64 {
        let w = i64::from(self.max.x) - i64::from(self.min.x) + 1;
        let d = i64::from(self.max.z) - i64::from(self.min.z) + 1;
        if w <= 0 || d <= 0 {
            0
        } else {
            (w as u64) * (d as u64)
        }
    }

    /// Every cell inside the region in x-fastest, then z, then y order.
    /// Inverted corners produce no cells.
    pub fn cells(&self) -> impl Iterator<Item = VoxelCoord> + '_ {
        let Region { min, max } = *self;
        (min.y..=max.y).flat_map(move |y| {
            (min.z..=max.z).flat_map(move |z| (min.x..=max.x).map(move |x| VoxelCoord::new(x, y, z)))
        })
    }
}

/// Square region `center ± half_extent` on every axis.
pub fn region_around(center: VoxelCoord, half_extent: i32) -> Region {
    Region {
        min: center.offset(-half_extent, -half_extent, -half_extent),
        max: center.offset(half_extent, half_extent, half_extent),
    }
}

pub fn intersects(a: &Region, b: &Region) -> bool {
    a.intersects(b)
}

/// Angle in radians between `velocity` and `to_target`, in `[0, π]`.
///
/// Returns `0.0` if either vector has zero length.
pub fn direction_angle(velocity: Vec2, to_target: Vec2) -> f64 {
    let (Some(v), Some(t)) = (velocity.normalized(), to_target.normalized()) else {
        return 0.0;
    };
    // Rounding can push the dot product of two unit vectors just past ±1.
    v.dot(t).clamp(-1.0, 1.0).acos()
}
