// Holes: vertical gaps in the walkable surface.
//
// A `Hole` is produced by the hole tracker once per tick and handed to the
// selection engine as part of an immutable snapshot. Its `extent` covers the
// open cells (footprint × depth); its `shape` fixes the unit cost of filling
// it. The engine never mutates a hole.
//
// Shapes:
// - `Single`: one 1×1 column, cost 1.
// - `Double`: a 1×2 opening, cost 2.
// - `Square`: a 2×2 opening, cost 4.
//
// The tracker is trusted to keep `shape` consistent with `extent`, but the
// engine never relies on it for memory safety: cost comes from the shape,
// cells come from the extent, and `HoleShape::from_cell_count()` clamps
// unexpected footprints to the most expensive shape.
//
// See also: `geometry.rs` for `Region`, `select.rs` for how holes are
// claimed and expanded into target cells.

use crate::geometry::Region;
use crate::types::{VoxelCoord, WorldPos};
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// Inline capacity for a hole's cells; covers every one-deep shape.
pub type HoleCells = SmallVec<[VoxelCoord; 4]>;

/// Footprint shape of a hole.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum HoleShape {
    Single,
    Double,
    Square,
}

impl HoleShape {
    /// Units needed to fill every column of this shape.
    pub const fn cost(self) -> u32 {
        match self {
            HoleShape::Single => 1,
            HoleShape::Double => 2,
            HoleShape::Square => 4,
        }
    }

    /// Shape for a footprint of `cells` columns. Counts that match no known
    /// shape clamp to `Square`, the largest cost.
    pub fn from_cell_count(cells: u64) -> Self {
        match cells {
            1 => HoleShape::Single,
            2 => HoleShape::Double,
            _ => HoleShape::Square,
        }
    }
}

/// A hole in the current tick's snapshot.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Hole {
    pub extent: Region,
    pub shape: HoleShape,
}

impl Hole {
    pub fn new(min: VoxelCoord, max: VoxelCoord, shape: HoleShape) -> Self {
        Self {
            extent: Region::from_corners(min, max),
            shape,
        }
    }

    /// Build a hole whose shape is inferred from the footprint size.
    pub fn from_footprint(min: VoxelCoord, max: VoxelCoord) -> Self {
        let extent = Region::from_corners(min, max);
        Self {
            extent,
            shape: HoleShape::from_cell_count(extent.footprint_area()),
        }
    }

    /// Convenience constructor for a one-deep 1×1 hole.
    pub fn single(cell: VoxelCoord) -> Self {
        Self {
            extent: Region::single(cell),
            shape: HoleShape::Single,
        }
    }

    pub fn cost(&self) -> u32 {
        self.shape.cost()
    }

    pub fn contains(&self, cell: VoxelCoord) -> bool {
        self.extent.contains(cell)
    }

    /// Every cell that must be filled to close the hole.
    pub fn cells(&self) -> HoleCells {
        self.extent.cells().collect()
    }

    /// Height of the surface a block placed into the bottom of the hole
    /// would create.
    pub fn fill_surface_y(&self) -> f64 {
        f64::from(self.extent.min.y) + 1.0
    }

    /// Centre of the horizontal footprint, at mid-height of the bottom cell.
    pub fn center(&self) -> WorldPos {
        let Region { min, max } = self.extent;
        WorldPos::new(
            (f64::from(min.x) + f64::from(max.x) + 1.0) / 2.0,
            f64::from(min.y) + 0.5,
            (f64::from(min.z) + f64::from(max.z) + 1.0) / 2.0,
        )
    }
}

/// Whether `cell` lies inside any hole of the snapshot.
pub fn controller_in_any_hole(holes: &[Hole], cell: VoxelCoord) -> bool {
    holes.iter().any(|hole| hole.contains(cell))
}
