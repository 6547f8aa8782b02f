// Self-fill guard.
//
// Keeps the controller from walling itself into a hole it is about to use.
// With prevention enabled, a hole may be filled only when at least one of
// these holds:
//
// - its fill surface is strictly above the controller's feet (placing the
//   block cannot trap the controller below it);
// - the controller already stands in some hole;
// - the hole lies outside the controller's own check region.
//
// Holes far from the controller are never blocked just because prevention is
// on.

use crate::geometry::Region;
use crate::hole::Hole;

/// Controller-side inputs of the guard, fixed for one tick.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SelfFillGuard {
    /// `region_around(controller cell, fill_area_radius)`.
    pub region: Region,
    pub controller_in_hole: bool,
    /// Controller feet height.
    pub controller_y: f64,
    pub prevent_self_fill: bool,
}

impl SelfFillGuard {
    pub fn permits(&self, hole: &Hole) -> bool {
        permits_fill(
            hole,
            &self.region,
            self.controller_in_hole,
            self.controller_y,
            self.prevent_self_fill,
        )
    }
}

pub fn permits_fill(
    hole: &Hole,
    controller_region: &Region,
    controller_in_hole: bool,
    controller_y: f64,
    prevent_self_fill: bool,
) -> bool {
    !prevent_self_fill
        || hole.fill_surface_y() > controller_y
        || controller_in_hole
        || !hole.extent.intersects(controller_region)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::region_around;
    use crate::types::VoxelCoord;

    fn controller_region() -> Region {
        region_around(VoxelCoord::new(0, 64, 0), 2)
    }

    #[test]
    fn blocks_hole_under_controller() {
        let hole = Hole::single(VoxelCoord::new(1, 63, 0));
        assert!(!permits_fill(&hole, &controller_region(), false, 64.0, true));
    }

    #[test]
    fn disabled_prevention_always_permits() {
        let hole = Hole::single(VoxelCoord::new(1, 63, 0));
        assert!(permits_fill(&hole, &controller_region(), false, 64.0, false));
    }

    #[test]
    fn hole_above_controller_is_permitted() {
        // Fill surface at y = 65 is above feet at 64.
        let hole = Hole::single(VoxelCoord::new(1, 64, 0));
        assert!(permits_fill(&hole, &controller_region(), false, 64.0, true));
    }

    #[test]
    fn surface_level_with_feet_is_blocked() {
        let hole = Hole::single(VoxelCoord::new(1, 63, 0));
        assert_eq!(hole.fill_surface_y(), 64.0);
        assert!(!permits_fill(&hole, &controller_region(), false, 64.0, true));
    }

    #[test]
    fn controller_already_in_hole_is_permitted() {
        let hole = Hole::single(VoxelCoord::new(1, 63, 0));
        assert!(permits_fill(&hole, &controller_region(), true, 64.0, true));
    }

    #[test]
    fn distant_hole_is_permitted() {
        let hole = Hole::single(VoxelCoord::new(3, 63, 0));
        assert!(permits_fill(&hole, &controller_region(), false, 64.0, true));
    }

    #[test]
    fn guard_struct_matches_free_function() {
        let guard = SelfFillGuard {
            region: controller_region(),
            controller_in_hole: false,
            controller_y: 64.0,
            prevent_self_fill: true,
        };
        let near = Hole::single(VoxelCoord::new(-2, 63, 2));
        let far = Hole::single(VoxelCoord::new(-3, 63, 2));
        assert!(!guard.permits(&near));
        assert!(guard.permits(&far));
    }
}
