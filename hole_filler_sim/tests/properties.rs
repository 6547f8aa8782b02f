// Property tests for target selection.
//
// Random ticks are built on a coarse lattice: each hole sits at a distinct
// (3·gx, 3·gz) anchor and is at most 2×2, so holes never share cells and
// every output cell maps back to exactly one hole. Agents and the controller
// are scattered around the lattice with small per-tick velocities.

use std::collections::BTreeSet;

use hole_filler_sim::geometry::region_around;
use hole_filler_sim::hole::controller_in_any_hole;
use hole_filler_sim::movement::moving_toward;
use hole_filler_sim::select::eligible_holes;
use hole_filler_sim::{
    Agent, AgentId, FillBudget, Hole, HoleFillerConfig, HoleShape, SelectionInput, TargetSet,
    VoxelCoord, WorldPos, select_targets,
};
use proptest::prelude::*;

const CONTROLLER: AgentId = AgentId(0);

// ---------------------------------------------------------------------------
// Strategies
// ---------------------------------------------------------------------------

fn arb_shape() -> impl Strategy<Value = HoleShape> {
    prop_oneof![
        Just(HoleShape::Single),
        Just(HoleShape::Double),
        Just(HoleShape::Square),
    ]
}

fn arb_hole() -> impl Strategy<Value = Hole> {
    (-3i32..=3, -3i32..=3, 62i32..=64, arb_shape()).prop_map(|(gx, gz, y, shape)| {
        let min = VoxelCoord::new(gx * 3, y, gz * 3);
        let max = match shape {
            HoleShape::Single => min,
            HoleShape::Double => min.offset(1, 0, 0),
            HoleShape::Square => min.offset(1, 0, 1),
        };
        Hole::new(min, max, shape)
    })
}

fn arb_holes() -> impl Strategy<Value = Vec<Hole>> {
    prop::collection::vec(arb_hole(), 0..14).prop_map(|holes| {
        let mut anchors = BTreeSet::new();
        holes
            .into_iter()
            .filter(|h| anchors.insert((h.extent.min.x, h.extent.min.z)))
            .collect()
    })
}

fn arb_agent(id: u32) -> impl Strategy<Value = Agent> {
    (
        -9.0f64..9.0,
        63.0f64..65.0,
        -9.0f64..9.0,
        -0.3f64..0.3,
        -0.3f64..0.3,
        prop::bool::weighted(0.85),
    )
        .prop_map(move |(x, y, z, dx, dz, targetable)| {
            let mut agent = Agent::moving(AgentId(id), WorldPos::new(x, y, z), dx, dz);
            agent.targetable = targetable;
            agent
        })
}

fn arb_agents() -> impl Strategy<Value = Vec<Agent>> {
    (0usize..6).prop_flat_map(|n| {
        (1..=n as u32)
            .map(arb_agent)
            .collect::<Vec<_>>()
    })
}

fn arb_config() -> impl Strategy<Value = HoleFillerConfig> {
    (
        any::<bool>(),
        any::<bool>(),
        prop::bool::weighted(0.2),
        1i32..=5,
        any::<bool>(),
        prop::bool::weighted(0.2),
    )
        .prop_map(
            |(smart, prevent_self_fill, only_self_in_hole, fill_area_radius, check_movement, only_single_cell)| {
                HoleFillerConfig {
                    smart,
                    prevent_self_fill,
                    only_self_in_hole,
                    fill_area_radius,
                    check_movement,
                    only_single_cell,
                    ..HoleFillerConfig::default()
                }
            },
        )
}

fn arb_budget() -> impl Strategy<Value = FillBudget> {
    prop_oneof![
        4 => (0u32..10).prop_map(FillBudget::limited),
        1 => Just(FillBudget::unlimited()),
    ]
}

#[derive(Clone, Debug)]
struct Tick {
    holes: Vec<Hole>,
    controller: Agent,
    agents: Vec<Agent>,
    budget: FillBudget,
    config: HoleFillerConfig,
}

impl Tick {
    fn controller_in_hole(&self) -> bool {
        controller_in_any_hole(
            &eligible_holes(&self.holes, &self.config),
            self.controller.cell(),
        )
    }

    fn select(&self) -> TargetSet {
        let input = SelectionInput {
            holes: &self.holes,
            controller: &self.controller,
            controller_in_hole: self.controller_in_hole(),
            agents: &self.agents,
            budget: self.budget,
        };
        select_targets(&input, &self.config)
    }

    /// Holes with at least one cell in `out`.
    fn claimed<'a>(&'a self, out: &'a TargetSet) -> impl Iterator<Item = &'a Hole> + 'a {
        self.holes
            .iter()
            .filter(move |h| h.cells().iter().any(|c| out.contains(*c)))
    }
}

fn arb_tick() -> impl Strategy<Value = Tick> {
    (
        arb_holes(),
        -9.0f64..9.0,
        63.0f64..65.0,
        -9.0f64..9.0,
        arb_agents(),
        arb_budget(),
        arb_config(),
    )
        .prop_map(|(holes, cx, cy, cz, agents, budget, config)| Tick {
            holes,
            controller: Agent::stationary(CONTROLLER, WorldPos::new(cx, cy, cz)),
            agents,
            budget,
            config,
        })
}

// ---------------------------------------------------------------------------
// Properties
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn budget_is_never_exceeded(mut tick in arb_tick()) {
        tick.config.smart = true;
        prop_assume!(!tick.budget.unlimited);
        let out = tick.select();
        let spent: u32 = tick.claimed(&out).map(Hole::cost).sum();
        prop_assert!(spent <= tick.budget.available, "spent {} of {}", spent, tick.budget.available);
    }

    #[test]
    fn claimed_holes_are_filled_whole_and_once(mut tick in arb_tick()) {
        tick.config.smart = true;
        let out = tick.select();
        let unique: BTreeSet<_> = out.iter().copied().collect();
        prop_assert_eq!(unique.len(), out.len());

        let expected: usize = tick.claimed(&out).map(|h| h.cells().len()).sum();
        prop_assert_eq!(expected, out.len());
        for hole in tick.claimed(&out) {
            prop_assert!(hole.cells().iter().all(|c| out.contains(*c)));
        }
    }

    #[test]
    fn controller_is_never_walled_in(mut tick in arb_tick()) {
        tick.config.prevent_self_fill = true;
        prop_assume!(!tick.controller_in_hole());
        let out = tick.select();
        let guard = region_around(tick.controller.cell(), tick.config.fill_area_radius);
        for hole in tick.claimed(&out) {
            let traps = hole.fill_surface_y() <= tick.controller.position.y
                && hole.extent.intersects(&guard);
            prop_assert!(!traps, "filled {:?} under controller", hole);
        }
    }

    #[test]
    fn simple_mode_fills_every_eligible_hole(mut tick in arb_tick()) {
        tick.config.smart = false;
        tick.config.prevent_self_fill = false;
        tick.config.only_self_in_hole = false;
        let out = tick.select();

        let expected: BTreeSet<VoxelCoord> = eligible_holes(&tick.holes, &tick.config)
            .iter()
            .flat_map(|h| h.cells())
            .collect();
        let actual: BTreeSet<VoxelCoord> = out.iter().copied().collect();
        prop_assert_eq!(expected, actual);
    }

    #[test]
    fn selection_is_idempotent(tick in arb_tick()) {
        prop_assert_eq!(tick.select(), tick.select());
    }

    #[test]
    fn claims_require_an_aligned_agent(mut tick in arb_tick()) {
        tick.config.smart = true;
        tick.config.check_movement = true;
        let out = tick.select();
        let range_sq = tick.config.target_range_sq();
        for hole in tick.claimed(&out) {
            let backed = tick.agents.iter().any(|agent| {
                agent.id != CONTROLLER
                    && agent.targetable
                    && agent.squared_distance_to(&tick.controller) <= range_sq
                    && moving_toward(hole, agent, true).qualifies
            });
            prop_assert!(backed, "{:?} claimed without an aligned agent", hole);
        }
    }

    #[test]
    fn single_cell_filter_drops_larger_holes(mut tick in arb_tick()) {
        tick.config.only_single_cell = true;
        let out = tick.select();
        for hole in tick.claimed(&out) {
            prop_assert_eq!(hole.shape, HoleShape::Single);
        }
    }
}
