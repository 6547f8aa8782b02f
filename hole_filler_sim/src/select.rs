// Target selection: which cells to fill this tick.
//
// `select_targets()` is a pure function of one tick's inputs. It never
// places blocks and never debits the inventory; it returns an ordered,
// duplicate-free `TargetSet` for the placement executor, which applies its
// own range, rate and slot checks.
//
// ## Pipeline
//
//   1. Drop holes the shape filter excludes (`only_single_cell`).
//   2. If `only_self_in_hole` is set and the controller is not in a hole,
//      return nothing.
//   3. Simple mode: every hole the self-fill guard permits contributes all
//      of its cells. No budget accounting.
//   4. Smart mode: walk nearby targetable agents in caller order. For each
//      agent, every hole not yet claimed this tick is assessed (inside the
//      agent's check region, surface at or below its feet, moving toward it,
//      guard permits). A qualifying hole is claimed only if the remaining
//      budget covers its full cost. The agent's claimed cells are appended
//      best-aligned first. Scanning stops once a finite budget hits zero.
//
// ## Ordering
//
// Output order is meaningful: when the executor is rate limited it works
// through the set front to back. Within one agent, cells are sorted by
// ascending angle (stable, so ties keep hole order). Across agents the
// caller's agent order decides and there is no global re-sort: results are
// defined relative to that order.
//
// ## Ownership
//
// A `SelectionContext` holds everything scoped to one invocation: the
// filtered snapshot, the controller's guard, and the accumulating output.
// The claimed-hole set and the `BudgetLedger` are threaded through smart
// selection by `&mut` and dropped at the end of the call.
//
// See also: `guard.rs` (self-fill guard), `movement.rs` (alignment score),
// `inventory.rs` (`FillBudget`, `BudgetLedger`), `filler.rs` (per-tick
// driver that gathers inputs from the host).

use crate::agent::Agent;
use crate::config::HoleFillerConfig;
use crate::geometry::{Region, region_around};
use crate::guard::SelfFillGuard;
use crate::hole::{Hole, HoleShape};
use crate::inventory::{BudgetLedger, FillBudget};
use crate::movement::moving_toward;
use crate::types::VoxelCoord;
use rustc_hash::FxHashSet;
use tracing::{debug, trace};

// ---------------------------------------------------------------------------
// Output set
// ---------------------------------------------------------------------------

/// Insertion-ordered set of cells to fill.
#[derive(Clone, Debug, Default)]
pub struct TargetSet {
    cells: Vec<VoxelCoord>,
    seen: FxHashSet<VoxelCoord>,
}

impl TargetSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `cell` unless already present. Returns whether it was added.
    pub fn insert(&mut self, cell: VoxelCoord) -> bool {
        if self.seen.insert(cell) {
            self.cells.push(cell);
            true
        } else {
            false
        }
    }

    pub fn contains(&self, cell: VoxelCoord) -> bool {
        self.seen.contains(&cell)
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, VoxelCoord> {
        self.cells.iter()
    }

    pub fn as_slice(&self) -> &[VoxelCoord] {
        &self.cells
    }
}

impl PartialEq for TargetSet {
    fn eq(&self, other: &Self) -> bool {
        self.cells == other.cells
    }
}

impl Eq for TargetSet {}

impl Extend<VoxelCoord> for TargetSet {
    fn extend<I: IntoIterator<Item = VoxelCoord>>(&mut self, iter: I) {
        for cell in iter {
            self.insert(cell);
        }
    }
}

impl FromIterator<VoxelCoord> for TargetSet {
    fn from_iter<I: IntoIterator<Item = VoxelCoord>>(iter: I) -> Self {
        let mut set = TargetSet::new();
        set.extend(iter);
        set
    }
}

impl<'a> IntoIterator for &'a TargetSet {
    type Item = &'a VoxelCoord;
    type IntoIter = std::slice::Iter<'a, VoxelCoord>;

    fn into_iter(self) -> Self::IntoIter {
        self.cells.iter()
    }
}

// ---------------------------------------------------------------------------
// Inputs and per-tick context
// ---------------------------------------------------------------------------

/// Everything selection reads for one tick.
#[derive(Clone, Copy, Debug)]
pub struct SelectionInput<'a> {
    /// Hole tracker snapshot.
    pub holes: &'a [Hole],
    pub controller: &'a Agent,
    /// Whether the controller currently stands in any hole.
    pub controller_in_hole: bool,
    /// Agents in the order they should be considered.
    pub agents: &'a [Agent],
    pub budget: FillBudget,
}

/// A cell of a claimed hole, scored by the claiming agent's alignment.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Candidate {
    pub cell: VoxelCoord,
    /// Movement angle in radians; lower is more urgent.
    pub score: f64,
}

/// State scoped to a single `select_targets()` call.
#[derive(Debug)]
pub struct SelectionContext {
    pub holes: Vec<Hole>,
    pub guard: SelfFillGuard,
    pub targets: TargetSet,
}

impl SelectionContext {
    pub fn new(input: &SelectionInput<'_>, config: &HoleFillerConfig) -> Self {
        Self {
            holes: eligible_holes(input.holes, config),
            guard: SelfFillGuard {
                region: region_around(input.controller.cell(), config.fill_area_radius),
                controller_in_hole: input.controller_in_hole,
                controller_y: input.controller.position.y,
                prevent_self_fill: config.prevent_self_fill,
            },
            targets: TargetSet::new(),
        }
    }
}

/// Whether holes of `shape` pass the configured shape filter.
pub fn shape_eligible(shape: HoleShape, config: &HoleFillerConfig) -> bool {
    !config.only_single_cell || shape == HoleShape::Single
}

/// The snapshot with shape-filtered holes removed, order preserved.
pub fn eligible_holes(holes: &[Hole], config: &HoleFillerConfig) -> Vec<Hole> {
    holes
        .iter()
        .filter(|hole| shape_eligible(hole.shape, config))
        .copied()
        .collect()
}

// ---------------------------------------------------------------------------
// Entry point
// ---------------------------------------------------------------------------

pub fn select_targets(input: &SelectionInput<'_>, config: &HoleFillerConfig) -> TargetSet {
    if config.only_self_in_hole && !input.controller_in_hole {
        trace!("controller not in a hole, skipping selection");
        return TargetSet::new();
    }

    let mut ctx = SelectionContext::new(input, config);
    if config.smart {
        if input.budget.is_empty() {
            trace!("no fill material, skipping smart selection");
            return TargetSet::new();
        }
        collect_smart(&mut ctx, input, config);
    } else {
        collect_simple(&mut ctx);
    }

    debug!(
        holes = ctx.holes.len(),
        targets = ctx.targets.len(),
        smart = config.smart,
        "hole filler selection"
    );
    ctx.targets
}

// ---------------------------------------------------------------------------
// Simple mode
// ---------------------------------------------------------------------------

fn collect_simple(ctx: &mut SelectionContext) {
    let SelectionContext {
        holes,
        guard,
        targets,
    } = ctx;
    for hole in holes.iter().filter(|hole| guard.permits(hole)) {
        targets.extend(hole.cells());
    }
}

// ---------------------------------------------------------------------------
// Smart mode
// ---------------------------------------------------------------------------

fn collect_smart(ctx: &mut SelectionContext, input: &SelectionInput<'_>, config: &HoleFillerConfig) {
    let range_sq = config.target_range_sq();
    let mut ledger = BudgetLedger::new(input.budget);
    // Keyed by value: a snapshot may list the same hole more than once.
    let mut claimed: FxHashSet<Hole> = FxHashSet::default();
    let mut found: Vec<Candidate> = Vec::new();

    let agents = input
        .agents
        .iter()
        .filter(|agent| is_eligible_agent(agent, input.controller, range_sq));

    for agent in agents {
        found.clear();
        claim_for_agent(ctx, agent, config, &mut claimed, &mut ledger, &mut found);

        found.sort_by(|a, b| a.score.total_cmp(&b.score));
        ctx.targets.extend(found.iter().map(|c| c.cell));

        if ledger.is_exhausted() {
            trace!(agent = %agent.id, "budget exhausted, stopping scan");
            break;
        }
    }
}

/// Nearby, targetable, and not the controller itself.
fn is_eligible_agent(agent: &Agent, controller: &Agent, range_sq: f64) -> bool {
    agent.id != controller.id
        && agent.targetable
        && agent.squared_distance_to(controller) <= range_sq
}

fn claim_for_agent(
    ctx: &SelectionContext,
    agent: &Agent,
    config: &HoleFillerConfig,
    claimed: &mut FxHashSet<Hole>,
    ledger: &mut BudgetLedger,
    found: &mut Vec<Candidate>,
) {
    let region = region_around(agent.cell(), config.fill_area_radius);

    for hole in &ctx.holes {
        if ledger.is_exhausted() {
            break;
        }
        if claimed.contains(hole) {
            continue;
        }
        let Some(score) = assess_hole(hole, agent, &region, &ctx.guard, config) else {
            continue;
        };
        if !ledger.try_spend(hole.cost()) {
            trace!(agent = %agent.id, cost = hole.cost(), "cannot afford hole");
            continue;
        }

        claimed.insert(*hole);
        trace!(agent = %agent.id, min = %hole.extent.min, score, "claimed hole");
        found.extend(hole.cells().into_iter().map(|cell| Candidate { cell, score }));
    }
}

/// Alignment score if `agent` qualifies `hole` for filling.
fn assess_hole(
    hole: &Hole,
    agent: &Agent,
    region: &Region,
    guard: &SelfFillGuard,
    config: &HoleFillerConfig,
) -> Option<f64> {
    if !hole.extent.intersects(region) || hole.fill_surface_y() > agent.position.y {
        return None;
    }
    let verdict = moving_toward(hole, agent, config.check_movement);
    (verdict.qualifies && guard.permits(hole)).then_some(verdict.score)
}
