// Per-tick driver for the hole filler.
//
// `HoleFiller` owns a validated `HoleFillerConfig` across ticks and follows
// the host module lifecycle: `enable()` tells the host how far the hole
// tracker should scan, `tick()` runs once per simulated tick, and
// `disable()` releases the placer.
//
// The host plugs in through two traits:
// - `WorldView`: read-only access to this tick's hole snapshot, the
//   controller, nearby agents, the hotbar, and the unlimited-placement flag.
// - `Placer`: the placement executor. It receives the full target set each
//   tick and is responsible for range checks, rate limiting and slot
//   selection.
//
// A tick that is gated off (disabled, controller not in a hole under
// `only_self_in_hole`, or no fill material in smart mode) does not call the
// placer at all, leaving its previous targets in place.
//
// See also: `select.rs` for the selection itself, `inventory.rs` for
// turning the hotbar into a `FillBudget`.

use crate::agent::Agent;
use crate::config::{ConfigError, HoleFillerConfig};
use crate::hole::{Hole, controller_in_any_hole};
use crate::inventory::{FillBudget, HotbarSlot, available_units};
use crate::select::{SelectionInput, TargetSet, eligible_holes, select_targets};
use serde::Serialize;
use tracing::{debug, info};

/// Read-only view of the world for one tick.
pub trait WorldView {
    /// Current hole tracker snapshot.
    fn holes(&self) -> &[Hole];
    fn controller(&self) -> &Agent;
    /// Agents in the order selection should consider them. May include the
    /// controller.
    fn agents(&self) -> &[Agent];
    fn hotbar(&self) -> &[HotbarSlot];
    /// Placement does not consume items (creative-style).
    fn unlimited_placement(&self) -> bool;
}

/// The placement executor.
pub trait Placer {
    /// Replace the pending targets.
    fn update(&mut self, targets: &TargetSet);
    /// Drop all pending targets and stop placing.
    fn disable(&mut self);
}

/// How far the hole tracker should scan around the controller.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TrackerSubscription {
    pub horizontal: i32,
    pub vertical: i32,
}

/// What a single `tick()` did.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum TickOutcome {
    Disabled,
    /// `only_self_in_hole` is set and the controller is not in a hole.
    NotInHole,
    /// Smart mode with no usable blocks.
    NoMaterial,
    /// The placer was updated with this many cells.
    Targeted(usize),
}

#[derive(Clone, Debug)]
pub struct HoleFiller {
    config: HoleFillerConfig,
    enabled: bool,
}

impl HoleFiller {
    /// Create a disabled filler with a validated config.
    pub fn new(config: HoleFillerConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            config,
            enabled: false,
        })
    }

    pub fn config(&self) -> &HoleFillerConfig {
        &self.config
    }

    /// Swap in a new config. The old one is kept if validation fails.
    pub fn set_config(&mut self, config: HoleFillerConfig) -> Result<(), ConfigError> {
        config.validate()?;
        self.config = config;
        Ok(())
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn enable(&mut self) -> TrackerSubscription {
        self.enabled = true;
        let range = self.config.tracker_range();
        info!(range, "hole filler enabled");
        TrackerSubscription {
            horizontal: range,
            vertical: range,
        }
    }

    pub fn disable(&mut self, placer: &mut impl Placer) {
        self.enabled = false;
        placer.disable();
        info!("hole filler disabled");
    }

    pub fn tick(&self, view: &impl WorldView, placer: &mut impl Placer) -> TickOutcome {
        if !self.enabled {
            return TickOutcome::Disabled;
        }

        let holes = eligible_holes(view.holes(), &self.config);
        let controller = view.controller();
        let controller_in_hole = controller_in_any_hole(&holes, controller.cell());
        if self.config.only_self_in_hole && !controller_in_hole {
            return TickOutcome::NotInHole;
        }

        let budget = if view.unlimited_placement() {
            FillBudget::unlimited()
        } else {
            FillBudget::limited(available_units(view.hotbar(), &self.config.block_filter))
        };
        if self.config.smart && budget.is_empty() {
            debug!("no fill blocks on hotbar");
            return TickOutcome::NoMaterial;
        }

        let input = SelectionInput {
            holes: &holes,
            controller,
            controller_in_hole,
            agents: view.agents(),
            budget,
        };
        let targets = select_targets(&input, &self.config);
        placer.update(&targets);
        TickOutcome::Targeted(targets.len())
    }
}
