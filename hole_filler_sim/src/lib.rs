// hole_filler_sim — hole-filling target selection for a voxel world.
//
// Once per simulation tick, this crate decides which cells should receive a
// placed block to close holes in the floor: either every hole in reach
// (simple mode) or only those nearby agents are about to walk into (smart
// mode), within a limited supply of fill blocks and without ever trapping the
// controlling agent in the hole it is about to use.
//
// It discovers no holes and places no blocks. The host supplies a hole
// snapshot and agent positions through `WorldView` and receives an ordered
// target set through `Placer`.
//
// Module overview:
// - `types.rs`:     VoxelCoord, WorldPos, Vec2, AgentId.
// - `geometry.rs`:  Region, region_around(), direction_angle(), the 30° cone.
// - `hole.rs`:      Hole and HoleShape (unit costs).
// - `agent.rs`:     Agent snapshot (position, previous position, targetable).
// - `guard.rs`:     Self-fill guard.
// - `movement.rs`:  Movement prediction (qualifies + angle score).
// - `inventory.rs`: BlockFilter, hotbar counting, FillBudget, BudgetLedger.
// - `config.rs`:    HoleFillerConfig + ConfigError.
// - `select.rs`:    select_targets() — simple and smart selection.
// - `filler.rs`:    HoleFiller per-tick driver, WorldView and Placer traits.
//
// **Critical constraint: determinism.** Selection is a pure function of the
// tick's inputs. Identical inputs (including agent order) produce identical
// output, in identical order.

pub mod agent;
pub mod config;
pub mod filler;
pub mod geometry;
pub mod guard;
pub mod hole;
pub mod inventory;
pub mod movement;
pub mod select;
pub mod types;

pub use agent::Agent;
pub use config::{ConfigError, HoleFillerConfig, ReachConfig};
pub use filler::{HoleFiller, Placer, TickOutcome, TrackerSubscription, WorldView};
pub use hole::{Hole, HoleShape};
pub use inventory::{BlockFilter, FillBudget, FilterMode, HotbarSlot};
pub use select::{SelectionInput, TargetSet, select_targets};
pub use types::{AgentId, VoxelCoord, WorldPos};
