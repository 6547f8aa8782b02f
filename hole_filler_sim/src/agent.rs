// Agents as seen by the world query interface.
//
// An `Agent` is a snapshot of one entity for the current tick: where it is,
// where it was last tick (the difference is its velocity), and whether the
// host's targeting rules (hostility, teams, etc.) consider it a target. The
// controlling agent is represented with the same type.

use crate::types::{AgentId, Vec2, VoxelCoord, WorldPos};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Agent {
    pub id: AgentId,
    /// Feet position this tick.
    pub position: WorldPos,
    /// Feet position last tick.
    pub prev_position: WorldPos,
    /// Result of the host's "should be considered a target" predicate.
    #[serde(default = "default_targetable")]
    pub targetable: bool,
}

fn default_targetable() -> bool {
    true
}

impl Agent {
    /// A targetable agent that did not move since last tick.
    pub fn stationary(id: AgentId, position: WorldPos) -> Self {
        Self {
            id,
            position,
            prev_position: position,
            targetable: true,
        }
    }

    /// A targetable agent that moved by `(dx, dz)` since last tick.
    pub fn moving(id: AgentId, position: WorldPos, dx: f64, dz: f64) -> Self {
        Self {
            id,
            position,
            prev_position: WorldPos::new(position.x - dx, position.y, position.z - dz),
            targetable: true,
        }
    }

    /// Horizontal displacement over the last tick.
    pub fn velocity(&self) -> Vec2 {
        self.position.horizontal_delta(self.prev_position)
    }

    /// The cell the agent's feet are in.
    pub fn cell(&self) -> VoxelCoord {
        self.position.cell()
    }

    pub fn squared_distance_to(&self, other: &Agent) -> f64 {
        self.position.squared_distance(other.position)
    }
}
