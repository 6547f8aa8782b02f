// Movement prediction: is an agent heading for a hole?
//
// The score is the horizontal angle between the agent's last-tick velocity
// and the direction from the agent to the hole's footprint centre. Lower is
// more urgent. The verdict pairs that score with the qualification flag so
// callers can filter and rank from one computation.
//
// With movement checking disabled every hole qualifies, but the score is
// still computed so claimed cells can be ordered.

use crate::agent::Agent;
use crate::geometry::{MOVING_TOWARD_MAX_ANGLE, direction_angle};
use crate::hole::Hole;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MovementVerdict {
    pub qualifies: bool,
    /// Angle in radians, `[0, π]`.
    pub score: f64,
}

pub fn moving_toward(hole: &Hole, agent: &Agent, check_movement: bool) -> MovementVerdict {
    let to_hole = hole.center().horizontal_delta(agent.position);
    let score = direction_angle(agent.velocity(), to_hole);
    MovementVerdict {
        qualifies: !check_movement || score <= MOVING_TOWARD_MAX_ANGLE,
        score,
    }
}
