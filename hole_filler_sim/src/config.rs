// Hole filler configuration.
//
// Every tunable knob lives in `HoleFillerConfig`, passed explicitly into
// selection rather than read from module-level state. The config is plain
// data: it loads from JSON (`from_json()` validates after parsing), and
// `Default` reproduces the stock module settings.
//
// `reach` mirrors the placement executor's range settings. Selection never
// places blocks itself, but two values are derived from reach:
// - `target_range_sq()`: squared distance within which agents are considered
//   in smart mode, `ceil(max(range, wall_range))² + 10`.
// - `tracker_range()`: radius the hole tracker should scan around the
//   controller, `ceil(max(range, wall_range))`.
//
// See also: `inventory.rs` for `BlockFilter`, `select.rs` for how each knob
// steers selection, `filler.rs` which owns a config across ticks.

use crate::inventory::{BlockFilter, FilterMode};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Inclusive bounds of `fill_area_radius`.
pub const FILL_AREA_RADIUS_RANGE: (i32, i32) = (1, 5);

/// Added to the squared reach when deciding which agents are close enough
/// to be considered.
pub const TARGET_RANGE_MARGIN_SQ: f64 = 10.0;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid configuration: {0}")]
    Invalid(&'static str),
}

/// Range settings of the placement executor.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ReachConfig {
    /// Placement range with line of sight.
    pub range: f64,
    /// Placement range through walls.
    pub wall_range: f64,
}

impl Default for ReachConfig {
    fn default() -> Self {
        Self {
            range: 4.5,
            wall_range: 4.5,
        }
    }
}

impl ReachConfig {
    /// `ceil(max(range, wall_range))` in whole cells.
    pub fn effective_range(&self) -> i32 {
        self.range.max(self.wall_range).ceil() as i32
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HoleFillerConfig {
    /// Only fill holes that nearby agents are about to enter. When off, every
    /// hole is filled.
    pub smart: bool,

    /// Never fill a hole the controller itself is about to use.
    pub prevent_self_fill: bool,

    /// Stay inert unless the controller is standing in a hole.
    pub only_self_in_hole: bool,

    /// Half-extent of the square checked around each agent's feet (and the
    /// controller's, for the self-fill guard).
    pub fill_area_radius: i32,

    /// In smart mode, ignore holes more than 30° off an agent's velocity.
    pub check_movement: bool,

    /// Ignore 1×2 and 2×2 holes.
    pub only_single_cell: bool,

    /// Which hotbar blocks count as fill material.
    pub block_filter: BlockFilter,

    pub reach: ReachConfig,
}

impl Default for HoleFillerConfig {
    fn default() -> Self {
        Self {
            smart: true,
            prevent_self_fill: true,
            only_self_in_hole: false,
            fill_area_radius: 2,
            check_movement: true,
            only_single_cell: false,
            block_filter: BlockFilter::new(FilterMode::Whitelist, ["obsidian"]),
            reach: ReachConfig::default(),
        }
    }
}

impl HoleFillerConfig {
    /// Parse a config from JSON and validate it. Missing fields take their
    /// default values.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: HoleFillerConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let (lo, hi) = FILL_AREA_RADIUS_RANGE;
        if !(lo..=hi).contains(&self.fill_area_radius) {
            return Err(ConfigError::Invalid("fill_area_radius must be between 1 and 5"));
        }
        if !self.reach.range.is_finite() || self.reach.range < 0.0 {
            return Err(ConfigError::Invalid("reach.range must be a non-negative number"));
        }
        if !self.reach.wall_range.is_finite() || self.reach.wall_range < 0.0 {
            return Err(ConfigError::Invalid(
                "reach.wall_range must be a non-negative number",
            ));
        }
        Ok(())
    }

    pub fn target_range_sq(&self) -> f64 {
        let range = f64::from(self.reach.effective_range());
        range * range + TARGET_RANGE_MARGIN_SQ
    }

    pub fn tracker_range(&self) -> i32 {
        self.reach.effective_range()
    }
}
