// Recorded scenarios and the replay loop.
//
// A scenario is a JSON document holding one `HoleFillerConfig` and an
// ordered list of tick snapshots. Each `TickSnapshot` is a complete
// `WorldView`: the hole tracker's output, the controller, the agents in
// world iteration order, the hotbar, and the unlimited-placement flag.
//
// `replay()` drives a fresh `HoleFiller` through every tick with a
// `RecordingPlacer` and returns one `TickReport` per tick. A gated tick
// reports the placer's previous targets unchanged, as the live executor
// would keep working on them.

use anyhow::{Context, Result};
use hole_filler_sim::{
    Agent, Hole, HoleFiller, HoleFillerConfig, HotbarSlot, Placer, TargetSet, TickOutcome,
    VoxelCoord, WorldView,
};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Clone, Debug, Deserialize)]
pub struct Scenario {
    #[serde(default)]
    pub config: HoleFillerConfig,
    pub ticks: Vec<TickSnapshot>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct TickSnapshot {
    #[serde(default)]
    pub holes: Vec<Hole>,
    pub controller: Agent,
    #[serde(default)]
    pub agents: Vec<Agent>,
    #[serde(default)]
    pub hotbar: Vec<HotbarSlot>,
    #[serde(default)]
    pub unlimited: bool,
}

impl WorldView for TickSnapshot {
    fn holes(&self) -> &[Hole] {
        &self.holes
    }

    fn controller(&self) -> &Agent {
        &self.controller
    }

    fn agents(&self) -> &[Agent] {
        &self.agents
    }

    fn hotbar(&self) -> &[HotbarSlot] {
        &self.hotbar
    }

    fn unlimited_placement(&self) -> bool {
        self.unlimited
    }
}

impl Scenario {
    pub fn from_json(json: &str) -> Result<Self> {
        let scenario: Scenario = serde_json::from_str(json).context("malformed scenario")?;
        scenario.config.validate()?;
        Ok(scenario)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        Self::from_json(&json).with_context(|| format!("failed to load {}", path.display()))
    }
}

/// Placer that remembers the latest target list.
#[derive(Debug, Default)]
pub struct RecordingPlacer {
    pub pending: Vec<VoxelCoord>,
}

impl Placer for RecordingPlacer {
    fn update(&mut self, targets: &TargetSet) {
        self.pending = targets.as_slice().to_vec();
    }

    fn disable(&mut self) {
        self.pending.clear();
    }
}

#[derive(Clone, Debug, Serialize)]
pub struct TickReport {
    pub tick: usize,
    pub outcome: TickOutcome,
    /// Targets the placer holds after this tick.
    pub pending: Vec<VoxelCoord>,
}

pub fn replay(scenario: &Scenario) -> Result<Vec<TickReport>> {
    let mut filler = HoleFiller::new(scenario.config.clone())?;
    let mut placer = RecordingPlacer::default();
    filler.enable();

    let reports = scenario
        .ticks
        .iter()
        .enumerate()
        .map(|(tick, snapshot)| TickReport {
            tick,
            outcome: filler.tick(snapshot, &mut placer),
            pending: placer.pending.clone(),
        })
        .collect();

    filler.disable(&mut placer);
    Ok(reports)
}
