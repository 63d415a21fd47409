//! Fluent builder for constructing a [`Sim`].

use rdv_agent::Robot;
use rdv_comms::ExchangeChannel;
use rdv_core::{Pos, RobotId, SimConfig, Tick};
use rdv_grid::{Grid, Heuristic, Scenario};

use crate::{Sim, SimError, SimResult};

/// Fluent builder for [`Sim<H>`].
///
/// # Required inputs
///
/// - [`SimConfig`] — tick cap and wait threshold
/// - [`Grid`] — the ground-truth occupancy map
/// - rendezvous position
/// - `H: Heuristic` — the planner's cost-to-go estimate
///   (e.g. [`rdv_grid::Manhattan`])
///
/// Starting positions are supplied with [`starts`][Self::starts] or taken
/// from a loaded [`Scenario`] via [`from_scenario`][Self::from_scenario].
///
/// # Validation
///
/// Out-of-bounds rendezvous or starting positions are configuration errors.
/// A **blocked** rendezvous or start is deliberately NOT rejected: the
/// search engine discovers unreachable goals by frontier exhaustion, and a
/// robot with no route simply holds position — the run then ends at the
/// tick cap and is reported as incomplete.
///
/// # Example
///
/// ```rust,ignore
/// let scenario = load_scenario(Path::new("depot.txt"))?;
/// let mut sim = SimBuilder::from_scenario(SimConfig::default(), scenario, Manhattan)
///     .build()?;
/// let report = sim.run(&mut NoopObserver);
/// ```
pub struct SimBuilder<H: Heuristic> {
    config:     SimConfig,
    grid:       Grid,
    rendezvous: Pos,
    starts:     Vec<Pos>,
    heuristic:  H,
}

impl<H: Heuristic> SimBuilder<H> {
    /// Create a builder with no robots yet.
    pub fn new(config: SimConfig, grid: Grid, rendezvous: Pos, heuristic: H) -> Self {
        Self {
            config,
            grid,
            rendezvous,
            starts: Vec::new(),
            heuristic,
        }
    }

    /// Create a builder from a loaded scenario.
    pub fn from_scenario(config: SimConfig, scenario: Scenario, heuristic: H) -> Self {
        Self::new(config, scenario.grid, scenario.rendezvous, heuristic).starts(scenario.starts)
    }

    /// Supply one starting position per robot.  Ids are assigned densely in
    /// the order given: `starts[0]` becomes `RobotId(0)`, the highest
    /// priority.
    pub fn starts(mut self, starts: Vec<Pos>) -> Self {
        self.starts = starts;
        self
    }

    /// Validate positions and return a ready-to-run [`Sim`].
    pub fn build(self) -> SimResult<Sim<H>> {
        if !self.grid.in_bounds(self.rendezvous) {
            return Err(SimError::RendezvousOutOfBounds(self.rendezvous));
        }
        for (i, &start) in self.starts.iter().enumerate() {
            if !self.grid.in_bounds(start) {
                return Err(SimError::StartOutOfBounds { robot: i, pos: start });
            }
        }

        let robots: Vec<Robot> = self
            .starts
            .iter()
            .enumerate()
            .map(|(i, &start)| Robot::new(RobotId(i as u32), start, &self.grid))
            .collect();
        let wait_counters = vec![0; robots.len()];

        Ok(Sim {
            config: self.config,
            truth: self.grid,
            rendezvous: self.rendezvous,
            robots,
            wait_counters,
            channel: ExchangeChannel::new(),
            heuristic: self.heuristic,
            tick: Tick::ZERO,
        })
    }
}
