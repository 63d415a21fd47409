//! Simulation observer trait for progress reporting and data collection.

use rdv_agent::Robot;
use rdv_core::{Pos, RobotId, Tick};

use crate::RunReport;

/// Callbacks invoked by [`Sim::run`][crate::Sim::run] at key points in the
/// tick loop.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.  Observers must not assume any
/// particular ordering beyond what the hooks themselves state; in particular
/// they must never reorder or overlap robot processing within a tick.
///
/// # Example — conflict printer
///
/// ```rust,ignore
/// struct ConflictPrinter;
///
/// impl SimObserver for ConflictPrinter {
///     fn on_conflict(&mut self, tick: Tick, robot: RobotId, cell: Pos, waits: u32) {
///         println!("{tick}: {robot} waiting on {cell} (wait count {waits})");
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called at the very start of each tick, before any robot is processed.
    fn on_tick_start(&mut self, _tick: Tick) {}

    /// Called when a robot's intended cell is already reserved by a
    /// higher-priority robot this tick.  `waits` is the counter value after
    /// this conflict.
    fn on_conflict(&mut self, _tick: Tick, _robot: RobotId, _cell: Pos, _waits: u32) {}

    /// Called when a robot's wait counter reaches the threshold and a
    /// re-plan is forced.
    fn on_forced_replan(&mut self, _tick: Tick, _robot: RobotId) {}

    /// Called at the end of each tick with read-only access to all robots,
    /// so collectors can record positions and counters without the sim
    /// knowing about any output format.
    fn on_tick_end(&mut self, _tick: Tick, _robots: &[Robot]) {}

    /// Called once after the final tick completes.
    fn on_sim_end(&mut self, _report: &RunReport, _robots: &[Robot]) {}
}

/// A [`SimObserver`] that does nothing.  Use when you need to call `run` but
/// don't want progress callbacks.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}
