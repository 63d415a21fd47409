//! The `Sim` struct, its tick loop, and the run report.

use std::time::{Duration, Instant};

use rustc_hash::FxHashSet;

use rdv_agent::Robot;
use rdv_comms::ExchangeChannel;
use rdv_core::{Pos, SimConfig, Tick};
use rdv_grid::{Grid, Heuristic};

use crate::SimObserver;

// ── RunReport ─────────────────────────────────────────────────────────────────

/// Outcome of a completed run.
///
/// `completed == false` means the tick cap was reached with unfinished
/// robots — a valid, reportable outcome, not a failure.
#[derive(Clone, Debug)]
pub struct RunReport {
    /// Ticks actually executed (≤ `config.max_ticks`).
    pub ticks_executed: u64,
    /// Wall-clock time for the run.
    pub elapsed: Duration,
    /// `true` if every robot reached the rendezvous cell.
    pub completed: bool,
}

// ── Sim ───────────────────────────────────────────────────────────────────────

/// The coordinator: owns the ground-truth grid, all robots, the tick-scoped
/// exchange channel, and the per-robot wait counters.
///
/// Robots are stored in ascending-id order; the `Vec` order is the priority
/// order.  Create via [`SimBuilder`][crate::SimBuilder].
pub struct Sim<H: Heuristic> {
    pub config: SimConfig,

    /// The authoritative occupancy map.  Immutable for the duration of a
    /// run; robots validate moves against it and sense discrepancies from it.
    pub truth: Grid,

    /// The common destination cell.
    pub rendezvous: Pos,

    /// All robots, indexed by id.
    pub robots: Vec<Robot>,

    /// Consecutive blocked ticks per robot.  Persists across ticks; reset by
    /// a successful or unblocked move and by a forced re-plan.
    pub wait_counters: Vec<u32>,

    /// The obstacle exchange channel, cleared at every tick boundary.
    pub channel: ExchangeChannel,

    /// The cost-to-go estimate handed to every planning call.
    pub heuristic: H,

    /// Current tick.
    pub tick: Tick,
}

impl<H: Heuristic> Sim<H> {
    // ── Public API ────────────────────────────────────────────────────────

    /// Run until every robot is finished or the tick cap is reached,
    /// whichever comes first.
    pub fn run<O: SimObserver>(&mut self, observer: &mut O) -> RunReport {
        let started = Instant::now();

        while self.tick < self.config.end_tick() && !self.all_finished() {
            let now = self.tick;
            observer.on_tick_start(now);
            self.process_tick(now, observer);
            observer.on_tick_end(now, &self.robots);
            self.tick = self.tick + 1;
        }

        let report = RunReport {
            ticks_executed: self.tick.0,
            elapsed: started.elapsed(),
            completed: self.all_finished(),
        };
        observer.on_sim_end(&report, &self.robots);
        report
    }

    /// Run exactly `n` ticks from the current position, ignoring the cap and
    /// the finished state.  Useful for tests and incremental stepping.
    pub fn run_ticks<O: SimObserver>(&mut self, n: u64, observer: &mut O) {
        for _ in 0..n {
            let now = self.tick;
            observer.on_tick_start(now);
            self.process_tick(now, observer);
            observer.on_tick_end(now, &self.robots);
            self.tick = self.tick + 1;
        }
    }

    /// `true` once every robot occupies the rendezvous cell.
    pub fn all_finished(&self) -> bool {
        self.robots.iter().all(|r| r.finished)
    }

    // ── Core tick processing ──────────────────────────────────────────────

    fn process_tick<O: SimObserver>(&mut self, now: Tick, observer: &mut O) {
        // Cells claimed by robots that have already moved this tick.
        let mut reserved: FxHashSet<Pos> = FxHashSet::default();

        for i in 0..self.robots.len() {
            if self.robots[i].finished {
                continue;
            }

            // ── Sense, broadcast, receive ─────────────────────────────────
            //
            // Broadcasts from robots earlier in the priority order are
            // already in the channel, so this robot absorbs them now.
            // Communication is conceptually simultaneous but implemented as
            // sequential broadcast-then-immediate-availability within the
            // tick; later robots seeing earlier broadcasts is intentional.
            let changed = self.robots[i].sense(&self.truth);
            self.robots[i].broadcast(changed, &mut self.channel);
            self.robots[i].receive_and_patch(&self.channel, &self.truth);

            // ── Plan if no route is held ──────────────────────────────────
            if !self.robots[i].has_path() {
                self.robots[i].plan(self.rendezvous, &self.heuristic);
            }

            // No intended move: the robot stays put this tick.
            let Some(intended) = self.robots[i].intended_next() else {
                continue;
            };

            // ── Rendezvous entry is never contested ───────────────────────
            if intended == self.rendezvous {
                self.robots[i].step(&self.truth, self.rendezvous, &self.heuristic);
                reserved.insert(self.robots[i].position);
                self.wait_counters[i] = 0;
                continue;
            }

            // ── Reservation conflict: a higher-priority robot owns the cell
            if reserved.contains(&intended) {
                self.wait_counters[i] += 1;
                observer.on_conflict(now, self.robots[i].id, intended, self.wait_counters[i]);

                if self.wait_counters[i] >= self.config.wait_threshold {
                    observer.on_forced_replan(now, self.robots[i].id);
                    self.robots[i].plan(self.rendezvous, &self.heuristic);
                    self.wait_counters[i] = 0;
                }
                continue;
            }

            // ── Move ──────────────────────────────────────────────────────
            //
            // A stale step re-plans inside `step` and leaves the robot in
            // place; either way the robot occupies `position` for the rest
            // of the tick, so that cell is what gets reserved.
            self.wait_counters[i] = 0;
            self.robots[i].step(&self.truth, self.rendezvous, &self.heuristic);
            reserved.insert(self.robots[i].position);
        }

        // Unconsumed broadcasts are discarded: every robot already had its
        // chance to drain the channel this tick.
        self.channel.clear();
    }
}
