//! A single robot's state and per-tick behaviors.

use rdv_comms::ExchangeChannel;
use rdv_core::{Pos, RobotId};
use rdv_grid::{astar, Grid, Heuristic, Path};

/// One mobile agent.
///
/// Created once at simulation start, bound to a starting position, and
/// mutated every tick by the coordinator until `finished`.  The belief grid
/// starts as a full clone of ground truth and is thereafter only patched
/// toward it — cells flip free↔blocked to match reality, never away from it.
#[derive(Clone, Debug)]
pub struct Robot {
    /// Identity; doubles as fixed priority (lower id wins conflicts).
    pub id: RobotId,

    /// Current cell.
    pub position: Pos,

    /// Private, possibly-stale copy of the occupancy map.
    pub belief: Grid,

    /// Remaining planned route; `path[0]` is the current position.  Empty
    /// when no route is known (never planned, or the goal was unreachable).
    pub path: Path,

    /// Permanently true once the robot occupies the rendezvous cell.
    pub finished: bool,

    /// Cells actually moved into.
    pub steps_taken: u64,

    /// Planner invocations, including forced and stale-step re-plans.
    pub replans: u64,

    /// Total cells this robot has broadcast as changed.
    pub obstacles_shared: u64,

    /// Total cells received from peers' broadcasts.
    pub obstacles_received: u64,

    /// Every cell occupied so far, in order, starting cell included.
    pub trace: Vec<Pos>,

    /// Snapshot of the most recent planner output (the full route at plan
    /// time, before any of it was consumed).
    pub last_plan: Path,
}

impl Robot {
    /// Create a robot at `start`, seeding its belief grid from ground truth.
    pub fn new(id: RobotId, start: Pos, truth: &Grid) -> Self {
        Self {
            id,
            position: start,
            belief: truth.clone(),
            path: Path::new(),
            finished: false,
            steps_taken: 0,
            replans: 0,
            obstacles_shared: 0,
            obstacles_received: 0,
            trace: vec![start],
            last_plan: Path::new(),
        }
    }

    // ── Sensing & exchange ────────────────────────────────────────────────

    /// Compare the 4-connected neighborhood of the current position against
    /// ground truth and return every cell where belief and reality differ.
    ///
    /// This is how a robot discovers obstacles (and clearances) it has not
    /// yet reconciled.  Sensing only observes; reconciliation happens when
    /// the discrepancies come back through the exchange channel.
    pub fn sense(&self, truth: &Grid) -> Vec<Pos> {
        truth
            .adjacent4(self.position)
            .filter(|&p| self.belief.cell(p) != truth.cell(p))
            .collect()
    }

    /// Publish sensed discrepancies, if any, to the exchange channel.
    pub fn broadcast(&mut self, changed: Vec<Pos>, channel: &mut ExchangeChannel) {
        if changed.is_empty() {
            return;
        }
        self.obstacles_shared += changed.len() as u64;
        channel.publish(self.id, changed);
    }

    /// Drain the channel for this robot and patch the belief grid.
    ///
    /// A report only ever signals "this cell's true state differs from what
    /// you believe"; resolving it means copying ground truth's value for the
    /// cell into the belief grid.  Out-of-range reports are ignored.
    pub fn receive_and_patch(&mut self, channel: &ExchangeChannel, truth: &Grid) {
        let reports = channel.collect_for(self.id);
        if reports.is_empty() {
            return;
        }
        self.obstacles_received += reports.len() as u64;
        for pos in reports {
            if let Some(actual) = truth.cell(pos) {
                self.belief.set(pos, actual);
            }
        }
    }

    // ── Planning ──────────────────────────────────────────────────────────

    /// Plan a fresh route from the current position to `rendezvous` over the
    /// belief grid, replacing any prior route.
    ///
    /// No-op once finished.  An unreachable rendezvous leaves the path empty
    /// — not an error; the robot simply has no move until further patches
    /// arrive.  A path shorter than 2 entries means "no move currently
    /// available".
    pub fn plan<H: Heuristic>(&mut self, rendezvous: Pos, heuristic: &H) -> &[Pos] {
        if self.finished {
            return &self.path;
        }
        self.replans += 1;
        self.path = astar(&self.belief, self.position, rendezvous, heuristic).unwrap_or_default();
        self.last_plan = self.path.clone();
        &self.path
    }

    /// `true` if a route (even a trivial one) is currently held.
    #[inline]
    pub fn has_path(&self) -> bool {
        !self.path.is_empty()
    }

    /// The cell this robot wants to move into this tick, if any.
    #[inline]
    pub fn intended_next(&self) -> Option<Pos> {
        if self.path.len() >= 2 {
            Some(self.path[1])
        } else {
            None
        }
    }

    // ── Movement ──────────────────────────────────────────────────────────

    /// Consume the first step of the route.  Returns `true` if the robot
    /// moved.
    ///
    /// Entering the rendezvous cell is accepted unconditionally and sets
    /// `finished`.  Any other cell is validated against live ground truth;
    /// if it turned out to be blocked (a stale plan), the route is discarded
    /// and re-planned in place — one internal transition, after which the
    /// robot reports that it did not move this tick.
    pub fn step<H: Heuristic>(&mut self, truth: &Grid, rendezvous: Pos, heuristic: &H) -> bool {
        if self.path.len() < 2 {
            return false;
        }
        let next = self.path[1];

        if next == rendezvous {
            self.path.remove(0);
            self.advance_to(next);
            self.finished = true;
            return true;
        }

        if truth.is_free(next) {
            self.path.remove(0);
            self.advance_to(next);
            return true;
        }

        // Stale step: blocked in reality, free in the belief grid when the
        // route was planned.
        self.path.clear();
        self.plan(rendezvous, heuristic);
        false
    }

    #[inline]
    fn advance_to(&mut self, next: Pos) {
        self.position = next;
        self.trace.push(next);
        self.steps_taken += 1;
    }
}
