//! Broadcast mailbox of per-robot obstacle reports.

use rustc_hash::FxHashSet;

use rdv_core::{Pos, RobotId};

/// A tick-scoped broadcast mailbox of `(sender, observed cell deltas)`
/// entries.
///
/// The channel is broadcast-to-all-but-self, not point-to-point: a receiver
/// collects the union of every other sender's reports.  Within a tick,
/// robots processed later see everything earlier robots have already
/// published — that sequencing is part of the communication model.
#[derive(Default, Debug)]
pub struct ExchangeChannel {
    entries: Vec<(RobotId, Vec<Pos>)>,
}

impl ExchangeChannel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a broadcast entry for the current tick.
    pub fn publish(&mut self, sender: RobotId, changed: Vec<Pos>) {
        self.entries.push((sender, changed));
    }

    /// Union of all changed positions reported by senders other than
    /// `receiver`, duplicates removed, first-seen order preserved.
    pub fn collect_for(&self, receiver: RobotId) -> Vec<Pos> {
        let mut seen = FxHashSet::default();
        let mut out = Vec::new();
        for (sender, cells) in &self.entries {
            if *sender == receiver {
                continue;
            }
            for &cell in cells {
                if seen.insert(cell) {
                    out.push(cell);
                }
            }
        }
        out
    }

    /// Discard all entries.  Called by the coordinator at every tick end,
    /// whether or not anything was collected.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Number of broadcast entries currently held.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
