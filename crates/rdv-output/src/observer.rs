//! `SimOutputObserver<W>` — bridges `SimObserver` to an `OutputWriter`.

use rdv_agent::Robot;
use rdv_core::Tick;
use rdv_sim::{RunReport, SimObserver};

use crate::row::{RobotStatsRow, TickSummaryRow, TraceRow};
use crate::writer::OutputWriter;
use crate::OutputError;

/// A [`SimObserver`] that writes tick summaries during the run and the
/// per-robot statistics and traces at run end, to any [`OutputWriter`]
/// backend (CSV, SQLite).
///
/// Errors from the writer are stored internally because `SimObserver`
/// methods have no return value.  After `sim.run()` returns, check for
/// errors with [`take_error`][Self::take_error].
pub struct SimOutputObserver<W: OutputWriter> {
    writer: W,
    last_error: Option<OutputError>,
}

impl<W: OutputWriter> SimOutputObserver<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            last_error: None,
        }
    }

    /// Take the stored write error (if any) after `sim.run()` returns.
    ///
    /// Returns `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Unwrap the inner writer (e.g. to inspect files after the sim).
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn store_err(&mut self, result: crate::OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: OutputWriter> SimObserver for SimOutputObserver<W> {
    fn on_tick_end(&mut self, tick: Tick, robots: &[Robot]) {
        let finished = robots.iter().filter(|r| r.finished).count() as u64;
        let row = TickSummaryRow {
            tick: tick.0,
            active_robots: robots.len() as u64 - finished,
            finished_robots: finished,
        };
        let result = self.writer.write_tick_summary(&row);
        self.store_err(result);
    }

    fn on_sim_end(&mut self, _report: &RunReport, robots: &[Robot]) {
        let stats: Vec<RobotStatsRow> = robots.iter().map(RobotStatsRow::from_robot).collect();
        let result = self.writer.write_robot_stats(&stats);
        self.store_err(result);

        let traces: Vec<TraceRow> = robots
            .iter()
            .flat_map(|r| {
                r.trace.iter().enumerate().map(move |(seq, pos)| TraceRow {
                    robot_id: r.id.0,
                    seq: seq as u64,
                    x: pos.x,
                    y: pos.y,
                })
            })
            .collect();
        let result = self.writer.write_traces(&traces);
        self.store_err(result);

        let result = self.writer.finish();
        self.store_err(result);
    }
}
