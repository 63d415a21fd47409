//! CSV output backend.
//!
//! Creates three files in the configured output directory:
//! - `tick_summaries.csv`
//! - `robot_stats.csv`
//! - `robot_traces.csv`

use std::fs::File;
use std::path::Path;

use csv::Writer;

use crate::writer::OutputWriter;
use crate::{OutputResult, RobotStatsRow, TickSummaryRow, TraceRow};

/// Writes simulation output to three CSV files.
pub struct CsvWriter {
    summaries: Writer<File>,
    stats: Writer<File>,
    traces: Writer<File>,
    finished: bool,
}

impl CsvWriter {
    /// Open (or create) the three CSV files in `dir` and write the header
    /// rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let mut summaries = Writer::from_path(dir.join("tick_summaries.csv"))?;
        summaries.write_record(["tick", "active_robots", "finished_robots"])?;

        let mut stats = Writer::from_path(dir.join("robot_stats.csv"))?;
        stats.write_record([
            "robot_id",
            "x",
            "y",
            "finished",
            "steps_taken",
            "replans",
            "obstacles_shared",
            "obstacles_received",
        ])?;

        let mut traces = Writer::from_path(dir.join("robot_traces.csv"))?;
        traces.write_record(["robot_id", "seq", "x", "y"])?;

        Ok(Self {
            summaries,
            stats,
            traces,
            finished: false,
        })
    }
}

impl OutputWriter for CsvWriter {
    fn write_tick_summary(&mut self, row: &TickSummaryRow) -> OutputResult<()> {
        self.summaries.write_record(&[
            row.tick.to_string(),
            row.active_robots.to_string(),
            row.finished_robots.to_string(),
        ])?;
        Ok(())
    }

    fn write_robot_stats(&mut self, rows: &[RobotStatsRow]) -> OutputResult<()> {
        for row in rows {
            self.stats.write_record(&[
                row.robot_id.to_string(),
                row.x.to_string(),
                row.y.to_string(),
                (row.finished as u8).to_string(),
                row.steps_taken.to_string(),
                row.replans.to_string(),
                row.obstacles_shared.to_string(),
                row.obstacles_received.to_string(),
            ])?;
        }
        Ok(())
    }

    fn write_traces(&mut self, rows: &[TraceRow]) -> OutputResult<()> {
        for row in rows {
            self.traces.write_record(&[
                row.robot_id.to_string(),
                row.seq.to_string(),
                row.x.to_string(),
                row.y.to_string(),
            ])?;
        }
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.summaries.flush()?;
        self.stats.flush()?;
        self.traces.flush()?;
        Ok(())
    }
}
