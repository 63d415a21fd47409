//! SQLite output backend (feature `sqlite`).
//!
//! Creates a single `output.db` file in the configured output directory with
//! three tables: `tick_summaries`, `robot_stats`, and `robot_traces`.

use std::path::Path;

use rusqlite::Connection;

use crate::writer::OutputWriter;
use crate::{OutputResult, RobotStatsRow, TickSummaryRow, TraceRow};

/// Writes simulation output to an SQLite database.
pub struct SqliteWriter {
    conn: Connection,
    finished: bool,
}

impl SqliteWriter {
    /// Open (or create) `output.db` in `dir` and initialise the schema.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let conn = Connection::open(dir.join("output.db"))?;

        conn.execute_batch(
            "PRAGMA journal_mode = WAL;
             PRAGMA synchronous  = NORMAL;
             CREATE TABLE IF NOT EXISTS tick_summaries (
                 tick            INTEGER PRIMARY KEY,
                 active_robots   INTEGER NOT NULL,
                 finished_robots INTEGER NOT NULL
             );
             CREATE TABLE IF NOT EXISTS robot_stats (
                 robot_id           INTEGER PRIMARY KEY,
                 x                  INTEGER NOT NULL,
                 y                  INTEGER NOT NULL,
                 finished           INTEGER NOT NULL,
                 steps_taken        INTEGER NOT NULL,
                 replans            INTEGER NOT NULL,
                 obstacles_shared   INTEGER NOT NULL,
                 obstacles_received INTEGER NOT NULL
             );
             CREATE TABLE IF NOT EXISTS robot_traces (
                 robot_id INTEGER NOT NULL,
                 seq      INTEGER NOT NULL,
                 x        INTEGER NOT NULL,
                 y        INTEGER NOT NULL
             );",
        )?;

        Ok(Self {
            conn,
            finished: false,
        })
    }
}

impl OutputWriter for SqliteWriter {
    fn write_tick_summary(&mut self, row: &TickSummaryRow) -> OutputResult<()> {
        self.conn.execute(
            "INSERT INTO tick_summaries (tick, active_robots, finished_robots) \
             VALUES (?1, ?2, ?3)",
            rusqlite::params![row.tick, row.active_robots, row.finished_robots],
        )?;
        Ok(())
    }

    fn write_robot_stats(&mut self, rows: &[RobotStatsRow]) -> OutputResult<()> {
        if rows.is_empty() {
            return Ok(());
        }
        let tx = self.conn.unchecked_transaction()?;
        {
            let mut stmt = tx.prepare_cached(
                "INSERT INTO robot_stats \
                 (robot_id, x, y, finished, steps_taken, replans, obstacles_shared, obstacles_received) \
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
            )?;
            for row in rows {
                stmt.execute(rusqlite::params![
                    row.robot_id,
                    row.x,
                    row.y,
                    row.finished as i64,
                    row.steps_taken,
                    row.replans,
                    row.obstacles_shared,
                    row.obstacles_received,
                ])?;
            }
        }
        tx.commit()?;
        Ok(())
    }

    fn write_traces(&mut self, rows: &[TraceRow]) -> OutputResult<()> {
        if rows.is_empty() {
            return Ok(());
        }
        let tx = self.conn.unchecked_transaction()?;
        {
            let mut stmt = tx.prepare_cached(
                "INSERT INTO robot_traces (robot_id, seq, x, y) VALUES (?1, ?2, ?3, ?4)",
            )?;
            for row in rows {
                stmt.execute(rusqlite::params![row.robot_id, row.seq, row.x, row.y])?;
            }
        }
        tx.commit()?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.conn.execute_batch("PRAGMA wal_checkpoint(TRUNCATE);")?;
        Ok(())
    }
}
