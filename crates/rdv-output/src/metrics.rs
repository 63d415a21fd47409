//! Append-only plain-text metrics log.
//!
//! Entry format:
//!
//! ```text
//! Metrics Log Entry:
//! <key>: <value>
//! ...
//! ----------------------------------------
//! ```
//!
//! Entries append across runs, so one log file accumulates the history of a
//! whole experiment series.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::PathBuf;

use crate::OutputResult;

/// A human-readable `key: value` run log.
pub struct MetricsLog {
    path: PathBuf,
}

impl MetricsLog {
    /// Log entries will be appended to the file at `path`, creating it on
    /// first use.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Append one entry.
    pub fn log(&self, entries: &[(&str, String)]) -> OutputResult<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;

        writeln!(file, "Metrics Log Entry:")?;
        for (key, value) in entries {
            writeln!(file, "{key}: {value}")?;
        }
        writeln!(file, "{}", "-".repeat(40))?;
        Ok(())
    }
}
