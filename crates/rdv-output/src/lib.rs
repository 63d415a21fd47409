//! `rdv-output` — simulation output writers for the `rust_rdv` simulation.
//!
//! Two tabular backends are provided behind Cargo features:
//!
//! | Feature  | Backend | Files created                                             |
//! |----------|---------|-----------------------------------------------------------|
//! | *(none)* | CSV     | `tick_summaries.csv`, `robot_stats.csv`, `robot_traces.csv` |
//! | `sqlite` | SQLite  | `output.db`                                               |
//!
//! Both implement [`OutputWriter`] and are driven by [`SimOutputObserver`],
//! which implements `rdv_sim::SimObserver`.  [`MetricsLog`] is a separate
//! append-only plain-text sink for human-readable run summaries.
//!
//! # Usage
//!
//! ```rust,ignore
//! use rdv_output::{CsvWriter, SimOutputObserver};
//!
//! let writer = CsvWriter::new(Path::new("./output"))?;
//! let mut obs = SimOutputObserver::new(writer);
//! let report = sim.run(&mut obs);
//! if let Some(e) = obs.take_error() {
//!     eprintln!("output error: {e}");
//! }
//! ```

pub mod csv;
pub mod error;
pub mod metrics;
pub mod observer;
pub mod row;
pub mod writer;

#[cfg(feature = "sqlite")]
pub mod sqlite;


pub use csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use metrics::MetricsLog;
pub use observer::SimOutputObserver;
pub use row::{RobotStatsRow, TickSummaryRow, TraceRow};
pub use writer::OutputWriter;

#[cfg(feature = "sqlite")]
pub use sqlite::SqliteWriter;
