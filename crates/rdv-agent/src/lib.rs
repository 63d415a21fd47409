//! `rdv-agent` — the [`Robot`] type for the `rust_rdv` multi-robot
//! simulation.
//!
//! A robot owns its position, a private belief grid, its current route, and
//! cumulative counters.  Ground truth and the exchange channel are passed
//! explicitly into the calls that need them; a robot holds no reference to
//! shared state between calls.

pub mod robot;


pub use robot::Robot;
