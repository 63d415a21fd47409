//! `rdv-sim` — tick loop coordinator for the `rust_rdv` multi-robot
//! simulation.
//!
//! # Tick state machine
//!
//! ```text
//! for each tick, robots in ascending-id (priority) order, finished skipped:
//!   ① Sense      — compare belief vs ground truth around the robot
//!   ② Broadcast  — publish discrepancies to the exchange channel
//!   ③ Receive    — patch belief from peers' broadcasts (earlier robots'
//!                  broadcasts from THIS tick included — intentional)
//!   ④ Plan       — only if no route is currently held
//!   ⑤ Move       — rendezvous entry is unconditional; otherwise the
//!                  intended cell is checked against the reservation set:
//!                    reserved   → wait counter++, forced re-plan at the
//!                                 threshold, no move
//!                    unreserved → move (stale steps re-plan internally),
//!                                 reserve the resulting cell
//! channel cleared at tick end; loop ends when all robots are finished or
//! the tick cap is reached (a reported outcome, not an error)
//! ```
//!
//! Everything runs on a single logical thread.  The strict per-tick ordering
//! IS the conflict-resolution mechanism — earlier-processed robots win
//! contested cells and their broadcasts are visible to later robots in the
//! same tick — so no phase may be parallelized or reordered.

pub mod builder;
pub mod error;
pub mod observer;
pub mod sim;


pub use builder::SimBuilder;
pub use error::{SimError, SimResult};
pub use observer::{NoopObserver, SimObserver};
pub use sim::{RunReport, Sim};
