//! `rdv-comms` — the obstacle exchange channel for the `rust_rdv`
//! multi-robot simulation.
//!
//! One [`ExchangeChannel`] is owned by the coordinator and passed explicitly
//! into agent calls; there is no process-wide mailbox.  Entries are valid
//! for exactly one tick and the coordinator clears the channel
//! unconditionally at every tick boundary.

pub mod channel;


pub use channel::ExchangeChannel;
