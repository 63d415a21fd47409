//! `rdv-core` — foundational types for the `rust_rdv` multi-robot simulation.
//!
//! This crate is a dependency of every other `rdv-*` crate.  It intentionally
//! has no `rdv-*` dependencies and minimal external ones (only optional
//! `serde`).
//!
//! # What lives here
//!
//! | Module   | Contents                                   |
//! |----------|--------------------------------------------|
//! | [`ids`]  | `RobotId`                                  |
//! | [`pos`]  | `Pos`, Manhattan and Euclidean distances   |
//! | [`time`] | `Tick`, `SimConfig`                        |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                              |
//! |---------|-----------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types. |

pub mod ids;
pub mod pos;
pub mod time;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use ids::RobotId;
pub use pos::Pos;
pub use time::{SimConfig, Tick};
