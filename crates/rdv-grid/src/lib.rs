//! `rdv-grid` — occupancy grid, shortest-path search, and scenario loading
//! for the `rust_rdv` multi-robot simulation.
//!
//! # What lives here
//!
//! | Module     | Contents                                            |
//! |------------|-----------------------------------------------------|
//! | [`grid`]   | `Cell`, `Grid`, bounds/validity checks, neighbors   |
//! | [`search`] | `astar`, the `Heuristic` trait, `Manhattan`/`Euclidean` |
//! | [`loader`] | `Scenario`, plain-text scenario file parsing        |
//! | [`error`]  | `GridError`, `GridResult`                           |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                              |
//! |---------|-----------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types. |

pub mod error;
pub mod grid;
pub mod loader;
pub mod search;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{GridError, GridResult};
pub use grid::{Cell, Grid};
pub use loader::{load_scenario, load_scenario_reader, Scenario};
pub use search::{astar, Euclidean, Heuristic, Manhattan, Path, STEP_COST};
