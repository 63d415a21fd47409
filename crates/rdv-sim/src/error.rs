//! Error types for rdv-sim.

use rdv_core::Pos;
use thiserror::Error;

/// Configuration errors surfaced by [`SimBuilder`][crate::SimBuilder] before
/// any simulation state is constructed.  Nothing in a running simulation
/// produces an error: unreachable goals yield no move, stale plans re-plan
/// locally, and tick-cap exhaustion is a reported outcome.
#[derive(Debug, Error)]
pub enum SimError {
    #[error("rendezvous position {0} is outside the grid")]
    RendezvousOutOfBounds(Pos),

    #[error("robot {robot} starting position {pos} is outside the grid")]
    StartOutOfBounds { robot: usize, pos: Pos },
}

/// Alias for `Result<T, SimError>`.
pub type SimResult<T> = Result<T, SimError>;
