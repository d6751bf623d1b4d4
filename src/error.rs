//! Errors returned by the trip planning engine.

use thiserror::Error;

/// Errors the engine can return from [`crate::engine::plan`].
#[derive(Debug, Error)]
pub enum EngineError {
    /// A caller-supplied value falls outside the accepted range or shape.
    #[error("invalid input: {reason}")]
    InvalidInput {
        /// What was wrong with the input.
        reason: String,
    },
    /// The trip cannot be completed under HOS rules even with restarts.
    #[error("infeasible trip: {reason}")]
    InfeasibleTrip {
        /// Why the trip cannot be completed.
        reason: String,
    },
    /// An invariant the engine relies on was violated; indicates a bug.
    #[error("internal inconsistency: {reason}")]
    InternalInconsistency {
        /// Which invariant was violated.
        reason: String,
    },
    /// The driving loop exceeded its iteration budget without finishing.
    #[error("exceeded {iterations} iterations without completing the trip")]
    Bounded {
        /// The iteration count at which the engine gave up.
        iterations: usize,
    },
}
