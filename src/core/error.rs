//! Error types raised by outcome accessors and constructors.

use super::state::OutcomeState;
use thiserror::Error;

/// Errors raised by success-only accessors.
///
/// Only [`value`](crate::Outcome::value) and
/// [`expect`](crate::Outcome::expect) produce these; the optional accessors
/// and the combinators never fail.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AccessError {
    /// The outcome was not holding a success payload.
    #[error("invalid state for value access, outcome state was: {state}")]
    InvalidState {
        /// The state the outcome was actually in.
        state: OutcomeState,
    },

    /// A caller-supplied expectation was not met.
    #[error("{message}")]
    UnmetExpectation {
        /// The message passed to `expect`, verbatim.
        message: String,
    },
}

/// Errors raised when assembling an outcome from a runtime state and
/// payloads. Reported at construction time, never deferred to first use.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConstructError {
    #[error("success state requires a success payload. Pass Some(value)")]
    MissingValue,

    #[error("error state requires an error payload. Pass Some(error)")]
    MissingError,

    #[error("{state} state cannot carry a {payload} payload")]
    StrayPayload {
        state: OutcomeState,
        payload: &'static str,
    },
}
