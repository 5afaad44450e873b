//! The three-state outcome container.
//!
//! `Outcome` is the crate's sole entity: a discriminated container that
//! holds exactly one of a success value, an error value, or nothing at all.
//! Everything here is pure and nothing panics; fallible accessors return
//! [`AccessError`] instead.

use super::error::{AccessError, ConstructError};
use super::state::OutcomeState;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Container for the result of a fallible computation.
///
/// An outcome holds either a success value of type `T`, an error value of
/// type `E`, or nothing (`Empty`, the "not yet computed" state). The enum
/// representation guarantees that at most one payload is live and that the
/// state always matches the live payload.
///
/// Outcomes are plain values: cloning duplicates the live payload (and is
/// only available when the payloads are `Clone`), moving transfers it, and
/// dropping releases it. There is no interior mutability and no I/O.
///
/// # Example
///
/// ```rust
/// use outcome::Outcome;
///
/// fn parse_port(raw: &str) -> Outcome<u16, String> {
///     match raw.parse() {
///         Ok(port) => Outcome::success(port),
///         Err(_) => Outcome::error(format!("not a port number: {raw}")),
///     }
/// }
///
/// assert_eq!(parse_port("8080").value_or(0), 8080);
/// assert!(parse_port("eighty").is_error());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome<T, E> {
    /// The computation produced a success value.
    Success(T),
    /// The computation produced an error value.
    Error(E),
    /// No computation has produced a payload yet.
    Empty,
}

impl<T, E> Default for Outcome<T, E> {
    fn default() -> Self {
        Self::Empty
    }
}

impl<T, E> Outcome<T, E> {
    /// Create an outcome holding a success value.
    ///
    /// The constructor name is the discriminator, so construction stays
    /// unambiguous even when `T` and `E` are the same type.
    ///
    /// # Example
    ///
    /// ```rust
    /// use outcome::Outcome;
    ///
    /// // T and E coincide; the constructor names keep the states apart.
    /// let ok: Outcome<String, String> = Outcome::success("parsed".to_string());
    /// let bad: Outcome<String, String> = Outcome::error("parsed".to_string());
    ///
    /// assert!(ok.is_success());
    /// assert!(bad.is_error());
    /// ```
    pub fn success(value: T) -> Self {
        Self::Success(value)
    }

    /// Create an outcome holding an error value.
    ///
    /// # Example
    ///
    /// ```rust
    /// use outcome::Outcome;
    ///
    /// let failed: Outcome<i32, String> = Outcome::error("disk full".to_string());
    /// assert_eq!(failed.error_value(), Some(&"disk full".to_string()));
    /// ```
    pub fn error(error: E) -> Self {
        Self::Error(error)
    }

    /// Create an empty outcome, modelling "not yet computed".
    ///
    /// # Example
    ///
    /// ```rust
    /// use outcome::Outcome;
    ///
    /// let pending: Outcome<i32, String> = Outcome::empty();
    /// assert!(pending.is_empty());
    /// assert_eq!(pending.value_or(-1), -1);
    /// ```
    pub fn empty() -> Self {
        Self::Empty
    }

    /// Assemble an outcome from a runtime state and optional payloads.
    ///
    /// The payloads must match the requested state exactly: a success state
    /// with a value and nothing else, an error state with an error and
    /// nothing else, or an empty state with no payload at all. Every other
    /// combination fails fast with [`ConstructError`] rather than producing
    /// an inconsistent container.
    ///
    /// # Example
    ///
    /// ```rust
    /// use outcome::{ConstructError, Outcome, OutcomeState};
    ///
    /// let ok = Outcome::<i32, String>::from_parts(OutcomeState::Success, Some(3), None);
    /// assert_eq!(ok, Ok(Outcome::success(3)));
    ///
    /// let bad = Outcome::<i32, String>::from_parts(OutcomeState::Success, None, None);
    /// assert_eq!(bad, Err(ConstructError::MissingValue));
    /// ```
    pub fn from_parts(
        state: OutcomeState,
        value: Option<T>,
        error: Option<E>,
    ) -> Result<Self, ConstructError> {
        match state {
            OutcomeState::Success => match (value, error) {
                (Some(value), None) => Ok(Self::Success(value)),
                (None, _) => Err(ConstructError::MissingValue),
                (Some(_), Some(_)) => Err(ConstructError::StrayPayload {
                    state,
                    payload: "error",
                }),
            },
            OutcomeState::Error => match (value, error) {
                (None, Some(error)) => Ok(Self::Error(error)),
                (_, None) => Err(ConstructError::MissingError),
                (Some(_), Some(_)) => Err(ConstructError::StrayPayload {
                    state,
                    payload: "success",
                }),
            },
            OutcomeState::Empty => match (value, error) {
                (None, None) => Ok(Self::Empty),
                (Some(_), _) => Err(ConstructError::StrayPayload {
                    state,
                    payload: "success",
                }),
                (None, Some(_)) => Err(ConstructError::StrayPayload {
                    state,
                    payload: "error",
                }),
            },
        }
    }

    /// Get the current state (pure).
    pub fn state(&self) -> OutcomeState {
        match self {
            Self::Success(_) => OutcomeState::Success,
            Self::Error(_) => OutcomeState::Error,
            Self::Empty => OutcomeState::Empty,
        }
    }

    /// Check if the outcome holds a success value.
    ///
    /// This is the "did it work" boolean: `Error` and `Empty` both read
    /// false. Callers that need to tell those two apart should use
    /// [`state`](Self::state).
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// Check if the outcome holds an error value.
    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error(_))
    }

    /// Check if the outcome is empty.
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    /// Borrow the success value, if any. Never fails.
    ///
    /// # Example
    ///
    /// ```rust
    /// use outcome::Outcome;
    ///
    /// let done: Outcome<i32, String> = Outcome::success(9);
    /// assert_eq!(done.success_value(), Some(&9));
    /// assert_eq!(done.error_value(), None);
    /// ```
    pub fn success_value(&self) -> Option<&T> {
        match self {
            Self::Success(value) => Some(value),
            _ => None,
        }
    }

    /// Borrow the error value, if any. Never fails.
    pub fn error_value(&self) -> Option<&E> {
        match self {
            Self::Error(error) => Some(error),
            _ => None,
        }
    }

    /// Borrow the success value, or report which state got in the way.
    ///
    /// # Example
    ///
    /// ```rust
    /// use outcome::{AccessError, Outcome, OutcomeState};
    ///
    /// let failed: Outcome<i32, String> = Outcome::error("timeout".to_string());
    /// assert_eq!(
    ///     failed.value(),
    ///     Err(AccessError::InvalidState { state: OutcomeState::Error })
    /// );
    /// ```
    pub fn value(&self) -> Result<&T, AccessError> {
        match self {
            Self::Success(value) => Ok(value),
            _ => Err(AccessError::InvalidState { state: self.state() }),
        }
    }

    /// Extract the success value, or fall back to `default` for any
    /// non-success state. Total; never fails.
    ///
    /// # Example
    ///
    /// ```rust
    /// use outcome::Outcome;
    ///
    /// let failed: Outcome<i32, String> = Outcome::error("timeout".to_string());
    /// assert_eq!(failed.value_or(0), 0);
    ///
    /// let pending: Outcome<i32, String> = Outcome::empty();
    /// assert_eq!(pending.value_or(0), 0);
    /// ```
    pub fn value_or(self, default: T) -> T {
        match self {
            Self::Success(value) => value,
            _ => default,
        }
    }

    /// Borrow the success value, failing with the caller's own message.
    ///
    /// The message comes back verbatim inside
    /// [`AccessError::UnmetExpectation`], distinct from the generic
    /// [`AccessError::InvalidState`] so callers can attach context.
    ///
    /// # Example
    ///
    /// ```rust
    /// use outcome::{AccessError, Outcome};
    ///
    /// let pending: Outcome<i32, String> = Outcome::empty();
    /// let error = pending.expect("config should be loaded by now").unwrap_err();
    /// assert_eq!(error.to_string(), "config should be loaded by now");
    /// ```
    pub fn expect(&self, message: &str) -> Result<&T, AccessError> {
        match self {
            Self::Success(value) => Ok(value),
            _ => Err(AccessError::UnmetExpectation {
                message: message.to_string(),
            }),
        }
    }

    /// Move the outcome out, leaving `Empty` behind.
    ///
    /// # Example
    ///
    /// ```rust
    /// use outcome::Outcome;
    ///
    /// let mut slot: Outcome<i32, String> = Outcome::success(5);
    /// let taken = slot.take();
    ///
    /// assert_eq!(taken, Outcome::success(5));
    /// assert!(slot.is_empty());
    /// ```
    pub fn take(&mut self) -> Self {
        std::mem::replace(self, Self::Empty)
    }
}

/// Renders the live payload's text form: the success value when holding a
/// success, the error value when holding an error, and nothing at all (the
/// empty string) when empty.
impl<T: fmt::Display, E: fmt::Display> fmt::Display for Outcome<T, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Success(value) => value.fmt(f),
            Self::Error(error) => error.fmt(f),
            Self::Empty => Ok(()),
        }
    }
}
