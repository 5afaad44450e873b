//! Discriminant for the three outcome states.
//!
//! Every outcome is in exactly one of these states at any time. The
//! discriminant is exposed so callers can make three-way decisions that
//! a plain "did it work" boolean cannot express.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The three mutually exclusive states an outcome can be in.
///
/// - `Empty`: no computation has produced a payload yet
/// - `Success`: a success payload is live
/// - `Error`: an error payload is live
///
/// # Example
///
/// ```rust
/// use outcome::{Outcome, OutcomeState};
///
/// let done: Outcome<i32, String> = Outcome::success(7);
/// assert_eq!(done.state(), OutcomeState::Success);
///
/// let pending: Outcome<i32, String> = Outcome::empty();
/// assert_eq!(pending.state(), OutcomeState::Empty);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum OutcomeState {
    /// No payload is live.
    Empty,
    /// A success payload is live.
    Success,
    /// An error payload is live.
    Error,
}

impl OutcomeState {
    /// Get the state's name for display/logging.
    ///
    /// # Example
    ///
    /// ```rust
    /// use outcome::OutcomeState;
    ///
    /// assert_eq!(OutcomeState::Success.name(), "success");
    /// assert_eq!(OutcomeState::Empty.name(), "empty");
    /// ```
    pub fn name(&self) -> &str {
        match self {
            Self::Empty => "empty",
            Self::Success => "success",
            Self::Error => "error",
        }
    }

    /// Check if this is the success state.
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success)
    }

    /// Check if this is the error state.
    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error)
    }

    /// Check if this is the empty state.
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }
}

impl fmt::Display for OutcomeState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn state_name_returns_correct_value() {
        assert_eq!(OutcomeState::Empty.name(), "empty");
        assert_eq!(OutcomeState::Success.name(), "success");
        assert_eq!(OutcomeState::Error.name(), "error");
    }

    #[test]
    fn state_predicates_identify_each_state() {
        assert!(OutcomeState::Success.is_success());
        assert!(!OutcomeState::Success.is_error());
        assert!(!OutcomeState::Success.is_empty());

        assert!(OutcomeState::Error.is_error());
        assert!(!OutcomeState::Error.is_success());

        assert!(OutcomeState::Empty.is_empty());
        assert!(!OutcomeState::Empty.is_success());
    }

    #[test]
    fn state_display_matches_name() {
        assert_eq!(OutcomeState::Empty.to_string(), "empty");
        assert_eq!(OutcomeState::Success.to_string(), "success");
        assert_eq!(OutcomeState::Error.to_string(), "error");
    }

    #[test]
    fn state_serializes_correctly() {
        let state = OutcomeState::Error;
        let json = serde_json::to_string(&state).unwrap();
        let deserialized: OutcomeState = serde_json::from_str(&json).unwrap();
        assert_eq!(state, deserialized);
    }

    #[test]
    fn state_is_comparable() {
        assert_eq!(OutcomeState::Success, OutcomeState::Success);
        assert_ne!(OutcomeState::Success, OutcomeState::Error);
    }
}
