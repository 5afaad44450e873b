//! Property-based tests for the outcome container.
//!
//! These tests use proptest to verify the combinator laws and accessor
//! contracts hold across many randomly generated inputs.

use outcome::{Outcome, OutcomeState};
use proptest::prelude::*;

#[derive(Clone, Debug, PartialEq)]
struct Wrapped(i64);

impl From<i64> for Wrapped {
    fn from(value: i64) -> Self {
        Wrapped(value)
    }
}

impl From<Wrapped> for i64 {
    fn from(wrapped: Wrapped) -> Self {
        wrapped.0
    }
}

prop_compose! {
    fn arbitrary_outcome()(
        variant in 0..3u8,
        value in any::<i64>(),
        error in "[a-z ]{0,16}",
    ) -> Outcome<i64, String> {
        match variant {
            0 => Outcome::success(value),
            1 => Outcome::error(error),
            _ => Outcome::empty(),
        }
    }
}

proptest! {
    #[test]
    fn read_accessors_are_idempotent(outcome in arbitrary_outcome()) {
        prop_assert_eq!(outcome.state(), outcome.state());
        prop_assert_eq!(outcome.is_success(), outcome.is_success());
        prop_assert_eq!(outcome.success_value(), outcome.success_value());
        prop_assert_eq!(outcome.error_value(), outcome.error_value());
        prop_assert_eq!(outcome.value(), outcome.value());
    }

    #[test]
    fn state_agrees_with_predicates(outcome in arbitrary_outcome()) {
        prop_assert_eq!(outcome.state().is_success(), outcome.is_success());
        prop_assert_eq!(outcome.state().is_error(), outcome.is_error());
        prop_assert_eq!(outcome.state().is_empty(), outcome.is_empty());
    }

    #[test]
    fn exactly_one_state_holds(outcome in arbitrary_outcome()) {
        let flags = [outcome.is_success(), outcome.is_error(), outcome.is_empty()];
        prop_assert_eq!(flags.iter().filter(|&&f| f).count(), 1);
    }

    #[test]
    fn map_identity_preserves_outcome(outcome in arbitrary_outcome()) {
        prop_assert_eq!(outcome.clone().map(|v| v), outcome);
    }

    #[test]
    fn map_only_touches_success(outcome in arbitrary_outcome()) {
        let mapped = outcome.clone().map(|v| v.wrapping_add(1));
        prop_assert_eq!(mapped.state(), outcome.state());
        if !outcome.is_success() {
            prop_assert_eq!(mapped, outcome);
        }
    }

    #[test]
    fn map_error_only_touches_error(outcome in arbitrary_outcome()) {
        let mapped = outcome.clone().map_error(|e| format!("wrapped: {e}"));
        prop_assert_eq!(mapped.state(), outcome.state());
        if !outcome.is_error() {
            prop_assert_eq!(mapped, outcome);
        }
    }

    #[test]
    fn and_then_satisfies_left_identity(value in any::<i64>()) {
        let f = |v: i64| {
            if v % 2 == 0 {
                Outcome::<i64, String>::success(v / 2)
            } else {
                Outcome::error("odd".to_string())
            }
        };
        prop_assert_eq!(Outcome::<i64, String>::success(value).and_then(f), f(value));
    }

    #[test]
    fn or_else_satisfies_left_identity(error in "[a-z ]{0,16}") {
        let f = |e: String| Outcome::<i64, usize>::error(e.len());
        prop_assert_eq!(
            Outcome::<i64, String>::error(error.clone()).or_else(f),
            f(error)
        );
    }

    #[test]
    fn either_first_success_wins(
        outcome in arbitrary_outcome(),
        fallback in arbitrary_outcome(),
    ) {
        let merged = outcome.clone().either(fallback.clone());

        if outcome.is_success() {
            prop_assert_eq!(merged.success_value(), outcome.success_value());
        } else {
            prop_assert_eq!(merged, fallback);
        }
    }

    #[test]
    fn value_or_is_total(outcome in arbitrary_outcome(), default in any::<i64>()) {
        let expected = match outcome.success_value() {
            Some(&value) => value,
            None => default,
        };
        prop_assert_eq!(outcome.value_or(default), expected);
    }

    #[test]
    fn take_leaves_source_empty(outcome in arbitrary_outcome()) {
        let mut slot = outcome.clone();
        let taken = slot.take();

        prop_assert_eq!(taken, outcome);
        prop_assert_eq!(slot.state(), OutcomeState::Empty);
    }

    #[test]
    fn inspect_returns_outcome_unchanged(outcome in arbitrary_outcome()) {
        let mut observed = None;
        let inspected = outcome.clone().inspect(|o| observed = Some(o.state()));

        prop_assert_eq!(observed, Some(outcome.state()));
        prop_assert_eq!(inspected, outcome);
    }

    #[test]
    fn success_conversion_round_trips(outcome in arbitrary_outcome()) {
        let round_tripped: Outcome<i64, String> =
            outcome.clone().success_into::<Wrapped>().success_into();
        prop_assert_eq!(round_tripped, outcome);
    }

    #[test]
    fn json_roundtrip_preserves_outcome(outcome in arbitrary_outcome()) {
        let json = serde_json::to_string(&outcome).unwrap();
        let deserialized: Outcome<i64, String> = serde_json::from_str(&json).unwrap();
        prop_assert_eq!(outcome, deserialized);
    }

    #[test]
    fn binary_roundtrip_preserves_outcome(outcome in arbitrary_outcome()) {
        let bytes = bincode::serialize(&outcome).unwrap();
        let deserialized: Outcome<i64, String> = bincode::deserialize(&bytes).unwrap();
        prop_assert_eq!(outcome, deserialized);
    }
}
