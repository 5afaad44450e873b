//! Outcome: a pure functional result container
//!
//! Outcome is a three-state discriminated container for propagating and
//! composing fallible computations without exceptions or error codes. The
//! container is a plain value with a pure core: construction, accessors,
//! and combinators are all side-effect free, and visibility into a
//! pipeline goes through an explicit [`inspect`](Outcome::inspect) tap
//! rather than hidden logging.
//!
//! # Core Concepts
//!
//! - **Three states**: an [`Outcome`] holds a success value, an error
//!   value, or nothing at all ([`OutcomeState`])
//! - **Combinators**: pipelines compose through `map`, `and_then`,
//!   `or_else` and friends, each producing a new outcome
//! - **Explicit failures**: success-only accessors return an
//!   [`AccessError`] value instead of panicking
//!
//! # Example
//!
//! ```rust
//! use outcome::Outcome;
//!
//! fn div(a: f64, b: f64) -> Outcome<f64, String> {
//!     if b == 0.0 {
//!         Outcome::error("Division by zero error".to_string())
//!     } else {
//!         Outcome::success(a / b)
//!     }
//! }
//!
//! let quarter = div(10.0, 2.0).and_then(|v| div(v, 2.0));
//! assert_eq!(quarter.value_or(f64::NAN), 2.5);
//!
//! let recovered = div(5.0, 0.0).or_else(|_| Outcome::<f64, String>::success(f64::INFINITY));
//! assert!(recovered.is_success());
//! ```

pub mod core;

// Re-export commonly used types
pub use crate::core::{AccessError, ConstructError, Outcome, OutcomeState};
