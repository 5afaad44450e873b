//! Monadic combinators over [`Outcome`].
//!
//! Combinators are the only way an outcome changes shape after
//! construction. Each one consumes the outcome and returns a new value;
//! none mutate in place. Every combinator is total over the three states:
//! the empty state is routed explicitly, never collapsed into a default.

use super::outcome::Outcome;

impl<T, E> Outcome<T, E> {
    /// Apply `f` to the success value, keeping the outcome's type.
    ///
    /// Error and empty outcomes pass through unchanged. For a continuation
    /// that switches the success type, use [`and_then`](Self::and_then).
    ///
    /// # Example
    ///
    /// ```rust
    /// use outcome::Outcome;
    ///
    /// let doubled: Outcome<i32, String> = Outcome::success(21).map(|v| v * 2);
    /// assert_eq!(doubled.value_or(0), 42);
    ///
    /// let failed: Outcome<i32, String> = Outcome::error("boom".to_string());
    /// assert!(failed.map(|v| v * 2).is_error());
    /// ```
    pub fn map<F>(self, f: F) -> Self
    where
        F: FnOnce(T) -> T,
    {
        match self {
            Self::Success(value) => Self::Success(f(value)),
            Self::Error(error) => Self::Error(error),
            Self::Empty => Self::Empty,
        }
    }

    /// Apply `f` to the error value, keeping the outcome's type.
    ///
    /// Success and empty outcomes pass through unchanged.
    pub fn map_error<F>(self, f: F) -> Self
    where
        F: FnOnce(E) -> E,
    {
        match self {
            Self::Success(value) => Self::Success(value),
            Self::Error(error) => Self::Error(f(error)),
            Self::Empty => Self::Empty,
        }
    }

    /// Continue a successful pipeline with `f`, which may change the
    /// success type.
    ///
    /// An error outcome carries its error forward under the new success
    /// type; an empty outcome stays empty.
    ///
    /// # Example
    ///
    /// ```rust
    /// use outcome::Outcome;
    ///
    /// fn half(v: f64) -> Outcome<f64, String> {
    ///     Outcome::success(v / 2.0)
    /// }
    ///
    /// let quarter = Outcome::<f64, String>::success(10.0)
    ///     .and_then(half)
    ///     .and_then(half);
    /// assert_eq!(quarter.value_or(f64::NAN), 2.5);
    /// ```
    pub fn and_then<U, F>(self, f: F) -> Outcome<U, E>
    where
        F: FnOnce(T) -> Outcome<U, E>,
    {
        match self {
            Self::Success(value) => f(value),
            Self::Error(error) => Outcome::Error(error),
            Self::Empty => Outcome::Empty,
        }
    }

    /// Recover from an error with `f`, which may change the error type.
    ///
    /// A success outcome carries its value forward under the new error
    /// type; an empty outcome stays empty.
    ///
    /// # Example
    ///
    /// ```rust
    /// use outcome::Outcome;
    ///
    /// let recovered: Outcome<f64, u32> = Outcome::<f64, String>::error("oops".to_string())
    ///     .or_else(|_| Outcome::success(f64::INFINITY));
    /// assert_eq!(recovered.value_or(0.0), f64::INFINITY);
    /// ```
    pub fn or_else<U, F>(self, f: F) -> Outcome<T, U>
    where
        F: FnOnce(E) -> Outcome<T, U>,
    {
        match self {
            Self::Success(value) => Outcome::Success(value),
            Self::Error(error) => f(error),
            Self::Empty => Outcome::Empty,
        }
    }

    /// Hand the whole outcome to `f`, which controls the output shape
    /// entirely, including both type parameters.
    pub fn transform<U, V, F>(self, f: F) -> Outcome<U, V>
    where
        F: FnOnce(Self) -> Outcome<U, V>,
    {
        f(self)
    }

    /// Invoke `f` on the outcome for its side effect, then return the
    /// outcome unchanged.
    ///
    /// The closure receives a shared reference, so it can observe but not
    /// mutate. This is the supported place to log or trace a pipeline.
    ///
    /// # Example
    ///
    /// ```rust
    /// use outcome::Outcome;
    ///
    /// let mut seen = false;
    /// let outcome: Outcome<i32, String> = Outcome::success(3).inspect(|o| {
    ///     seen = o.is_success();
    /// });
    ///
    /// assert!(seen);
    /// assert_eq!(outcome.value_or(0), 3);
    /// ```
    pub fn inspect<F>(self, f: F) -> Self
    where
        F: FnOnce(&Self),
    {
        f(&self);
        self
    }

    /// Merge with `fallback`, preferring this outcome's success.
    ///
    /// First success wins: a success value carries forward under the
    /// fallback's error type, while error and empty outcomes both yield the
    /// fallback unchanged.
    ///
    /// # Example
    ///
    /// ```rust
    /// use outcome::Outcome;
    ///
    /// let pending: Outcome<i32, String> = Outcome::empty();
    /// let merged: Outcome<i32, u32> = pending.either(Outcome::success(9));
    /// assert_eq!(merged.value_or(0), 9);
    /// ```
    pub fn either<U>(self, fallback: Outcome<T, U>) -> Outcome<T, U> {
        match self {
            Self::Success(value) => Outcome::Success(value),
            Self::Error(_) | Self::Empty => fallback,
        }
    }
}
