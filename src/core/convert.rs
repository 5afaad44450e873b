//! Explicit cross-type conversions and standard library interop.
//!
//! Conversions never manufacture a payload that does not exist: states
//! without the relevant payload pass through untouched, and the empty
//! state surfaces as `None` at the `std::result` boundary instead of
//! masquerading as either branch. All conversions are named operations;
//! nothing converts implicitly.

use super::outcome::Outcome;

impl<T, E> Outcome<T, E> {
    /// Convert the success payload to `U`, leaving the other states
    /// untouched.
    ///
    /// # Example
    ///
    /// ```rust
    /// use outcome::Outcome;
    ///
    /// let narrow: Outcome<u16, String> = Outcome::success(8080);
    /// let wide: Outcome<u32, String> = narrow.success_into();
    /// assert_eq!(wide.value_or(0), 8080);
    ///
    /// // Converting the success type of an error outcome is a no-op on
    /// // the error payload.
    /// let failed: Outcome<u16, String> = Outcome::error("boom".to_string());
    /// let wide: Outcome<u32, String> = failed.success_into();
    /// assert_eq!(wide.error_value(), Some(&"boom".to_string()));
    /// ```
    pub fn success_into<U>(self) -> Outcome<U, E>
    where
        U: From<T>,
    {
        match self {
            Self::Success(value) => Outcome::Success(U::from(value)),
            Self::Error(error) => Outcome::Error(error),
            Self::Empty => Outcome::Empty,
        }
    }

    /// Convert the error payload to `U`, leaving the other states
    /// untouched.
    pub fn error_into<U>(self) -> Outcome<T, U>
    where
        U: From<E>,
    {
        match self {
            Self::Success(value) => Outcome::Success(value),
            Self::Error(error) => Outcome::Error(U::from(error)),
            Self::Empty => Outcome::Empty,
        }
    }

    /// Extract a `std::result::Result`, or `None` when empty.
    ///
    /// # Example
    ///
    /// ```rust
    /// use outcome::Outcome;
    ///
    /// let done: Outcome<i32, String> = Outcome::success(3);
    /// assert_eq!(done.into_result(), Some(Ok(3)));
    ///
    /// let pending: Outcome<i32, String> = Outcome::empty();
    /// assert_eq!(pending.into_result(), None);
    /// ```
    pub fn into_result(self) -> Option<Result<T, E>> {
        match self {
            Self::Success(value) => Some(Ok(value)),
            Self::Error(error) => Some(Err(error)),
            Self::Empty => None,
        }
    }
}

impl<T, E> From<Result<T, E>> for Outcome<T, E> {
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Self::Success(value),
            Err(error) => Self::Error(error),
        }
    }
}
