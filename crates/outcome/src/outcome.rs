use serde::Serialize;

use crate::{stringify, AccessError};

/// The text [`Outcome::unwrap`] prefixes to the stringified error.
pub const UNWRAP_PREFIX: &str = "unwrap() called on Error: ";

/// Either a success value (`Ok`) or a failure value (`Err`), never both.
///
/// Matching on the variants narrows the held value to `T` or `E`:
///
/// ```
/// use outcome::Outcome;
///
/// let result: Outcome<f64, String> = Outcome::Err(String::from("Cannot divide by 0"));
/// match &result {
///     Outcome::Ok(val) => println!("got {val}"),
///     Outcome::Err(val) => assert_eq!(val, "Cannot divide by 0"),
/// }
/// ```
#[must_use = "this `Outcome` may be an `Err` variant, which should be handled"]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Outcome<T, E> {
    Ok(T),
    Err(E),
}

/// Creates an `Ok` outcome.
pub const fn ok<T, E>(val: T) -> Outcome<T, E> {
    Outcome::Ok(val)
}

/// Creates an `Err` outcome.
pub const fn err<T, E>(val: E) -> Outcome<T, E> {
    Outcome::Err(val)
}

impl<T, E> Outcome<T, E> {
    #[inline]
    pub const fn is_ok(&self) -> bool {
        matches!(self, Self::Ok(..))
    }

    #[inline]
    pub const fn is_err(&self) -> bool {
        matches!(self, Self::Err(..))
    }

    pub const fn as_ref(&self) -> Outcome<&T, &E> {
        match self {
            Self::Ok(val) => Outcome::Ok(val),
            Self::Err(val) => Outcome::Err(val),
        }
    }

    pub fn ok(self) -> Option<T> {
        match self {
            Self::Ok(val) => Some(val),
            Self::Err(..) => None,
        }
    }

    pub fn err(self) -> Option<E> {
        match self {
            Self::Ok(..) => None,
            Self::Err(val) => Some(val),
        }
    }

    /// Returns the `Ok` value, or panics with `msg` if this is an `Err`.
    #[track_caller]
    pub fn expect(self, msg: &str) -> T {
        match self.try_expect(msg) {
            Ok(val) => val,
            Err(error) => fail(error),
        }
    }

    /// Returns the `Err` value, or panics with `msg` if this is an `Ok`.
    #[track_caller]
    pub fn expect_err(self, msg: &str) -> E {
        match self.try_expect_err(msg) {
            Ok(val) => val,
            Err(error) => fail(error),
        }
    }

    /// Returns the `Ok` value, or panics with [`UNWRAP_PREFIX`] followed by
    /// the [stringified](crate::stringify()) error.
    #[track_caller]
    pub fn unwrap(self) -> T
    where
        E: Serialize,
    {
        match self.try_unwrap() {
            Ok(val) => val,
            Err(error) => fail(error),
        }
    }

    /// Returns the `Ok` value, or `default` if this is an `Err`.
    pub fn unwrap_or(self, default: T) -> T {
        match self {
            Self::Ok(val) => val,
            Self::Err(..) => default,
        }
    }

    pub fn try_expect(self, msg: &str) -> Result<T, AccessError> {
        match self {
            Self::Ok(val) => Ok(val),
            Self::Err(..) => Err(AccessError::Expect {
                message: msg.to_string(),
            }),
        }
    }

    pub fn try_expect_err(self, msg: &str) -> Result<E, AccessError> {
        match self {
            Self::Ok(..) => Err(AccessError::ExpectErr {
                message: msg.to_string(),
            }),
            Self::Err(val) => Ok(val),
        }
    }

    /// Like [`Outcome::unwrap`], but returns [`AccessError::Unwrap`] instead of
    /// panicking. Its text starts with [`UNWRAP_PREFIX`].
    pub fn try_unwrap(self) -> Result<T, AccessError>
    where
        E: Serialize,
    {
        match self {
            Self::Ok(val) => Ok(val),
            Self::Err(val) => Err(AccessError::Unwrap {
                error: stringify(&val),
            }),
        }
    }

    pub fn into_result(self) -> Result<T, E> {
        self.into()
    }
}

#[track_caller]
fn fail(error: AccessError) -> ! {
    panic!("{error}")
}

impl<T, E> From<Result<T, E>> for Outcome<T, E> {
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(val) => Self::Ok(val),
            Err(val) => Self::Err(val),
        }
    }
}

impl<T, E> From<Outcome<T, E>> for Result<T, E> {
    fn from(outcome: Outcome<T, E>) -> Self {
        match outcome {
            Outcome::Ok(val) => Ok(val),
            Outcome::Err(val) => Err(val),
        }
    }
}
