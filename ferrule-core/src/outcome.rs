//! A fallible value: [`Outcome::Ok`] holding a `T`, or [`Outcome::Err`]
//! holding an error `E`.
//!
//! Every operation requires `E: std::error::Error`, so a failure always
//! carries a human-readable description. [`Outcome::unwrap`] embeds that
//! description in its panic message.
//!
//! Type-changing combinators are free functions:
//!
//! | Function | `Ok(x)` | `Err(e)` |
//! |----------|---------|----------|
//! | [`map`] | `Ok(f(x))` | `Err(e)` |
//! | [`map_or`] | `f(x)` | `default` |
//! | [`map_or_else`] | `f(x)` | `default(e)` |
//! | [`map_err`] | `Ok(x)` | `Err(f(e))` |
//! | [`and`] | `other` | `Err(e)` |
//! | [`and_then`] | `f(x)` | `Err(e)` |
//! | [`or`] | `Ok(x)` | `other` |
//! | [`or_else`] | `Ok(x)` | `f(e)` |

use std::error::Error;
use std::fmt;

use crate::{Maybe, Once};

/// The outcome of an operation that either succeeds with `T` or fails
/// with `E`.
///
/// # Example
///
/// ```
/// use ferrule_core::{Maybe, Outcome, outcome};
/// use std::num::ParseIntError;
///
/// let parsed: Outcome<u8, ParseIntError> = "42".parse::<u8>().into();
/// assert!(parsed.is_ok_with(|v| *v == 42));
///
/// let failed: Outcome<u8, ParseIntError> = "x".parse::<u8>().into();
/// assert_eq!(failed.clone().ok(), Maybe::None);
///
/// let len = outcome::map_or(failed, 0, |v| v as usize);
/// assert_eq!(len, 0);
/// ```
#[must_use]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Outcome<T, E> {
    /// Success value.
    Ok(T),
    /// Failure value.
    Err(E),
}

impl<T, E: Error> Outcome<T, E> {
    /// Returns `true` on success.
    #[inline]
    pub const fn is_ok(&self) -> bool {
        matches!(self, Outcome::Ok(_))
    }

    /// Returns `true` on success with a value satisfying `pred`.
    ///
    /// `pred` is not called on `Err`.
    #[inline]
    pub fn is_ok_with(&self, pred: impl FnOnce(&T) -> bool) -> bool {
        match self {
            Outcome::Ok(v) => pred(v),
            Outcome::Err(_) => false,
        }
    }

    /// Returns `true` on failure.
    #[inline]
    pub const fn is_err(&self) -> bool {
        !self.is_ok()
    }

    /// Returns `true` on failure with an error satisfying `pred`.
    ///
    /// `pred` is not called on `Ok`.
    #[inline]
    pub fn is_err_with(&self, pred: impl FnOnce(&E) -> bool) -> bool {
        match self {
            Outcome::Ok(_) => false,
            Outcome::Err(e) => pred(e),
        }
    }

    /// Keeps the success value, discarding any error.
    #[inline]
    pub fn ok(self) -> Maybe<T> {
        match self {
            Outcome::Ok(v) => Maybe::Some(v),
            Outcome::Err(_) => Maybe::None,
        }
    }

    /// Keeps the error, discarding any success value.
    #[inline]
    pub fn err(self) -> Maybe<E> {
        match self {
            Outcome::Ok(_) => Maybe::None,
            Outcome::Err(e) => Maybe::Some(e),
        }
    }

    /// Borrows both payloads.
    #[inline]
    pub const fn as_ref(&self) -> Outcome<&T, &E> {
        match self {
            Outcome::Ok(v) => Outcome::Ok(v),
            Outcome::Err(e) => Outcome::Err(e),
        }
    }

    /// Returns a cursor over a reference to the success value.
    ///
    /// Yields one element on `Ok`, none on `Err`.
    #[inline]
    pub fn iter(&self) -> Once<&T> {
        Once::new(self.as_ref().ok())
    }

    /// Returns a cursor yielding the success value.
    #[inline]
    pub fn into_cursor(self) -> Once<T> {
        Once::new(self.ok())
    }

    /// Returns the success value.
    ///
    /// # Panics
    ///
    /// Panics on `Err` with `msg` followed by the error's description.
    #[inline]
    #[track_caller]
    pub fn expect(self, msg: &str) -> T {
        match self {
            Outcome::Ok(v) => v,
            Outcome::Err(e) => fail(msg, &e),
        }
    }

    /// Returns the error.
    ///
    /// # Panics
    ///
    /// Panics with `msg` on `Ok`.
    #[inline]
    #[track_caller]
    pub fn expect_err(self, msg: &str) -> E {
        match self {
            Outcome::Ok(_) => fail_ok(msg),
            Outcome::Err(e) => e,
        }
    }

    /// Returns the success value.
    ///
    /// # Panics
    ///
    /// Panics on `Err`, embedding the error's description in the message.
    #[inline]
    #[track_caller]
    pub fn unwrap(self) -> T {
        match self {
            Outcome::Ok(v) => v,
            Outcome::Err(e) => fail_unwrap(&e),
        }
    }

    /// Returns the error.
    ///
    /// # Panics
    ///
    /// Panics on `Ok`.
    #[inline]
    #[track_caller]
    pub fn unwrap_err(self) -> E {
        self.expect_err("called `Outcome::unwrap_err()` on an `Ok` value")
    }

    /// Returns the success value or `default`.
    #[inline]
    pub fn unwrap_or(self, default: T) -> T {
        match self {
            Outcome::Ok(v) => v,
            Outcome::Err(_) => default,
        }
    }

    /// Returns the success value or computes one from the error.
    #[inline]
    pub fn unwrap_or_else(self, f: impl FnOnce(E) -> T) -> T {
        match self {
            Outcome::Ok(v) => v,
            Outcome::Err(e) => f(e),
        }
    }

    /// Returns the success value or `T::default()`.
    #[inline]
    pub fn unwrap_or_default(self) -> T
    where
        T: Default,
    {
        match self {
            Outcome::Ok(v) => v,
            Outcome::Err(_) => T::default(),
        }
    }

    /// Converts to a std [`Result`].
    #[inline]
    pub fn into_result(self) -> Result<T, E> {
        self.into()
    }
}

#[cold]
#[track_caller]
fn fail(msg: &str, err: &dyn fmt::Display) -> ! {
    panic!("{msg}: {err}")
}

#[cold]
#[track_caller]
fn fail_unwrap(err: &dyn fmt::Display) -> ! {
    panic!("called `Outcome::unwrap()` on an `Err` value: \"{err}\"")
}

#[cold]
#[track_caller]
fn fail_ok(msg: &str) -> ! {
    panic!("{msg}")
}

impl<T, E> From<Result<T, E>> for Outcome<T, E> {
    #[inline]
    fn from(value: Result<T, E>) -> Self {
        match value {
            Ok(v) => Outcome::Ok(v),
            Err(e) => Outcome::Err(e),
        }
    }
}

impl<T, E> From<Outcome<T, E>> for Result<T, E> {
    #[inline]
    fn from(value: Outcome<T, E>) -> Self {
        match value {
            Outcome::Ok(v) => Ok(v),
            Outcome::Err(e) => Err(e),
        }
    }
}

// ============================================================================
// Combinators
// ============================================================================

/// Applies `f` to a success value; an error passes through.
#[inline]
pub fn map<T, U, E: Error>(x: Outcome<T, E>, f: impl FnOnce(T) -> U) -> Outcome<U, E> {
    match x {
        Outcome::Ok(v) => Outcome::Ok(f(v)),
        Outcome::Err(e) => Outcome::Err(e),
    }
}

/// Applies `f` to a success value, or returns `default`.
#[inline]
pub fn map_or<T, U, E: Error>(x: Outcome<T, E>, default: U, f: impl FnOnce(T) -> U) -> U {
    match x {
        Outcome::Ok(v) => f(v),
        Outcome::Err(_) => default,
    }
}

/// Applies `f` to a success value, or `default` to the error.
#[inline]
pub fn map_or_else<T, U, E: Error>(
    x: Outcome<T, E>,
    default: impl FnOnce(E) -> U,
    f: impl FnOnce(T) -> U,
) -> U {
    match x {
        Outcome::Ok(v) => f(v),
        Outcome::Err(e) => default(e),
    }
}

/// Converts the error with `f`; a success value passes through.
#[inline]
pub fn map_err<T, E: Error, F: Error>(x: Outcome<T, E>, f: impl FnOnce(E) -> F) -> Outcome<T, F> {
    match x {
        Outcome::Ok(v) => Outcome::Ok(v),
        Outcome::Err(e) => Outcome::Err(f(e)),
    }
}

/// Returns `other` if `x` succeeded, otherwise `x`'s error.
///
/// A failure held by `other` propagates as-is.
#[inline]
pub fn and<T, U, E: Error>(x: Outcome<T, E>, other: Outcome<U, E>) -> Outcome<U, E> {
    match x {
        Outcome::Ok(_) => other,
        Outcome::Err(e) => Outcome::Err(e),
    }
}

/// Chains a fallible computation onto a success value, short-circuiting on
/// error.
#[inline]
pub fn and_then<T, U, E: Error>(
    x: Outcome<T, E>,
    f: impl FnOnce(T) -> Outcome<U, E>,
) -> Outcome<U, E> {
    match x {
        Outcome::Ok(v) => f(v),
        Outcome::Err(e) => Outcome::Err(e),
    }
}

/// Returns `x`'s success value, otherwise `other`.
#[inline]
pub fn or<T, E: Error, F: Error>(x: Outcome<T, E>, other: Outcome<T, F>) -> Outcome<T, F> {
    match x {
        Outcome::Ok(v) => Outcome::Ok(v),
        Outcome::Err(_) => other,
    }
}

/// Returns `x`'s success value, otherwise recovers from the error with `f`.
#[inline]
pub fn or_else<T, E: Error, F: Error>(
    x: Outcome<T, E>,
    f: impl FnOnce(E) -> Outcome<T, F>,
) -> Outcome<T, F> {
    match x {
        Outcome::Ok(v) => Outcome::Ok(v),
        Outcome::Err(e) => f(e),
    }
}
