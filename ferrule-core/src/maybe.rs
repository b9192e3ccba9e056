//! An optional value: [`Maybe::Some`] holding a `T`, or [`Maybe::None`].
//!
//! Methods cover the predicates and the extraction family. Anything that can
//! change the payload type lives here as a free function:
//!
//! | Function | `Some(x)` | `None` |
//! |----------|-----------|--------|
//! | [`map`] | `Some(f(x))` | `None` |
//! | [`map_or`] | `f(x)` | `default` |
//! | [`map_or_else`] | `f(x)` | `default()` |
//! | [`and`] | `other` | `None` |
//! | [`and_then`] | `f(x)` | `None` |
//! | [`or`] | `Some(x)` | `other` |
//! | [`or_else`] | `Some(x)` | `f()` |

use std::mem;

use crate::{Cursor, Once, Outcome};

/// A value that may be absent.
///
/// Exactly one variant is held at a time, so `is_some()` and `is_none()`
/// are always complementary.
///
/// # Example
///
/// ```
/// use ferrule_core::{Maybe, maybe};
///
/// let port: Maybe<u16> = Maybe::Some(8080);
/// assert!(port.is_some_with(|p| *p > 1024));
///
/// let label = maybe::map_or(port, "none".to_string(), |p| p.to_string());
/// assert_eq!(label, "8080");
///
/// let missing: Maybe<u16> = Maybe::None;
/// assert_eq!(missing.unwrap_or(80), 80);
/// ```
#[must_use]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Maybe<T> {
    /// No value.
    None,
    /// Some value of type `T`.
    Some(T),
}

impl<T> Default for Maybe<T> {
    #[inline]
    fn default() -> Self {
        Maybe::None
    }
}

impl<T> Maybe<T> {
    /// Returns `true` if a value is present.
    #[inline]
    pub const fn is_some(&self) -> bool {
        matches!(self, Maybe::Some(_))
    }

    /// Returns `true` if a value is present and satisfies `pred`.
    ///
    /// `pred` is not called on `None`.
    #[inline]
    pub fn is_some_with(&self, pred: impl FnOnce(&T) -> bool) -> bool {
        match self {
            Maybe::Some(v) => pred(v),
            Maybe::None => false,
        }
    }

    /// Returns `true` if no value is present.
    #[inline]
    pub const fn is_none(&self) -> bool {
        !self.is_some()
    }

    /// Borrows the held value.
    #[inline]
    pub const fn as_ref(&self) -> Maybe<&T> {
        match self {
            Maybe::Some(v) => Maybe::Some(v),
            Maybe::None => Maybe::None,
        }
    }

    /// Mutably borrows the held value.
    #[inline]
    pub fn as_mut(&mut self) -> Maybe<&mut T> {
        match self {
            Maybe::Some(v) => Maybe::Some(v),
            Maybe::None => Maybe::None,
        }
    }

    /// Takes the value out, leaving `None` in its place.
    #[inline]
    pub fn take(&mut self) -> Maybe<T> {
        mem::replace(self, Maybe::None)
    }

    /// Returns the held value.
    ///
    /// # Panics
    ///
    /// Panics with `msg` if the value is `None`.
    #[inline]
    #[track_caller]
    pub fn expect(self, msg: &str) -> T {
        match self {
            Maybe::Some(v) => v,
            Maybe::None => fail(msg),
        }
    }

    /// Returns the held value.
    ///
    /// # Panics
    ///
    /// Panics if the value is `None`. Prefer [`unwrap_or`](Self::unwrap_or)
    /// and friends when absence is expected.
    #[inline]
    #[track_caller]
    pub fn unwrap(self) -> T {
        self.expect("called `Maybe::unwrap()` on a `None` value")
    }

    /// Returns the held value or `default`.
    ///
    /// `default` is evaluated by the caller before the call; use
    /// [`unwrap_or_else`](Self::unwrap_or_else) for expensive fallbacks.
    #[inline]
    pub fn unwrap_or(self, default: T) -> T {
        match self {
            Maybe::Some(v) => v,
            Maybe::None => default,
        }
    }

    /// Returns the held value or computes one from `f`.
    #[inline]
    pub fn unwrap_or_else(self, f: impl FnOnce() -> T) -> T {
        match self {
            Maybe::Some(v) => v,
            Maybe::None => f(),
        }
    }

    /// Returns the held value or `T::default()`.
    #[inline]
    pub fn unwrap_or_default(self) -> T
    where
        T: Default,
    {
        self.unwrap_or_else(T::default)
    }

    /// Converts to an [`Outcome`], using `err` for the `None` case.
    #[inline]
    pub fn ok_or<E>(self, err: E) -> Outcome<T, E> {
        match self {
            Maybe::Some(v) => Outcome::Ok(v),
            Maybe::None => Outcome::Err(err),
        }
    }

    /// Converts to an [`Outcome`], computing the error lazily.
    #[inline]
    pub fn ok_or_else<E>(self, err: impl FnOnce() -> E) -> Outcome<T, E> {
        match self {
            Maybe::Some(v) => Outcome::Ok(v),
            Maybe::None => Outcome::Err(err()),
        }
    }

    /// Returns a cursor over a reference to the held value.
    #[inline]
    pub fn iter(&self) -> Once<&T> {
        Once::new(self.as_ref())
    }

    /// Returns a cursor yielding the held value.
    #[inline]
    pub fn into_cursor(self) -> Once<T> {
        Once::new(self)
    }

    /// Converts to a std [`Option`].
    #[inline]
    pub fn into_option(self) -> Option<T> {
        self.into()
    }
}

#[cold]
#[track_caller]
fn fail(msg: &str) -> ! {
    panic!("{msg}")
}

impl<T> From<Option<T>> for Maybe<T> {
    #[inline]
    fn from(value: Option<T>) -> Self {
        match value {
            Some(v) => Maybe::Some(v),
            None => Maybe::None,
        }
    }
}

impl<T> From<Maybe<T>> for Option<T> {
    #[inline]
    fn from(value: Maybe<T>) -> Self {
        match value {
            Maybe::Some(v) => Some(v),
            Maybe::None => None,
        }
    }
}

impl<T> IntoIterator for Maybe<T> {
    type Item = T;
    type IntoIter = crate::StdIter<Once<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.into_cursor().into_std()
    }
}

// ============================================================================
// Combinators
// ============================================================================

/// Applies `f` to a present value; `None` passes through.
#[inline]
pub fn map<T, U>(x: Maybe<T>, f: impl FnOnce(T) -> U) -> Maybe<U> {
    match x {
        Maybe::Some(v) => Maybe::Some(f(v)),
        Maybe::None => Maybe::None,
    }
}

/// Applies `f` to a present value, or returns `default`.
#[inline]
pub fn map_or<T, U>(x: Maybe<T>, default: U, f: impl FnOnce(T) -> U) -> U {
    match x {
        Maybe::Some(v) => f(v),
        Maybe::None => default,
    }
}

/// Applies `f` to a present value, or computes `default()`.
#[inline]
pub fn map_or_else<T, U>(x: Maybe<T>, default: impl FnOnce() -> U, f: impl FnOnce(T) -> U) -> U {
    match x {
        Maybe::Some(v) => f(v),
        Maybe::None => default(),
    }
}

/// Returns `other` if `x` is present, otherwise `None`.
#[inline]
pub fn and<T, U>(x: Maybe<T>, other: Maybe<U>) -> Maybe<U> {
    match x {
        Maybe::Some(_) => other,
        Maybe::None => Maybe::None,
    }
}

/// Chains a computation that may itself produce nothing.
#[inline]
pub fn and_then<T, U>(x: Maybe<T>, f: impl FnOnce(T) -> Maybe<U>) -> Maybe<U> {
    match x {
        Maybe::Some(v) => f(v),
        Maybe::None => Maybe::None,
    }
}

/// Returns `x` if present, otherwise `other`.
#[inline]
pub fn or<T>(x: Maybe<T>, other: Maybe<T>) -> Maybe<T> {
    match x {
        Maybe::Some(v) => Maybe::Some(v),
        Maybe::None => other,
    }
}

/// Returns `x` if present, otherwise the result of `f`.
#[inline]
pub fn or_else<T>(x: Maybe<T>, f: impl FnOnce() -> Maybe<T>) -> Maybe<T> {
    match x {
        Maybe::Some(v) => Maybe::Some(v),
        Maybe::None => f(),
    }
}
