//! The pull-based iteration contract.
//!
//! ```text
//! Cursor            - next() -> Maybe<Item>, fused
//!   ├── Once<T>     - zero or one value (Maybe::iter, Outcome::iter)
//!   ├── FromStd<I>  - any std iterator, fused
//!   └── (collections / channel crates add slice- and channel-backed cursors)
//!
//! StdIter<C>        - the reverse bridge: any Cursor as a std Iterator
//! ```
//!
//! Cursors deliberately do not implement [`Iterator`] themselves: a type
//! carrying both traits would make every `.next()` call ambiguous once
//! `Cursor` is imported. Use [`Cursor::into_std`] (or `IntoIterator`, which
//! the concrete cursors implement) to reach the std adapter ecosystem.

use std::iter::{Fuse, FusedIterator};

use crate::Maybe;

/// A stateful, single-pass cursor over a logical sequence.
///
/// # Contract
///
/// - Each element is produced at most once.
/// - There is no rewinding.
/// - After `next` returns [`Maybe::None`], every further call also returns
///   `Maybe::None` (cursors are fused). Calling `next` on an exhausted
///   cursor is never an error.
pub trait Cursor {
    /// The type of element produced.
    type Item;

    /// Advances the cursor and returns the next element, or [`Maybe::None`]
    /// once the sequence is finished.
    fn next(&mut self) -> Maybe<Self::Item>;

    /// Wraps the cursor as a std [`Iterator`].
    fn into_std(self) -> StdIter<Self>
    where
        Self: Sized,
    {
        StdIter { cursor: self }
    }

    /// Drains the remaining elements, returning how many there were.
    fn count(mut self) -> usize
    where
        Self: Sized,
    {
        let mut n = 0;
        while self.next().is_some() {
            n += 1;
        }
        n
    }
}

impl<C: Cursor + ?Sized> Cursor for &mut C {
    type Item = C::Item;

    #[inline]
    fn next(&mut self) -> Maybe<C::Item> {
        (**self).next()
    }
}

impl<C: Cursor + ?Sized> Cursor for Box<C> {
    type Item = C::Item;

    #[inline]
    fn next(&mut self) -> Maybe<C::Item> {
        (**self).next()
    }
}

// ============================================================================
// Once
// ============================================================================

/// A cursor over zero or one value.
///
/// The first successful `next` takes the value out of the internal slot, so
/// the value is yielded at most once no matter how often `next` is called.
///
/// # Example
///
/// ```
/// use ferrule_core::{Cursor, Maybe, Once};
///
/// let mut once = Once::new(Maybe::Some("hi"));
/// assert_eq!(once.next(), Maybe::Some("hi"));
/// assert_eq!(once.next(), Maybe::None);
///
/// let mut empty = Once::<u8>::empty();
/// assert_eq!(empty.next(), Maybe::None);
/// ```
#[derive(Debug, Clone)]
pub struct Once<T> {
    slot: Maybe<T>,
}

impl<T> Once<T> {
    /// Creates a cursor that yields the held value, if any.
    #[inline]
    pub fn new(value: Maybe<T>) -> Self {
        Self { slot: value }
    }

    /// Creates a cursor that yields nothing.
    #[inline]
    pub fn empty() -> Self {
        Self { slot: Maybe::None }
    }

    /// Returns `true` if a value is still waiting to be yielded.
    #[inline]
    pub fn is_pending(&self) -> bool {
        self.slot.is_some()
    }
}

impl<T> Cursor for Once<T> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Maybe<T> {
        self.slot.take()
    }
}

impl<T> IntoIterator for Once<T> {
    type Item = T;
    type IntoIter = StdIter<Self>;

    fn into_iter(self) -> Self::IntoIter {
        self.into_std()
    }
}

// ============================================================================
// Std Bridges
// ============================================================================

/// A [`Cursor`] viewed as a std [`Iterator`].
///
/// Created by [`Cursor::into_std`].
#[derive(Debug, Clone)]
pub struct StdIter<C> {
    cursor: C,
}

impl<C> StdIter<C> {
    /// Returns the wrapped cursor.
    pub fn into_inner(self) -> C {
        self.cursor
    }
}

impl<C: Cursor> Iterator for StdIter<C> {
    type Item = C::Item;

    #[inline]
    fn next(&mut self) -> Option<C::Item> {
        self.cursor.next().into()
    }
}

impl<C: Cursor> FusedIterator for StdIter<C> {}

/// A std iterator viewed as a [`Cursor`].
///
/// The iterator is fused on the way in, so the cursor contract holds even
/// for iterators that resume after returning `None`.
#[derive(Debug, Clone)]
pub struct FromStd<I> {
    iter: Fuse<I>,
}

/// Wraps anything iterable as a [`Cursor`].
///
/// ```
/// use ferrule_core::{Cursor, Maybe, from_std};
///
/// let mut c = from_std(vec![1, 2]);
/// assert_eq!(c.next(), Maybe::Some(1));
/// assert_eq!(c.next(), Maybe::Some(2));
/// assert_eq!(c.next(), Maybe::None);
/// ```
pub fn from_std<I: IntoIterator>(iter: I) -> FromStd<I::IntoIter> {
    FromStd {
        iter: iter.into_iter().fuse(),
    }
}

impl<I: Iterator> Cursor for FromStd<I> {
    type Item = I::Item;

    #[inline]
    fn next(&mut self) -> Maybe<I::Item> {
        self.iter.next().into()
    }
}
