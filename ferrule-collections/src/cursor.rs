//! Slice-backed cursors shared by [`Vector`](crate::Vector) and
//! [`Map`](crate::Map).

use std::{slice, vec};

use ferrule_core::{Cursor, Maybe, StdIter};

/// Borrowing cursor over a vector's elements.
///
/// Created by [`Vector::iter`](crate::Vector::iter).
#[derive(Debug, Clone)]
pub struct Iter<'a, T> {
    inner: slice::Iter<'a, T>,
}

impl<'a, T> Iter<'a, T> {
    pub(crate) fn new(slice: &'a [T]) -> Self {
        Self {
            inner: slice.iter(),
        }
    }

    /// Returns the number of elements left.
    #[inline]
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Returns `true` if the cursor is exhausted.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<'a, T> Cursor for Iter<'a, T> {
    type Item = &'a T;

    #[inline]
    fn next(&mut self) -> Maybe<&'a T> {
        self.inner.next().into()
    }
}

impl<'a, T> IntoIterator for Iter<'a, T> {
    type Item = &'a T;
    type IntoIter = StdIter<Self>;

    fn into_iter(self) -> Self::IntoIter {
        self.into_std()
    }
}

/// Owning cursor over a detached run of elements.
///
/// Returned by [`Vector::into_cursor`](crate::Vector::into_cursor),
/// [`Vector::drain`](crate::Vector::drain), [`Map::iter`](crate::Map::iter)
/// and [`Map::drain`](crate::Map::drain). The elements are owned by the
/// cursor; the container they came from no longer holds them.
#[derive(Debug, Clone)]
pub struct IntoCursor<T> {
    inner: vec::IntoIter<T>,
}

/// Cursor over elements removed by a drain.
pub type Drain<T> = IntoCursor<T>;

impl<T> IntoCursor<T> {
    pub(crate) fn new(buf: Vec<T>) -> Self {
        Self {
            inner: buf.into_iter(),
        }
    }

    /// Returns the elements not yet yielded.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        self.inner.as_slice()
    }

    /// Returns the number of elements left.
    #[inline]
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Returns `true` if the cursor is exhausted.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<T> Cursor for IntoCursor<T> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Maybe<T> {
        self.inner.next().into()
    }
}

impl<T> IntoIterator for IntoCursor<T> {
    type Item = T;
    type IntoIter = StdIter<Self>;

    fn into_iter(self) -> Self::IntoIter {
        self.into_std()
    }
}
