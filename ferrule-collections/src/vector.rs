//! Vector - an owned, growable, ordered sequence.
//!
//! Structural edits come in two flavours:
//!
//! ```text
//! order-preserving:  insert  remove  retain  dedup*  splice  drain  truncate
//! O(1), reorders:    swap_remove
//! ownership moves:   append (donor emptied)   split_off (suffix detached)
//! copies:            extend_from (source untouched)
//! ```
//!
//! Index and range violations are caller bugs and panic with a message that
//! names the offending value and the valid bound.

use std::fmt;
use std::iter;
use std::ops::{Bound, Deref, DerefMut, Range, RangeBounds};

use ferrule_core::Maybe;

use crate::cursor::{Drain, IntoCursor, Iter};

/// An owned, growable, 0-indexed sequence.
///
/// `len() <= capacity()` always holds and every index in `[0, len)` is
/// valid. Read access to the elements goes through the slice API via
/// `Deref<Target = [T]>`.
///
/// # Example
///
/// ```
/// use ferrule_collections::Vector;
/// use ferrule_core::Maybe;
///
/// let mut v: Vector<u32> = Vector::from([1, 2, 3, 4]);
///
/// let removed = v.splice(1..3, Vector::from([7, 8, 9]));
/// assert_eq!(v.as_slice(), &[1, 7, 8, 9, 4]);
/// assert_eq!(removed.as_slice(), &[2, 3]);
///
/// assert_eq!(v.pop(), Maybe::Some(4));
/// assert_eq!(v[0], 1);
/// ```
pub struct Vector<T> {
    buf: Vec<T>,
}

impl<T> Vector<T> {
    /// Creates an empty vector. Does not allocate.
    #[inline]
    pub const fn new() -> Self {
        Self { buf: Vec::new() }
    }

    /// Creates an empty vector with room for at least `capacity` elements.
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buf: Vec::with_capacity(capacity),
        }
    }

    /// Returns the number of live elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.buf.len()
    }

    /// Returns the number of elements the vector can hold without
    /// reallocating.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.buf.capacity()
    }

    /// Returns `true` if the vector holds no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// Removes all elements. Capacity is unchanged.
    #[inline]
    pub fn clear(&mut self) {
        self.buf.clear();
    }

    /// Returns the elements as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.buf
    }

    /// Returns the elements as a mutable slice.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.buf
    }

    /// Appends an element. Amortized O(1).
    #[inline]
    pub fn push(&mut self, item: T) {
        self.buf.push(item);
    }

    /// Removes and returns the last element, or `None` if empty.
    #[inline]
    pub fn pop(&mut self) -> Maybe<T> {
        self.buf.pop().into()
    }

    /// Inserts `item` at `index`, shifting everything at and after `index`
    /// one place to the right.
    ///
    /// # Panics
    ///
    /// Panics if `index > len`.
    #[track_caller]
    pub fn insert(&mut self, index: usize, item: T) {
        let len = self.len();
        if index > len {
            panic!("insertion index (is {index}) should be <= len (is {len})");
        }

        if index == len {
            self.buf.push(item);
        } else {
            self.buf.insert(index, item);
        }
    }

    /// Removes and returns the element at `index`, shifting later elements
    /// left. O(n).
    ///
    /// # Panics
    ///
    /// Panics if `index >= len`.
    #[track_caller]
    pub fn remove(&mut self, index: usize) -> T {
        let len = self.len();
        if index >= len {
            panic!("removal index (is {index}) should be < len (is {len})");
        }
        self.buf.remove(index)
    }

    /// Removes and returns the element at `index`, moving the last element
    /// into its place. O(1), does not preserve order.
    ///
    /// # Panics
    ///
    /// Panics if `index >= len`.
    #[track_caller]
    pub fn swap_remove(&mut self, index: usize) -> T {
        let len = self.len();
        if index >= len {
            panic!("swap_remove index (is {index}) should be < len (is {len})");
        }
        self.buf.swap_remove(index)
    }

    /// Keeps the first `len` elements and drops the rest.
    ///
    /// No-op when `len >= self.len()`.
    #[inline]
    pub fn truncate(&mut self, len: usize) {
        self.buf.truncate(len);
    }

    /// Resizes to `new_len`, filling new slots by calling `f` once per slot,
    /// in order.
    pub fn resize_with(&mut self, new_len: usize, f: impl FnMut() -> T) {
        self.buf.resize_with(new_len, f);
    }

    /// Keeps, in order, exactly the elements for which `pred` returns
    /// `true`. Each element is visited once.
    pub fn retain(&mut self, pred: impl FnMut(&T) -> bool) {
        self.buf.retain(pred);
    }

    /// Removes every element for which `same(element, predecessor)` holds,
    /// where `predecessor` is the element immediately before it in the
    /// sequence as it was before the call.
    ///
    /// Only consecutive runs collapse; equal elements separated by a
    /// different one both survive.
    pub fn dedup_by(&mut self, mut same: impl FnMut(&T, &T) -> bool) {
        if self.buf.len() < 2 {
            return;
        }

        let keep: Vec<bool> = iter::once(true)
            .chain(self.buf.windows(2).map(|w| !same(&w[1], &w[0])))
            .collect();

        let mut keep = keep.into_iter();
        self.buf.retain(|_| keep.next().unwrap_or(true));
    }

    /// Removes consecutive elements that map to the same key.
    pub fn dedup_by_key<K: PartialEq>(&mut self, mut key: impl FnMut(&T) -> K) {
        self.dedup_by(|a, b| key(a) == key(b));
    }

    /// Replaces `range` with the elements of `replacement` and returns the
    /// removed elements.
    ///
    /// The lengths of `range` and `replacement` may differ. Afterwards the
    /// vector equals `old[..start] + replacement + old[end..]`.
    ///
    /// # Panics
    ///
    /// Panics if the range start exceeds its end, or its end exceeds `len`.
    #[track_caller]
    pub fn splice(&mut self, range: impl RangeBounds<usize>, replacement: Vector<T>) -> Vector<T> {
        let range = self.resolve(range);
        Vector {
            buf: self.buf.splice(range, replacement.buf).collect(),
        }
    }

    /// Removes `range` and returns a cursor over the removed elements.
    ///
    /// Same as `splice(range, Vector::new())`; the range is detached from
    /// the vector when this returns, whether or not the cursor is consumed.
    ///
    /// # Panics
    ///
    /// As [`splice`](Self::splice).
    #[track_caller]
    pub fn drain(&mut self, range: impl RangeBounds<usize>) -> Drain<T> {
        self.splice(range, Vector::new()).into_cursor()
    }

    /// Moves every element of `other` onto the end of `self`, leaving
    /// `other` empty.
    #[inline]
    pub fn append(&mut self, other: &mut Vector<T>) {
        self.buf.append(&mut other.buf);
    }

    /// Splits off `[at, len)` into a new vector. `self` keeps `[0, at)`.
    ///
    /// # Panics
    ///
    /// Panics if `at > len`.
    #[track_caller]
    pub fn split_off(&mut self, at: usize) -> Vector<T> {
        let len = self.len();
        if at > len {
            panic!("`at` split index (is {at}) should be <= len (is {len})");
        }
        Vector {
            buf: self.buf.split_off(at),
        }
    }

    /// Returns a cursor over references to the elements.
    #[inline]
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(&self.buf)
    }

    /// Converts into a cursor that owns the elements.
    #[inline]
    pub fn into_cursor(self) -> IntoCursor<T> {
        IntoCursor::new(self.buf)
    }

    /// Converts into a std `Vec` without copying.
    #[inline]
    pub fn into_vec(self) -> Vec<T> {
        self.buf
    }

    #[track_caller]
    fn resolve(&self, range: impl RangeBounds<usize>) -> Range<usize> {
        let len = self.len();

        let start = match range.start_bound() {
            Bound::Included(&s) => s,
            Bound::Excluded(&s) => match s.checked_add(1) {
                Some(start) => start,
                None => start_overflow(),
            },
            Bound::Unbounded => 0,
        };
        let end = match range.end_bound() {
            Bound::Included(&e) => match e.checked_add(1) {
                Some(end) => end,
                None => end_overflow(),
            },
            Bound::Excluded(&e) => e,
            Bound::Unbounded => len,
        };

        if start > end {
            panic!("range start (is {start}) should be <= range end (is {end})");
        }
        if end > len {
            panic!("range end (is {end}) should be <= len (is {len})");
        }

        start..end
    }
}

#[cold]
#[track_caller]
fn start_overflow() -> ! {
    panic!("attempted to index from after maximum usize")
}

#[cold]
#[track_caller]
fn end_overflow() -> ! {
    panic!("attempted to index up to maximum usize")
}

impl<T: Clone> Vector<T> {
    /// Resizes to `new_len`, filling new slots with clones of `value`.
    ///
    /// Shrinking truncates.
    pub fn resize(&mut self, new_len: usize, value: T) {
        self.buf.resize(new_len, value);
    }

    /// Appends clones of every element of `other`. `other` is unchanged.
    pub fn extend_from(&mut self, other: &Vector<T>) {
        self.buf.extend_from_slice(&other.buf);
    }
}

impl<T: PartialEq> Vector<T> {
    /// Removes consecutive equal elements.
    ///
    /// On a sorted vector this removes all duplicates.
    pub fn dedup(&mut self) {
        self.dedup_by(|a, b| a == b);
    }
}

// ============================================================================
// Trait Implementations
// ============================================================================

impl<T> Default for Vector<T> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for Vector<T> {
    fn clone(&self) -> Self {
        Self {
            buf: self.buf.clone(),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Vector<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.buf.iter()).finish()
    }
}

impl<T: PartialEq> PartialEq for Vector<T> {
    fn eq(&self, other: &Self) -> bool {
        self.buf == other.buf
    }
}

impl<T: Eq> Eq for Vector<T> {}

impl<T> Deref for Vector<T> {
    type Target = [T];

    #[inline]
    fn deref(&self) -> &[T] {
        &self.buf
    }
}

impl<T> DerefMut for Vector<T> {
    #[inline]
    fn deref_mut(&mut self) -> &mut [T] {
        &mut self.buf
    }
}

impl<T> From<Vec<T>> for Vector<T> {
    #[inline]
    fn from(buf: Vec<T>) -> Self {
        Self { buf }
    }
}

impl<T, const N: usize> From<[T; N]> for Vector<T> {
    #[inline]
    fn from(items: [T; N]) -> Self {
        Self {
            buf: Vec::from(items),
        }
    }
}

impl<T> From<Vector<T>> for Vec<T> {
    #[inline]
    fn from(v: Vector<T>) -> Self {
        v.buf
    }
}

impl<T> FromIterator<T> for Vector<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            buf: iter.into_iter().collect(),
        }
    }
}

impl<T> Extend<T> for Vector<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.buf.extend(iter);
    }
}

impl<T> IntoIterator for Vector<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.buf.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Vector<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.buf.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ferrule_core::Cursor;
    use std::cell::Cell;

    fn v<const N: usize>(items: [i32; N]) -> Vector<i32> {
        Vector::from(items)
    }

    // ========================================================================
    // Basic Operations
    // ========================================================================

    #[test]
    fn new_is_empty() {
        let vec: Vector<u8> = Vector::new();
        assert!(vec.is_empty());
        assert_eq!(vec.len(), 0);
        assert_eq!(vec.capacity(), 0);
    }

    #[test]
    fn with_capacity_reserves() {
        let vec: Vector<u64> = Vector::with_capacity(16);
        assert!(vec.capacity() >= 16);
        assert!(vec.len() <= vec.capacity());
    }

    #[test]
    fn push_then_pop_restores() {
        let mut vec = v([1, 2]);
        vec.push(3);
        assert_eq!(vec.len(), 3);
        assert_eq!(vec.pop(), Maybe::Some(3));
        assert_eq!(vec.as_slice(), &[1, 2]);
    }

    #[test]
    fn pop_on_empty_is_none() {
        let mut vec: Vector<i32> = Vector::new();
        assert_eq!(vec.pop(), Maybe::None);
        assert_eq!(vec.pop(), Maybe::None);
    }

    #[test]
    fn clear_keeps_capacity() {
        let mut vec = v([1, 2, 3]);
        let cap = vec.capacity();
        vec.clear();
        assert!(vec.is_empty());
        assert_eq!(vec.capacity(), cap);
    }

    // ========================================================================
    // Insert / Remove
    // ========================================================================

    #[test]
    fn insert_shifts_right() {
        let mut vec = v([1, 2, 3]);
        vec.insert(1, 9);
        assert_eq!(vec.as_slice(), &[1, 9, 2, 3]);

        vec.insert(0, 0);
        assert_eq!(vec.as_slice(), &[0, 1, 9, 2, 3]);
    }

    #[test]
    fn insert_at_len_appends() {
        let mut vec = v([1, 2]);
        vec.insert(2, 3);
        assert_eq!(vec.as_slice(), &[1, 2, 3]);

        let mut empty: Vector<i32> = Vector::new();
        empty.insert(0, 1);
        assert_eq!(empty.as_slice(), &[1]);
    }

    #[test]
    #[should_panic(expected = "insertion index (is 4) should be <= len (is 3)")]
    fn insert_past_len_panics() {
        let mut vec = v([1, 2, 3]);
        vec.insert(4, 0);
    }

    #[test]
    fn insert_then_remove_restores() {
        let original = v([5, 6, 7]);
        for i in 0..=original.len() {
            let mut vec = original.clone();
            vec.insert(i, 42);
            assert_eq!(vec.remove(i), 42);
            assert_eq!(vec, original);
        }
    }

    #[test]
    fn remove_shifts_left() {
        let mut vec = v([1, 2, 3, 4]);
        assert_eq!(vec.remove(1), 2);
        assert_eq!(vec.as_slice(), &[1, 3, 4]);
    }

    #[test]
    #[should_panic(expected = "removal index (is 3) should be < len (is 3)")]
    fn remove_out_of_bounds_panics() {
        let mut vec = v([1, 2, 3]);
        vec.remove(3);
    }

    #[test]
    fn swap_remove_moves_last_into_hole() {
        let mut vec = v([1, 2, 3, 4]);
        assert_eq!(vec.swap_remove(0), 1);
        assert_eq!(vec.as_slice(), &[4, 2, 3]);

        // Removing the last element needs no swap.
        assert_eq!(vec.swap_remove(2), 3);
        assert_eq!(vec.as_slice(), &[4, 2]);
    }

    #[test]
    #[should_panic(expected = "swap_remove index (is 0) should be < len (is 0)")]
    fn swap_remove_on_empty_panics() {
        let mut vec: Vector<i32> = Vector::new();
        vec.swap_remove(0);
    }

    // ========================================================================
    // Truncate / Resize
    // ========================================================================

    #[test]
    fn truncate_shortens() {
        let mut vec = v([1, 2, 3, 4]);
        vec.truncate(2);
        assert_eq!(vec.as_slice(), &[1, 2]);
    }

    #[test]
    fn truncate_past_len_is_noop() {
        let mut vec = v([1, 2]);
        vec.truncate(2);
        vec.truncate(10);
        assert_eq!(vec.as_slice(), &[1, 2]);
    }

    #[test]
    fn resize_grows_with_clones_and_shrinks() {
        let mut vec = v([1]);
        vec.resize(4, 0);
        assert_eq!(vec.as_slice(), &[1, 0, 0, 0]);

        vec.resize(2, 9);
        assert_eq!(vec.as_slice(), &[1, 0]);
    }

    #[test]
    fn resize_with_calls_generator_per_slot() {
        let calls = Cell::new(0);
        let mut vec = v([7]);
        vec.resize_with(4, || {
            calls.set(calls.get() + 1);
            calls.get()
        });

        assert_eq!(calls.get(), 3);
        assert_eq!(vec.as_slice(), &[7, 1, 2, 3]);
    }

    #[test]
    fn resize_with_shrinking_never_calls_generator() {
        let mut vec = v([1, 2, 3]);
        vec.resize_with(1, || unreachable!());
        assert_eq!(vec.as_slice(), &[1]);
    }

    // ========================================================================
    // Retain / Dedup
    // ========================================================================

    #[test]
    fn retain_keeps_order_and_visits_once() {
        let mut vec = v([1, 2, 3, 4, 5, 6]);
        let mut visited = Vec::new();
        vec.retain(|x| {
            visited.push(*x);
            x % 2 == 0
        });

        assert_eq!(vec.as_slice(), &[2, 4, 6]);
        assert_eq!(visited, vec![1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn dedup_collapses_adjacent_only() {
        let mut vec = v([1, 2, 2, 3, 2]);
        vec.dedup();
        assert_eq!(vec.as_slice(), &[1, 2, 3, 2]);
    }

    #[test]
    fn dedup_by_key_projects() {
        let mut vec = v([10, 20, 21, 22, 30, 20]);
        vec.dedup_by_key(|x| x / 10);
        assert_eq!(vec.as_slice(), &[10, 20, 30, 20]);
    }

    #[test]
    fn dedup_by_compares_with_original_predecessor() {
        // "within 1 of the previous element": 1,2,3 chain through
        // originals, so 2 and 3 both go even though 3 is not within 1 of
        // the survivor 1.
        let mut vec = v([1, 2, 3, 10]);
        vec.dedup_by(|a, b| (a - b).abs() <= 1);
        assert_eq!(vec.as_slice(), &[1, 10]);
    }

    #[test]
    fn dedup_on_short_vectors() {
        let mut empty: Vector<i32> = Vector::new();
        empty.dedup();
        assert!(empty.is_empty());

        let mut one = v([4]);
        one.dedup();
        assert_eq!(one.as_slice(), &[4]);
    }

    // ========================================================================
    // Splice / Drain
    // ========================================================================

    #[test]
    fn splice_replaces_range() {
        let mut vec = v([1, 2, 3, 4]);
        let removed = vec.splice(1..3, v([7, 8, 9]));
        assert_eq!(vec.as_slice(), &[1, 7, 8, 9, 4]);
        assert_eq!(removed.as_slice(), &[2, 3]);
    }

    #[test]
    fn splice_empty_range_inserts() {
        let mut vec = v([1, 4]);
        let removed = vec.splice(1..1, v([2, 3]));
        assert!(removed.is_empty());
        assert_eq!(vec.as_slice(), &[1, 2, 3, 4]);
    }

    #[test]
    fn splice_shrinks() {
        let mut vec = v([1, 2, 3, 4, 5]);
        let removed = vec.splice(.., v([0]));
        assert_eq!(removed.as_slice(), &[1, 2, 3, 4, 5]);
        assert_eq!(vec.as_slice(), &[0]);
    }

    #[test]
    #[should_panic(expected = "range end (is 5) should be <= len (is 3)")]
    fn splice_past_end_panics() {
        let mut vec = v([1, 2, 3]);
        vec.splice(1..5, Vector::new());
    }

    #[test]
    #[should_panic(expected = "attempted to index up to maximum usize")]
    fn splice_inclusive_end_at_max_panics() {
        let mut vec = v([1, 2, 3]);
        vec.splice(0..=usize::MAX, v([9]));
    }

    #[test]
    #[should_panic(expected = "attempted to index from after maximum usize")]
    fn drain_excluded_start_at_max_panics() {
        let mut vec = v([1, 2, 3]);
        drop(vec.drain((Bound::Excluded(usize::MAX), Bound::Unbounded)));
    }

    #[test]
    #[should_panic(expected = "range start (is 2) should be <= range end (is 1)")]
    #[allow(clippy::reversed_empty_ranges)]
    fn splice_inverted_range_panics() {
        let mut vec = v([1, 2, 3]);
        vec.splice(2..1, Vector::new());
    }

    #[test]
    fn drain_detaches_immediately() {
        let mut vec = v([1, 2, 3]);
        let len = vec.len();
        let mut drained = vec.drain(1..len);

        // Removed before the cursor is touched.
        assert_eq!(vec.as_slice(), &[1]);

        assert_eq!(drained.next(), Maybe::Some(2));
        assert_eq!(drained.next(), Maybe::Some(3));
        assert_eq!(drained.next(), Maybe::None);
        assert_eq!(drained.next(), Maybe::None);
    }

    #[test]
    fn drain_unconsumed_still_removes() {
        let mut vec = v([1, 2, 3, 4]);
        drop(vec.drain(..2));
        assert_eq!(vec.as_slice(), &[3, 4]);
    }

    #[test]
    fn drain_inclusive_range() {
        let mut vec = v([1, 2, 3, 4]);
        let drained = vec.drain(1..=2);
        assert_eq!(drained.as_slice(), &[2, 3]);
        assert_eq!(vec.as_slice(), &[1, 4]);
    }

    // ========================================================================
    // Append / Extend / Split
    // ========================================================================

    #[test]
    fn append_empties_donor() {
        let mut vec = v([1]);
        let mut other = v([2, 3, 4]);
        vec.append(&mut other);

        assert_eq!(vec.as_slice(), &[1, 2, 3, 4]);
        assert!(other.is_empty());
    }

    #[test]
    fn extend_from_leaves_source() {
        let mut vec = v([1]);
        let other = v([2, 3, 4]);
        vec.extend_from(&other);

        assert_eq!(vec.as_slice(), &[1, 2, 3, 4]);
        assert_eq!(other.as_slice(), &[2, 3, 4]);
    }

    #[test]
    fn extend_trait_moves_items() {
        let mut vec = v([1]);
        vec.extend(vec![2, 3]);
        assert_eq!(vec.as_slice(), &[1, 2, 3]);
    }

    #[test]
    fn split_off_truncates_receiver() {
        let mut vec = v([1, 2, 3, 4]);
        let tail = vec.split_off(1);
        assert_eq!(vec.as_slice(), &[1]);
        assert_eq!(tail.as_slice(), &[2, 3, 4]);
    }

    #[test]
    fn split_off_at_bounds() {
        let mut vec = v([1, 2]);
        assert!(vec.split_off(2).is_empty());
        assert_eq!(vec.as_slice(), &[1, 2]);

        let all = vec.split_off(0);
        assert!(vec.is_empty());
        assert_eq!(all.as_slice(), &[1, 2]);
    }

    #[test]
    #[should_panic(expected = "`at` split index (is 3) should be <= len (is 2)")]
    fn split_off_past_len_panics() {
        let mut vec = v([1, 2]);
        vec.split_off(3);
    }

    // ========================================================================
    // Cursors
    // ========================================================================

    #[test]
    fn iter_borrows_in_order() {
        let vec = v([3, 1, 2]);
        let mut it = vec.iter();
        assert_eq!(it.len(), 3);
        assert_eq!(it.next(), Maybe::Some(&3));
        assert_eq!(it.next(), Maybe::Some(&1));
        assert_eq!(it.next(), Maybe::Some(&2));
        assert_eq!(it.next(), Maybe::None);
        assert!(it.is_empty());
    }

    #[test]
    fn into_cursor_owns_elements() {
        let vec = Vector::from(vec![String::from("a"), String::from("b")]);
        let collected: Vec<String> = vec.into_cursor().into_iter().collect();
        assert_eq!(collected, vec!["a", "b"]);
    }

    #[test]
    fn drop_runs_for_each_element() {
        use std::sync::atomic::{AtomicUsize, Ordering};

        static DROP_COUNT: AtomicUsize = AtomicUsize::new(0);

        struct DropCounter;
        impl Drop for DropCounter {
            fn drop(&mut self) {
                DROP_COUNT.fetch_add(1, Ordering::SeqCst);
            }
        }

        let mut vec: Vector<DropCounter> = (0..5).map(|_| DropCounter).collect();
        vec.truncate(3);
        assert_eq!(DROP_COUNT.load(Ordering::SeqCst), 2);

        let drained = vec.drain(..1);
        assert_eq!(DROP_COUNT.load(Ordering::SeqCst), 2);
        drop(drained);
        assert_eq!(DROP_COUNT.load(Ordering::SeqCst), 3);

        drop(vec);
        assert_eq!(DROP_COUNT.load(Ordering::SeqCst), 5);
    }
}
