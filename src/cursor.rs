
//! Shared machinery for random-access lazy sequences.
//!
//! The two enumerators in this crate are cursors: they own their position and
//! the value at it, and can step, jump, and measure distance.  Everything a
//! consumer expects on top of that (iteration, indexing, length) is derived
//! mechanically here once, in [`RangeView`] and [`Iter`], rather than
//! re-implemented per enumerator.

/// A position in a lazily generated, bidirectional, random-access sequence.
///
/// Implementors own an independent deep copy of whatever state the walk
/// needs; clones diverge freely.  Equality must cover the full position
/// state, not just the current value: the sequences here are cyclic, so a
/// cursor that has wrapped all the way around holds the same value as one
/// that never moved, yet the two must compare unequal.
pub trait RandomAccessCursor: Clone + PartialEq {
    /// The element the sequence yields.
    type Item: Clone;

    /// The value at the current position.
    ///
    /// The reference is only good until the cursor moves; the value is
    /// regenerated in place by every step.
    fn current(&self) -> &Self::Item;

    /// Moves one position forward, wrapping at the end of the cycle.
    fn step_forward(&mut self);

    /// Moves one position backward, wrapping at the start of the cycle.
    fn step_back(&mut self);

    /// Jumps `n` positions in either direction.
    ///
    /// Implementations guarantee this costs the same as a single step, not
    /// `|n|` of them.
    fn advance(&mut self, n: isize);

    /// Signed number of positions from `self` forward to `other`.
    ///
    /// Positive when `other` is ahead.  Both cursors must walk the same
    /// underlying multiset; the result is unspecified otherwise.
    fn distance_to(&self, other: &Self) -> isize;

    /// A copy of this cursor, jumped `n` positions.
    fn offset_by(&self, n: isize) -> Self {
        let mut copy = self.clone();
        copy.advance(n);
        copy
    }
}

/// Overflow-safe signed difference `a - b` of two unsigned ranks.
pub(crate) fn signed_difference(a: usize, b: usize) -> isize {
    if a >= b {
        (a - b) as isize
    } else {
        -((b - a) as isize)
    }
}

/// A lazily generated sequence, presented with the usual container surface.
///
/// Holds a cursor at the first element, a sentinel cursor one past the last,
/// and the precomputed element count.  No element is materialized until asked
/// for; the whole "container" is the two cursors.
#[derive(Debug, Clone, PartialEq)]
pub struct RangeView<C> {
    first: C,
    last: C,
    len: usize,
}

impl<C: RandomAccessCursor> RangeView<C> {
    /// Wraps a `(begin, end, count)` triple produced by an enumerator
    /// constructor.
    pub fn new(first: C, last: C, len: usize) -> Self {
        Self { first, last, len }
    }

    /// The number of elements the sequence will yield.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The element at `rank`, generated by a single O(length) jump.
    pub fn get(&self, rank: usize) -> Option<C::Item> {
        if rank >= self.len {
            return None;
        }
        Some(self.first.offset_by(rank as isize).current().clone())
    }

    /// A cursor positioned at the first element.
    pub fn start_cursor(&self) -> C {
        self.first.clone()
    }

    /// The one-past-the-last sentinel cursor.
    pub fn end_cursor(&self) -> C {
        self.last.clone()
    }

    pub fn iter(&self) -> Iter<C> {
        Iter {
            front: self.first.clone(),
            back: self.last.clone(),
            remaining: self.len,
        }
    }
}

impl<C: RandomAccessCursor> IntoIterator for RangeView<C> {
    type Item = C::Item;
    type IntoIter = Iter<C>;

    fn into_iter(self) -> Iter<C> {
        Iter {
            front: self.first,
            back: self.last,
            remaining: self.len,
        }
    }
}

impl<C: RandomAccessCursor> IntoIterator for &RangeView<C> {
    type Item = C::Item;
    type IntoIter = Iter<C>;

    fn into_iter(self) -> Iter<C> {
        self.iter()
    }
}

/// Double-ended counted iterator over a [`RangeView`].
///
/// The underlying cursors wrap around forever, so termination is by element
/// count rather than by cursor comparison.
#[derive(Debug, Clone)]
pub struct Iter<C> {
    front: C,
    back: C,
    remaining: usize,
}

impl<C: RandomAccessCursor> Iterator for Iter<C> {
    type Item = C::Item;

    fn next(&mut self) -> Option<C::Item> {
        if self.remaining == 0 {
            return None;
        }
        let item = self.front.current().clone();
        self.front.step_forward();
        self.remaining -= 1;
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<C: RandomAccessCursor> DoubleEndedIterator for Iter<C> {
    fn next_back(&mut self) -> Option<C::Item> {
        if self.remaining == 0 {
            return None;
        }
        self.back.step_back();
        self.remaining -= 1;
        Some(self.back.current().clone())
    }
}

impl<C: RandomAccessCursor> ExactSizeIterator for Iter<C> {}

impl<C: RandomAccessCursor> core::iter::FusedIterator for Iter<C> {}
