
use crate::coefficients::n_permutations;
use crate::cursor::{signed_difference, RandomAccessCursor, RangeView};
use crate::error::EnumerationError;
use crate::fns::{decimal_to_permutation, permutation_to_decimal};

/// Rearranges `seq` into the lexicographically next permutation.
///
/// Returns false after rearranging the greatest arrangement back into the
/// least, i.e. the walk wraps instead of stopping.
fn next_permutation<T: Ord>(seq: &mut [T]) -> bool {

    let n = seq.len();
    if n < 2 {
        return false;
    }

    //Find the longest non-increasing suffix; the element before it is the pivot
    let mut i = n - 1;
    while i > 0 && seq[i - 1] >= seq[i] {
        i -= 1;
    }
    if i == 0 {
        seq.reverse();
        return false;
    }

    //Swap the pivot with the rightmost element that beats it, then flip the
    // suffix back to ascending
    let mut j = n - 1;
    while seq[j] <= seq[i - 1] {
        j -= 1;
    }
    seq.swap(i - 1, j);
    seq[i..].reverse();
    true
}

/// Mirror image of [`next_permutation`]: wraps the least arrangement around to
/// the greatest.
fn prev_permutation<T: Ord>(seq: &mut [T]) -> bool {

    let n = seq.len();
    if n < 2 {
        return false;
    }

    let mut i = n - 1;
    while i > 0 && seq[i - 1] <= seq[i] {
        i -= 1;
    }
    if i == 0 {
        seq.reverse();
        return false;
    }

    let mut j = n - 1;
    while seq[j] >= seq[i - 1] {
        j -= 1;
    }
    seq.swap(i - 1, j);
    seq[i..].reverse();
    true
}

/// A cursor over the unique permutations of a (multi)set, in lexicographic
/// order with wrap-around.
///
/// The cursor owns deep copies of the starting arrangement, its sorted
/// canonical form, and the current arrangement, so it stays valid however
/// long the source sequence lives.  Positions are absolute ranks relative to
/// the canonical form: `dx` locates the starting arrangement and `offset`
/// counts signed steps taken since construction.  Enumeration may therefore
/// begin mid-cycle (an unsorted starting sequence) and wraps back around to
/// that same arrangement after `total` steps.
///
/// Single steps use the classic in-place next/prev-permutation rearrangement;
/// [`advance`](RandomAccessCursor::advance) instead rebuilds the arrangement
/// at the target rank through the FNS codec, so a jump of any magnitude costs
/// a decode pass rather than `|n|` steps.
///
/// Equality covers the whole position tuple (starting arrangement, current
/// arrangement, offset).  A cursor that has wrapped a full cycle holds the
/// same value as a fresh one but compares unequal, which is what lets an
/// untouched begin cursor and a one-past-last sentinel coexist over the same
/// data.
#[derive(Debug, Clone, PartialEq)]
pub struct PermutationCursor<T> {
    /// The arrangement enumeration started from; never changes
    orig: Vec<T>,

    /// Canonical (sorted) form of `orig`; reference point for all ranks
    sorted: Vec<T>,

    /// The arrangement at the current position
    current: Vec<T>,

    /// Signed steps taken since construction
    offset: isize,

    /// Rank of `orig` relative to `sorted`
    dx: usize,

    /// Count of unique permutations of the multiset
    total: usize,
}

impl<T: Ord + Clone> PermutationCursor<T> {
    /// Makes a cursor over the permutations of `seq`, positioned `offset`
    /// steps past `seq` itself.
    ///
    /// An offset of 0 is a begin cursor; an offset of
    /// [`n_permutations(seq)`](n_permutations) is the matching one-past-last
    /// sentinel.
    pub fn new(seq: &[T], offset: usize) -> Result<Self, EnumerationError> {
        let orig = seq.to_vec();
        let mut sorted = seq.to_vec();
        sorted.sort();
        let dx = permutation_to_decimal(seq, &sorted)?;
        let total = n_permutations(seq)?;
        Ok(Self {
            current: orig.clone(),
            orig,
            sorted,
            offset: offset as isize,
            dx,
            total,
        })
    }

    /// The number of unique permutations of the underlying multiset.
    pub fn cycle_len(&self) -> usize {
        self.total
    }
}

impl<T: Ord + Clone> RandomAccessCursor for PermutationCursor<T> {
    type Item = Vec<T>;

    fn current(&self) -> &Vec<T> {
        &self.current
    }

    fn step_forward(&mut self) {
        next_permutation(&mut self.current);
        self.offset += 1;
    }

    fn step_back(&mut self) {
        prev_permutation(&mut self.current);
        self.offset -= 1;
    }

    fn advance(&mut self, n: isize) {
        //dx + offset + n can leave [0, total); the walk is cyclic, so reduce
        // first.  i128 keeps the sum exact at any rank
        let rank = (self.dx as i128 + self.offset as i128 + n as i128)
            .rem_euclid(self.total as i128) as usize;
        self.current = decimal_to_permutation(rank, &self.sorted)
            .expect("rank was reduced modulo the cycle length");
        self.offset += n;
    }

    fn distance_to(&self, other: &Self) -> isize {
        debug_assert!(
            self.sorted == other.sorted,
            "cursors enumerate different multisets"
        );
        signed_difference(other.dx, self.dx) + (other.offset - self.offset)
    }
}

/// Makes a lazy sequence of all unique permutations of `seq`, in
/// lexicographic order starting from `seq` itself and wrapping around until
/// `seq` is regenerated.
///
/// Nothing is materialized up front; permutations are produced on the fly by
/// the cursors inside the returned [`RangeView`].  Duplicate elements are
/// handled exactly: `n` equal elements do not inflate the count.
///
/// ```
/// use lexiperm::permutations;
///
/// let perms = permutations(&[1, 2, 2])?;
/// assert_eq!(perms.len(), 3);
/// let all: Vec<Vec<i32>> = perms.iter().collect();
/// assert_eq!(all, vec![vec![1, 2, 2], vec![2, 1, 2], vec![2, 2, 1]]);
/// # Ok::<(), lexiperm::EnumerationError>(())
/// ```
pub fn permutations<T: Ord + Clone>(
    seq: &[T],
) -> Result<RangeView<PermutationCursor<T>>, EnumerationError> {

    let total = n_permutations(seq)?;
    Ok(RangeView::new(
        PermutationCursor::new(seq, 0)?,
        PermutationCursor::new(seq, total)?,
        total,
    ))
}
