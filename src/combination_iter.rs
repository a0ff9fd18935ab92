
use crate::coefficients::{binomial_coefficient, n_permutations};
use crate::cursor::{RandomAccessCursor, RangeView};
use crate::error::EnumerationError;
use crate::permutation_iter::PermutationCursor;

/// A cursor over the k-element combinations of a sequence, with or without
/// repetition.
///
/// Combination generation is reduced to permutation generation: the cursor
/// walks the arrangements of an indicator multiset and decodes each one into
/// a combination.  A `false` marker means "chosen" (inverting the usual 0/1
/// convention so the lexicographically least arrangement selects the leading
/// positions and the walk comes out in lexicographic order).  Without
/// repetition the indicator has one slot per source position and a chosen
/// marker at slot i selects `seq[i]`.  With repetition the indicator has
/// `n + k - 1` slots, the `true` markers act as separators between bins, and
/// a chosen marker selects the element of whatever bin the scan is currently
/// in — the classic stars-and-bars encoding.
///
/// Combinations are ordered lexicographically in source *positions*, which
/// coincides with element order whenever the source sequence is sorted.
#[derive(Debug, Clone, PartialEq)]
pub struct CombinationCursor<T> {
    /// The source sequence combinations are drawn from
    set: Vec<T>,

    /// How many elements each combination takes
    k: usize,

    /// The decoded combination at the current position
    comb: Vec<T>,

    /// Walks the arrangements of the indicator multiset
    indicator: PermutationCursor<bool>,

    /// Repetition mode; fixed at construction
    with_repeat: bool,
}

impl<T: Clone + PartialEq> CombinationCursor<T> {
    /// Makes a cursor over the `k`-element combinations of `seq`, positioned
    /// at the first combination or, for `at_end`, at the one-past-last
    /// sentinel.
    ///
    /// Returns [`EnumerationError::InvalidChoice`] when no indicator of the
    /// required shape exists: `k > len` without repetition, or drawing
    /// anything at all from an empty sequence with repetition.
    pub fn new(
        seq: &[T],
        k: usize,
        with_repeat: bool,
        at_end: bool,
    ) -> Result<Self, EnumerationError> {
        let n = seq.len();
        let out_of_range = if with_repeat { n == 0 && k > 0 } else { k > n };
        if out_of_range {
            return Err(EnumerationError::InvalidChoice { n, k });
        }

        let slots = match (with_repeat, n + k) {
            (false, _) => n,
            (true, 0) => 0,
            (true, _) => n + k - 1,
        };
        let mut indicator = vec![true; slots];
        for marker in indicator.iter_mut().take(k) {
            *marker = false;
        }

        let arrangements = n_permutations(&indicator)?;
        let indicator =
            PermutationCursor::new(&indicator, if at_end { arrangements } else { 0 })?;

        let mut cursor = Self {
            set: seq.to_vec(),
            k,
            comb: Vec::new(),
            indicator,
            with_repeat,
        };
        cursor.refresh();
        Ok(cursor)
    }

    /// Re-derives the combination from the current indicator arrangement.
    ///
    /// Runs after every move; a single left-to-right scan that stops as soon
    /// as k elements are collected.
    fn refresh(&mut self) {
        let mut comb = Vec::with_capacity(self.k);
        let mut bin = 0;
        for (slot, &separator) in self.indicator.current().iter().enumerate() {
            if separator {
                bin += 1;
                continue;
            }
            let source = if self.with_repeat { bin } else { slot };
            comb.push(self.set[source].clone());
            if comb.len() == self.k {
                break;
            }
        }
        self.comb = comb;
    }
}

impl<T: Clone + PartialEq> RandomAccessCursor for CombinationCursor<T> {
    type Item = Vec<T>;

    fn current(&self) -> &Vec<T> {
        &self.comb
    }

    fn step_forward(&mut self) {
        self.indicator.step_forward();
        self.refresh();
    }

    fn step_back(&mut self) {
        self.indicator.step_back();
        self.refresh();
    }

    fn advance(&mut self, n: isize) {
        self.indicator.advance(n);
        self.refresh();
    }

    fn distance_to(&self, other: &Self) -> isize {
        self.indicator.distance_to(&other.indicator)
    }
}

/// Makes a lazy sequence of the `C(n, k)` ways to choose `k` elements of
/// `seq` without repetition.
///
/// Each combination is a `k`-element subsequence of `seq`: no source position
/// is used twice, though equal *values* appear as often as the source repeats
/// them.  Ordering is lexicographic in source positions.
///
/// ```
/// use lexiperm::combinations;
///
/// let pairs = combinations(&[1, 2, 3], 2)?;
/// assert_eq!(pairs.len(), 3);
/// let all: Vec<Vec<i32>> = pairs.iter().collect();
/// assert_eq!(all, vec![vec![1, 2], vec![1, 3], vec![2, 3]]);
/// # Ok::<(), lexiperm::EnumerationError>(())
/// ```
pub fn combinations<T: Clone + PartialEq>(
    seq: &[T],
    k: usize,
) -> Result<RangeView<CombinationCursor<T>>, EnumerationError> {

    let count = binomial_coefficient::<usize>(seq.len(), k)?;
    Ok(RangeView::new(
        CombinationCursor::new(seq, k, false, false)?,
        CombinationCursor::new(seq, k, false, true)?,
        count,
    ))
}

/// Makes a lazy sequence of the `C(n + k - 1, k)` ways to choose `k`
/// elements of `seq` with repetition.
///
/// Each combination is a length-`k` multiset over the elements of `seq`; the
/// same source position may be drawn any number of times.
///
/// ```
/// use lexiperm::combinations_with_repeat;
///
/// let pairs = combinations_with_repeat(&[1, 2], 2)?;
/// let all: Vec<Vec<i32>> = pairs.iter().collect();
/// assert_eq!(all, vec![vec![1, 1], vec![1, 2], vec![2, 2]]);
/// # Ok::<(), lexiperm::EnumerationError>(())
/// ```
pub fn combinations_with_repeat<T: Clone + PartialEq>(
    seq: &[T],
    k: usize,
) -> Result<RangeView<CombinationCursor<T>>, EnumerationError> {

    let n = seq.len();
    let count = if n + k == 0 {
        1 //The empty choice from the empty sequence
    } else {
        binomial_coefficient::<usize>(n + k - 1, k)?
    };
    Ok(RangeView::new(
        CombinationCursor::new(seq, k, true, false)?,
        CombinationCursor::new(seq, k, true, true)?,
        count,
    ))
}
