
//! The factorial-number-system codec.
//!
//! Every permutation of a sequence can be written as a mixed-radix number:
//! digit i records which of the remaining elements was placed at position i,
//! counted in the order they occur in the reference sequence.  Weighting each
//! digit by the number of permutations of the elements that remain after it
//! (its place value) and summing produces a decimal rank, and the mapping is a
//! bijection onto `[0, n_permutations(seq))`.  The functions here convert in
//! every direction: permutation <-> digits <-> rank.
//!
//! Duplicates are handled by first-occurrence bookkeeping: a repeated value
//! always encodes as the position of its earliest surviving occurrence, which
//! is what keeps the mapping bijective over multisets.

use crate::coefficients::n_permutations;
use crate::error::EnumerationError;

/// Maps a permutation to its digits in the factorial number system.
///
/// For each element of `perm`, left to right, the digit is the position of
/// that element's first surviving occurrence among the not-yet-consumed
/// elements of `original`; the occurrence is then consumed.  An empty `perm`
/// maps to no digits and a single element always maps to `[0]`.
///
/// Returns [`EnumerationError::ForeignPermutation`] if `perm` is not a
/// rearrangement of `original`.
pub fn permutation_to_fns<T: PartialEq>(
    perm: &[T],
    original: &[T],
) -> Result<Vec<usize>, EnumerationError> {

    if perm.len() != original.len() {
        return Err(EnumerationError::ForeignPermutation);
    }

    let mut remaining: Vec<&T> = original.iter().collect();
    let mut digits = Vec::with_capacity(perm.len());
    for element in perm {
        let digit = remaining
            .iter()
            .position(|candidate| **candidate == *element)
            .ok_or(EnumerationError::ForeignPermutation)?;
        remaining.remove(digit);
        digits.push(digit);
    }

    Ok(digits)
}

/// Decodes a digit sequence back into a permutation of `original`.
///
/// Inverse of [`permutation_to_fns`]: each digit pops the element at that
/// position from a shrinking working copy of `original` and appends it to the
/// output.
///
/// Returns [`EnumerationError::DigitOutOfRange`] if a digit indexes past the
/// elements still unplaced (which includes `fns` being longer than
/// `original`).
pub fn fns_to_permutation<T: Clone>(
    fns: &[usize],
    original: &[T],
) -> Result<Vec<T>, EnumerationError> {

    let mut remaining: Vec<&T> = original.iter().collect();
    let mut perm = Vec::with_capacity(fns.len());
    for (position, &digit) in fns.iter().enumerate() {
        if digit >= remaining.len() {
            return Err(EnumerationError::DigitOutOfRange { position, digit });
        }
        perm.push(remaining.remove(digit).clone());
    }

    Ok(perm)
}

/// Computes the place value of each FNS digit of `perm`.
///
/// The place value at position i is the number of permutations of the suffix
/// `perm[i..]` that begin with a fixed choice of first element, i.e.
/// `n_permutations(&perm[i..]) / suffix_len`.  The final two positions always
/// weigh 1: with at most one element left to choose there is nothing for a
/// digit to scale, even when the last two elements are equal and the quotient
/// above would round to zero.
///
/// Degenerate cases: empty input yields no values; a single element yields
/// `[1]`.
pub fn fns_place_values<T: Ord>(perm: &[T]) -> Result<Vec<usize>, EnumerationError> {

    let len = perm.len();
    if len == 0 {
        return Ok(Vec::new());
    }

    let mut values = vec![1; len];
    for i in (0..len.saturating_sub(2)).rev() {
        values[i] = n_permutations(&perm[i..])? / (len - i);
    }

    Ok(values)
}

/// Maps a permutation of `original` to its decimal rank.
///
/// The rank is the inner product of [`permutation_to_fns`] and
/// [`fns_place_values`]: ranks run lexicographically from 0 (for `original`
/// itself in sorted order) through `n_permutations(original) - 1`.
pub fn permutation_to_decimal<T: Ord>(
    perm: &[T],
    original: &[T],
) -> Result<usize, EnumerationError> {

    let digits = permutation_to_fns(perm, original)?;
    let values = fns_place_values(perm)?;
    Ok(digits.iter().zip(values.iter()).map(|(d, v)| d * v).sum())
}

/// Produces the FNS digits of rank `d` directly, without building the
/// permutation first.
///
/// Digits are computed against the sorted canonical form of `original`.  At
/// each position the candidates are scanned in order, accumulating the number
/// of permutations that start with each *distinct* candidate value; repeats of
/// a value already tried contribute no further count but still advance the
/// digit, so the digit reflects position rather than value identity.  Once the
/// running total exceeds `d` the candidate is selected, the prior total is
/// subtracted from `d`, and the scan moves to the next position.
///
/// Returns [`EnumerationError::RankOutOfRange`] if `d` is not below
/// `n_permutations(original)`.
pub fn decimal_to_fns<T: Ord>(
    d: usize,
    original: &[T],
) -> Result<Vec<usize>, EnumerationError> {

    let total = n_permutations(original)?;
    if d >= total {
        return Err(EnumerationError::RankOutOfRange { rank: d, total });
    }

    let mut remaining: Vec<&T> = original.iter().collect();
    remaining.sort();

    let mut d = d;
    let mut digits = Vec::with_capacity(original.len());
    while !remaining.is_empty() {
        let mut accumulated = 0;
        let mut digit = 0;
        while digit < remaining.len() {
            //Permutations of what's left if this candidate is placed here
            let mut rest: Vec<&T> = remaining[..digit].to_vec();
            rest.extend_from_slice(&remaining[digit + 1..]);
            let starting_here = n_permutations(&rest)?;

            accumulated += starting_here;
            if d < accumulated {
                digits.push(digit);
                d -= accumulated - starting_here;
                remaining = rest;
                break;
            }

            //The sequence is sorted, so every duplicate of this candidate sits
            // immediately after it; skip them without re-accruing their count
            let duplicates = remaining[digit + 1..]
                .iter()
                .take_while(|e| **e == remaining[digit])
                .count();
            digit += 1 + duplicates;
        }
    }

    Ok(digits)
}

/// Builds the permutation of `original` at decimal rank `d`.
///
/// Composition of [`decimal_to_fns`] and [`fns_to_permutation`].  Together
/// with [`permutation_to_decimal`] this forms a round trip: for every `d` in
/// `[0, n_permutations(original))`,
/// `permutation_to_decimal(&decimal_to_permutation(d, original)?, original)`
/// recovers `d`.
pub fn decimal_to_permutation<T: Ord + Clone>(
    d: usize,
    original: &[T],
) -> Result<Vec<T>, EnumerationError> {

    fns_to_permutation(&decimal_to_fns(d, original)?, original)
}
