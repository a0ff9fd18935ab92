
use num_traits::{CheckedMul, PrimInt};

use crate::error::EnumerationError;

/// Computes the binomial coefficient C(`n`, `k`), i.e. `n` choose `k`.
///
/// The value is built from Pascal's rule, `C(n,k) = C(n-1,k-1) + C(n-1,k)`,
/// evaluated one row of the triangle at a time.  The additions cannot wrap
/// because the computation is only attempted when every entry is provably
/// representable: since the row sums to 2^n, requiring `n` to be less than the
/// bit width of `T` bounds every intermediate value.  Larger `n` returns
/// [`EnumerationError::Overflow`] instead of a truncated result.
///
/// ```
/// use lexiperm::binomial_coefficient;
///
/// assert_eq!(binomial_coefficient::<usize>(35, 4), Ok(52360));
/// assert!(binomial_coefficient::<usize>(99999, 88).is_err());
/// ```
pub fn binomial_coefficient<T: PrimInt>(n: usize, k: usize) -> Result<T, EnumerationError> {

    if k == 0 {
        return Ok(T::one());
    }
    if k > n {
        return Ok(T::zero());
    }
    let width = (core::mem::size_of::<T>() * 8) as u32;
    if n >= width as usize {
        return Err(EnumerationError::Overflow { n, width });
    }

    //row[j] holds C(m, j) after the m-th pass; updating right-to-left lets one
    // row serve as both C(m-1, _) and C(m, _)
    let mut row = vec![T::zero(); k + 1];
    row[0] = T::one();
    for _ in 1..=n {
        for j in (1..=k).rev() {
            row[j] = row[j] + row[j - 1];
        }
    }

    Ok(row[k])
}

/// Computes the multinomial coefficient N! / (k0! * k1! * ...), N = sum of
/// `counts`.
///
/// Given N observations where the i-th distinct value occurs `counts[i]`
/// times, this is the number of distinguishable orderings of those
/// observations.  An empty `counts` yields 1.
///
/// N! is never materialized.  Instead a running product multiplies by a
/// numerator counter (N, N-1, ...) and divides by 1..=k in lockstep; any run
/// of i consecutive integers is divisible by i!, so every division is exact
/// and intermediate values stay as small as possible.  Each multiplication is
/// checked, so a result too large for `T` surfaces as
/// [`EnumerationError::Overflow`] rather than wrapping.
///
/// ```
/// use lexiperm::multinomial_coefficient;
///
/// assert_eq!(multinomial_coefficient::<usize>(&[5, 6, 7]), Ok(14702688));
/// ```
pub fn multinomial_coefficient<T>(counts: &[usize]) -> Result<T, EnumerationError>
    where T: PrimInt + CheckedMul,
{
    let total: usize = counts.iter().sum();
    let width = (core::mem::size_of::<T>() * 8) as u32;
    let overflow = EnumerationError::Overflow { n: total, width };

    let mut result = T::one();
    let mut numerator = total;
    for &count in counts {
        for i in 1..=count {
            let num = T::from(numerator).ok_or(overflow.clone())?;
            let div = T::from(i).ok_or(overflow.clone())?;
            result = result.checked_mul(&num).ok_or(overflow.clone())?;
            result = result / div; //Exact; see above
            numerator -= 1;
        }
    }

    Ok(result)
}

/// Counts the unique permutations of a sequence, duplicates allowed.
///
/// The elements can't be assumed distinct, so this is not simply len!.  The
/// sequence is sorted (by reference, the input is untouched), partitioned into
/// runs of equal elements, and the run lengths are fed to
/// [`multinomial_coefficient`].
///
/// ```
/// use lexiperm::n_permutations;
///
/// assert_eq!(n_permutations(&[0, 1, 2]), Ok(6));
/// assert_eq!(n_permutations(&[0, 1, 1]), Ok(3));
/// assert_eq!(n_permutations::<u32>(&[]), Ok(1));
/// ```
pub fn n_permutations<T: Ord>(seq: &[T]) -> Result<usize, EnumerationError> {

    let mut sorted: Vec<&T> = seq.iter().collect();
    sorted.sort();

    let mut run_lengths = Vec::new();
    let mut i = 0;
    while i < sorted.len() {
        let run = sorted[i..].iter().take_while(|e| **e == sorted[i]).count();
        run_lengths.push(run);
        i += run;
    }

    multinomial_coefficient::<usize>(&run_lengths)
}
