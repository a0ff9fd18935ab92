
use thiserror::Error;

/// Errors produced while counting or enumerating combinatorial spaces.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EnumerationError {

    /// A count could not be proven to fit the requested integer width.
    ///
    /// Raised before any arithmetic wraps; no partial result is ever returned.
    #[error("combinatorial count for n = {n} may not fit in a {width}-bit integer")]
    Overflow { n: usize, width: u32 },

    /// A combination enumerator was asked for more elements than it can choose.
    #[error("cannot choose {k} elements from a sequence of {n}")]
    InvalidChoice { n: usize, k: usize },

    /// A decimal rank outside [0, total) was handed to the FNS decoder.
    #[error("rank {rank} is outside the {total} permutations of the sequence")]
    RankOutOfRange { rank: usize, total: usize },

    /// `permutation_to_fns` was given a sequence that is not a rearrangement
    /// of the original.
    #[error("the permutation is not a rearrangement of the original sequence")]
    ForeignPermutation,

    /// An FNS digit exceeded the number of elements left to place.
    #[error("FNS digit {digit} at position {position} exceeds the remaining element count")]
    DigitOutOfRange { position: usize, digit: usize },
}
