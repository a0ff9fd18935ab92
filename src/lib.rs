#![crate_name = "lexiperm"]

#![doc = include_str!("../README.md")]

mod error;
pub use error::EnumerationError;

mod coefficients;
pub use coefficients::{binomial_coefficient, multinomial_coefficient, n_permutations};

mod fns;
pub use fns::{
    decimal_to_fns, decimal_to_permutation, fns_place_values, fns_to_permutation,
    permutation_to_decimal, permutation_to_fns,
};

mod cursor;
pub use cursor::{Iter, RandomAccessCursor, RangeView};

mod permutation_iter;
pub use permutation_iter::{permutations, PermutationCursor};

mod combination_iter;
pub use combination_iter::{combinations, combinations_with_repeat, CombinationCursor};
