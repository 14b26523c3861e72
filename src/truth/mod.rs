//! The Curl substitution box.
//!
//! Two equivalent forms are provided: [`truth`] evaluates the binary gate
//! circuit, [`truth_lookup`] reads the flat [`TRUTH_TABLE`]. They agree on
//! all nine input pairs.

mod gates;
mod table;

pub use gates::{binary_truth, truth};
pub use table::{table_index, truth_lookup, TRUTH_TABLE};

use crate::ternary::Trit;

/// Apply the substitution pairwise: `out[i] = truth(x1[i], x2[i])`.
///
/// # Panics
/// Panics if the three slices differ in length.
pub fn substitute(out: &mut [Trit], x1: &[Trit], x2: &[Trit]) {
    assert_eq!(out.len(), x1.len(), "output and first input differ in length");
    assert_eq!(x1.len(), x2.len(), "inputs differ in length");

    for ((o, &a), &b) in out.iter_mut().zip(x1).zip(x2) {
        *o = truth_lookup(a, b);
    }
}
