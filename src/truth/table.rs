//! Table form of the Curl substitution.

use crate::ternary::Trit;

/// Flat substitution table, read at `4 * x1 + x2 + 5`.
///
/// Slots 3 and 7 are never addressed by valid trits.
pub const TRUTH_TABLE: [i8; 11] = [1, 0, -1, 0, 1, -1, 0, 0, -1, 1, 0];

/// Index of the `(x1, x2)` entry in [`TRUTH_TABLE`].
#[inline]
pub const fn table_index(x1: Trit, x2: Trit) -> usize {
    (4 * x1.to_i8() + x2.to_i8() + 5) as usize
}

/// Substitute a pair of trits through [`TRUTH_TABLE`].
#[inline]
pub const fn truth_lookup(x1: Trit, x2: Trit) -> Trit {
    Trit::from_i8(TRUTH_TABLE[table_index(x1, x2)])
}
