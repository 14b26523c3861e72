//! The Curl substitution as a binary circuit.
//!
//! Each input trit is split into two bits (see [`Trit::gate_pair`]): the
//! first input gives `(a, b)`, the second `(c, d)`. Two gates, `rt` and
//! `lt`, produce a two-bit output that is folded back into a trit.

use crate::ternary::Trit;

#[inline]
const fn not(v: u8) -> u8 {
    v ^ 1
}

#[inline]
const fn rt(a: u8, b: u8, c: u8, d: u8) -> u8 {
    (a ^ d) & (not(b) | c)
}

#[inline]
const fn lt(a: u8, b: u8, c: u8, d: u8) -> u8 {
    (b ^ c) | rt(a, b, c, d)
}

/// Evaluate the circuit on raw bits. Only the low bit of each input is used.
pub const fn binary_truth(a: u8, b: u8, c: u8, d: u8) -> Trit {
    let (a, b, c, d) = (a & 1, b & 1, c & 1, d & 1);
    let x1 = not(rt(a, b, c, d));
    let x2 = lt(a, b, c, d);

    match (x1, x2) {
        (1, 0) => Trit::N,
        (1, 1) => Trit::O,
        _ => Trit::P,
    }
}

/// Substitute a pair of trits through the circuit.
pub const fn truth(x1: Trit, x2: Trit) -> Trit {
    let (a, b) = x1.gate_pair();
    let (c, d) = x2.gate_pair();
    binary_truth(a, b, c, d)
}
