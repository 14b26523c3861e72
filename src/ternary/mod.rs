//! Balanced ternary primitives.
//!
//! - [`Trit`] - a single balanced ternary digit (-1, 0, +1)
//! - [`Tryte`] - three trits written as one character of [`ALPHABET`]
//! - [`arith`] - in-place addition and increment over trit slices

mod trit;
mod tryte;
pub mod arith;

pub use trit::{InvalidTrit, Trit};
pub use tryte::{Tryte, ALPHABET, TRYTE_TRITS};
pub use arith::{add, increment};
