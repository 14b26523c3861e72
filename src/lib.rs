//! # curl-ternary
//!
//! Balanced ternary building blocks for the Curl hash:
//! tryte/trit conversion, in-place trit counter arithmetic and the
//! substitution box used by the Curl round function.
//!
//! Everything here is a pure function over caller-supplied buffers.

pub mod ternary;
pub mod codec;
pub mod truth;

#[cfg(feature = "wasm")]
pub mod wasm;

// Re-export commonly used types
pub use ternary::{Trit, Tryte, ALPHABET, TRYTE_TRITS, add, increment};
pub use codec::{CodecError, decode, encode, trits_to_trytes, trytes_to_trits};
pub use truth::{truth, truth_lookup, TRUTH_TABLE};
