//! Single balanced ternary digit (trit).
//!
//! A trit can hold one of three values: -1, 0, or +1. The enum is
//! `#[repr(i8)]` with the discriminant equal to the numeric value, so a
//! `Trit` can never hold anything outside {-1, 0, 1}.
//!
//! For the Curl substitution gates a trit is also viewed as a pair of bits:
//! - `0`  ↦ `(1, 1)`
//! - `+1` ↦ `(0, 1)`
//! - `-1` ↦ `(1, 0)`

use std::fmt;
use serde::{Serialize, Deserialize};
use thiserror::Error;

/// A single balanced ternary digit.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[repr(i8)]
pub enum Trit {
    /// Negative (-1)
    N = -1,
    /// Zero (0)
    O = 0,
    /// Positive (+1)
    P = 1,
}

/// Returned when an integer is not a valid trit value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("invalid trit value: {0} (must be -1, 0, or 1)")]
pub struct InvalidTrit(pub i8);

impl Trit {
    /// All possible trit values in order: N, O, P
    pub const ALL: [Trit; 3] = [Trit::N, Trit::O, Trit::P];

    /// Create a trit from an integer value.
    ///
    /// # Panics
    /// Panics if value is not in {-1, 0, 1}. Use [`Trit::try_from`] for
    /// values that come from outside the crate.
    #[inline]
    pub const fn from_i8(value: i8) -> Self {
        match value {
            -1 => Trit::N,
            0 => Trit::O,
            1 => Trit::P,
            _ => panic!("invalid trit value (must be -1, 0, or 1)"),
        }
    }

    /// Convert to integer value.
    #[inline]
    pub const fn to_i8(self) -> i8 {
        self as i8
    }

    /// Parse a trit from its textual form.
    ///
    /// Accepts the letters `N`/`O`/`P` (either case) and the
    /// symbols `-`, `0`, `+` and `1`.
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            'N' | 'n' | '-' => Some(Trit::N),
            'O' | 'o' | '0' => Some(Trit::O),
            'P' | 'p' | '+' | '1' => Some(Trit::P),
            _ => None,
        }
    }

    /// The `(high, low)` bit pair fed to the substitution gates.
    #[inline]
    pub const fn gate_pair(self) -> (u8, u8) {
        match self {
            Trit::O => (1, 1),
            Trit::P => (0, 1),
            Trit::N => (1, 0),
        }
    }
}

impl Default for Trit {
    fn default() -> Self {
        Trit::O
    }
}

impl fmt::Debug for Trit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Trit::N => write!(f, "N"),
            Trit::O => write!(f, "O"),
            Trit::P => write!(f, "P"),
        }
    }
}

impl fmt::Display for Trit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_i8())
    }
}

impl TryFrom<i8> for Trit {
    type Error = InvalidTrit;

    fn try_from(value: i8) -> Result<Self, Self::Error> {
        match value {
            -1..=1 => Ok(Trit::from_i8(value)),
            _ => Err(InvalidTrit(value)),
        }
    }
}

impl From<Trit> for i8 {
    fn from(trit: Trit) -> Self {
        trit.to_i8()
    }
}
