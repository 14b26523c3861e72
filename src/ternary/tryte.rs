//! Trytes: three trits written as one character.
//!
//! The alphabet is `9ABCDEFGHIJKLMNOPQRSTUVWXYZ`. `9` stands for zero and
//! `A..Z` for 1..26; values 14..26 are the negative balanced values
//! -13..-1 shifted up by 27.

use std::fmt;
use serde::{Serialize, Deserialize};
use crate::ternary::Trit;
use crate::ternary::Trit::{N, O, P};

/// The 27 tryte characters, indexed by tryte value.
pub const ALPHABET: &[u8; 27] = b"9ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Tryte value → trit triplet (least significant trit first).
pub const TRYTE_TRITS: [[Trit; 3]; 27] = [
    [O, O, O], [P, O, O], [N, P, O],
    [O, P, O], [P, P, O], [N, N, P],
    [O, N, P], [P, N, P], [N, O, P],
    [O, O, P], [P, O, P], [N, P, P],
    [O, P, P], [P, P, P], [N, N, N],
    [O, N, N], [P, N, N], [N, O, N],
    [O, O, N], [P, O, N], [N, P, N],
    [O, P, N], [P, P, N], [N, N, O],
    [O, N, O], [P, N, O], [N, O, O],
];

/// A single tryte, stored as its alphabet index (0..=26).
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Tryte(u8);

impl Tryte {
    /// Number of trits in a tryte.
    pub const WIDTH: usize = 3;

    /// Look up a tryte by its character, `None` outside the alphabet.
    #[inline]
    pub const fn from_char(c: u8) -> Option<Self> {
        match c {
            b'9' => Some(Tryte(0)),
            b'A'..=b'Z' => Some(Tryte(c - b'A' + 1)),
            _ => None,
        }
    }

    /// Build a tryte from up to three trits (missing high trits are zero).
    ///
    /// # Panics
    /// Panics if more than three trits are given.
    pub fn from_trits(trits: &[Trit]) -> Self {
        assert!(trits.len() <= Self::WIDTH, "a tryte holds at most 3 trits, got {}", trits.len());

        let mut value: i8 = 0;
        let mut weight: i8 = 1;
        for t in trits {
            value += t.to_i8() * weight;
            weight *= 3;
        }
        if value < 0 {
            value += 27;
        }
        Tryte(value as u8)
    }

    /// Alphabet index of this tryte.
    #[inline]
    pub const fn index(self) -> u8 {
        self.0
    }

    /// Balanced value in -13..=13.
    #[inline]
    pub const fn value(self) -> i8 {
        if self.0 > 13 {
            self.0 as i8 - 27
        } else {
            self.0 as i8
        }
    }

    /// The tryte's character.
    #[inline]
    pub const fn to_char(self) -> u8 {
        ALPHABET[self.0 as usize]
    }

    /// The tryte's trits, least significant first.
    #[inline]
    pub const fn trits(self) -> [Trit; 3] {
        TRYTE_TRITS[self.0 as usize]
    }
}

impl fmt::Debug for Tryte {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Tryte({} = {})", self.to_char() as char, self.value())
    }
}

impl fmt::Display for Tryte {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char() as char)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_table_is_a_bijection() {
        let rows: HashSet<[Trit; 3]> = TRYTE_TRITS.iter().copied().collect();
        assert_eq!(rows.len(), 27);

        for a in Trit::ALL {
            for b in Trit::ALL {
                for c in Trit::ALL {
                    assert!(rows.contains(&[a, b, c]), "missing row {:?}", [a, b, c]);
                }
            }
        }
    }

    #[test]
    fn test_rows_match_balanced_value() {
        for (i, row) in TRYTE_TRITS.iter().enumerate() {
            let value = row[0].to_i8() as i32 + 3 * row[1].to_i8() as i32 + 9 * row[2].to_i8() as i32;
            assert_eq!(value.rem_euclid(27), i as i32, "row {} has value {}", i, value);
        }
    }

    #[test]
    fn test_char_lookup() {
        assert_eq!(Tryte::from_char(b'9').map(Tryte::index), Some(0));
        assert_eq!(Tryte::from_char(b'A').map(Tryte::index), Some(1));
        assert_eq!(Tryte::from_char(b'M').map(Tryte::index), Some(13));
        assert_eq!(Tryte::from_char(b'N').map(Tryte::index), Some(14));
        assert_eq!(Tryte::from_char(b'Z').map(Tryte::index), Some(26));
        assert_eq!(Tryte::from_char(b'a'), None);
        assert_eq!(Tryte::from_char(b'0'), None);
        assert_eq!(Tryte::from_char(b'@'), None);
        assert_eq!(Tryte::from_char(b'['), None);
    }

    #[test]
    fn test_balanced_values() {
        assert_eq!(Tryte::from_char(b'M').unwrap().value(), 13);
        assert_eq!(Tryte::from_char(b'N').unwrap().value(), -13);
        assert_eq!(Tryte::from_char(b'Z').unwrap().value(), -1);
        assert_eq!(Tryte::from_char(b'Z').unwrap().trits(), [N, O, O]);
    }

    #[test]
    fn test_from_trits_inverts_table() {
        for c in ALPHABET.iter().copied() {
            let tryte = Tryte::from_char(c).unwrap();
            assert_eq!(Tryte::from_trits(&tryte.trits()), tryte);
            assert_eq!(tryte.to_char(), c);
        }
    }

    #[test]
    fn test_from_partial_trits() {
        assert_eq!(Tryte::from_trits(&[]).to_char(), b'9');
        assert_eq!(Tryte::from_trits(&[N]).to_char(), b'Z');
        assert_eq!(Tryte::from_trits(&[P, P]).to_char(), b'D');
        assert_eq!(Tryte::from_trits(&[N, N]).to_char(), b'W');
    }
}
