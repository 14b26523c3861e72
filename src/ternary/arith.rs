//! Trit-slice arithmetic.
//!
//! Counters (nonces) are stored as trit slices, least significant trit
//! first. The slice length plays the role of the counter width: carries
//! past the top trit are never written into memory, they are returned.

use crate::ternary::Trit;

/// Add a non-negative integer to a trit slice in place.
///
/// Each step adds `n % 3` to the current trit and moves `n / 3` up; a trit
/// that ends above 1 is brought back by subtracting 3 and carrying one.
/// Returns whatever part of `n` did not fit, so that
/// `value(before) + n == value(after) + carry * 3^len`.
pub fn add(trits: &mut [Trit], mut n: u64) -> u64 {
    for trit in trits.iter_mut() {
        let mut t = trit.to_i8() + (n % 3) as i8;
        n /= 3;
        if t > 1 {
            t -= 3;
            n += 1;
        }
        *trit = Trit::from_i8(t);
    }

    if n != 0 {
        tracing::trace!(width = trits.len(), carry = n, "trit addition overflowed");
    }
    n
}

/// Increment a trit slice by one in place.
///
/// Trits at +1 roll over to -1 and pass the carry up. A carry out of the
/// top trit wraps the slice to its minimum value and is returned as
/// [`Trit::P`]; nothing past the end of the slice is touched.
pub fn increment(trits: &mut [Trit]) -> Trit {
    for trit in trits.iter_mut() {
        match *trit {
            Trit::P => *trit = Trit::N,
            Trit::O => {
                *trit = Trit::P;
                return Trit::O;
            }
            Trit::N => {
                *trit = Trit::O;
                return Trit::O;
            }
        }
    }

    tracing::trace!(width = trits.len(), "trit increment wrapped");
    Trit::P
}

/// Read a trit slice as a balanced ternary integer.
///
/// # Panics
/// Panics if the slice is wider than 80 trits (the value may not fit).
pub fn to_i128(trits: &[Trit]) -> i128 {
    assert!(trits.len() <= MAX_I128_WIDTH, "{} trits do not fit in an i128", trits.len());

    trits
        .iter()
        .rev()
        .fold(0i128, |acc, t| acc * 3 + t.to_i8() as i128)
}

/// Write a balanced ternary integer into a trit slice.
///
/// Returns the part of the value that did not fit, i.e. `value` is
/// `to_i128(trits) + overflow * 3^len`.
pub fn from_i128(trits: &mut [Trit], mut value: i128) -> i128 {
    for trit in trits.iter_mut() {
        let mut rem = value.rem_euclid(3) as i8;
        value = value.div_euclid(3);
        if rem == 2 {
            rem = -1;
            value += 1;
        }
        *trit = Trit::from_i8(rem);
    }
    value
}

/// Widest slice [`to_i128`] accepts: (3^80 - 1) / 2 < 2^127.
pub const MAX_I128_WIDTH: usize = 80;

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use crate::ternary::Trit::{N, O, P};

    fn pow3(n: usize) -> i128 {
        3i128.pow(n as u32)
    }

    #[test]
    fn test_add_basic() {
        let mut trits = [O; 6];
        let carry = add(&mut trits, 150);

        assert_eq!(to_i128(&trits), 150);
        assert_eq!(carry, 0);
    }

    #[test]
    fn test_add_onto_negative() {
        let mut trits = [O; 6];
        from_i128(&mut trits, -100);
        let carry = add(&mut trits, 42);

        assert_eq!(to_i128(&trits), -58);
        assert_eq!(carry, 0);
    }

    #[test]
    fn test_add_two_to_one() {
        // 1 + 2 = 3 = 0 + 1*3
        let mut trits = [P, O];
        assert_eq!(add(&mut trits, 2), 0);
        assert_eq!(trits, [O, P]);
    }

    #[test]
    fn test_add_overflow_returns_carry() {
        // Three trits hold -13..=13; 13 + 1 wraps to -13 with carry 1.
        let mut trits = [P, P, P];
        let carry = add(&mut trits, 1);

        assert_eq!(trits, [N, N, N]);
        assert_eq!(carry, 1);
    }

    #[test]
    fn test_add_to_empty_slice() {
        let mut trits: [Trit; 0] = [];
        assert_eq!(add(&mut trits, 12345), 12345);
    }

    #[test]
    fn test_add_max_u64() {
        let mut trits = [O; 42];
        let carry = add(&mut trits, u64::MAX);

        assert_eq!(carry, 0);
        assert_eq!(to_i128(&trits), u64::MAX as i128);
    }

    #[test]
    fn test_increment_simple() {
        let mut trits = [O; 4];
        assert_eq!(increment(&mut trits), O);
        assert_eq!(to_i128(&trits), 1);
        assert_eq!(increment(&mut trits), O);
        assert_eq!(to_i128(&trits), 2);
        assert_eq!(trits, [N, P, O, O]);
    }

    #[test]
    fn test_increment_walks_whole_range() {
        let mut trits = [N; 4];
        let min = -(pow3(4) - 1) / 2;
        assert_eq!(to_i128(&trits), min);

        for expected in (min + 1)..=-min {
            assert_eq!(increment(&mut trits), O);
            assert_eq!(to_i128(&trits), expected);
        }
    }

    #[test]
    fn test_increment_wraps_at_top() {
        let mut trits = [P; 5];
        assert_eq!(increment(&mut trits), P);
        assert_eq!(trits, [N; 5]);
    }

    #[test]
    fn test_increment_never_writes_past_slice() {
        // The counter occupies the first 3 trits of a wider buffer; the
        // carry out of the top trit must not leak into index 3.
        let mut buffer = [P, P, P, O, N];
        let carry = increment(&mut buffer[..3]);

        assert_eq!(carry, P);
        assert_eq!(buffer, [N, N, N, O, N]);
    }

    #[test]
    fn test_increment_empty_slice() {
        let mut trits: [Trit; 0] = [];
        assert_eq!(increment(&mut trits), P);
    }

    #[test]
    fn test_from_i128_overflow() {
        let mut trits = [O; 2];
        // 5 = -1 + 3*(-1) + 9*1
        assert_eq!(from_i128(&mut trits, 5), 1);
        assert_eq!(trits, [N, N]);
    }

    #[test]
    #[should_panic(expected = "do not fit")]
    fn test_to_i128_rejects_wide_slices() {
        let trits = [O; MAX_I128_WIDTH + 1];
        let _ = to_i128(&trits);
    }

    fn trit_vec(max: usize) -> impl Strategy<Value = Vec<Trit>> {
        prop::collection::vec(prop::sample::select(Trit::ALL.to_vec()), 0..max)
    }

    proptest! {
        #[test]
        fn prop_add_preserves_value(mut trits in trit_vec(40), n in any::<u64>()) {
            let before = to_i128(&trits);
            let carry = add(&mut trits, n);
            let after = to_i128(&trits);

            prop_assert_eq!(before + n as i128, after + carry as i128 * pow3(trits.len()));
        }

        #[test]
        fn prop_add_result_in_range(mut trits in trit_vec(12), n in 0u64..1_000_000) {
            let carry = add(&mut trits, n);
            let half = (pow3(trits.len()) - 1) / 2;
            let after = to_i128(&trits);

            prop_assert!(after >= -half && after <= half);
            prop_assert!(carry <= n);
        }

        #[test]
        fn prop_increment_matches_add_one(trits in trit_vec(20)) {
            let mut by_increment = trits.clone();
            let mut by_add = trits;

            let carry = increment(&mut by_increment);
            let add_carry = add(&mut by_add, 1);

            prop_assert_eq!(&by_increment, &by_add);
            prop_assert_eq!(carry == P, add_carry == 1);
        }

        #[test]
        fn prop_from_i128_roundtrip(value in -3_000_000_000i128..3_000_000_000i128) {
            let mut trits = [O; 24];
            prop_assert_eq!(from_i128(&mut trits, value), 0);
            prop_assert_eq!(to_i128(&trits), value);
        }
    }
}
