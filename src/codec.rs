//! Conversion between tryte strings and trit buffers.
//!
//! Both directions work on caller-owned buffers with an explicit offset,
//! so a hash state can be filled from (or dumped into) the middle of a
//! larger buffer. Every bound and every
//! character is checked before the destination is touched.

use thiserror::Error;
use crate::ternary::{arith, InvalidTrit, Trit, Tryte};

/// Errors reported by the codec.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CodecError {
    #[error("invalid tryte character {ch:?} at position {position}")]
    InvalidTryte { ch: char, position: usize },

    #[error("invalid trit value {value} at position {position}")]
    InvalidTrit { value: i8, position: usize },

    #[error("destination too small: need {needed}, have {available}")]
    BufferTooSmall { needed: usize, available: usize },

    #[error("source too short: need {needed}, have {available}")]
    SourceTooShort { needed: usize, available: usize },
}

/// Decode `count` trytes, starting at `trytes[offset]`, into `trits`.
///
/// Tryte `i` lands in `trits[3 * i .. 3 * i + 3]`. To decode into the
/// middle of a larger buffer, pass the sub-slice `&mut state[start..]`.
pub fn trytes_to_trits(
    trits: &mut [Trit],
    trytes: &[u8],
    offset: usize,
    count: usize,
) -> Result<(), CodecError> {
    let end = offset.checked_add(count).unwrap_or(usize::MAX);
    if end > trytes.len() {
        return Err(CodecError::SourceTooShort { needed: end, available: trytes.len() });
    }
    let needed = count.saturating_mul(Tryte::WIDTH);
    if needed > trits.len() {
        return Err(CodecError::BufferTooSmall { needed, available: trits.len() });
    }

    let source = trytes[offset..end]
        .iter()
        .enumerate()
        .map(|(i, &c)| {
            Tryte::from_char(c).ok_or_else(|| {
                let (ch, position) = (c as char, offset + i);
                tracing::debug!(?ch, position, "rejecting tryte string");
                CodecError::InvalidTryte { ch, position }
            })
        })
        .collect::<Result<Vec<Tryte>, CodecError>>()?;

    for (chunk, tryte) in trits.chunks_exact_mut(Tryte::WIDTH).zip(source) {
        chunk.copy_from_slice(&tryte.trits());
    }
    Ok(())
}

/// Encode `trits` as trytes written from `trytes[offset]` onward.
///
/// A final group of one or two trits is padded with zero trits. Returns
/// the number of trytes written.
pub fn trits_to_trytes(
    trytes: &mut [u8],
    offset: usize,
    trits: &[Trit],
) -> Result<usize, CodecError> {
    let count = tryte_len(trits.len());
    let needed = offset.checked_add(count).unwrap_or(usize::MAX);
    if needed > trytes.len() {
        return Err(CodecError::BufferTooSmall { needed, available: trytes.len() });
    }

    for (slot, group) in trytes[offset..needed].iter_mut().zip(trits.chunks(Tryte::WIDTH)) {
        *slot = Tryte::from_trits(group).to_char();
    }
    Ok(count)
}

/// Number of trytes needed to hold `trit_len` trits.
#[inline]
pub const fn tryte_len(trit_len: usize) -> usize {
    (trit_len + Tryte::WIDTH - 1) / Tryte::WIDTH
}

/// Decode a whole tryte string.
pub fn decode(trytes: &str) -> Result<Vec<Trit>, CodecError> {
    let bytes = trytes.as_bytes();
    let mut trits = vec![Trit::O; bytes.len() * Tryte::WIDTH];
    trytes_to_trits(&mut trits, bytes, 0, bytes.len())?;
    Ok(trits)
}

/// Encode trits as a tryte string.
pub fn encode(trits: &[Trit]) -> String {
    trits
        .chunks(Tryte::WIDTH)
        .map(|group| Tryte::from_trits(group).to_char() as char)
        .collect()
}

/// Add `n` to the counter held in a tryte string.
///
/// Returns the new trytes and the carry that did not fit.
pub fn add_to_trytes(trytes: &str, n: u64) -> Result<(String, u64), CodecError> {
    let mut trits = decode(trytes)?;
    let carry = arith::add(&mut trits, n);
    Ok((encode(&trits), carry))
}

/// Increment the counter held in a tryte string, wrapping at the top.
pub fn increment_trytes(trytes: &str) -> Result<(String, Trit), CodecError> {
    let mut trits = decode(trytes)?;
    let carry = arith::increment(&mut trits);
    Ok((encode(&trits), carry))
}

/// Validate a raw integer buffer as trits.
pub fn trits_from_i8(values: &[i8]) -> Result<Vec<Trit>, CodecError> {
    values
        .iter()
        .enumerate()
        .map(|(position, &v)| {
            Trit::try_from(v).map_err(|InvalidTrit(value)| CodecError::InvalidTrit { value, position })
        })
        .collect()
}

/// Flatten trits back into integers.
pub fn trits_to_i8(trits: &[Trit]) -> Vec<i8> {
    trits.iter().map(|t| t.to_i8()).collect()
}
