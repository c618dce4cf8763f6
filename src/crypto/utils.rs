//! Bit-level primitives shared by the key schedule and the round engine.

use bitvec::prelude::*;

use crate::crypto::error::{CipherError, Result};

/// Applies a permutation table of 1-based bit positions:
/// `output[i] = input[table[i] - 1]`.
///
/// Every position must fall inside the input. A table reaching past the
/// end indicates a wiring bug, so the input is never zero-extended.
pub fn permute(bits: &BitSlice, table: &[usize]) -> Result<BitVec> {
    let mut permuted = BitVec::with_capacity(table.len());
    for &pos in table {
        let idx = pos - 1;
        if idx >= bits.len() {
            return Err(CipherError::LengthMismatch {
                expected: pos,
                actual: bits.len(),
            });
        }
        permuted.push(bits[idx]);
    }
    Ok(permuted)
}

/// Bitwise XOR of two equal-length bit strings.
pub fn xor_bits(a: &BitSlice, b: &BitSlice) -> Result<BitVec> {
    if a.len() != b.len() {
        return Err(CipherError::LengthMismatch {
            expected: a.len(),
            actual: b.len(),
        });
    }
    Ok(a.iter()
        .by_vals()
        .zip(b.iter().by_vals())
        .map(|(x, y)| x ^ y)
        .collect())
}
