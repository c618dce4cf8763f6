//! The DES round function.

use bitvec::prelude::*;

use crate::crypto::des_tables::{E, P, S_BOXES};
use crate::crypto::error::Result;
use crate::crypto::utils::{permute, xor_bits};

const SBOX_GROUP_BITS: usize = 6;

/// Transforms the 32-bit right half under a 48-bit round key.
///
/// 1. Expansion: 32 -> 48 bits via the E table.
/// 2. Key mixing: XOR with the round key.
/// 3. Substitution: each 6-bit group through its S-box. The outer bits
///    (positions 0 and 5) select the row, the inner four the column.
/// 4. Straight permutation via the P table.
pub fn round_function(right: &BitSlice, round_key: &BitSlice) -> Result<BitVec> {
    let expanded = permute(right, &E)?;
    let mixed = xor_bits(&expanded, round_key)?;

    let mut substituted = BitVec::with_capacity(32);
    for (box_index, group) in mixed.chunks(SBOX_GROUP_BITS).enumerate() {
        let row = ((group[0] as usize) << 1) | group[5] as usize;
        let mut col = 0usize;
        for bit in group[1..5].iter().by_vals() {
            col = (col << 1) | bit as usize;
        }
        let value = S_BOXES[box_index][row][col];
        for i in (0..4).rev() {
            substituted.push((value >> i) & 1 != 0);
        }
    }

    permute(&substituted, &P)
}
