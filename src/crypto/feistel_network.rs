//! The 16-round Feistel engine.
//!
//! Operates on a block that has already been through the initial
//! permutation. Each invocation is a pure function of the block and the
//! round keys; decryption is the same loop with the keys in reverse.

use bitvec::prelude::*;
use log::trace;

use crate::crypto::codec::bits_to_hex;
use crate::crypto::error::{CipherError, Result};
use crate::crypto::f_function::round_function;
use crate::crypto::key_schedule::{NUM_ROUNDS, RoundKeys};
use crate::crypto::utils::xor_bits;

pub const BLOCK_BITS: usize = 64;

const HALF_BLOCK_BITS: usize = 32;

/// Runs the rounds with the keys in generation order.
pub fn encrypt_rounds(block: &BitSlice, round_keys: &RoundKeys) -> Result<BitVec> {
    run_rounds(block, round_keys, false)
}

/// Runs the rounds with the keys reversed, inverting [`encrypt_rounds`].
pub fn decrypt_rounds(block: &BitSlice, round_keys: &RoundKeys) -> Result<BitVec> {
    run_rounds(block, round_keys, true)
}

fn run_rounds(block: &BitSlice, round_keys: &RoundKeys, reverse: bool) -> Result<BitVec> {
    if block.len() != BLOCK_BITS {
        return Err(CipherError::LengthMismatch {
            expected: BLOCK_BITS,
            actual: block.len(),
        });
    }
    let keys = round_keys.as_slice();
    if keys.len() != NUM_ROUNDS {
        return Err(CipherError::LengthMismatch {
            expected: NUM_ROUNDS,
            actual: keys.len(),
        });
    }

    let mut left = block[..HALF_BLOCK_BITS].to_bitvec();
    let mut right = block[HALF_BLOCK_BITS..].to_bitvec();

    for round in 0..NUM_ROUNDS {
        let key = if reverse {
            &keys[NUM_ROUNDS - 1 - round]
        } else {
            &keys[round]
        };

        let f_out = round_function(&right, key)?;
        left = xor_bits(&left, &f_out)?;

        // No swap after the last round; the final permutation expects the
        // halves in this order.
        if round != NUM_ROUNDS - 1 {
            std::mem::swap(&mut left, &mut right);
        }

        trace!(
            "round {:2}: left={} right={}",
            round + 1,
            bits_to_hex(&left)?,
            bits_to_hex(&right)?
        );
    }

    let mut combined = left;
    combined.extend(right.iter().by_vals());
    Ok(combined)
}
