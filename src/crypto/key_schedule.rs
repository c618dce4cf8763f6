//! Derivation of the 16 round keys from a 64-bit master key.

use bitvec::prelude::*;
use log::{debug, trace};

use crate::crypto::codec::{bits_to_hex, hex_to_bits};
use crate::crypto::des_tables::{PC1, PC2, SHIFT_SCHEDULE};
use crate::crypto::error::{CipherError, Result};
use crate::crypto::utils::permute;

pub const NUM_ROUNDS: usize = 16;

const HALF_KEY_BITS: usize = 28;

/// The 16 round keys of one cipher instance, 48 bits each, held in
/// generation order. Immutable after derivation.
#[derive(Debug)]
pub struct RoundKeys {
    keys: Vec<BitVec>,
}

impl RoundKeys {
    /// Derives the round keys from a 16-hex-character master key.
    ///
    /// 1. PC-1 drops the parity bits, 64 -> 56.
    /// 2. The halves rotate left by the per-round shift amount.
    /// 3. PC-2 compresses the recombined halves, 56 -> 48.
    pub fn derive(key_hex: &str) -> Result<Self> {
        let key_bits = hex_to_bits(key_hex)?;
        if key_bits.len() != 64 {
            return Err(CipherError::InvalidKeyLength(key_bits.len()));
        }

        let parity_dropped = permute(&key_bits, &PC1)?;
        let mut left = parity_dropped[..HALF_KEY_BITS].to_bitvec();
        let mut right = parity_dropped[HALF_KEY_BITS..].to_bitvec();

        let mut keys = Vec::with_capacity(NUM_ROUNDS);
        for (round, &shift) in SHIFT_SCHEDULE.iter().enumerate() {
            left.rotate_left(shift);
            right.rotate_left(shift);

            let mut combined = BitVec::with_capacity(2 * HALF_KEY_BITS);
            combined.extend(left.iter().by_vals());
            combined.extend(right.iter().by_vals());

            let round_key = permute(&combined, &PC2)?;
            trace!("round {:2} key: {}", round + 1, bits_to_hex(&round_key)?);
            keys.push(round_key);
        }

        debug!("derived {} round keys", keys.len());
        Ok(RoundKeys { keys })
    }

    /// Round keys in generation order (encryption order).
    pub fn as_slice(&self) -> &[BitVec] {
        &self.keys
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}
