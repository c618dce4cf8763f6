//! The DES block cipher facade.

use crate::crypto::cipher_traits::BlockCipher;
use crate::crypto::codec::{BLOCK_HEX_LEN, bits_to_hex, hex_to_bits};
use crate::crypto::des_tables::{FP, IP};
use crate::crypto::error::{CipherError, Result};
use crate::crypto::feistel_network::{BLOCK_BITS, decrypt_rounds, encrypt_rounds};
use crate::crypto::key_schedule::RoundKeys;
use crate::crypto::utils::permute;

/// A DES instance bound to one master key for its whole lifetime.
///
/// The round keys are derived at construction and never mutated, so a
/// shared reference can encrypt and decrypt from any number of threads.
#[derive(Debug)]
pub struct DesCipher {
    round_keys: RoundKeys,
}

impl DesCipher {
    /// Builds a cipher from a 16-hex-character (64-bit) master key.
    pub fn new(key_hex: &str) -> Result<Self> {
        let round_keys = RoundKeys::derive(key_hex)?;
        Ok(DesCipher { round_keys })
    }

    /// Encrypts one 64-bit block given as 16 hex characters.
    pub fn encrypt_block(&self, block_hex: &str) -> Result<String> {
        self.process_block(block_hex, false)
    }

    /// Decrypts one 64-bit block. Identical pipeline with the round keys
    /// traversed in reverse.
    pub fn decrypt_block(&self, block_hex: &str) -> Result<String> {
        self.process_block(block_hex, true)
    }

    fn process_block(&self, block_hex: &str, decrypt: bool) -> Result<String> {
        let bits = hex_to_bits(block_hex)?;
        if bits.len() != BLOCK_BITS {
            return Err(CipherError::LengthMismatch {
                expected: BLOCK_BITS,
                actual: bits.len(),
            });
        }

        let permuted = permute(&bits, &IP)?;
        let transformed = if decrypt {
            decrypt_rounds(&permuted, &self.round_keys)?
        } else {
            encrypt_rounds(&permuted, &self.round_keys)?
        };
        bits_to_hex(&permute(&transformed, &FP)?)
    }
}

impl BlockCipher for DesCipher {
    fn encrypt_block(&self, block_hex: &str) -> Result<String> {
        DesCipher::encrypt_block(self, block_hex)
    }

    fn decrypt_block(&self, block_hex: &str) -> Result<String> {
        DesCipher::decrypt_block(self, block_hex)
    }

    fn block_hex_len(&self) -> usize {
        BLOCK_HEX_LEN
    }
}
