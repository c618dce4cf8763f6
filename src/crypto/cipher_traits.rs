//! The block-cipher seam and the whole-message pipelines built on it.

use log::debug;
use rayon::prelude::*;

use crate::crypto::codec::{hex_to_text, split_into_blocks, text_to_hex};
use crate::crypto::error::Result;

/// Block count at which whole-message processing fans out with rayon.
/// Blocks are independent of each other, so no coordination is needed.
pub const PARALLEL_BLOCK_THRESHOLD: usize = 1024;

/// A cipher over fixed-size hex blocks.
///
/// Implementors supply the per-block primitives; the whole-message
/// operations are provided on top of them.
pub trait BlockCipher: Sync {
    fn encrypt_block(&self, block_hex: &str) -> Result<String>;
    fn decrypt_block(&self, block_hex: &str) -> Result<String>;

    /// Hex length of one block.
    fn block_hex_len(&self) -> usize;

    /// Enciphers a hex payload block by block. The final short block is
    /// right-padded with `'0'`; callers that know the payload size
    /// truncate the deciphered output themselves.
    fn encrypt_raw_hex(&self, hex: &str) -> Result<String> {
        let blocks = split_into_blocks(hex, self.block_hex_len());
        debug!("enciphering {} block(s)", blocks.len());
        let outputs = process_blocks(&blocks, |block| self.encrypt_block(block))?;
        Ok(outputs.concat())
    }

    /// Deciphers a hex payload block by block, with no padding removal.
    fn decrypt_raw_hex(&self, hex: &str) -> Result<String> {
        let blocks = split_into_blocks(hex, self.block_hex_len());
        debug!("deciphering {} block(s)", blocks.len());
        let outputs = process_blocks(&blocks, |block| self.decrypt_block(block))?;
        Ok(outputs.concat())
    }

    /// Encrypts UTF-8 text. The ciphertext is `ceil(byte_len / 8) * 16`
    /// hex characters.
    fn encrypt_text(&self, text: &str) -> Result<String> {
        self.encrypt_raw_hex(&text_to_hex(text))
    }

    /// Decrypts a hex ciphertext back to text, stripping the trailing NUL
    /// bytes introduced by padding. Best-effort: plaintext that itself
    /// ends in NUL bytes loses them.
    fn decrypt_text(&self, cipher_hex: &str) -> Result<String> {
        hex_to_text(&self.decrypt_raw_hex(cipher_hex)?)
    }
}

fn process_blocks<F>(blocks: &[String], op: F) -> Result<Vec<String>>
where
    F: Fn(&str) -> Result<String> + Sync,
{
    if blocks.len() >= PARALLEL_BLOCK_THRESHOLD {
        blocks.par_iter().map(|block| op(block.as_str())).collect()
    } else {
        blocks.iter().map(|block| op(block.as_str())).collect()
    }
}
