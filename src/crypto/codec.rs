//! Conversions between hexadecimal strings, bit strings and text, plus
//! splitting a message into cipher-sized blocks.
//!
//! Hex input is case-insensitive; all hex output uses uppercase digits.

use bitvec::prelude::*;

use crate::crypto::error::{CipherError, Result};

/// Hex length of one 64-bit cipher block.
pub const BLOCK_HEX_LEN: usize = 16;

const HEX_DIGITS: [char; 16] = [
    '0', '1', '2', '3', '4', '5', '6', '7', '8', '9', 'A', 'B', 'C', 'D', 'E', 'F',
];

/// Maps each hex digit to its 4-bit binary representation, most
/// significant bit first.
pub fn hex_to_bits(hex: &str) -> Result<BitVec> {
    let mut bits = BitVec::with_capacity(hex.len() * 4);
    for ch in hex.chars() {
        let nibble = ch.to_digit(16).ok_or(CipherError::InvalidEncoding(ch))?;
        for i in (0..4).rev() {
            bits.push((nibble >> i) & 1 != 0);
        }
    }
    Ok(bits)
}

/// Groups bits into 4-bit chunks and maps each to a hex digit. The input
/// length must be a multiple of 4.
pub fn bits_to_hex(bits: &BitSlice) -> Result<String> {
    if bits.len() % 4 != 0 {
        return Err(CipherError::LengthMismatch {
            expected: bits.len().next_multiple_of(4),
            actual: bits.len(),
        });
    }
    let mut hex = String::with_capacity(bits.len() / 4);
    for chunk in bits.chunks(4) {
        let mut nibble = 0usize;
        for bit in chunk.iter().by_vals() {
            nibble = (nibble << 1) | bit as usize;
        }
        hex.push(HEX_DIGITS[nibble]);
    }
    Ok(hex)
}

/// Encodes text as UTF-8 bytes, two uppercase hex digits per byte.
pub fn text_to_hex(text: &str) -> String {
    let mut hex = String::with_capacity(text.len() * 2);
    for byte in text.bytes() {
        hex.push(HEX_DIGITS[(byte >> 4) as usize]);
        hex.push(HEX_DIGITS[(byte & 0x0F) as usize]);
    }
    hex
}

/// Decodes hex pairs to bytes, strips the trailing NUL bytes produced by
/// block padding, and interprets the rest as UTF-8.
///
/// Stripping is best-effort: plaintext that legitimately ends in NUL
/// bytes loses them too.
pub fn hex_to_text(hex: &str) -> Result<String> {
    let digit_count = hex.chars().count();
    if digit_count % 2 != 0 {
        return Err(CipherError::LengthMismatch {
            expected: digit_count + 1,
            actual: digit_count,
        });
    }
    let mut bytes = Vec::with_capacity(digit_count / 2);
    let mut chars = hex.chars();
    while let (Some(hi), Some(lo)) = (chars.next(), chars.next()) {
        let hi = hi.to_digit(16).ok_or(CipherError::InvalidEncoding(hi))?;
        let lo = lo.to_digit(16).ok_or(CipherError::InvalidEncoding(lo))?;
        bytes.push(((hi << 4) | lo) as u8);
    }
    while bytes.last() == Some(&0) {
        bytes.pop();
    }
    String::from_utf8(bytes).map_err(|e| CipherError::DecodeError(e.to_string()))
}

/// Splits a hex string into `block_hex_len`-character chunks, right-padding
/// the final partial chunk with `'0'`.
pub fn split_into_blocks(hex: &str, block_hex_len: usize) -> Vec<String> {
    let digits: Vec<char> = hex.chars().collect();
    let mut blocks = Vec::with_capacity(digits.len().div_ceil(block_hex_len));
    for chunk in digits.chunks(block_hex_len) {
        let mut block: String = chunk.iter().collect();
        for _ in chunk.len()..block_hex_len {
            block.push('0');
        }
        blocks.push(block);
    }
    blocks
}
