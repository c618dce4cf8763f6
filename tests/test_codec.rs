use bitvec::prelude::*;

use des_cipher::crypto::codec::{
    BLOCK_HEX_LEN, bits_to_hex, hex_to_bits, hex_to_text, split_into_blocks, text_to_hex,
};
use des_cipher::crypto::error::CipherError;

#[test]
fn test_hex_to_bits() {
    let bits = hex_to_bits("A5").unwrap();
    assert_eq!(bits, bitvec![1, 0, 1, 0, 0, 1, 0, 1]);
}

#[test]
fn test_hex_to_bits_is_case_insensitive() {
    assert_eq!(hex_to_bits("ab").unwrap(), hex_to_bits("AB").unwrap());
}

#[test]
fn test_hex_to_bits_rejects_non_hex() {
    assert_eq!(
        hex_to_bits("12G4").unwrap_err(),
        CipherError::InvalidEncoding('G')
    );
}

#[test]
fn test_bits_to_hex_uppercase_output() {
    let bits = hex_to_bits("deadbeef").unwrap();
    assert_eq!(bits_to_hex(&bits).unwrap(), "DEADBEEF");
}

#[test]
fn test_bits_to_hex_requires_nibble_alignment() {
    let bits = bitvec![1, 0, 1];
    assert_eq!(
        bits_to_hex(&bits).unwrap_err(),
        CipherError::LengthMismatch {
            expected: 4,
            actual: 3
        }
    );
}

#[test]
fn test_hex_bits_roundtrip() {
    let hex = "0123456789ABCDEF";
    let bits = hex_to_bits(hex).unwrap();
    assert_eq!(bits.len(), 64);
    assert_eq!(bits_to_hex(&bits).unwrap(), hex);
}

#[test]
fn test_text_to_hex() {
    assert_eq!(text_to_hex("AB"), "4142");
    assert_eq!(text_to_hex(""), "");
}

#[test]
fn test_hex_to_text_strips_trailing_nuls() {
    assert_eq!(hex_to_text("41420000").unwrap(), "AB");
}

#[test]
fn test_hex_to_text_all_zero_input_is_empty() {
    assert_eq!(hex_to_text("0000").unwrap(), "");
}

#[test]
fn test_hex_to_text_rejects_odd_length() {
    assert!(matches!(
        hex_to_text("414").unwrap_err(),
        CipherError::LengthMismatch { .. }
    ));
}

#[test]
fn test_hex_to_text_rejects_invalid_utf8() {
    assert!(matches!(
        hex_to_text("FF").unwrap_err(),
        CipherError::DecodeError(_)
    ));
}

#[test]
fn test_text_hex_roundtrip_multibyte() {
    let text = "héllo wörld";
    assert_eq!(hex_to_text(&text_to_hex(text)).unwrap(), text);
}

#[test]
fn test_split_pads_final_block_with_zeros() {
    assert_eq!(
        split_into_blocks("ABCDEF", BLOCK_HEX_LEN),
        vec!["ABCDEF0000000000".to_string()]
    );
}

#[test]
fn test_split_exact_multiple_is_unpadded() {
    let hex = "0123456789ABCDEF0123456789ABCDEF";
    let blocks = split_into_blocks(hex, BLOCK_HEX_LEN);
    assert_eq!(blocks.len(), 2);
    assert_eq!(blocks.concat(), hex);
}

#[test]
fn test_split_empty_input_yields_no_blocks() {
    assert!(split_into_blocks("", BLOCK_HEX_LEN).is_empty());
}

#[test]
fn test_split_seventeen_digits_spans_two_blocks() {
    let blocks = split_into_blocks("0123456789ABCDEF0", BLOCK_HEX_LEN);
    assert_eq!(blocks.len(), 2);
    assert_eq!(blocks[0], "0123456789ABCDEF");
    assert_eq!(blocks[1], "0000000000000000");
}
