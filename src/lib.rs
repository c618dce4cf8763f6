//! From-scratch implementation of the Data Encryption Standard (DES).
//!
//! The crate exposes a hex-string-oriented block cipher: a bit/hex codec,
//! the constant permutation and substitution tables, the key schedule, the
//! 16-round Feistel engine, and a facade that ciphers whole messages.
//!
//! Classic single-key DES only. Keys are 16 hex characters (64 bits),
//! blocks are 16 hex characters, and the last short block of a message is
//! zero-padded on the right.

pub mod crypto;
