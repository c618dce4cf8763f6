use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CipherError {
    #[error("invalid hex digit {0:?}")]
    InvalidEncoding(char),

    #[error("key must decode to exactly 64 bits, got {0}")]
    InvalidKeyLength(usize),

    #[error("bit length mismatch: expected {expected}, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },

    #[error("decrypted bytes are not valid UTF-8: {0}")]
    DecodeError(String),
}

pub type Result<T> = std::result::Result<T, CipherError>;
