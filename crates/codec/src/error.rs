//! Errors returned by the strict decoders.

use thiserror::Error;

/// A malformed UTF-8 byte sequence, reported by [`try_decode_utf8`](crate::try_decode_utf8).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Utf8Error {
    #[error("unexpected continuation byte at offset {offset}")]
    UnexpectedContinuation { offset: usize },
    #[error("invalid leading byte 0x{byte:02X} at offset {offset}")]
    InvalidLeadingByte { offset: usize, byte: u8 },
    #[error("truncated sequence starting at offset {offset}")]
    Truncated { offset: usize },
    #[error("invalid continuation byte at offset {offset}")]
    InvalidContinuation { offset: usize },
    #[error("sequence at offset {offset} encodes U+{value:04X}, which is not a scalar value")]
    InvalidCodePoint { offset: usize, value: u32 },
}

/// Malformed Base64 text, reported by [`try_decode_base64`](crate::try_decode_base64).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DecodeError {
    #[error("invalid base64 symbol {symbol:?} at offset {offset}")]
    InvalidSymbol { symbol: char, offset: usize },
    #[error("base64 symbol count {length} is not a multiple of 4")]
    InvalidLength { length: usize },
    #[error("misplaced padding at offset {offset}")]
    InvalidPadding { offset: usize },
    #[error("decoded bytes are not valid UTF-8: {0}")]
    Utf8(#[from] Utf8Error),
}
