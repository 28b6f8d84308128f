//! UTF-8 and Base64 text codecs.
//!
//! This crate provides:
//! - A byte-level UTF-8 encoder with `\r\n` normalization
//! - Lenient and strict UTF-8 decoders
//! - Base64 encoding of text (UTF-8 first, then Base64) and its inverse
//! - Binary strings for carrying byte streams as text
//!
//! # Example
//!
//! ```
//! use textkit_codec::{decode_base64, encode_base64};
//!
//! let encoded = encode_base64("héllo wörld");
//! let decoded = decode_base64(&encoded);
//! assert_eq!(decoded, "héllo wörld");
//! ```

mod base64;
mod binary;
mod constants;
mod error;
mod utf8;

pub use base64::{
    decode_base64, decode_base64_bytes, encode_base64, encode_base64_bytes, try_decode_base64,
};
pub use binary::{from_binary_string, to_binary_string};
pub use constants::{ALPHABET, ALPHABET_BYTES, PAD, PAD_INDEX};
pub use error::{DecodeError, Utf8Error};
pub use utf8::{decode_utf8, encode_utf8, try_decode_utf8};
