//! Base64 encoding of text, layered over the UTF-8 codec.
//!
//! Encoding always UTF-8 encodes the text first, and decoding always UTF-8
//! decodes the recovered bytes, so the pair round-trips any string.

use crate::constants::{symbol_index, ALPHABET_BYTES, PAD_INDEX};
use crate::error::DecodeError;
use crate::utf8::{decode_utf8, encode_utf8, try_decode_utf8};

/// Encodes text as standard padded Base64.
///
/// # Example
///
/// ```
/// use textkit_codec::encode_base64;
///
/// assert_eq!(encode_base64("Man"), "TWFu");
/// assert_eq!(encode_base64("M"), "TQ==");
/// assert_eq!(encode_base64("€"), "4oKs");
/// ```
pub fn encode_base64(text: &str) -> String {
    encode_base64_bytes(&encode_utf8(text))
}

/// Encodes raw bytes as standard padded Base64.
///
/// # Example
///
/// ```
/// use textkit_codec::encode_base64_bytes;
///
/// assert_eq!(encode_base64_bytes(b"hello world"), "aGVsbG8gd29ybGQ=");
/// ```
pub fn encode_base64_bytes(bytes: &[u8]) -> String {
    let mut base64 = String::with_capacity(bytes.len().div_ceil(3) * 4);

    for chunk in bytes.chunks(3) {
        let c1 = chunk[0];
        let c2 = chunk.get(1).copied();
        let c3 = chunk.get(2).copied();

        let (b2, b3) = (c2.unwrap_or(0), c3.unwrap_or(0));
        let e1 = c1 >> 2;
        let e2 = ((c1 & 3) << 4) | (b2 >> 4);
        let (e3, e4) = match (c2, c3) {
            (None, _) => (PAD_INDEX, PAD_INDEX),
            (Some(_), None) => (((b2 & 15) << 2) | (b3 >> 6), PAD_INDEX),
            (Some(_), Some(_)) => (((b2 & 15) << 2) | (b3 >> 6), b3 & 63),
        };

        for e in [e1, e2, e3, e4] {
            base64.push(ALPHABET_BYTES[e as usize] as char);
        }
    }

    base64
}

/// Decodes Base64 text back into the string it was encoded from.
///
/// Characters outside `[A-Za-z0-9+/=]` are skipped, so line breaks and
/// spaces inside the input are harmless. Malformed input never fails: a
/// trailing partial group is read as if padded, and the recovered bytes are
/// decoded with the lenient [`decode_utf8`].
///
/// # Example
///
/// ```
/// use textkit_codec::decode_base64;
///
/// assert_eq!(decode_base64("TWFu"), "Man");
/// assert_eq!(decode_base64("TW\nFu"), "Man");
/// ```
pub fn decode_base64(text: &str) -> String {
    decode_utf8(&decode_base64_bytes(text))
}

/// Decodes Base64 text into raw bytes, skipping characters outside the alphabet.
pub fn decode_base64_bytes(text: &str) -> Vec<u8> {
    let mut skipped = 0usize;
    let symbols: Vec<u8> = text
        .chars()
        .filter_map(|c| {
            let idx = symbol_index(c);
            if idx.is_none() {
                skipped += 1;
            }
            idx
        })
        .collect();

    let mut plain = Vec::with_capacity(symbols.len() / 4 * 3 + 3);
    for group in symbols.chunks(4) {
        if group.len() < 2 {
            tracing::debug!("dropped a lone trailing base64 symbol");
            continue;
        }
        push_group(&mut plain, group);
    }

    if skipped > 0 {
        tracing::debug!(skipped, "skipped characters outside the base64 alphabet");
    }
    plain
}

/// Reconstructs the bytes of one group of two to four symbols.
///
/// Missing symbols count as padding.
fn push_group(plain: &mut Vec<u8>, group: &[u8]) {
    let e1 = group[0];
    let e2 = group[1];
    let e3 = group.get(2).copied().unwrap_or(PAD_INDEX);
    let e4 = group.get(3).copied().unwrap_or(PAD_INDEX);

    let c1 = (e1 << 2) | (e2 >> 4);
    let c2 = ((e2 & 15) << 4) | (e3 >> 2);
    let c3 = ((e3 & 3) << 6) | e4;

    plain.push(c1);
    if e3 != PAD_INDEX {
        plain.push(c2);
    }
    if e4 != PAD_INDEX {
        plain.push(c3);
    }
}

/// Decodes Base64 text, rejecting anything malformed.
///
/// ASCII whitespace is skipped. Any other character outside the alphabet,
/// a symbol count that is not a multiple of four, padding anywhere but the
/// end, or bytes that are not valid UTF-8 are errors.
///
/// # Errors
///
/// Returns the first [`DecodeError`] found.
///
/// # Example
///
/// ```
/// use textkit_codec::{try_decode_base64, DecodeError};
///
/// assert_eq!(try_decode_base64("TWFu").unwrap(), "Man");
/// assert_eq!(
///     try_decode_base64("TWF"),
///     Err(DecodeError::InvalidLength { length: 3 })
/// );
/// ```
pub fn try_decode_base64(text: &str) -> Result<String, DecodeError> {
    let mut symbols = Vec::with_capacity(text.len());
    let mut offsets = Vec::with_capacity(text.len());

    for (offset, c) in text.char_indices() {
        if c.is_ascii_whitespace() {
            continue;
        }
        let idx = symbol_index(c).ok_or(DecodeError::InvalidSymbol { symbol: c, offset })?;
        symbols.push(idx);
        offsets.push(offset);
    }

    if symbols.len() % 4 != 0 {
        return Err(DecodeError::InvalidLength {
            length: symbols.len(),
        });
    }

    // Padding may only fill the last one or two slots of the final group.
    let padding_start = symbols.len().saturating_sub(2);
    for (i, &e) in symbols.iter().enumerate() {
        let misplaced = e == PAD_INDEX
            && (i < padding_start
                || symbols[i + 1..].iter().any(|&next| next != PAD_INDEX));
        if misplaced {
            return Err(DecodeError::InvalidPadding { offset: offsets[i] });
        }
    }

    let mut plain = Vec::with_capacity(symbols.len() / 4 * 3);
    for group in symbols.chunks(4) {
        push_group(&mut plain, group);
    }

    Ok(try_decode_utf8(&plain)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Utf8Error;

    #[test]
    fn test_encode_empty() {
        assert_eq!(encode_base64(""), "");
    }

    #[test]
    fn test_encode_padding() {
        assert_eq!(encode_base64("M"), "TQ==");
        assert_eq!(encode_base64("Ma"), "TWE=");
        assert_eq!(encode_base64("Man"), "TWFu");
    }

    #[test]
    fn test_encode_counts_utf8_bytes_for_padding() {
        // "é" is two bytes after UTF-8 encoding, so one pad symbol.
        assert_eq!(encode_base64("é"), "w6k=");
        // "€" is three bytes, so no padding.
        assert_eq!(encode_base64("€"), "4oKs");
    }

    #[test]
    fn test_encode_bytes_rfc4648_vectors() {
        assert_eq!(encode_base64_bytes(b""), "");
        assert_eq!(encode_base64_bytes(b"f"), "Zg==");
        assert_eq!(encode_base64_bytes(b"fo"), "Zm8=");
        assert_eq!(encode_base64_bytes(b"foo"), "Zm9v");
        assert_eq!(encode_base64_bytes(b"foob"), "Zm9vYg==");
        assert_eq!(encode_base64_bytes(b"fooba"), "Zm9vYmE=");
        assert_eq!(encode_base64_bytes(b"foobar"), "Zm9vYmFy");
    }

    #[test]
    fn test_encode_high_bytes() {
        assert_eq!(encode_base64_bytes(&[0xFF, 0xFF, 0xFF]), "////");
        assert_eq!(encode_base64_bytes(&[0xFB, 0xEF]), "++8=");
    }

    #[test]
    fn test_decode_basic() {
        assert_eq!(decode_base64("TWFu"), "Man");
        assert_eq!(decode_base64("TQ=="), "M");
        assert_eq!(decode_base64("TWE="), "Ma");
        assert_eq!(decode_base64("w6k="), "é");
        assert_eq!(decode_base64(""), "");
    }

    #[test]
    fn test_decode_skips_foreign_characters() {
        assert_eq!(decode_base64(" T W\r\nF u "), "Man");
        assert_eq!(decode_base64("TW-Fu!"), "Man");
    }

    #[test]
    fn test_decode_partial_group_reads_as_padded() {
        assert_eq!(decode_base64_bytes("TQ"), b"M");
        assert_eq!(decode_base64_bytes("TWE"), b"Ma");
        assert_eq!(decode_base64_bytes("TWFuT"), b"Man");
    }

    #[test]
    fn test_try_decode_ok() {
        assert_eq!(try_decode_base64("").unwrap(), "");
        assert_eq!(try_decode_base64("TQ==").unwrap(), "M");
        assert_eq!(try_decode_base64("TW\nFu\n").unwrap(), "Man");
    }

    #[test]
    fn test_try_decode_invalid_symbol() {
        assert_eq!(
            try_decode_base64("TW!u"),
            Err(DecodeError::InvalidSymbol { symbol: '!', offset: 2 })
        );
    }

    #[test]
    fn test_try_decode_invalid_padding() {
        assert_eq!(
            try_decode_base64("T=Fu"),
            Err(DecodeError::InvalidPadding { offset: 1 })
        );
        assert_eq!(
            try_decode_base64("TQ=="),
            Ok("M".to_string())
        );
        assert_eq!(
            try_decode_base64("TQ=u"),
            Err(DecodeError::InvalidPadding { offset: 2 })
        );
        assert_eq!(
            try_decode_base64("TQ==TWFu"),
            Err(DecodeError::InvalidPadding { offset: 2 })
        );
    }

    #[test]
    fn test_try_decode_invalid_utf8() {
        // "/w==" decodes to the single byte 0xFF.
        assert_eq!(
            try_decode_base64("/w=="),
            Err(DecodeError::Utf8(Utf8Error::InvalidLeadingByte { offset: 0, byte: 0xFF }))
        );
    }
}
