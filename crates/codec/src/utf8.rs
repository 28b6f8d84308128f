//! Byte-level UTF-8 encoding and decoding.
//!
//! The encoder works one code point at a time and never fails. Two decoders
//! are provided: [`decode_utf8`] repairs whatever it is given, while
//! [`try_decode_utf8`] rejects malformed input.

use std::borrow::Cow;
use std::char::REPLACEMENT_CHARACTER;

use crate::error::Utf8Error;

/// Collapses every `\r\n` pair to `\n`.
pub(crate) fn normalize_newlines(text: &str) -> Cow<'_, str> {
    if text.contains("\r\n") {
        Cow::Owned(text.replace("\r\n", "\n"))
    } else {
        Cow::Borrowed(text)
    }
}

/// Encodes text into a UTF-8 byte sequence.
///
/// Line endings are normalized first: each `\r\n` becomes `\n`. Every code
/// point then produces one to four bytes.
///
/// # Example
///
/// ```
/// use textkit_codec::encode_utf8;
///
/// assert_eq!(encode_utf8("Man"), b"Man");
/// assert_eq!(encode_utf8("€"), [0xE2, 0x82, 0xAC]);
/// assert_eq!(encode_utf8("a\r\nb"), b"a\nb");
/// ```
pub fn encode_utf8(text: &str) -> Vec<u8> {
    let plain = normalize_newlines(text);
    let mut utf8 = Vec::with_capacity(plain.len());

    for ch in plain.chars() {
        let c = ch as u32;
        if c < 0x80 {
            utf8.push(c as u8);
        } else if c < 0x800 {
            utf8.push(((c >> 6) | 0xC0) as u8);
            utf8.push(((c & 0x3F) | 0x80) as u8);
        } else if c < 0x10000 {
            utf8.push(((c >> 12) | 0xE0) as u8);
            utf8.push((((c >> 6) & 0x3F) | 0x80) as u8);
            utf8.push(((c & 0x3F) | 0x80) as u8);
        } else {
            utf8.push(((c >> 18) | 0xF0) as u8);
            utf8.push((((c >> 12) & 0x3F) | 0x80) as u8);
            utf8.push((((c >> 6) & 0x3F) | 0x80) as u8);
            utf8.push(((c & 0x3F) | 0x80) as u8);
        }
    }

    tracing::trace!(input_len = text.len(), bytes = utf8.len(), "encoded utf8");
    utf8
}

/// Decodes a UTF-8 byte sequence, repairing malformed input instead of failing.
///
/// Each leading byte selects the sequence width:
///
/// - `0xxxxxxx`: one byte
/// - `110xxxxx`: two bytes
/// - `11110xxx`: four bytes
/// - anything else: three bytes
///
/// Continuation bytes are not validated. A continuation byte missing past
/// the end of input contributes zero bits. A sequence that combines to a
/// value outside the Unicode scalar range becomes `U+FFFD`.
///
/// # Example
///
/// ```
/// use textkit_codec::decode_utf8;
///
/// assert_eq!(decode_utf8(&[0xC3, 0xA9]), "é");
/// assert_eq!(decode_utf8(b"plain"), "plain");
/// ```
pub fn decode_utf8(bytes: &[u8]) -> String {
    let mut plain = String::with_capacity(bytes.len());
    let mut replaced = 0usize;
    let mut i = 0;

    while i < bytes.len() {
        let b1 = bytes[i] as u32;
        let cont = |k: usize| bytes.get(i + k).map_or(0, |&b| (b & 0x3F) as u32);

        let (code, width) = if b1 < 0x80 {
            (b1, 1)
        } else if (0xC0..0xE0).contains(&b1) {
            (((b1 & 0x1F) << 6) | cont(1), 2)
        } else if (0xF0..0xF8).contains(&b1) {
            (
                ((b1 & 0x07) << 18) | (cont(1) << 12) | (cont(2) << 6) | cont(3),
                4,
            )
        } else {
            (((b1 & 0x0F) << 12) | (cont(1) << 6) | cont(2), 3)
        };

        match char::from_u32(code) {
            Some(c) => plain.push(c),
            None => {
                plain.push(REPLACEMENT_CHARACTER);
                replaced += 1;
            }
        }
        i += width;
    }

    if replaced > 0 || i > bytes.len() {
        tracing::debug!(
            replaced,
            truncated = i > bytes.len(),
            "repaired malformed utf8 input"
        );
    }
    plain
}

/// Decodes a UTF-8 byte sequence, rejecting anything malformed.
///
/// Overlong encodings are accepted.
///
/// # Errors
///
/// Returns the first [`Utf8Error`] found, with the byte offset where it starts.
///
/// # Example
///
/// ```
/// use textkit_codec::{try_decode_utf8, Utf8Error};
///
/// assert_eq!(try_decode_utf8(&[0xE2, 0x82, 0xAC]).unwrap(), "€");
/// assert_eq!(
///     try_decode_utf8(&[b'a', 0xE2, 0x82]),
///     Err(Utf8Error::Truncated { offset: 1 })
/// );
/// ```
pub fn try_decode_utf8(bytes: &[u8]) -> Result<String, Utf8Error> {
    let mut plain = String::with_capacity(bytes.len());
    let mut i = 0;

    while i < bytes.len() {
        let b1 = bytes[i];
        let (width, lead) = match b1 {
            0x00..=0x7F => {
                plain.push(b1 as char);
                i += 1;
                continue;
            }
            0x80..=0xBF => return Err(Utf8Error::UnexpectedContinuation { offset: i }),
            0xC0..=0xDF => (2, (b1 & 0x1F) as u32),
            0xE0..=0xEF => (3, (b1 & 0x0F) as u32),
            0xF0..=0xF7 => (4, (b1 & 0x07) as u32),
            _ => return Err(Utf8Error::InvalidLeadingByte { offset: i, byte: b1 }),
        };

        if i + width > bytes.len() {
            return Err(Utf8Error::Truncated { offset: i });
        }

        let mut value = lead;
        for (k, &b) in bytes[i + 1..i + width].iter().enumerate() {
            if b & 0xC0 != 0x80 {
                return Err(Utf8Error::InvalidContinuation { offset: i + 1 + k });
            }
            value = (value << 6) | (b & 0x3F) as u32;
        }

        let c = char::from_u32(value).ok_or(Utf8Error::InvalidCodePoint { offset: i, value })?;
        plain.push(c);
        i += width;
    }

    Ok(plain)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_ascii_is_identity() {
        assert_eq!(encode_utf8("hello world"), b"hello world");
        assert_eq!(encode_utf8(""), b"");
    }

    #[test]
    fn test_encode_two_byte() {
        assert_eq!(encode_utf8("é"), [0xC3, 0xA9]);
        assert_eq!(encode_utf8("\u{80}"), [0xC2, 0x80]);
        assert_eq!(encode_utf8("\u{7FF}"), [0xDF, 0xBF]);
    }

    #[test]
    fn test_encode_three_byte() {
        assert_eq!(encode_utf8("€"), [0xE2, 0x82, 0xAC]);
        assert_eq!(encode_utf8("\u{800}"), [0xE0, 0xA0, 0x80]);
        assert_eq!(encode_utf8("\u{FFFF}"), [0xEF, 0xBF, 0xBF]);
    }

    #[test]
    fn test_encode_four_byte() {
        assert_eq!(encode_utf8("😀"), [0xF0, 0x9F, 0x98, 0x80]);
        assert_eq!(encode_utf8("\u{10FFFF}"), [0xF4, 0x8F, 0xBF, 0xBF]);
    }

    #[test]
    fn test_encode_normalizes_crlf() {
        assert_eq!(encode_utf8("a\r\nb\r\n"), b"a\nb\n");
        // A lone CR is kept.
        assert_eq!(encode_utf8("a\rb"), b"a\rb");
        assert_eq!(encode_utf8("é\r\n€"), [0xC3, 0xA9, b'\n', 0xE2, 0x82, 0xAC]);
    }

    #[test]
    fn test_decode_each_width() {
        assert_eq!(decode_utf8(b"A"), "A");
        assert_eq!(decode_utf8(&[0xC3, 0xA9]), "é");
        assert_eq!(decode_utf8(&[0xE2, 0x82, 0xAC]), "€");
        assert_eq!(decode_utf8(&[0xF0, 0x9F, 0x98, 0x80]), "😀");
    }

    #[test]
    fn test_decode_truncated_is_lenient() {
        // Missing continuation bits count as zero.
        assert_eq!(decode_utf8(&[0xC3]), "\u{C0}");
        assert_eq!(decode_utf8(&[0xE2, 0x82]), "\u{2080}");
    }

    #[test]
    fn test_decode_stray_continuation_reads_three_bytes() {
        // 0xA9 is not a leading byte; it is read as the head of a three-byte sequence.
        assert_eq!(decode_utf8(&[0xA9, 0x80, 0x80]), "\u{9000}");
    }

    #[test]
    fn test_decode_surrogate_becomes_replacement() {
        // ED A0 80 would be U+D800.
        assert_eq!(decode_utf8(&[0xED, 0xA0, 0x80, b'x']), "\u{FFFD}x");
    }

    #[test]
    fn test_decode_out_of_range_becomes_replacement() {
        assert_eq!(decode_utf8(&[0xF7, 0xBF, 0xBF, 0xBF]), "\u{FFFD}");
    }

    #[test]
    fn test_try_decode_valid() {
        assert_eq!(try_decode_utf8(b"").unwrap(), "");
        assert_eq!(try_decode_utf8("héllo €😀".as_bytes()).unwrap(), "héllo €😀");
    }

    #[test]
    fn test_try_decode_errors() {
        assert_eq!(
            try_decode_utf8(&[b'a', 0x80]),
            Err(Utf8Error::UnexpectedContinuation { offset: 1 })
        );
        assert_eq!(
            try_decode_utf8(&[0xFF]),
            Err(Utf8Error::InvalidLeadingByte { offset: 0, byte: 0xFF })
        );
        assert_eq!(try_decode_utf8(&[0xC3]), Err(Utf8Error::Truncated { offset: 0 }));
        assert_eq!(
            try_decode_utf8(&[0xE2, 0x41, 0xAC]),
            Err(Utf8Error::InvalidContinuation { offset: 1 })
        );
        assert_eq!(
            try_decode_utf8(&[0xED, 0xA0, 0x80]),
            Err(Utf8Error::InvalidCodePoint { offset: 0, value: 0xD800 })
        );
    }
}
