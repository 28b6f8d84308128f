//! Binary strings: byte streams carried as text, one `char` per byte.
//!
//! Every `char` of a binary string lies in `U+0000..=U+00FF`, so the UTF-8
//! output of [`encode_utf8`](crate::encode_utf8) can be handled with ordinary
//! string operations and turned back into bytes losslessly.

/// Widens each byte into the `char` with the same value.
///
/// # Example
///
/// ```
/// use textkit_codec::{encode_utf8, to_binary_string};
///
/// assert_eq!(to_binary_string(&encode_utf8("é")), "\u{C3}\u{A9}");
/// ```
pub fn to_binary_string(bytes: &[u8]) -> String {
    bytes.iter().map(|&b| char::from(b)).collect()
}

/// Narrows a binary string back into bytes.
///
/// Returns `None` if any `char` lies above `U+00FF`.
pub fn from_binary_string(text: &str) -> Option<Vec<u8>> {
    text.chars().map(|c| u8::try_from(c).ok()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_binary_string() {
        assert_eq!(to_binary_string(b""), "");
        assert_eq!(to_binary_string(b"abc"), "abc");
        assert_eq!(to_binary_string(&[0xE2, 0x82, 0xAC]), "\u{E2}\u{82}\u{AC}");
    }

    #[test]
    fn test_from_binary_string() {
        assert_eq!(from_binary_string("\u{E2}\u{82}\u{AC}"), Some(vec![0xE2, 0x82, 0xAC]));
        assert_eq!(from_binary_string("€"), None);
    }

    #[test]
    fn test_all_bytes_survive() {
        let bytes: Vec<u8> = (0..=255).collect();
        let text = to_binary_string(&bytes);
        assert_eq!(text.chars().count(), 256);
        assert_eq!(from_binary_string(&text), Some(bytes));
    }
}
