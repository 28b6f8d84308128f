/// Base64 alphabet followed by the padding symbol.
///
/// The index of a symbol is its 6-bit value; index [`PAD_INDEX`] is `=`.
pub const ALPHABET: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789+/=";

/// [`ALPHABET`] as a byte array (used for byte-level operations and const evaluation).
pub const ALPHABET_BYTES: &[u8; 65] =
    b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789+/=";

/// Index of the padding symbol within [`ALPHABET`].
pub const PAD_INDEX: u8 = 64;

/// Padding character.
pub const PAD: char = '=';

/// Reverse lookup: ASCII byte to alphabet index, `-1` for bytes outside the alphabet.
pub(crate) static DECODE_TABLE: [i8; 128] = {
    let mut table = [-1i8; 128];
    let mut i = 0;
    while i < ALPHABET_BYTES.len() {
        table[ALPHABET_BYTES[i] as usize] = i as i8;
        i += 1;
    }
    table
};

/// Looks up the alphabet index of `c`, padding included.
#[inline]
pub(crate) fn symbol_index(c: char) -> Option<u8> {
    let code = c as u32;
    if code >= 128 {
        return None;
    }
    let idx = DECODE_TABLE[code as usize];
    (idx >= 0).then_some(idx as u8)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alphabet_has_padding_last() {
        assert_eq!(ALPHABET.len(), 65);
        assert_eq!(ALPHABET.chars().nth(PAD_INDEX as usize), Some(PAD));
    }

    #[test]
    fn test_symbol_index() {
        assert_eq!(symbol_index('A'), Some(0));
        assert_eq!(symbol_index('a'), Some(26));
        assert_eq!(symbol_index('0'), Some(52));
        assert_eq!(symbol_index('+'), Some(62));
        assert_eq!(symbol_index('/'), Some(63));
        assert_eq!(symbol_index('='), Some(PAD_INDEX));
        assert_eq!(symbol_index('-'), None);
        assert_eq!(symbol_index(' '), None);
        assert_eq!(symbol_index('é'), None);
    }
}
