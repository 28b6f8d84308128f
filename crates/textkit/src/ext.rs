use textkit_codec::{from_binary_string, to_binary_string};
use textkit_util::QueryParams;

/// Text operations as methods on `str`.
///
/// Nothing is added to `str` until this trait is imported.
///
/// UTF-8 bytes travel as binary strings here: [`encode_utf8`](StringExt::encode_utf8)
/// returns one `char` per byte, and [`decode_utf8`](StringExt::decode_utf8)
/// reads that form back. See [`textkit_codec::to_binary_string`].
pub trait StringExt {
    /// See [`textkit_util::strip_html`].
    fn strip_html(&self) -> String;

    /// UTF-8 encodes the text, returning the bytes as a binary string.
    ///
    /// ```
    /// use textkit::StringExt;
    ///
    /// assert_eq!("€".encode_utf8(), "\u{E2}\u{82}\u{AC}");
    /// ```
    fn encode_utf8(&self) -> String;

    /// Decodes a binary string of UTF-8 bytes.
    ///
    /// `char`s above `U+00FF` keep only their low eight bits.
    ///
    /// ```
    /// use textkit::StringExt;
    ///
    /// assert_eq!("\u{C3}\u{A9}".decode_utf8(), "é");
    /// ```
    fn decode_utf8(&self) -> String;

    /// See [`textkit_codec::encode_base64`].
    fn encode_base64(&self) -> String;

    /// See [`textkit_codec::decode_base64`].
    fn decode_base64(&self) -> String;

    /// See [`textkit_util::trim_properties`].
    fn trim_properties(&self, count: Option<usize>) -> String;

    /// See [`textkit_util::trim_to_ellipsis`].
    fn trim_to_ellipsis(&self, length: Option<usize>) -> String;

    /// See [`textkit_util::parse_boolean`].
    fn parse_boolean(&self) -> Option<bool>;

    /// See [`textkit_util::parse_query_string`].
    fn parse_query_string(&self) -> QueryParams;

    /// See [`textkit_util::query_param`].
    fn query_param(&self, name: &str) -> Option<String>;
}

impl StringExt for str {
    fn strip_html(&self) -> String {
        textkit_util::strip_html(self)
    }

    fn encode_utf8(&self) -> String {
        to_binary_string(&textkit_codec::encode_utf8(self))
    }

    fn decode_utf8(&self) -> String {
        let bytes = from_binary_string(self)
            .unwrap_or_else(|| self.chars().map(|c| c as u32 as u8).collect());
        textkit_codec::decode_utf8(&bytes)
    }

    fn encode_base64(&self) -> String {
        textkit_codec::encode_base64(self)
    }

    fn decode_base64(&self) -> String {
        textkit_codec::decode_base64(self)
    }

    fn trim_properties(&self, count: Option<usize>) -> String {
        textkit_util::trim_properties(self, count)
    }

    fn trim_to_ellipsis(&self, length: Option<usize>) -> String {
        textkit_util::trim_to_ellipsis(self, length)
    }

    fn parse_boolean(&self) -> Option<bool> {
        textkit_util::parse_boolean(self)
    }

    fn parse_query_string(&self) -> QueryParams {
        textkit_util::parse_query_string(self)
    }

    fn query_param(&self, name: &str) -> Option<String> {
        textkit_util::query_param(self, name)
    }
}
