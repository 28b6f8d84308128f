use std::sync::OnceLock;

use regex::Regex;

fn tag_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?i)<[^>]+>").unwrap())
}

/// Remove every HTML tag from a string.
///
/// A tag is anything from `<` up to the next `>` with at least one character
/// in between. Entities are left alone and no structure is validated.
///
/// # Examples
///
/// ```
/// use textkit_util::strings::strip_html;
///
/// assert_eq!(strip_html("<p>Hello <b>world</b></p>"), "Hello world");
/// assert_eq!(strip_html("1 < 2"), "1 < 2");
/// ```
pub fn strip_html(s: &str) -> String {
    tag_regex().replace_all(s, "").into_owned()
}
