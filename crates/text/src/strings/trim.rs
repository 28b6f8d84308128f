/// Default number of properties kept by [`trim_properties`].
const DEFAULT_PROPERTY_COUNT: usize = 1;

/// Keep only the first `count` entries of a comma-delimited property list.
///
/// The kept entries are joined with `", "`. Entries are not trimmed, so
/// `"a, b"` keeps the space in front of `b`. Enumeration stops at the first
/// empty entry. `count` defaults to 1.
///
/// # Examples
///
/// ```
/// use textkit_util::strings::trim_properties;
///
/// assert_eq!(trim_properties("red,green,blue", Some(2)), "red, green");
/// assert_eq!(trim_properties("red,green,blue", None), "red");
/// ```
pub fn trim_properties(s: &str, count: Option<usize>) -> String {
    if s.is_empty() {
        return String::new();
    }
    let count = count.unwrap_or(DEFAULT_PROPERTY_COUNT);

    s.split(',')
        .take_while(|prop| !prop.is_empty())
        .take(count)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Shorten a string to `length` characters followed by `"..."`.
///
/// Strings no longer than `length` come back unchanged, as does every string
/// when `length` is 0 (the default). Lengths count `char`s, so multi-byte
/// characters are never split.
///
/// # Examples
///
/// ```
/// use textkit_util::strings::trim_to_ellipsis;
///
/// assert_eq!(trim_to_ellipsis("Hello world", Some(5)), "Hello...");
/// assert_eq!(trim_to_ellipsis("Hello", Some(5)), "Hello");
/// assert_eq!(trim_to_ellipsis("Hello", None), "Hello");
/// ```
pub fn trim_to_ellipsis(s: &str, length: Option<usize>) -> String {
    let length = length.unwrap_or(0);
    if length == 0 {
        return s.to_string();
    }

    match s.char_indices().nth(length) {
        Some((end, _)) => format!("{}...", &s[..end]),
        None => s.to_string(),
    }
}
