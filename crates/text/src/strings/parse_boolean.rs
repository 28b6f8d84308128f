/// Parse a string as a boolean, ignoring case.
///
/// Only `"true"` and `"false"` are recognized, in any letter case. Anything
/// else, including surrounding whitespace, yields `None`.
///
/// # Examples
///
/// ```
/// use textkit_util::strings::parse_boolean;
///
/// assert_eq!(parse_boolean("TRUE"), Some(true));
/// assert_eq!(parse_boolean("False"), Some(false));
/// assert_eq!(parse_boolean("yes"), None);
/// ```
pub fn parse_boolean(s: &str) -> Option<bool> {
    match s.to_uppercase().as_str() {
        "TRUE" => Some(true),
        "FALSE" => Some(false),
        _ => None,
    }
}
