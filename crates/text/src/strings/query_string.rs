use indexmap::IndexMap;
use serde::Serialize;

/// Parameters parsed from a query string, in first-seen order.
///
/// A parameter written without `=` (as in `?debug`) is present with no value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct QueryParams(IndexMap<String, Option<String>>);

impl QueryParams {
    /// Returns the value of `name`, or `None` if it is absent or has no value.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).and_then(|v| v.as_deref())
    }

    /// Returns whether `name` appeared at all, with or without a value.
    pub fn contains_key(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }

    /// Iterate over `(key, value)` pairs in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, Option<&str>)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_deref()))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_inner(self) -> IndexMap<String, Option<String>> {
        self.0
    }
}

/// Parse a query string into its parameters.
///
/// One leading `?` is dropped, then the string is split on `&` and each
/// parameter on `=`. Only the text between the first and second `=` becomes
/// the value. Parsing stops at the first empty parameter. Later duplicates
/// overwrite earlier values but keep the original position. Nothing is
/// percent-decoded.
///
/// # Examples
///
/// ```
/// use textkit_util::strings::parse_query_string;
///
/// let params = parse_query_string("?page=2&sort=asc&debug");
/// assert_eq!(params.get("page"), Some("2"));
/// assert_eq!(params.get("sort"), Some("asc"));
/// assert!(params.contains_key("debug"));
/// assert_eq!(params.get("debug"), None);
/// ```
pub fn parse_query_string(s: &str) -> QueryParams {
    let qs = s.strip_prefix('?').unwrap_or(s);
    let mut params = IndexMap::new();

    for param in qs.split('&').take_while(|param| !param.is_empty()) {
        let mut parts = param.split('=');
        let key = parts.next().unwrap_or_default();
        let value = parts.next().map(str::to_string);
        params.insert(key.to_string(), value);
    }

    tracing::trace!(count = params.len(), "parsed query string");
    QueryParams(params)
}

/// Look up a single parameter of a query string.
///
/// Equivalent to `parse_query_string(s).get(name)`.
///
/// # Examples
///
/// ```
/// use textkit_util::strings::query_param;
///
/// assert_eq!(query_param("a=1&b=2", "b"), Some("2".to_string()));
/// assert_eq!(query_param("a=1&b=2", "c"), None);
/// ```
pub fn query_param(s: &str, name: &str) -> Option<String> {
    parse_query_string(s).get(name).map(str::to_string)
}
