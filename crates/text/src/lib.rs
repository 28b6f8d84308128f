//! textkit-util - String utilities for textkit
//!
//! Small, stateless helpers for cleaning up and picking apart text: HTML tag
//! stripping, property-list and ellipsis truncation, lenient boolean parsing,
//! and query-string parsing.

pub mod strings;

// Re-exports for convenience
pub use strings::{
    parse_boolean, parse_query_string, query_param, strip_html, trim_properties, trim_to_ellipsis,
    QueryParams,
};
