//! String utilities.
//!
//! Provides functions for markup removal, truncation and parsing.

mod parse_boolean;
mod query_string;
mod strip_html;
mod trim;

pub use parse_boolean::parse_boolean;
pub use query_string::{parse_query_string, query_param, QueryParams};
pub use strip_html::strip_html;
pub use trim::{trim_properties, trim_to_ellipsis};
