//! textkit - text codecs and string utilities.
//!
//! Every operation is available as a free function in one of the member
//! crates, and as a method on `str` through the [`StringExt`] trait:
//!
//! ```
//! use textkit::StringExt;
//!
//! assert_eq!("Man".encode_base64(), "TWFu");
//! assert_eq!("TWFu".decode_base64(), "Man");
//! assert_eq!("<b>hi</b>".strip_html(), "hi");
//! ```

pub mod cli;
mod ext;

pub use ext::StringExt;
pub use textkit_codec as codec;
pub use textkit_util as util;
