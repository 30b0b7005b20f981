//! Zero-copy parser and structural accessor for RFC 3986 URIs.
//!
//! # Overview
//!
//! [`Uri`] decomposes a URI into its scheme, userinfo, host, port, path
//! segments, query pairs, and fragment in a single forward scan, storing
//! only byte offsets into the owned raw text. Every accessor returns a
//! `&str` view borrowed from the value; nothing is copied or decoded.
//!
//! Parsing and validation are deliberately separate. The parser splits on
//! structural delimiters alone and accepts almost anything; whether each
//! component also satisfies its RFC 3986 production is answered afterwards
//! by [`Uri::is_compliant`]. Only two shapes abort a parse: a `@` userinfo
//! delimiter with nothing before it, and a query piece without `=`.
//!
//! # Quick Start
//!
//! ```rust
//! use uri_view::Uri;
//!
//! let uri = Uri::parse("http://user@example.com:8080/a/b/c?x=1&y=2#frag").unwrap();
//!
//! assert_eq!(uri.scheme(), Some("http"));
//! assert_eq!(uri.user(), Some("user"));
//! assert_eq!(uri.host(), Some("example.com"));
//! assert_eq!(uri.port_number(), 8080);
//! assert_eq!(uri.path(), Some("/a/b/c"));
//! assert_eq!(uri.query("x"), Some("1"));
//! assert_eq!(uri.fragment(), Some("frag"));
//! assert!(uri.is_compliant());
//! ```
//!
//! # Compliance contract
//!
//! [`Uri::is_compliant`] requires both a scheme and a host. That is
//! stricter than RFC 3986, where the authority is optional, and it is part
//! of this crate's contract rather than an oversight.
//!
//! # What this crate does not do
//!
//! No reference resolution, no percent-decoding or normalization, no
//! IDN/Punycode handling, and no URI construction from components. The
//! IPv6 check is syntactic only; group counts and `::` compression are not
//! enforced.

#![deny(missing_docs)]
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod chars;
pub mod elements;
mod error;
#[cfg(kani)]
mod kani_impls;
mod parser;
pub mod prelude;
mod span;
mod uri;
mod validate;

pub use error::{ParseError, ParseErrorKind};
pub use parser::ParseOutcome;
pub use uri::Uri;
