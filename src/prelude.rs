//! Convenient re-exports for glob imports.
//!
//! This module provides a single import for the whole public surface:
//!
//! ```rust
//! use uri_view::prelude::*;
//!
//! let uri = Uri::parse("http://example.com/a/b?k=v").unwrap();
//! assert!(uri.is_compliant());
//! ```

pub use crate::{
    // Core type
    Uri,
    // Parse signalling
    ParseError, ParseErrorKind, ParseOutcome,
    // Character predicates
    chars::{is_alpha, is_digit, is_hex_digit, is_subdelim, is_unreserved},
    // Element predicates
    elements::{is_decimal_octet, is_ip_literal, is_ipv4, is_ipv6, is_regular_name},
};
