//! Error types for URI parsing.

use std::fmt;

/// An error that aborted a parse.
///
/// Carries the full input alongside the specific failure so callers can
/// report both without retaining the original string themselves.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    /// The input that failed to parse.
    pub input: String,
    /// The specific error that occurred.
    pub kind: ParseErrorKind,
}

/// Specific parsing error types.
///
/// Only structurally malformed input aborts a parse; everything else
/// (missing scheme, unknown characters, empty segments) is accepted and
/// reflected solely in [`crate::Uri::is_compliant`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseErrorKind {
    /// A `@` userinfo delimiter appeared with no preceding user bytes.
    MalformedUser {
        /// Byte position of the `@` in the input.
        position: usize,
    },
    /// A query piece contained no `=` separator.
    MalformedQuery {
        /// The offending piece, verbatim.
        pair: String,
    },
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "failed to parse URI '{}': ", self.input)?;
        match &self.kind {
            ParseErrorKind::MalformedUser { position } => {
                write!(f, "'@' at byte {position} is not preceded by a user name")
            }
            ParseErrorKind::MalformedQuery { pair } => {
                write!(f, "query piece '{pair}' has no '=' separator")
            }
        }
    }
}

impl std::error::Error for ParseError {}
