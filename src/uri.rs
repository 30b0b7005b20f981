//! The owned URI value and its zero-copy component views.

use std::collections::BTreeMap;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use crate::error::ParseError;
use crate::parser::{self, ParseOutcome, Parts};
use crate::validate;

/// A parsed URI.
///
/// Owns the raw text; every accessor returns a `&str` view borrowed from it,
/// so views cannot outlive the value or survive a mutation. Parsing is
/// purely structural: any input that splits cleanly on the `: / ? # @ & =`
/// delimiters is accepted, and grammar conformance is reported separately by
/// [`Uri::is_compliant`].
///
/// # Examples
///
/// ```
/// use uri_view::Uri;
///
/// let uri = Uri::parse("http://user@example.com:8080/a/b/c?x=1#frag")?;
/// assert_eq!(uri.scheme(), Some("http"));
/// assert_eq!(uri.host(), Some("example.com"));
/// assert_eq!(uri.port_number(), 8080);
/// assert_eq!(uri.path(), Some("/a/b/c"));
/// assert_eq!(uri.query("x"), Some("1"));
/// assert_eq!(uri.fragment(), Some("frag"));
/// assert!(uri.is_compliant());
/// # Ok::<(), uri_view::ParseError>(())
/// ```
#[derive(Debug, Clone)]
pub struct Uri {
    raw: String,
    parts: Parts,
    outcome: ParseOutcome,
}

impl Uri {
    /// Parses `input` into a [`Uri`], taking ownership of the text.
    ///
    /// Empty input succeeds and yields the empty value; check
    /// [`Uri::outcome`] or [`Uri::is_empty`] to distinguish it.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError`] when the input is structurally malformed:
    /// a `@` with no user bytes before it, or a query piece without `=`.
    pub fn parse(input: impl Into<String>) -> Result<Self, ParseError> {
        let raw = input.into();
        match parser::parse(&raw) {
            Ok(parts) => {
                let outcome = if raw.is_empty() {
                    ParseOutcome::EmptyInput
                } else {
                    ParseOutcome::NoError
                };
                Ok(Self {
                    raw,
                    parts,
                    outcome,
                })
            }
            Err(kind) => Err(ParseError { input: raw, kind }),
        }
    }

    /// The outcome of the parse that produced this value.
    #[must_use]
    pub const fn outcome(&self) -> ParseOutcome {
        self.outcome
    }

    /// Returns true if the value holds no text at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.raw.is_empty()
    }

    /// The scheme, without its trailing `:`.
    #[must_use]
    pub fn scheme(&self) -> Option<&str> {
        self.parts.scheme.get(&self.raw)
    }

    /// The userinfo component, without its trailing `@`.
    #[must_use]
    pub fn user(&self) -> Option<&str> {
        self.parts.user.get(&self.raw)
    }

    /// The host, brackets included for IP-literals.
    #[must_use]
    pub fn host(&self) -> Option<&str> {
        self.parts.host.get(&self.raw)
    }

    /// The port digits, without the leading `:`.
    #[must_use]
    pub fn port(&self) -> Option<&str> {
        self.parts.port.get(&self.raw)
    }

    /// The port as an integer; 0 when absent or out of range.
    #[must_use]
    pub fn port_number(&self) -> u16 {
        self.port().and_then(|p| p.parse().ok()).unwrap_or(0)
    }

    /// The full path, leading `/` included.
    #[must_use]
    pub fn path(&self) -> Option<&str> {
        self.parts.path.get(&self.raw)
    }

    /// The `i`-th path segment, `i` clamped to the last index; the indexed
    /// companion to [`Uri::path_until`].
    ///
    /// Segments keep their trailing `/` except the last, so for
    /// `"/a/b/c"` the segments are `"/"`, `"a/"`, `"b/"`, `"c"`.
    #[must_use]
    pub fn path_segment(&self, i: usize) -> Option<&str> {
        let clamped = i.min(self.parts.segments.len().checked_sub(1)?);
        Some(self.parts.segments[clamped].slice(&self.raw))
    }

    /// The path prefix through the `i`-th segment inclusive, clamped.
    #[must_use]
    pub fn path_until(&self, i: usize) -> Option<&str> {
        let clamped = i.min(self.parts.segments.len().checked_sub(1)?);
        let end = self.parts.segments[clamped].end;
        Some(&self.raw[self.parts.path.start..end])
    }

    /// The number of path segments, or `None` when there is no path.
    #[must_use]
    pub fn path_size(&self) -> Option<usize> {
        if self.parts.segments.is_empty() {
            None
        } else {
            Some(self.parts.segments.len())
        }
    }

    /// The query text between `?` and `#`, undecoded.
    #[must_use]
    pub fn query_line(&self) -> Option<&str> {
        self.parts.query_line.get(&self.raw)
    }

    /// The parsed query pairs, or `None` when there are none.
    ///
    /// Duplicate keys keep their first value.
    #[must_use]
    pub fn queries(&self) -> Option<BTreeMap<&str, &str>> {
        if self.parts.queries.is_empty() {
            return None;
        }
        Some(
            self.parts
                .queries
                .iter()
                .map(|(k, v)| (k.slice(&self.raw), v.slice(&self.raw)))
                .collect(),
        )
    }

    /// The value stored under `key`, if any.
    #[must_use]
    pub fn query(&self, key: &str) -> Option<&str> {
        self.parts
            .queries
            .iter()
            .find(|(k, _)| k.slice(&self.raw) == key)
            .map(|(_, v)| v.slice(&self.raw))
    }

    /// The fragment, without its leading `#`.
    #[must_use]
    pub fn fragment(&self) -> Option<&str> {
        self.parts.fragment.get(&self.raw)
    }

    /// Returns true if a host was recognized.
    #[must_use]
    pub fn has_authority(&self) -> bool {
        !self.parts.host.is_empty()
    }

    /// Returns true if at least one query pair was recognized.
    #[must_use]
    pub fn has_queries(&self) -> bool {
        !self.parts.queries.is_empty()
    }

    /// Returns true if a path was recognized.
    #[must_use]
    pub fn has_path(&self) -> bool {
        !self.parts.path.is_empty()
    }

    /// Returns true if a fragment was recognized.
    #[must_use]
    pub fn has_fragment(&self) -> bool {
        !self.parts.fragment.is_empty()
    }

    /// Returns true if the path starts with `/`.
    #[must_use]
    pub const fn is_absolute_path(&self) -> bool {
        self.parts.absolute_path
    }

    /// Checks every populated component against its RFC 3986 production.
    ///
    /// Both a scheme and a host are required; this is stricter than
    /// RFC 3986, where the authority is optional, and is part of this
    /// type's contract. All other components are validated only when
    /// present.
    #[must_use]
    pub fn is_compliant(&self) -> bool {
        let (Some(scheme), Some(host)) = (self.scheme(), self.host()) else {
            return false;
        };
        validate::scheme(scheme)
            && validate::host(host)
            && self.user().is_none_or(validate::user)
            && self.port().is_none_or(validate::port)
            && self
                .parts
                .segments
                .iter()
                .all(|s| validate::path_segment(s.slice(&self.raw)))
            && self.query_line().is_none_or(validate::query_line)
            && self.fragment().is_none_or(validate::fragment)
    }

    /// Replaces the scheme (or prepends one) and re-parses.
    ///
    /// No validation of `scheme` happens here; run [`Uri::is_compliant`]
    /// afterwards if conformance matters. Every previously obtained view is
    /// invalidated by the edit, which the borrow on `self` enforces.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError`] if the edited text no longer parses (only
    /// possible when `scheme` itself contains structural delimiters); the
    /// value is left cleared in that case.
    pub fn set_scheme(&mut self, scheme: &str) -> Result<(), ParseError> {
        let old = self.parts.scheme;
        let had_scheme = !old.is_empty();
        let mut raw = std::mem::take(&mut self.raw);
        self.parts = Parts::default();
        self.outcome = ParseOutcome::EmptyInput;

        if had_scheme {
            raw.replace_range(old.range(), scheme);
        } else {
            raw.insert(0, ':');
            raw.insert_str(0, scheme);
        }

        *self = Self::parse(raw)?;
        Ok(())
    }

    /// Resets the value to empty.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// The raw text, exactly as parsed.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Consumes the value, returning the raw text.
    #[must_use]
    pub fn into_string(self) -> String {
        self.raw
    }
}

impl Default for Uri {
    fn default() -> Self {
        Self {
            raw: String::new(),
            parts: Parts::default(),
            outcome: ParseOutcome::EmptyInput,
        }
    }
}

impl fmt::Display for Uri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

impl FromStr for Uri {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<&str> for Uri {
    type Error = ParseError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl AsRef<str> for Uri {
    fn as_ref(&self) -> &str {
        &self.raw
    }
}

impl From<Uri> for String {
    fn from(uri: Uri) -> Self {
        uri.raw
    }
}

// Equality, ordering, and hashing all follow the raw text; the spans are a
// pure function of it.
impl PartialEq for Uri {
    fn eq(&self, other: &Self) -> bool {
        self.raw == other.raw
    }
}

impl Eq for Uri {}

impl PartialOrd for Uri {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Uri {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.raw.cmp(&other.raw)
    }
}

impl Hash for Uri {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.raw.hash(state);
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Uri {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.raw)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Uri {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Self::parse(raw).map_err(serde::de::Error::custom)
    }
}
