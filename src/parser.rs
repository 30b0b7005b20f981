//! Seven-state forward scan over a URI.
//!
//! The scan walks the input once, resolving the ambiguity between
//! authority, path, query, and fragment with a strict production order:
//!
//! ```text
//! Scheme -> CheckAuthority -> Authority -> CheckSeparator
//!           CheckSeparator -> Path | Query | Fragment
//!           Path -> CheckSeparator    Query -> CheckSeparator
//! ```
//!
//! Path and Query hand the cursor back to `CheckSeparator`, which consumes
//! the `?` or `#` it rests on; Fragment is terminal.
//!
//! The parser only inspects the structural delimiters `: / ? # @ & =`;
//! character-class validity is left entirely to [`crate::validate`], so
//! arbitrary (even non-ASCII) bytes pass through into the component views.

use crate::error::ParseErrorKind;
use crate::span::Span;

/// Signal produced by a successful parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseOutcome {
    /// The input held at least one component.
    NoError,
    /// The input was empty; the value is empty but well formed.
    EmptyInput,
}

/// Component spans populated by one scan of the raw text.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub(crate) struct Parts {
    pub scheme: Span,
    pub user: Span,
    pub host: Span,
    pub port: Span,
    pub path: Span,
    /// Each segment keeps its trailing `/` except the last.
    pub segments: Vec<Span>,
    pub query_line: Span,
    /// First occurrence wins on duplicate keys; insertion order preserved.
    pub queries: Vec<(Span, Span)>,
    pub fragment: Span,
    pub absolute_path: bool,
}

#[derive(Debug, Clone, Copy)]
enum Step {
    Scheme,
    CheckAuthority,
    Authority,
    CheckSeparator,
    Path,
    Query,
    Fragment,
}

/// Runs the state machine over `raw` and returns the populated spans.
///
/// Empty input yields default (all-empty) parts; the caller decides how to
/// surface [`ParseOutcome::EmptyInput`].
pub(crate) fn parse(raw: &str) -> Result<Parts, ParseErrorKind> {
    let mut parser = Parser {
        raw,
        bytes: raw.as_bytes(),
        pos: 0,
        out: Parts::default(),
    };
    parser.run()?;
    Ok(parser.out)
}

struct Parser<'a> {
    raw: &'a str,
    bytes: &'a [u8],
    /// Cursor; the unconsumed suffix starts here. Non-decreasing.
    pos: usize,
    out: Parts,
}

impl Parser<'_> {
    fn run(&mut self) -> Result<(), ParseErrorKind> {
        let mut step = Step::Scheme;
        while self.pos < self.bytes.len() {
            step = match step {
                Step::Scheme => {
                    self.scan_scheme();
                    Step::CheckAuthority
                }
                Step::CheckAuthority => self.route_authority(),
                Step::Authority => {
                    self.scan_authority()?;
                    Step::CheckSeparator
                }
                Step::CheckSeparator => self.route_separator(),
                Step::Path => {
                    self.scan_path();
                    Step::CheckSeparator
                }
                Step::Query => {
                    self.scan_query()?;
                    Step::CheckSeparator
                }
                Step::Fragment => {
                    self.scan_fragment();
                    Step::Fragment
                }
            };
        }
        Ok(())
    }

    /// First position at or after `from` whose byte satisfies `stop`, or
    /// end of input.
    fn seek(&self, from: usize, stop: impl Fn(u8) -> bool) -> usize {
        self.bytes[from..]
            .iter()
            .position(|&c| stop(c))
            .map_or(self.bytes.len(), |i| from + i)
    }

    /// `Scheme`: the first structural delimiter decides. A `:` before any
    /// of `/ ? # @` marks the prefix as the scheme and is consumed; any
    /// other delimiter first means there is no scheme and nothing is
    /// consumed. This covers both `http://...` and opaque forms like
    /// `mailto:user@host`.
    fn scan_scheme(&mut self) {
        for (i, &c) in self.bytes.iter().enumerate() {
            match c {
                b':' => {
                    self.out.scheme = Span::new(0, i);
                    self.pos = i + 1;
                    return;
                }
                b'/' | b'?' | b'#' | b'@' => return,
                _ => {}
            }
        }
    }

    /// `CheckAuthority`: a leading `//` with anything after it is consumed
    /// and means authority; a bare `//` falls through and parses as a
    /// path. Without the marker, anything before the first `/` (or the
    /// absence of any `/`, or a lone trailing `/`) is still routed through
    /// the authority scanner; a leading `/` with more to come is a path.
    fn route_authority(&mut self) -> Step {
        let rest = &self.bytes[self.pos..];
        if rest.starts_with(b"//") && rest.len() > 2 {
            self.pos += 2;
            return Step::Authority;
        }
        match rest.iter().position(|&c| c == b'/') {
            None => Step::Authority,
            Some(slash) if slash > 0 => Step::Authority,
            Some(slash) if slash + 1 == rest.len() => Step::Authority,
            Some(_) => Step::CheckSeparator,
        }
    }

    /// `Authority`: slice up to the first of `/ ? #`, split userinfo on the
    /// first `@`, then host and port on the last `:` so the inner colons of
    /// a bracketed IPv6 literal are not mistaken for the port separator.
    fn scan_authority(&mut self) -> Result<(), ParseErrorKind> {
        let start = self.pos;
        let end = self.seek(start, |c| matches!(c, b'/' | b'?' | b'#'));
        let mut rest = Span::new(start, end);

        if let Some(at) = self.bytes[start..end].iter().position(|&c| c == b'@') {
            if at == 0 {
                return Err(ParseErrorKind::MalformedUser { position: start });
            }
            self.out.user = Span::new(start, start + at);
            rest = Span::new(start + at + 1, end);
        }

        // The last colon separates the port, unless a ']' follows it, in
        // which case it sits inside a bracketed IPv6 literal with no port.
        match self.bytes[rest.range()].iter().rposition(|&c| c == b':') {
            Some(colon) if !self.bytes[rest.start + colon..end].contains(&b']') => {
                self.out.host = Span::new(rest.start, rest.start + colon);
                self.out.port = Span::new(rest.start + colon + 1, end);
            }
            _ => self.out.host = rest,
        }

        // An empty host cannot carry userinfo or a port.
        if self.out.host.is_empty() {
            self.out.user = Span::default();
            self.out.host = Span::default();
            self.out.port = Span::default();
        }

        self.pos = end;
        Ok(())
    }

    /// `CheckSeparator`: route on the head byte, which is always one of
    /// `/ ? #` here.
    fn route_separator(&mut self) -> Step {
        match self.bytes[self.pos] {
            b'/' => Step::Path,
            b'?' => {
                self.pos += 1;
                Step::Query
            }
            _ => {
                self.pos += 1;
                Step::Fragment
            }
        }
    }

    /// `Path`: spans from the cursor to the first `?` or `#`, leading `/`
    /// included. Each segment keeps its trailing `/`; the final segment has
    /// none, so concatenating the segments reproduces the path exactly.
    fn scan_path(&mut self) {
        let start = self.pos;
        let end = self.seek(start, |c| matches!(c, b'?' | b'#'));
        self.out.path = Span::new(start, end);
        self.out.absolute_path = self.bytes[start] == b'/';

        let mut seg_start = start;
        while seg_start < end {
            match self.bytes[seg_start..end].iter().position(|&c| c == b'/') {
                Some(slash) => {
                    self.out
                        .segments
                        .push(Span::new(seg_start, seg_start + slash + 1));
                    seg_start += slash + 1;
                }
                None => {
                    self.out.segments.push(Span::new(seg_start, end));
                    break;
                }
            }
        }

        self.pos = end;
    }

    /// `Query`: spans to the next `#`. Pieces are split on `&`; every piece
    /// must contain `=` (a single trailing `&` is tolerated because it
    /// leaves no piece behind). The key is everything left of the first `=`
    /// and the first occurrence of a key wins.
    fn scan_query(&mut self) -> Result<(), ParseErrorKind> {
        let start = self.pos;
        let end = self.seek(start, |c| c == b'#');
        self.out.query_line = Span::new(start, end);

        let mut piece_start = start;
        while piece_start < end {
            let piece_end = self.bytes[piece_start..end]
                .iter()
                .position(|&c| c == b'&')
                .map_or(end, |amp| piece_start + amp);
            let piece = Span::new(piece_start, piece_end);

            let Some(eq) = self.bytes[piece.range()].iter().position(|&c| c == b'=') else {
                return Err(ParseErrorKind::MalformedQuery {
                    pair: piece.slice(self.raw).to_string(),
                });
            };

            let key = Span::new(piece.start, piece.start + eq);
            let value = Span::new(piece.start + eq + 1, piece_end);
            let key_text = key.slice(self.raw);
            if !self
                .out
                .queries
                .iter()
                .any(|(k, _)| k.slice(self.raw) == key_text)
            {
                self.out.queries.push((key, value));
            }

            piece_start = piece_end + 1;
        }

        self.pos = end;
        Ok(())
    }

    /// `Fragment`: the rest of the input, `#` already consumed.
    fn scan_fragment(&mut self) {
        self.out.fragment = Span::new(self.pos, self.bytes.len());
        self.pos = self.bytes.len();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn part<'a>(raw: &'a str, span: Span) -> &'a str {
        span.slice(raw)
    }

    #[test]
    fn full_uri_decomposes() {
        let raw = "http://user@example.com:8080/a/b/c?x=1&y=2#frag";
        let parts = parse(raw).unwrap();
        assert_eq!(part(raw, parts.scheme), "http");
        assert_eq!(part(raw, parts.user), "user");
        assert_eq!(part(raw, parts.host), "example.com");
        assert_eq!(part(raw, parts.port), "8080");
        assert_eq!(part(raw, parts.path), "/a/b/c");
        assert_eq!(part(raw, parts.query_line), "x=1&y=2");
        assert_eq!(part(raw, parts.fragment), "frag");
        assert!(parts.absolute_path);
    }

    #[test]
    fn segments_keep_trailing_slash_except_last() {
        let raw = "http://h/a/b/c";
        let parts = parse(raw).unwrap();
        let segments: Vec<_> = parts.segments.iter().map(|s| part(raw, *s)).collect();
        assert_eq!(segments, ["/", "a/", "b/", "c"]);
    }

    #[test]
    fn segments_concat_to_path() {
        for raw in ["http://h/a/b/c", "/x//y/", "//h/", "x:/p/q"] {
            let parts = parse(raw).unwrap();
            let joined: String = parts.segments.iter().map(|s| part(raw, *s)).collect();
            assert_eq!(joined, part(raw, parts.path), "{raw}");
        }
    }

    #[test]
    fn opaque_scheme_form_splits_user_and_host() {
        let raw = "mailto:bob@local";
        let parts = parse(raw).unwrap();
        assert_eq!(part(raw, parts.scheme), "mailto");
        assert_eq!(part(raw, parts.user), "bob");
        assert_eq!(part(raw, parts.host), "local");
        assert!(parts.path.is_empty());
        assert!(parts.segments.is_empty());
    }

    #[test]
    fn schemeless_authority() {
        let raw = "//host/path";
        let parts = parse(raw).unwrap();
        assert!(parts.scheme.is_empty());
        assert_eq!(part(raw, parts.host), "host");
        assert_eq!(part(raw, parts.path), "/path");
        assert!(parts.absolute_path);
    }

    #[test]
    fn ipv6_literal_port_split_uses_last_colon() {
        let raw = "http://[::1]:80/";
        let parts = parse(raw).unwrap();
        assert_eq!(part(raw, parts.host), "[::1]");
        assert_eq!(part(raw, parts.port), "80");
        assert_eq!(part(raw, parts.path), "/");
    }

    #[test]
    fn ipv6_literal_without_port_keeps_brackets() {
        let raw = "http://[2001:db8::1]/x";
        let parts = parse(raw).unwrap();
        assert_eq!(part(raw, parts.host), "[2001:db8::1]");
        assert!(parts.port.is_empty());
        assert_eq!(part(raw, parts.path), "/x");
    }

    #[test]
    fn bare_query() {
        let raw = "?only=query";
        let parts = parse(raw).unwrap();
        assert!(parts.scheme.is_empty());
        assert!(parts.host.is_empty());
        assert!(parts.path.is_empty());
        assert_eq!(part(raw, parts.query_line), "only=query");
        assert_eq!(parts.queries.len(), 1);
    }

    #[test]
    fn fragment_after_query_drops_hash() {
        let raw = "?a=1#frag";
        let parts = parse(raw).unwrap();
        assert_eq!(part(raw, parts.query_line), "a=1");
        assert_eq!(part(raw, parts.fragment), "frag");
    }

    #[test]
    fn double_slash_alone_is_a_path() {
        let raw = "//";
        let parts = parse(raw).unwrap();
        assert!(parts.host.is_empty());
        assert_eq!(part(raw, parts.path), "//");
        assert!(parts.absolute_path);
        let segments: Vec<_> = parts.segments.iter().map(|s| part(raw, *s)).collect();
        assert_eq!(segments, ["/", "/"]);
    }

    #[test]
    fn bare_fragment() {
        let raw = "#frag";
        let parts = parse(raw).unwrap();
        assert_eq!(part(raw, parts.fragment), "frag");
        assert!(parts.host.is_empty());
    }

    #[test]
    fn empty_input_yields_empty_parts() {
        let parts = parse("").unwrap();
        assert_eq!(parts, Parts::default());
    }

    #[test]
    fn duplicate_query_keys_first_wins() {
        let raw = "http://h?k=1&k=2&other=3";
        let parts = parse(raw).unwrap();
        let pairs: Vec<_> = parts
            .queries
            .iter()
            .map(|(k, v)| (part(raw, *k), part(raw, *v)))
            .collect();
        assert_eq!(pairs, [("k", "1"), ("other", "3")]);
    }

    #[test]
    fn trailing_ampersand_is_tolerated() {
        let raw = "http://h?a=1&";
        let parts = parse(raw).unwrap();
        assert_eq!(parts.queries.len(), 1);
    }

    #[test]
    fn empty_query_piece_is_malformed() {
        let err = parse("http://h?a=1&&b=2").unwrap_err();
        assert!(matches!(err, ParseErrorKind::MalformedQuery { .. }));
    }

    #[test]
    fn query_piece_without_equals_is_malformed() {
        let err = parse("http://h?keyvalue").unwrap_err();
        assert_eq!(
            err,
            ParseErrorKind::MalformedQuery {
                pair: "keyvalue".to_string()
            }
        );
    }

    #[test]
    fn leading_at_sign_is_malformed_user() {
        let err = parse("http://@host").unwrap_err();
        assert_eq!(err, ParseErrorKind::MalformedUser { position: 7 });
    }

    #[test]
    fn empty_host_drops_user_and_port() {
        let parts = parse("//u@:8080/x").unwrap();
        assert!(parts.host.is_empty());
        assert!(parts.user.is_empty());
        assert!(parts.port.is_empty());
    }

    #[test]
    fn value_may_be_empty_and_contain_equals() {
        let raw = "?a=&b=c=d";
        let parts = parse(raw).unwrap();
        let pairs: Vec<_> = parts
            .queries
            .iter()
            .map(|(k, v)| (part(raw, *k), part(raw, *v)))
            .collect();
        assert_eq!(pairs, [("a", ""), ("b", "c=d")]);
    }

    #[test]
    fn relative_single_segment_becomes_host() {
        // Anything before the first slash is routed through the authority
        // scanner; pure relative paths are not recoverable without a
        // leading slash.
        let raw = "a/b/c";
        let parts = parse(raw).unwrap();
        assert_eq!(part(raw, parts.host), "a");
        assert_eq!(part(raw, parts.path), "/b/c");
    }

    #[test]
    fn lone_slash_is_a_path() {
        let raw = "/";
        let parts = parse(raw).unwrap();
        assert_eq!(part(raw, parts.path), "/");
        let segments: Vec<_> = parts.segments.iter().map(|s| part(raw, *s)).collect();
        assert_eq!(segments, ["/"]);
    }

    #[test]
    fn non_ascii_bytes_flow_through_structurally() {
        let raw = "http://héllo/päth?k=vä#fräg";
        let parts = parse(raw).unwrap();
        assert_eq!(part(raw, parts.host), "héllo");
        assert_eq!(part(raw, parts.path), "/päth");
        assert_eq!(part(raw, parts.fragment), "fräg");
    }
}
