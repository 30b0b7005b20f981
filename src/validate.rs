//! Per-component RFC 3986 compliance checks.
//!
//! The parser accepts any structurally splittable input; these checks
//! decide afterwards whether each populated component also satisfies its
//! grammar. They feed [`crate::Uri::is_compliant`] and nothing else.

use crate::chars;
use crate::elements;

/// Scans `component` for bytes that are unreserved, sub-delims, listed in
/// `extra`, or part of a `%HH` triple.
fn pct_scan(component: &str, extra: &[u8]) -> bool {
    let bytes = component.as_bytes();
    let mut i = 0;
    while i < bytes.len() {
        let c = bytes[i];
        if chars::is_unreserved(c) || chars::is_subdelim(c) || extra.contains(&c) {
            i += 1;
            continue;
        }
        if c == b'%'
            && i + 2 < bytes.len()
            && chars::is_hex_digit(bytes[i + 1])
            && chars::is_hex_digit(bytes[i + 2])
        {
            i += 3;
            continue;
        }
        return false;
    }
    true
}

/// `scheme = ALPHA *( ALPHA / DIGIT / "+" / "-" / "." )`
pub(crate) fn scheme(component: &str) -> bool {
    let bytes = component.as_bytes();
    let Some((&first, rest)) = bytes.split_first() else {
        return false;
    };
    chars::is_alpha(first)
        && rest
            .iter()
            .all(|&c| chars::is_alpha(c) || chars::is_digit(c) || matches!(c, b'+' | b'-' | b'.'))
}

/// `userinfo = *( unreserved / pct-encoded / sub-delims / ":" )`
pub(crate) fn user(component: &str) -> bool {
    pct_scan(component, b":")
}

/// A host is an IP-literal, an IPv4 address, or a registered name.
pub(crate) fn host(component: &str) -> bool {
    elements::is_ip_literal(component)
        || elements::is_ipv4(component)
        || elements::is_regular_name(component)
}

/// `port = *DIGIT`
pub(crate) fn port(component: &str) -> bool {
    component.bytes().all(chars::is_digit)
}

/// `segment = *pchar`, with the structural `/` also admitted since stored
/// segments carry their separator.
pub(crate) fn path_segment(component: &str) -> bool {
    pct_scan(component, b":@/")
}

/// `query = *( pchar / "/" / "?" )`, applied to the whole query line; the
/// `&` and `=` separators are sub-delims and need no special casing.
pub(crate) fn query_line(component: &str) -> bool {
    pct_scan(component, b":@/?")
}

/// `fragment = *( pchar / "/" / "?" )`
pub(crate) fn fragment(component: &str) -> bool {
    pct_scan(component, b":@/?")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scheme_requires_leading_alpha() {
        assert!(scheme("http"));
        assert!(scheme("svn+ssh"));
        assert!(scheme("x-1.2"));
        assert!(!scheme(""));
        assert!(!scheme("1http"));
        assert!(!scheme("ht tp"));
        assert!(!scheme("ht_tp"));
    }

    #[test]
    fn user_admits_colon() {
        assert!(user("alice"));
        assert!(user("alice:secret"));
        assert!(user("al%69ce"));
        assert!(!user("alice@"));
        assert!(!user("al%6"));
    }

    #[test]
    fn host_covers_all_three_forms() {
        assert!(host("example.com"));
        assert!(host("127.0.0.1"));
        assert!(host("[::1]"));
        assert!(host(""));
        assert!(!host("exa mple"));
        assert!(!host("[::1"));
    }

    #[test]
    fn port_is_digits_only() {
        assert!(port("8080"));
        assert!(port(""));
        assert!(!port("80a"));
        assert!(!port("-1"));
    }

    #[test]
    fn path_segment_admits_pchar_and_slash() {
        assert!(path_segment("a/"));
        assert!(path_segment("/"));
        assert!(path_segment("v1:x@y"));
        assert!(!path_segment("a?b"));
        assert!(!path_segment("a#b"));
    }

    #[test]
    fn query_and_fragment_admit_question_mark() {
        assert!(query_line("a?b/c:d@e"));
        assert!(query_line("x=1&y=2"));
        assert!(fragment("sec?tion/1"));
        assert!(!query_line("a#b"));
        assert!(!fragment("a b"));
    }
}
