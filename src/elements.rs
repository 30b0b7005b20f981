//! Composite recognizers for host-level grammar elements.
//!
//! Built on [`crate::chars`]; each function recognizes one production used
//! by the host compliance check: decimal octets, IPv4 addresses, a
//! permissive IPv6 form, bracketed IP-literals, and registered names.

use crate::chars;

/// Returns true if `element` is one, two, or three ASCII digits whose
/// decimal value lies in `0..=255`.
///
/// Leading-zero forms (`"01"`, `"001"`) are rejected by the length-bucketed
/// range checks; the lone zero `"0"` is accepted.
#[must_use]
pub fn is_decimal_octet(element: &str) -> bool {
    let bytes = element.as_bytes();
    if !bytes.iter().all(|&c| chars::is_digit(c)) {
        return false;
    }
    match *bytes {
        [_] => true,
        [a, b] => {
            let value = u32::from(a - b'0') * 10 + u32::from(b - b'0');
            (10..100).contains(&value)
        }
        [a, b, c] => {
            let value =
                u32::from(a - b'0') * 100 + u32::from(b - b'0') * 10 + u32::from(c - b'0');
            (100..256).contains(&value)
        }
        _ => false,
    }
}

/// Returns true if `element` is exactly four decimal octets separated by
/// single dots, with no leading, trailing, or consecutive dots.
#[must_use]
pub fn is_ipv4(element: &str) -> bool {
    if element
        .bytes()
        .any(|c| !chars::is_digit(c) && c != b'.')
    {
        return false;
    }
    let mut octets = 0usize;
    for octet in element.split('.') {
        octets += 1;
        if octets > 4 || !is_decimal_octet(octet) {
            return false;
        }
    }
    octets == 4
}

/// Permissive syntactic IPv6 check.
///
/// Every byte must be a hex digit, a `:`, or a `.`; a `.` is only legal
/// after at least one `:` (the embedded-IPv4 tail), and no `:` may follow a
/// `.`. Group counts and `::` compression are not enforced.
#[must_use]
pub fn is_ipv6(element: &str) -> bool {
    let mut seen_colon = false;
    let mut in_v4_tail = false;

    for c in element.bytes() {
        if chars::is_hex_digit(c) {
            continue;
        }
        if c == b':' && !in_v4_tail {
            seen_colon = true;
            continue;
        }
        if c == b'.' && seen_colon {
            in_v4_tail = true;
            continue;
        }
        return false;
    }

    true
}

/// Returns true if `element` is a bracketed, non-empty address that passes
/// [`is_ipv6`], e.g. `[::1]`.
#[must_use]
pub fn is_ip_literal(element: &str) -> bool {
    let Some(address) = element
        .strip_prefix('[')
        .and_then(|rest| rest.strip_suffix(']'))
    else {
        return false;
    };
    !address.is_empty() && is_ipv6(address)
}

/// Returns true if every byte of `element` is unreserved, a sub-delimiter,
/// or part of a valid `%HH` percent-encoded triple.
///
/// The empty string is accepted; an empty host is legal.
#[must_use]
pub fn is_regular_name(element: &str) -> bool {
    let bytes = element.as_bytes();
    let mut i = 0;
    while i < bytes.len() {
        let c = bytes[i];
        if chars::is_unreserved(c) || chars::is_subdelim(c) {
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
