//! Single-byte character classes from RFC 3986 §2.
//!
//! These are the leaves every higher-level validator reduces to. They are
//! total over `u8`; any non-ASCII byte fails every class.

/// Returns true if the byte is an ASCII letter (`A-Z` / `a-z`).
#[must_use]
pub const fn is_alpha(c: u8) -> bool {
    c.is_ascii_uppercase() || c.is_ascii_lowercase()
}

/// Returns true if the byte is an ASCII digit (`0-9`).
#[must_use]
pub const fn is_digit(c: u8) -> bool {
    c.is_ascii_digit()
}

/// Returns true if the byte is a hexadecimal digit (`0-9` / `A-F` / `a-f`).
#[must_use]
pub const fn is_hex_digit(c: u8) -> bool {
    is_digit(c) || matches!(c, b'A'..=b'F' | b'a'..=b'f')
}

/// Returns true if the byte belongs to the `unreserved` class:
/// letters, digits, or `- . _ ~`.
#[must_use]
pub const fn is_unreserved(c: u8) -> bool {
    is_alpha(c) || is_digit(c) || matches!(c, b'-' | b'.' | b'_' | b'~')
}

/// Returns true if the byte belongs to the `sub-delims` class:
/// `! $ & ' ( ) * + , ; =`.
#[must_use]
pub const fn is_subdelim(c: u8) -> bool {
    matches!(
        c,
        b'!' | b'$' | b'&' | b'\'' | b'(' | b')' | b'*' | b'+' | b',' | b';' | b'='
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alpha_matches_both_cases() {
        assert!(is_alpha(b'A'));
        assert!(is_alpha(b'z'));
        assert!(!is_alpha(b'0'));
        assert!(!is_alpha(b'-'));
    }

    #[test]
    fn digit_is_decimal_only() {
        assert!(is_digit(b'0'));
        assert!(is_digit(b'9'));
        assert!(!is_digit(b'a'));
    }

    #[test]
    fn hex_digit_covers_both_cases() {
        assert!(is_hex_digit(b'7'));
        assert!(is_hex_digit(b'F'));
        assert!(is_hex_digit(b'f'));
        assert!(!is_hex_digit(b'g'));
        assert!(!is_hex_digit(b'G'));
    }

    #[test]
    fn unreserved_marks() {
        for c in [b'-', b'.', b'_', b'~'] {
            assert!(is_unreserved(c));
        }
        assert!(!is_unreserved(b'%'));
        assert!(!is_unreserved(b'/'));
    }

    #[test]
    fn subdelims_exact_set() {
        let expected = b"!$&'()*+,;=";
        for c in 0u8..=255 {
            assert_eq!(is_subdelim(c), expected.contains(&c), "byte {c:#04x}");
        }
    }

    #[test]
    fn non_ascii_fails_every_class() {
        for c in [0x80u8, 0xC3, 0xFF] {
            assert!(!is_alpha(c));
            assert!(!is_digit(c));
            assert!(!is_hex_digit(c));
            assert!(!is_unreserved(c));
            assert!(!is_subdelim(c));
        }
    }
}
