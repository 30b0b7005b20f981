//! Kani proof harnesses for the character and element predicates.
//!
//! # Usage
//!
//! Kani is not a Cargo dependency. Install and run with:
//!
//! ```bash
//! cargo install --locked kani-verifier
//! cargo kani setup
//! cargo kani --features kani
//! ```
//!
//! This module is only compiled when using Kani (`#[cfg(kani)]`).

use crate::{chars, elements};

/// Proof: the character classes partition as expected; no byte is both a
/// digit and a letter, and every digit is a hex digit.
#[kani::proof]
fn proof_char_classes_consistent() {
    let c: u8 = kani::any();
    if chars::is_digit(c) {
        assert!(!chars::is_alpha(c));
        assert!(chars::is_hex_digit(c));
        assert!(chars::is_unreserved(c));
    }
    if chars::is_alpha(c) {
        assert!(chars::is_unreserved(c));
    }
}

/// Proof: unreserved and sub-delims are disjoint.
#[kani::proof]
fn proof_unreserved_subdelim_disjoint() {
    let c: u8 = kani::any();
    assert!(!(chars::is_unreserved(c) && chars::is_subdelim(c)));
}

/// Proof: no class admits a non-ASCII byte.
#[kani::proof]
fn proof_classes_are_ascii_only() {
    let c: u8 = kani::any();
    kani::assume(c >= 0x80);
    assert!(!chars::is_alpha(c));
    assert!(!chars::is_digit(c));
    assert!(!chars::is_hex_digit(c));
    assert!(!chars::is_unreserved(c));
    assert!(!chars::is_subdelim(c));
}

/// Proof: a three-digit string passes `is_decimal_octet` exactly when its
/// decimal value is 100..=255.
#[kani::proof]
fn proof_decimal_octet_three_digit_range() {
    let a: u8 = kani::any();
    let b: u8 = kani::any();
    let c: u8 = kani::any();
    kani::assume(a.is_ascii_digit() && b.is_ascii_digit() && c.is_ascii_digit());

    let text = [a, b, c];
    let Ok(s) = core::str::from_utf8(&text) else {
        return;
    };
    let value = u32::from(a - b'0') * 100 + u32::from(b - b'0') * 10 + u32::from(c - b'0');
    assert_eq!(elements::is_decimal_octet(s), (100..=255).contains(&value));
}

/// Proof: every single digit is a decimal octet.
#[kani::proof]
fn proof_decimal_octet_single_digit() {
    let a: u8 = kani::any();
    kani::assume(a.is_ascii_digit());

    let text = [a];
    let Ok(s) = core::str::from_utf8(&text) else {
        return;
    };
    assert!(elements::is_decimal_octet(s));
}
