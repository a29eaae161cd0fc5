//! Single-buffer classification.
//!
//! Predicates test raw byte values, so results do not depend on locale.

use crate::buffer::{CheckedStr, NUL};

/// Returns true for `A`..=`Z`.
#[inline]
pub fn is_uppercase_byte(b: u8) -> bool {
    (b'A'..=b'Z').contains(&b)
}

/// Returns true for `a`..=`z`.
#[inline]
pub fn is_lowercase_byte(b: u8) -> bool {
    (b'a'..=b'z').contains(&b)
}

/// Returns true for `0`..=`9`.
#[inline]
pub fn is_digit_byte(b: u8) -> bool {
    (b'0'..=b'9').contains(&b)
}

/// Returns true for `0`..=`9`, `a`..=`f` and `A`..=`F`.
#[inline]
pub fn is_hex_byte(b: u8) -> bool {
    is_digit_byte(b) || (b'a'..=b'f').contains(&b) || (b'A'..=b'F').contains(&b)
}

/// Returns true for ASCII letters and digits.
#[inline]
pub fn is_alphanumeric_byte(b: u8) -> bool {
    is_digit_byte(b) || is_uppercase_byte(b) || is_lowercase_byte(b)
}

/// Returns true if `s` is non-empty and every scanned byte satisfies `pred`.
///
/// Scanning stops at the terminator or the declared maximum. An empty
/// string is not a member of any class.
pub fn all_match(s: &CheckedStr<'_>, pred: impl Fn(u8) -> bool) -> bool {
    if s.is_empty() {
        return false;
    }
    let mut i = 0;
    while i < s.max() && s.at(i) != NUL {
        if !pred(s.at(i)) {
            return false;
        }
        i += 1;
    }
    true
}
