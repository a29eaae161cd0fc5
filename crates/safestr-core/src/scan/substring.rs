//! Bounded substring search.

use crate::buffer::{CheckedStr, NUL};

/// Byte comparison policy for substring search.
pub trait ByteMatch {
    /// Returns true if the haystack byte matches the needle byte.
    fn matches(haystack: u8, needle: u8) -> bool;
}

/// Byte-for-byte equality.
#[derive(Debug, Clone, Copy, Default)]
pub struct Exact;

impl ByteMatch for Exact {
    #[inline]
    fn matches(haystack: u8, needle: u8) -> bool {
        haystack == needle
    }
}

/// Equality after folding `a`..=`z` onto `A`..=`Z`. Other bytes compare exactly.
#[derive(Debug, Clone, Copy, Default)]
pub struct AsciiCaseInsensitive;

impl ByteMatch for AsciiCaseInsensitive {
    #[inline]
    fn matches(haystack: u8, needle: u8) -> bool {
        fold_upper(haystack) == fold_upper(needle)
    }
}

#[inline]
fn fold_upper(b: u8) -> u8 {
    if b.is_ascii_lowercase() {
        b - (b'a' - b'A')
    } else {
        b
    }
}

/// Finds the leftmost start of `needle` in `haystack`.
///
/// An empty needle, or a needle starting at the haystack's own address,
/// matches at offset 0. A candidate matches once the needle's terminator is
/// reached or its declared maximum is used up; needle bytes beyond that
/// maximum are never read. A candidate whose comparison runs out of haystack
/// budget does not match.
///
/// Returns the haystack offset of the match.
pub fn find<M: ByteMatch>(haystack: &CheckedStr<'_>, needle: &CheckedStr<'_>) -> Option<usize> {
    if needle.is_empty() || haystack.same_start(needle) {
        return Some(0);
    }

    let mut start = 0;
    let mut remaining = haystack.max();
    while remaining > 0 && haystack.at(start) != NUL {
        let mut i = 0;
        let mut needle_budget = needle.max();
        let mut haystack_budget = remaining;

        while needle.at(i) != NUL && haystack_budget > 0 {
            if !M::matches(haystack.at(start + i), needle.at(i)) {
                break;
            }
            i += 1;
            needle_budget -= 1;
            haystack_budget -= 1;

            if needle_budget == 0 || needle.at(i) == NUL {
                return Some(start);
            }
        }

        start += 1;
        remaining -= 1;
    }
    None
}
