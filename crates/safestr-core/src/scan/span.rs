//! Bounded character-set scans over a subject string.

use crate::buffer::{CheckedStr, NUL};

// True if `b` occurs in `set` before its terminator and within its maximum.
fn contains(set: &CheckedStr<'_>, b: u8) -> bool {
    let mut j = 0;
    while j < set.max() && set.at(j) != NUL {
        if set.at(j) == b {
            return true;
        }
        j += 1;
    }
    false
}

/// Counts the leading bytes of `subject` that do not occur in `reject`.
///
/// The count stops at the first rejected byte, at the subject's terminator,
/// or at the subject's declared maximum.
pub fn complement_span(subject: &CheckedStr<'_>, reject: &CheckedStr<'_>) -> usize {
    let mut count = 0;
    while count < subject.max() && subject.at(count) != NUL {
        if contains(reject, subject.at(count)) {
            break;
        }
        count += 1;
    }
    count
}

/// Finds the first byte of `subject` that occurs in `accept`.
///
/// Returns the subject offset of that byte.
pub fn first_of(subject: &CheckedStr<'_>, accept: &CheckedStr<'_>) -> Option<usize> {
    let mut i = 0;
    while i < subject.max() && subject.at(i) != NUL {
        if contains(accept, subject.at(i)) {
            return Some(i);
        }
        i += 1;
    }
    None
}
