//! Public operations.
//!
//! Each operation validates its buffers through the shared
//! [`Preamble`](crate::preamble::Preamble), delegates to a scan kernel and
//! returns a typed result. Precondition failures are reported to the
//! context's handler exactly once; `NotFound` is never reported.
//!
//! # Example
//!
//! ```
//! use safestr_core::{BoundedStr, ScanContext, StrError};
//! use safestr_core::ops::{complement_span, find_substring_ignore_case, is_uppercase};
//!
//! let ctx = ScanContext::new();
//!
//! let pos = find_substring_ignore_case(
//!     &ctx,
//!     BoundedStr::from_str("Hello World", 11),
//!     BoundedStr::from_str("WORLD", 5),
//! );
//! assert_eq!(pos, Ok(6));
//!
//! let count = complement_span(
//!     &ctx,
//!     BoundedStr::from_str("12345abc", 8),
//!     BoundedStr::from_str("abc", 3),
//! );
//! assert_eq!(count, Ok(5));
//!
//! assert!(is_uppercase(&ctx, BoundedStr::from_str("HELLO", 5)));
//! assert!(!is_uppercase(&ctx, BoundedStr::from_str("", 5)));
//! ```

use tracing::trace;

use crate::buffer::BoundedStr;
use crate::context::ScanContext;
use crate::error::{Result, StrError};
use crate::preamble::{Preamble, DEST, SRC};
use crate::scan::{self, AsciiCaseInsensitive, ByteMatch, Exact};

pub(crate) const STRSTR: &str = "strstr_s";
pub(crate) const STRCASESTR: &str = "strcasestr_s";
pub(crate) const STRCSPN: &str = "strcspn_s";
pub(crate) const STRPBRK: &str = "strpbrk_s";
pub(crate) const STRISUPPERCASE: &str = "strisuppercase_s";

/// Finds the leftmost occurrence of `src` in `dest`, comparing bytes exactly.
///
/// Returns the offset in `dest` where the match begins. An empty needle, or
/// a needle that is the haystack itself, matches at offset 0. When the needle
/// is longer than `src.max()`, only its first `src.max()` bytes are matched.
///
/// # Errors
///
/// `NullPointer`, `ZeroLength` or `LengthExceedsMax` when a buffer is
/// rejected, `NotFound` when no occurrence lies within `dest.max()`.
pub fn find_substring(
    ctx: &ScanContext,
    dest: BoundedStr<'_>,
    src: BoundedStr<'_>,
) -> Result<usize> {
    search::<Exact>(ctx, STRSTR, dest, src)
}

/// Like [`find_substring`], but letters compare without regard to ASCII case.
pub fn find_substring_ignore_case(
    ctx: &ScanContext,
    dest: BoundedStr<'_>,
    src: BoundedStr<'_>,
) -> Result<usize> {
    search::<AsciiCaseInsensitive>(ctx, STRCASESTR, dest, src)
}

fn search<M: ByteMatch>(
    ctx: &ScanContext,
    operation: &'static str,
    dest: BoundedStr<'_>,
    src: BoundedStr<'_>,
) -> Result<usize> {
    let pre = Preamble::new(ctx, operation);
    let dest = pre.buffer(dest, DEST)?;
    let src = pre.buffer(src, SRC)?;

    let found = scan::find::<M>(&dest, &src);
    trace!(event = "scan", operation, found = found.is_some());
    found.ok_or(StrError::NotFound)
}

/// Counts the leading bytes of `dest` that do not occur in `src`.
///
/// There is no "not found" outcome: if no byte of `dest` is excluded, the
/// count is the scanned length of `dest`.
pub fn complement_span(
    ctx: &ScanContext,
    dest: BoundedStr<'_>,
    src: BoundedStr<'_>,
) -> Result<usize> {
    let pre = Preamble::new(ctx, STRCSPN);
    let dest = pre.buffer(dest, DEST)?;
    let src = pre.buffer(src, SRC)?;

    let count = scan::complement_span(&dest, &src);
    trace!(event = "scan", operation = STRCSPN, count);
    Ok(count)
}

/// Finds the first byte of `dest` that occurs in `src`.
///
/// Returns the offset of that byte in `dest`.
pub fn find_first_of(
    ctx: &ScanContext,
    dest: BoundedStr<'_>,
    src: BoundedStr<'_>,
) -> Result<usize> {
    let pre = Preamble::new(ctx, STRPBRK);
    let dest = pre.buffer(dest, DEST)?;
    let src = pre.buffer(src, SRC)?;

    let found = scan::first_of(&dest, &src);
    trace!(event = "scan", operation = STRPBRK, found = found.is_some());
    found.ok_or(StrError::NotFound)
}

/// Returns true if `dest` is non-empty and consists of `A`..=`Z` only.
///
/// Rejected input also yields `false`; the violation still reaches the
/// handler. Use [`check_uppercase`] to tell the two apart.
pub fn is_uppercase(ctx: &ScanContext, dest: BoundedStr<'_>) -> bool {
    check_uppercase(ctx, dest).unwrap_or(false)
}

/// Like [`is_uppercase`], but rejected input is returned as an error.
///
/// ```
/// use safestr_core::{BoundedStr, ScanContext, StrError};
/// use safestr_core::ops::check_uppercase;
///
/// let ctx = ScanContext::new();
/// assert_eq!(check_uppercase(&ctx, BoundedStr::from_str("ABC", 3)), Ok(true));
/// assert_eq!(check_uppercase(&ctx, BoundedStr::from_str("ABC", 0)), Err(StrError::ZeroLength));
/// ```
pub fn check_uppercase(ctx: &ScanContext, dest: BoundedStr<'_>) -> Result<bool> {
    classify(ctx, STRISUPPERCASE, dest, scan::is_uppercase_byte)
}

/// Returns true if `dest` is non-empty and consists of `a`..=`z` only.
pub fn is_lowercase(ctx: &ScanContext, dest: BoundedStr<'_>) -> bool {
    classify(ctx, "strislowercase_s", dest, scan::is_lowercase_byte).unwrap_or(false)
}

/// Returns true if `dest` is non-empty and consists of `0`..=`9` only.
pub fn is_digit(ctx: &ScanContext, dest: BoundedStr<'_>) -> bool {
    classify(ctx, "strisdigit_s", dest, scan::is_digit_byte).unwrap_or(false)
}

/// Returns true if `dest` is non-empty and consists of hexadecimal digits only.
pub fn is_hex(ctx: &ScanContext, dest: BoundedStr<'_>) -> bool {
    classify(ctx, "strishex_s", dest, scan::is_hex_byte).unwrap_or(false)
}

/// Returns true if `dest` is non-empty and consists of ASCII letters and digits only.
pub fn is_alphanumeric(ctx: &ScanContext, dest: BoundedStr<'_>) -> bool {
    classify(ctx, "strisalphanumeric_s", dest, scan::is_alphanumeric_byte).unwrap_or(false)
}

fn classify(
    ctx: &ScanContext,
    operation: &'static str,
    dest: BoundedStr<'_>,
    pred: fn(u8) -> bool,
) -> Result<bool> {
    let dest = Preamble::new(ctx, operation).buffer(dest, DEST)?;

    let member = scan::all_match(&dest, pred);
    trace!(event = "scan", operation, member);
    Ok(member)
}

/// Returns the part of `haystack` starting at a match offset.
///
/// Offsets past the end yield an empty slice.
///
/// ```
/// use safestr_core::ops::matched_tail;
///
/// assert_eq!(matched_tail(b"Hello World", 6), b"World");
/// assert_eq!(matched_tail(b"abc", 10), b"");
/// ```
pub fn matched_tail(haystack: &[u8], offset: usize) -> &[u8] {
    &haystack[offset.min(haystack.len())..]
}
