//! C-shaped entry points.
//!
//! These mirror the classic `errno_t`-returning signatures for callers that
//! port code written against them. The output slot is validated first and is
//! always written: to `None`/`0` on every failure, to the result on success.
//! Status codes follow the context's [`StatusCodeStyle`](crate::StatusCodeStyle).
//!
//! # Example
//!
//! ```
//! use safestr_core::{ScanContext, EOK, ESNOTFND};
//! use safestr_core::compat::strstr_s;
//!
//! let ctx = ScanContext::new();
//! let hay: &[u8] = b"abcdef";
//! let mut found = None;
//!
//! let rc = strstr_s(&ctx, Some(hay), 6, Some(b"cd".as_slice()), 2, Some(&mut found));
//! assert_eq!((rc, found), (EOK, Some(2)));
//!
//! let rc = strstr_s(&ctx, Some(hay), 6, Some(b"xyz".as_slice()), 3, Some(&mut found));
//! assert_eq!((rc, found), (ESNOTFND, None));
//! ```

use crate::buffer::BoundedStr;
use crate::context::ScanContext;
use crate::error::{Result, EOK};
use crate::ops;
use crate::preamble::Preamble;

/// Numeric status code.
pub type Errno = i32;

fn status(ctx: &ScanContext, result: Result<()>) -> Errno {
    let code = match result {
        Ok(()) => EOK,
        Err(e) => e.errno(),
    };
    ctx.status_codes().apply(code)
}

/// Bounded substring search. Writes the match offset into `substring`.
pub fn strstr_s(
    ctx: &ScanContext,
    dest: Option<&[u8]>,
    dmax: usize,
    src: Option<&[u8]>,
    slen: usize,
    substring: Option<&mut Option<usize>>,
) -> Errno {
    let Some(out) = substring else {
        let missing = Preamble::new(ctx, ops::STRSTR).output(false, "substring is null");
        return status(ctx, missing);
    };
    *out = None;

    let result = ops::find_substring(
        ctx,
        BoundedStr::from_option(dest, dmax),
        BoundedStr::from_option(src, slen),
    );
    *out = result.ok();
    status(ctx, result.map(|_| ()))
}

/// Bounded case-insensitive substring search. Writes the match offset into `substring`.
pub fn strcasestr_s(
    ctx: &ScanContext,
    dest: Option<&[u8]>,
    dmax: usize,
    src: Option<&[u8]>,
    slen: usize,
    substring: Option<&mut Option<usize>>,
) -> Errno {
    let Some(out) = substring else {
        let missing = Preamble::new(ctx, ops::STRCASESTR).output(false, "substring is null");
        return status(ctx, missing);
    };
    *out = None;

    let result = ops::find_substring_ignore_case(
        ctx,
        BoundedStr::from_option(dest, dmax),
        BoundedStr::from_option(src, slen),
    );
    *out = result.ok();
    status(ctx, result.map(|_| ()))
}

/// Bounded complement span. Writes the count into `count`.
pub fn strcspn_s(
    ctx: &ScanContext,
    dest: Option<&[u8]>,
    dmax: usize,
    src: Option<&[u8]>,
    slen: usize,
    count: Option<&mut usize>,
) -> Errno {
    let Some(out) = count else {
        let missing = Preamble::new(ctx, ops::STRCSPN).output(false, "count is null");
        return status(ctx, missing);
    };
    *out = 0;

    let result = ops::complement_span(
        ctx,
        BoundedStr::from_option(dest, dmax),
        BoundedStr::from_option(src, slen),
    );
    *out = result.unwrap_or(0);
    status(ctx, result.map(|_| ()))
}

/// Bounded first-of search. Writes the offset of the first accepted byte into `first`.
pub fn strpbrk_s(
    ctx: &ScanContext,
    dest: Option<&[u8]>,
    dmax: usize,
    src: Option<&[u8]>,
    slen: usize,
    first: Option<&mut Option<usize>>,
) -> Errno {
    let Some(out) = first else {
        let missing = Preamble::new(ctx, ops::STRPBRK).output(false, "first is null");
        return status(ctx, missing);
    };
    *out = None;

    let result = ops::find_first_of(
        ctx,
        BoundedStr::from_option(dest, dmax),
        BoundedStr::from_option(src, slen),
    );
    *out = result.ok();
    status(ctx, result.map(|_| ()))
}

/// Bounded all-uppercase predicate. Rejected input yields `false`.
pub fn strisuppercase_s(ctx: &ScanContext, dest: Option<&[u8]>, dmax: usize) -> bool {
    ops::is_uppercase(ctx, BoundedStr::from_option(dest, dmax))
}
