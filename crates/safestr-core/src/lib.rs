//! SafeStr Core - Bounds-checked string scanning primitives
//!
//! This crate provides the building blocks for SafeStr:
//! - Bounded buffers with caller-declared maximum lengths
//! - Constraint violation reporting through an injected handler
//! - The shared validation preamble
//! - Scan kernels for substring search, span counting and classification
//! - Typed public operations and C-shaped compatibility entry points

pub mod buffer;
pub mod compat;
pub mod constraint;
pub mod context;
pub mod error;
pub mod ops;
pub mod preamble;
pub mod scan;

#[cfg(test)]
mod ops_tests;
#[cfg(test)]
mod test_utils;

pub use buffer::{BoundedStr, CheckedStr, NUL};
pub use constraint::{
    ConstraintHandler, ConstraintViolation, CountingHandler, IgnoreHandler, LoggingHandler,
    RecordingHandler,
};
pub use context::{ScanContext, StatusCodeStyle, RSIZE_MAX_STR};
pub use error::{ConstraintKind, Result, StrError, EOK, ESLEMAX, ESNOTFND, ESNULLP, ESZEROL};
