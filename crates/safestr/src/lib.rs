//! SafeStr - Bounds-checked string scanning in Rust
//!
//! Every operation takes explicit maximum lengths, rejects bad input through
//! an injected constraint handler and returns a typed result.
//!
//! # Example
//!
//! ```rust
//! use safestr::prelude::*;
//!
//! let ctx = ScanContext::new();
//! let pos = find_substring(
//!     &ctx,
//!     BoundedStr::from_str("abcdef", 6),
//!     BoundedStr::from_str("cd", 2),
//! );
//! assert_eq!(pos, Ok(2));
//! ```

// Buffers, context and errors
pub use safestr_core::{
    BoundedStr, CheckedStr, ConstraintKind, Result, ScanContext, StatusCodeStyle, StrError,
    EOK, ESLEMAX, ESNOTFND, ESNULLP, ESZEROL, NUL, RSIZE_MAX_STR,
};

// Constraint reporting
pub use safestr_core::{
    ConstraintHandler, ConstraintViolation, CountingHandler, IgnoreHandler, LoggingHandler,
    RecordingHandler,
};

// Operations
pub use safestr_core::{compat, ops, preamble, scan};

// Configuration
pub use safestr_config::{ConfigError, HandlerKind, SafeStrConfig, StatusCodes};

/// Console output for violation events.
#[cfg(feature = "console")]
pub use safestr_console as console;

pub mod prelude {
    pub use super::ops::{
        check_uppercase, complement_span, find_first_of, find_substring,
        find_substring_ignore_case, is_alphanumeric, is_digit, is_hex, is_lowercase,
        is_uppercase, matched_tail,
    };
    pub use super::{BoundedStr, ConstraintHandler, ConstraintViolation, ScanContext, StrError};
    pub use super::SafeStrConfig;
}
