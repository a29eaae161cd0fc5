//! Error types for SafeStr

use std::fmt;

use thiserror::Error;

/// Status code for a successful operation.
pub const EOK: i32 = 0;
/// Status code for a null reference.
pub const ESNULLP: i32 = 400;
/// Status code for a zero declared length.
pub const ESZEROL: i32 = 401;
/// Status code for a declared length above the ceiling.
pub const ESLEMAX: i32 = 403;
/// Status code for a search that found nothing.
pub const ESNOTFND: i32 = 409;

/// Category of a rejected precondition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConstraintKind {
    /// A required reference was absent.
    NullPointer,
    /// A declared maximum length was zero.
    ZeroLength,
    /// A declared maximum length exceeded the ceiling.
    LengthExceedsMax,
}

impl ConstraintKind {
    /// Returns the numeric status code for this kind.
    pub fn errno(self) -> i32 {
        match self {
            ConstraintKind::NullPointer => ESNULLP,
            ConstraintKind::ZeroLength => ESZEROL,
            ConstraintKind::LengthExceedsMax => ESLEMAX,
        }
    }

    /// Returns the short name used in log events.
    pub fn as_str(self) -> &'static str {
        match self {
            ConstraintKind::NullPointer => "null_pointer",
            ConstraintKind::ZeroLength => "zero_length",
            ConstraintKind::LengthExceedsMax => "length_exceeds_max",
        }
    }
}

impl fmt::Display for ConstraintKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Main error type for SafeStr operations.
///
/// The first three variants are precondition violations and are always
/// reported to the context's constraint handler before being returned.
/// `NotFound` is an ordinary scan outcome and is never reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum StrError {
    /// A required reference was absent.
    #[error("null pointer")]
    NullPointer,

    /// A declared maximum length was zero.
    #[error("zero length")]
    ZeroLength,

    /// A declared maximum length exceeded the ceiling.
    #[error("length exceeds max")]
    LengthExceedsMax,

    /// The scan completed without locating its target.
    #[error("not found")]
    NotFound,
}

impl StrError {
    /// Returns the numeric status code for this error.
    ///
    /// ```
    /// use safestr_core::{StrError, ESNOTFND};
    ///
    /// assert_eq!(StrError::NotFound.errno(), ESNOTFND);
    /// ```
    pub fn errno(self) -> i32 {
        match self {
            StrError::NullPointer => ESNULLP,
            StrError::ZeroLength => ESZEROL,
            StrError::LengthExceedsMax => ESLEMAX,
            StrError::NotFound => ESNOTFND,
        }
    }

    /// Returns the precondition kind, or `None` for `NotFound`.
    pub fn kind(self) -> Option<ConstraintKind> {
        match self {
            StrError::NullPointer => Some(ConstraintKind::NullPointer),
            StrError::ZeroLength => Some(ConstraintKind::ZeroLength),
            StrError::LengthExceedsMax => Some(ConstraintKind::LengthExceedsMax),
            StrError::NotFound => None,
        }
    }

    /// Returns true if this error is a rejected precondition.
    pub fn is_violation(self) -> bool {
        self.kind().is_some()
    }
}

impl From<ConstraintKind> for StrError {
    fn from(kind: ConstraintKind) -> Self {
        match kind {
            ConstraintKind::NullPointer => StrError::NullPointer,
            ConstraintKind::ZeroLength => StrError::ZeroLength,
            ConstraintKind::LengthExceedsMax => StrError::LengthExceedsMax,
        }
    }
}

/// Result type alias for SafeStr operations
pub type Result<T> = std::result::Result<T, StrError>;
