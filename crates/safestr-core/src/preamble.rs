//! The validation preamble shared by every operation.
//!
//! Checks run in call order and the first failure wins: output slot, then
//! each buffer's null, zero-length and ceiling checks. A failure reports one
//! violation through the context and yields the matching [`StrError`].
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use safestr_core::{BoundedStr, RecordingHandler, ScanContext, StrError};
//! use safestr_core::preamble::{Preamble, DEST, SRC};
//!
//! let recorder = Arc::new(RecordingHandler::new());
//! let ctx = ScanContext::with_handler(recorder.clone());
//! let pre = Preamble::new(&ctx, "my_op");
//!
//! let dest = pre.buffer(BoundedStr::from_str("abc", 3), DEST).unwrap();
//! assert_eq!(dest.max(), 3);
//!
//! let err = pre.buffer(BoundedStr::from_str("abc", 0), SRC).unwrap_err();
//! assert_eq!(err, StrError::ZeroLength);
//! assert_eq!(recorder.last().unwrap().to_string(), "my_op: slen is 0");
//! ```

use crate::buffer::{BoundedStr, CheckedStr};
use crate::constraint::ConstraintViolation;
use crate::context::ScanContext;
use crate::error::{ConstraintKind, Result, StrError};

/// Names used in the messages for one buffer parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BufferRole {
    /// Condition reported when the data is absent.
    pub null: &'static str,
    /// Condition reported when the declared maximum is zero.
    pub zero: &'static str,
    /// Condition reported when the declared maximum is above the ceiling.
    pub too_long: &'static str,
}

/// The primary buffer: haystack, subject or classified string.
pub const DEST: BufferRole = BufferRole {
    null: "dest is null",
    zero: "dmax is 0",
    too_long: "dmax exceeds max",
};

/// The secondary buffer: needle or character set.
pub const SRC: BufferRole = BufferRole {
    null: "src is null",
    zero: "slen is 0",
    too_long: "slen exceeds max",
};

/// Validation steps for one call of one operation.
#[derive(Debug, Clone, Copy)]
pub struct Preamble<'c> {
    ctx: &'c ScanContext,
    operation: &'static str,
}

impl<'c> Preamble<'c> {
    /// Starts validation for `operation`.
    pub fn new(ctx: &'c ScanContext, operation: &'static str) -> Self {
        Self { ctx, operation }
    }

    /// Returns the operation name.
    pub fn operation(&self) -> &'static str {
        self.operation
    }

    /// Requires an output slot to be present.
    pub fn output(&self, present: bool, condition: &'static str) -> Result<()> {
        if present {
            Ok(())
        } else {
            Err(self.reject(condition, ConstraintKind::NullPointer))
        }
    }

    /// Checks one buffer: present, non-zero maximum, maximum within ceiling.
    pub fn buffer<'a>(&self, buffer: BoundedStr<'a>, role: BufferRole) -> Result<CheckedStr<'a>> {
        let Some(bytes) = buffer.data() else {
            return Err(self.reject(role.null, ConstraintKind::NullPointer));
        };
        if buffer.max() == 0 {
            return Err(self.reject(role.zero, ConstraintKind::ZeroLength));
        }
        if buffer.max() > self.ctx.max_str_len() {
            return Err(self.reject(role.too_long, ConstraintKind::LengthExceedsMax));
        }
        Ok(CheckedStr::new(bytes, buffer.max()))
    }

    fn reject(&self, condition: &'static str, kind: ConstraintKind) -> StrError {
        self.ctx
            .report(&ConstraintViolation::new(self.operation, condition, kind));
        kind.into()
    }
}
