//! Scan context: the injected constraint handler and the length ceiling.

use std::fmt;
use std::sync::Arc;

use crate::constraint::{ConstraintHandler, ConstraintViolation, IgnoreHandler};

/// Default ceiling for any declared maximum string length.
pub const RSIZE_MAX_STR: usize = 4 * 1024;

/// Sign convention for numeric status codes returned by [`crate::compat`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum StatusCodeStyle {
    /// Codes are returned as-is (`ESNULLP` is 400).
    #[default]
    Positive,
    /// Codes are negated, kernel style (`ESNULLP` is -400).
    Negative,
}

impl StatusCodeStyle {
    /// Applies this convention to a raw status code.
    pub fn apply(self, code: i32) -> i32 {
        match self {
            StatusCodeStyle::Positive => code,
            StatusCodeStyle::Negative => -code,
        }
    }
}

/// Everything an operation needs besides its buffers.
///
/// A context is cheap to clone and safe to share between threads. There is
/// no process-wide handler: each caller threads its own context through.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use safestr_core::{CountingHandler, ScanContext, RSIZE_MAX_STR};
///
/// let counter = Arc::new(CountingHandler::new());
/// let ctx = ScanContext::with_handler(counter.clone()).with_max_str_len(256);
///
/// assert_eq!(ctx.max_str_len(), 256);
/// assert_eq!(ScanContext::new().max_str_len(), RSIZE_MAX_STR);
/// ```
#[derive(Clone)]
pub struct ScanContext {
    handler: Arc<dyn ConstraintHandler>,
    max_str_len: usize,
    status_codes: StatusCodeStyle,
}

impl ScanContext {
    /// Creates a context that ignores violations.
    pub fn new() -> Self {
        Self {
            handler: Arc::new(IgnoreHandler),
            max_str_len: RSIZE_MAX_STR,
            status_codes: StatusCodeStyle::Positive,
        }
    }

    /// Creates a context reporting to the given handler.
    pub fn with_handler(handler: Arc<dyn ConstraintHandler>) -> Self {
        Self {
            handler,
            ..Self::new()
        }
    }

    /// Sets the maximum accepted declared length.
    ///
    /// A ceiling of zero would reject every buffer, so it is raised to one.
    pub fn with_max_str_len(mut self, max_str_len: usize) -> Self {
        self.max_str_len = max_str_len.max(1);
        self
    }

    /// Sets the status code sign convention.
    pub fn with_status_codes(mut self, style: StatusCodeStyle) -> Self {
        self.status_codes = style;
        self
    }

    /// Replaces the handler, returning the previous one.
    pub fn set_handler(
        &mut self,
        handler: Arc<dyn ConstraintHandler>,
    ) -> Arc<dyn ConstraintHandler> {
        std::mem::replace(&mut self.handler, handler)
    }

    /// Returns the current handler.
    pub fn handler(&self) -> &Arc<dyn ConstraintHandler> {
        &self.handler
    }

    /// Returns the maximum accepted declared length.
    pub fn max_str_len(&self) -> usize {
        self.max_str_len
    }

    /// Returns the status code sign convention.
    pub fn status_codes(&self) -> StatusCodeStyle {
        self.status_codes
    }

    /// Delivers a violation to the current handler.
    pub fn report(&self, violation: &ConstraintViolation) {
        self.handler.on_violation(violation);
    }
}

impl Default for ScanContext {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for ScanContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScanContext")
            .field("max_str_len", &self.max_str_len)
            .field("status_codes", &self.status_codes)
            .finish_non_exhaustive()
    }
}
