//! Constraint violation reporting.
//!
//! Every rejected precondition is turned into a [`ConstraintViolation`] and
//! handed to the [`ConstraintHandler`] held by the active
//! [`ScanContext`](crate::ScanContext). Handlers observe violations; they do
//! not change what the operation returns.
//!
//! # Usage
//!
//! ```
//! use std::sync::Arc;
//! use safestr_core::{BoundedStr, ConstraintViolation, ScanContext, StrError};
//! use safestr_core::ops::find_substring;
//!
//! let ctx = ScanContext::with_handler(Arc::new(|v: &ConstraintViolation| {
//!     eprintln!("rejected: {}", v);
//! }));
//!
//! let err = find_substring(&ctx, BoundedStr::null(8), BoundedStr::from_str("x", 1));
//! assert_eq!(err, Err(StrError::NullPointer));
//! ```

use std::fmt;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use tracing::warn;

use crate::error::ConstraintKind;

/// A rejected precondition.
///
/// Violations are plain values: they are built on the failing path, passed
/// to the handler by reference and then dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ConstraintViolation {
    /// Operation that rejected its input, e.g. `"strstr_s"`.
    pub operation: &'static str,
    /// Failed condition, e.g. `"dmax is 0"`.
    pub condition: &'static str,
    /// Category of the failure.
    pub kind: ConstraintKind,
}

impl ConstraintViolation {
    /// Creates a new violation.
    pub fn new(operation: &'static str, condition: &'static str, kind: ConstraintKind) -> Self {
        Self {
            operation,
            condition,
            kind,
        }
    }

    /// Returns the operation-qualified message.
    pub fn message(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for ConstraintViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.operation, self.condition)
    }
}

/// Receiver for constraint violations.
///
/// Implementations must tolerate being called from several threads at once.
pub trait ConstraintHandler: Send + Sync {
    /// Called once for every rejected precondition.
    fn on_violation(&self, violation: &ConstraintViolation);
}

impl<F> ConstraintHandler for F
where
    F: Fn(&ConstraintViolation) + Send + Sync,
{
    fn on_violation(&self, violation: &ConstraintViolation) {
        self(violation)
    }
}

/// A handler that discards every violation.
#[derive(Debug, Clone, Copy, Default)]
pub struct IgnoreHandler;

impl ConstraintHandler for IgnoreHandler {
    fn on_violation(&self, _violation: &ConstraintViolation) {}
}

/// A handler that emits each violation as a `tracing` warning.
///
/// Events carry `event = "constraint_violation"` so console layers can pick
/// them out.
#[derive(Debug, Clone, Copy, Default)]
pub struct LoggingHandler;

impl ConstraintHandler for LoggingHandler {
    fn on_violation(&self, violation: &ConstraintViolation) {
        warn!(
            event = "constraint_violation",
            operation = violation.operation,
            condition = violation.condition,
            kind = violation.kind.as_str(),
        );
    }
}

/// A counting handler that tracks violations per kind.
///
/// Useful for testing and statistics collection.
#[derive(Debug, Default)]
pub struct CountingHandler {
    null_pointer_count: AtomicUsize,
    zero_length_count: AtomicUsize,
    length_exceeds_max_count: AtomicUsize,
}

impl CountingHandler {
    /// Creates a new counting handler.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of null pointer violations.
    pub fn null_pointer_count(&self) -> usize {
        self.null_pointer_count.load(Ordering::SeqCst)
    }

    /// Returns the number of zero length violations.
    pub fn zero_length_count(&self) -> usize {
        self.zero_length_count.load(Ordering::SeqCst)
    }

    /// Returns the number of length-exceeds-max violations.
    pub fn length_exceeds_max_count(&self) -> usize {
        self.length_exceeds_max_count.load(Ordering::SeqCst)
    }

    /// Returns the number of violations of any kind.
    pub fn total(&self) -> usize {
        self.null_pointer_count() + self.zero_length_count() + self.length_exceeds_max_count()
    }

    /// Resets all counters to zero.
    pub fn reset(&self) {
        self.null_pointer_count.store(0, Ordering::SeqCst);
        self.zero_length_count.store(0, Ordering::SeqCst);
        self.length_exceeds_max_count.store(0, Ordering::SeqCst);
    }
}

impl ConstraintHandler for CountingHandler {
    fn on_violation(&self, violation: &ConstraintViolation) {
        let counter = match violation.kind {
            ConstraintKind::NullPointer => &self.null_pointer_count,
            ConstraintKind::ZeroLength => &self.zero_length_count,
            ConstraintKind::LengthExceedsMax => &self.length_exceeds_max_count,
        };
        counter.fetch_add(1, Ordering::SeqCst);
    }
}

/// A handler that keeps every violation in arrival order.
#[derive(Debug, Default)]
pub struct RecordingHandler {
    violations: Mutex<Vec<ConstraintViolation>>,
}

impl RecordingHandler {
    /// Creates an empty recording handler.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a copy of the recorded violations.
    pub fn violations(&self) -> Vec<ConstraintViolation> {
        match self.violations.lock() {
            Ok(guard) => guard.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    /// Returns the number of recorded violations.
    pub fn len(&self) -> usize {
        match self.violations.lock() {
            Ok(guard) => guard.len(),
            Err(poisoned) => poisoned.into_inner().len(),
        }
    }

    /// Returns true if nothing has been recorded.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the most recent violation, if any.
    pub fn last(&self) -> Option<ConstraintViolation> {
        self.violations().last().copied()
    }

    /// Discards all recorded violations.
    pub fn clear(&self) {
        match self.violations.lock() {
            Ok(mut guard) => guard.clear(),
            Err(poisoned) => poisoned.into_inner().clear(),
        }
    }
}

impl ConstraintHandler for RecordingHandler {
    fn on_violation(&self, violation: &ConstraintViolation) {
        match self.violations.lock() {
            Ok(mut guard) => guard.push(*violation),
            Err(poisoned) => poisoned.into_inner().push(*violation),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    fn sample(kind: ConstraintKind) -> ConstraintViolation {
        ConstraintViolation::new("strstr_s", "dest is null", kind)
    }

    #[test]
    fn test_violation_message() {
        let v = ConstraintViolation::new(
            "strcspn_s",
            "slen exceeds max",
            ConstraintKind::LengthExceedsMax,
        );
        assert_eq!(v.message(), "strcspn_s: slen exceeds max");
        assert_eq!(v.to_string(), v.message());
    }

    #[test]
    fn test_counting_handler() {
        let handler = CountingHandler::new();
        handler.on_violation(&sample(ConstraintKind::NullPointer));
        handler.on_violation(&sample(ConstraintKind::NullPointer));
        handler.on_violation(&sample(ConstraintKind::ZeroLength));

        assert_eq!(handler.null_pointer_count(), 2);
        assert_eq!(handler.zero_length_count(), 1);
        assert_eq!(handler.length_exceeds_max_count(), 0);
        assert_eq!(handler.total(), 3);

        handler.reset();
        assert_eq!(handler.total(), 0);
    }

    #[test]
    fn test_recording_handler_keeps_order() {
        let handler = RecordingHandler::new();
        assert!(handler.is_empty());

        handler.on_violation(&sample(ConstraintKind::ZeroLength));
        handler.on_violation(&sample(ConstraintKind::LengthExceedsMax));

        let kinds: Vec<_> = handler.violations().iter().map(|v| v.kind).collect();
        assert_eq!(
            kinds,
            vec![ConstraintKind::ZeroLength, ConstraintKind::LengthExceedsMax]
        );
        assert_eq!(handler.last().map(|v| v.kind), Some(ConstraintKind::LengthExceedsMax));

        handler.clear();
        assert!(handler.is_empty());
    }

    #[test]
    fn test_closure_handler() {
        let seen = Arc::new(AtomicUsize::new(0));
        let counter = seen.clone();
        let handler = move |_: &ConstraintViolation| {
            counter.fetch_add(1, Ordering::SeqCst);
        };

        handler.on_violation(&sample(ConstraintKind::NullPointer));
        assert_eq!(seen.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_ignore_and_logging_handlers_do_not_panic() {
        IgnoreHandler.on_violation(&sample(ConstraintKind::NullPointer));
        LoggingHandler.on_violation(&sample(ConstraintKind::ZeroLength));
    }
}
