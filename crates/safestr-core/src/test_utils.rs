//! Test utilities for safestr-core
//!
//! Provides contexts wired to inspectable handlers.

use std::sync::Arc;

use crate::constraint::{CountingHandler, RecordingHandler};
use crate::context::ScanContext;

/// Creates a context that records every violation.
pub fn recording_context() -> (ScanContext, Arc<RecordingHandler>) {
    let recorder = Arc::new(RecordingHandler::new());
    (ScanContext::with_handler(recorder.clone()), recorder)
}

/// Creates a context that counts violations per kind.
pub fn counting_context() -> (ScanContext, Arc<CountingHandler>) {
    let counter = Arc::new(CountingHandler::new());
    (ScanContext::with_handler(counter.clone()), counter)
}
