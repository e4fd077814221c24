//! ObservationScope for automatic begin/complete logging
//!
//! - Logs `{name}_BEGIN` on creation
//! - Logs `{name}_COMPLETE` or `{name}_FAILED` when closed
//! - Logs `{name}_INCOMPLETE` on drop if never closed

use std::time::Instant;

use tracing::Span;

/// A scope that logs start and end events inside a tracing span
///
/// ```ignore
/// let scope = ObservationScope::new("FETCH", tracing::info_span!("fetch"));
/// // ... do work ...
/// scope.complete(rows);
/// ```
pub struct ObservationScope {
    name: &'static str,
    span: Span,
    started: Instant,
    closed: bool,
}

impl ObservationScope {
    /// Create a new observation scope. Logs `{name}_BEGIN` immediately.
    pub fn new(name: &'static str, span: Span) -> Self {
        tracing::debug!(parent: &span, event = %format!("{}_BEGIN", name));

        Self {
            name,
            span,
            started: Instant::now(),
            closed: false,
        }
    }

    /// The span events of this scope are recorded in
    pub fn span(&self) -> &Span {
        &self.span
    }

    /// Mark the scope as successfully completed with a row count
    pub fn complete(mut self, rows: usize) {
        self.closed = true;
        tracing::info!(
            parent: &self.span,
            event = %format!("{}_COMPLETE", self.name),
            rows,
            elapsed_ms = self.elapsed_ms(),
        );
    }

    /// Mark the scope as failed with a reason
    pub fn fail(mut self, code: &str, reason: &str) {
        self.closed = true;
        tracing::error!(
            parent: &self.span,
            event = %format!("{}_FAILED", self.name),
            code,
            reason,
            elapsed_ms = self.elapsed_ms(),
        );
    }

    /// Check if the scope has been closed
    pub fn is_closed(&self) -> bool {
        self.closed
    }

    fn elapsed_ms(&self) -> u64 {
        self.started.elapsed().as_millis() as u64
    }
}

impl Drop for ObservationScope {
    fn drop(&mut self) {
        if !self.closed {
            tracing::warn!(
                parent: &self.span,
                event = %format!("{}_INCOMPLETE", self.name),
                reason = "scope dropped without completion",
            );
        }
    }
}
