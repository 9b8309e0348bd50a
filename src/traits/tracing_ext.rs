//! Tracing integration for status-rail.
//!
//! The core never logs. These opt-in helpers let callers emit a structured
//! `tracing` event for a failed result, or attribute an error to the span it
//! occurred in, without breaking a chain.
//!
//! # Feature Flag
//!
//! Requires the `tracing` feature:
//!
//! ```toml
//! [dependencies]
//! status-rail = { version = "0.1", features = ["tracing"] }
//! ```

use alloc::format;

use tracing::{Level, Span};

use crate::types::Error;

/// Extension trait emitting `tracing` events for failed results.
pub trait TraceResultExt<T> {
    /// Emits a `WARN` event carrying the error's `kind` and `detail` fields on
    /// failure, then returns `self` unchanged.
    fn trace_err(self) -> Self;

    /// Same as [`trace_err`](Self::trace_err) at the given level.
    fn trace_err_at(self, level: Level) -> Self;

    /// Prefixes the error detail with the current span's name.
    fn with_current_span(self) -> Self;

    /// Prefixes the error detail with the given span's name.
    fn with_span(self, span: &Span) -> Self;
}

impl<T> TraceResultExt<T> for Result<T, Error> {
    #[inline]
    fn trace_err(self) -> Self {
        self.trace_err_at(Level::WARN)
    }

    fn trace_err_at(self, level: Level) -> Self {
        if let Err(error) = &self {
            let kind = error.kind().name();
            let detail = error.detail();
            // `event!` needs a constant level, hence the dispatch.
            if level == Level::ERROR {
                tracing::error!(kind, detail, "result failed");
            } else if level == Level::WARN {
                tracing::warn!(kind, detail, "result failed");
            } else if level == Level::INFO {
                tracing::info!(kind, detail, "result failed");
            } else if level == Level::DEBUG {
                tracing::debug!(kind, detail, "result failed");
            } else {
                tracing::trace!(kind, detail, "result failed");
            }
        }
        self
    }

    #[inline]
    fn with_current_span(self) -> Self {
        self.with_span(&Span::current())
    }

    fn with_span(self, span: &Span) -> Self {
        self.map_err(|e| e.with_name(span_label(span)))
    }
}

fn span_label(span: &Span) -> alloc::string::String {
    let name = span.metadata().map(|m| m.name()).unwrap_or("unknown");
    format!("in span '{}'", name)
}
