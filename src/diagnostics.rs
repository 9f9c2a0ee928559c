//! Diagnostic side channel for contained errors
//!
//! Collaborator-attachment failures are deliberately not propagated: an
//! optional enhancement must never break an otherwise valid configuration.
//! Instead of a silent catch-and-discard, every contained error is threaded
//! through a [`DiagnosticSink`] so callers and tests can observe that it fired.

use tracing::warn;

/// A contained error reported at its point of origin
#[derive(Debug, Clone)]
pub struct Diagnostic {
    /// Component the diagnostic originated from
    pub component: &'static str,
    /// Human-readable description of what went wrong
    pub message: String,
}

impl Diagnostic {
    /// Create a new diagnostic
    pub fn new(component: &'static str, message: impl Into<String>) -> Self {
        Self {
            component,
            message: message.into(),
        }
    }
}

/// Sink receiving contained errors
pub trait DiagnosticSink: Send + Sync {
    /// Report a contained error
    fn report(&self, diagnostic: Diagnostic);
}

/// Default sink: contained errors surface as warnings in the log
#[derive(Debug, Default)]
pub struct TracingDiagnostics;

impl DiagnosticSink for TracingDiagnostics {
    fn report(&self, diagnostic: Diagnostic) {
        warn!(component = diagnostic.component, "{}", diagnostic.message);
    }
}
