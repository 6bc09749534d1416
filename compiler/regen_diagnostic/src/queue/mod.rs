//! Queue collecting diagnostics across simplification passes.
//!
//! Simplification runs until the tree stops changing, so the same shape can
//! be reported once per pass. The queue keeps the first occurrence of each
//! distinct diagnostic and drops the rest.

use rustc_hash::FxHashSet;

use crate::{Diagnostic, Severity};

/// Deduplicating diagnostic collector that mirrors entries to `tracing`.
#[derive(Clone, Debug, Default)]
pub struct DiagnosticQueue {
    diagnostics: Vec<Diagnostic>,
    seen: FxHashSet<Diagnostic>,
}

impl DiagnosticQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a diagnostic.
    ///
    /// Returns `true` if it was new, `false` if an identical one was already
    /// queued.
    pub fn push(&mut self, diag: Diagnostic) -> bool {
        if self.seen.contains(&diag) {
            return false;
        }
        match diag.severity {
            Severity::Warning => {
                tracing::warn!(code = diag.code.as_str(), "{}", diag.message);
            }
            Severity::Note => {
                tracing::debug!(code = diag.code.as_str(), "{}", diag.message);
            }
        }
        self.seen.insert(diag.clone());
        self.diagnostics.push(diag);
        true
    }

    pub fn len(&self) -> usize {
        self.diagnostics.len()
    }

    pub fn is_empty(&self) -> bool {
        self.diagnostics.is_empty()
    }

    pub fn has_warnings(&self) -> bool {
        self.diagnostics.iter().any(Diagnostic::is_warning)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics.iter()
    }

    /// Take all queued diagnostics in insertion order, leaving the queue empty.
    pub fn flush(&mut self) -> Vec<Diagnostic> {
        self.seen.clear();
        std::mem::take(&mut self.diagnostics)
    }
}
