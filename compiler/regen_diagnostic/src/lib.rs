//! Diagnostics for pattern canonicalization.
//!
//! Canonicalization never fails because a pattern has a surprising shape;
//! it reports the shape and carries on. Every such report is a
//! [`Diagnostic`] with a stable [`DiagnosticCode`], collected in a
//! [`DiagnosticQueue`] that also forwards it to `tracing` so that callers
//! who never inspect the queue still see it in their logs.

mod diagnostic;
pub mod queue;

pub use diagnostic::{Diagnostic, DiagnosticCode, Severity};
pub use queue::DiagnosticQueue;
