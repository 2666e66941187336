//! Diagnostics for the Kiln compiler.
//!
//! A [`Diagnostic`] is a small fixed-layout record: what happened
//! ([`DiagnosticKind`]), where (line plus the source span it refers to) and one
//! misc byte of detail. Records are appended to a [`DiagnosticSink`], which has
//! a fixed capacity and reports exhaustion to the caller instead of dropping
//! records. The [`emitter`] module renders records for humans.

mod diagnostic;
pub mod emitter;
mod sink;

pub use diagnostic::{Detail, Diagnostic, DiagnosticKind};
pub use sink::{DiagnosticSink, SinkFull, DEFAULT_CAPACITY};
