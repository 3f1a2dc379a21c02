//! Core Types
//!
//! Diagnostics and the sinks they are reported through.

pub mod diagnostics;

pub use diagnostics::{CollectingSink, Diagnostic, DiagnosticSink, LogSink};
