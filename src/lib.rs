//! Focus Lint
//!
//! Static, lexical checks of rendered markup against keyboard-focus
//! accessibility conventions.
//!
//! This library provides:
//! - Five independent focus rules (skip link, focus indicator, keyboard
//!   access, focus order, focus traps in dialogs)
//! - An engine that runs them all and reduces their verdicts
//! - Injectable diagnostic sinks
//! - Configuration and report rendering for the command line

pub mod config;
pub mod core;
pub mod report;
pub mod rules;
pub mod scanner;
pub mod validation;

// Re-exports for clean public API
pub use crate::core::{CollectingSink, Diagnostic, DiagnosticSink, LogSink};
pub use config::Config;
pub use rules::{Rule, RuleId};
pub use validation::{check_focus, CheckReport, FocusChecker, RuleOutcome};
