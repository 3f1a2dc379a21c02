//! Validation Engine
//!
//! Aggregates the focus rules into a single verdict.

pub mod engine;

pub use engine::{check_focus, CheckReport, FocusChecker, RuleOutcome};
