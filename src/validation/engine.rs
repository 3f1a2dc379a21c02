//! Check Engine
//!
//! Runs every configured rule over the same markup and reduces the
//! verdicts. All rules always run, so every violation gets reported.

use serde::Serialize;

use crate::core::{Diagnostic, DiagnosticSink, LogSink};
use crate::rules::{Rule, RuleId};

/// Verdict of a single rule
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RuleOutcome {
    pub rule: RuleId,
    pub passed: bool,
}

/// Result of checking one document
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct CheckReport {
    pub outcomes: Vec<RuleOutcome>,
    pub diagnostics: Vec<Diagnostic>,
}

impl CheckReport {
    /// True when every rule passed
    pub fn passed(&self) -> bool {
        self.outcomes.iter().all(|outcome| outcome.passed)
    }

    pub fn outcome(&self, rule: RuleId) -> Option<bool> {
        self.outcomes
            .iter()
            .find(|outcome| outcome.rule == rule)
            .map(|outcome| outcome.passed)
    }

    pub fn failed_rules(&self) -> impl Iterator<Item = RuleId> + '_ {
        self.outcomes
            .iter()
            .filter(|outcome| !outcome.passed)
            .map(|outcome| outcome.rule)
    }
}

/// An ordered set of rules evaluated together
pub struct FocusChecker {
    rules: Vec<Box<dyn Rule>>,
}

impl Default for FocusChecker {
    fn default() -> Self {
        Self::new()
    }
}

impl FocusChecker {
    /// All built-in rules
    pub fn new() -> Self {
        Self::with_rules(RuleId::ALL)
    }

    /// Only the given rules, kept in their canonical order
    pub fn with_rules(ids: impl IntoIterator<Item = RuleId>) -> Self {
        let mut ids: Vec<RuleId> = ids.into_iter().collect();
        ids.sort();
        ids.dedup();

        Self {
            rules: ids.into_iter().map(RuleId::rule).collect(),
        }
    }

    pub fn rule_ids(&self) -> Vec<RuleId> {
        self.rules.iter().map(|rule| rule.id()).collect()
    }

    /// Run every rule, reporting to `sink`; true only if all rules pass
    pub fn run(&self, markup: &str, sink: &mut dyn DiagnosticSink) -> bool {
        let mut passed = true;

        for rule in &self.rules {
            let verdict = rule.evaluate(markup, sink);
            log::debug!("rule {} {}", rule.id(), if verdict { "passed" } else { "failed" });
            passed &= verdict;
        }

        passed
    }

    /// Run every rule and collect verdicts and diagnostics
    pub fn check(&self, markup: &str) -> CheckReport {
        let mut report = CheckReport::default();

        for rule in &self.rules {
            let passed = rule.evaluate(markup, &mut report.diagnostics);
            log::debug!("rule {} {}", rule.id(), if passed { "passed" } else { "failed" });
            report.outcomes.push(RuleOutcome {
                rule: rule.id(),
                passed,
            });
        }

        report
    }
}

/// Check `markup` against all built-in rules, logging each violation
pub fn check_focus(markup: &str) -> bool {
    FocusChecker::new().run(markup, &mut LogSink)
}
