//! Report rendering for the command line.

use anyhow::Result;
use serde::Serialize;
use std::fmt::Write;

use crate::validation::CheckReport;

/// Check result for one input
#[derive(Debug, Clone, Serialize)]
pub struct SourceReport {
    pub source: String,
    pub passed: bool,
    #[serde(flatten)]
    pub report: CheckReport,
}

impl SourceReport {
    pub fn new(source: impl Into<String>, report: CheckReport) -> Self {
        Self {
            source: source.into(),
            passed: report.passed(),
            report,
        }
    }
}

/// Human-readable report: per-rule verdicts, then diagnostics
pub fn render_text(reports: &[SourceReport]) -> String {
    let mut out = String::new();

    for source in reports {
        let _ = writeln!(
            out,
            "{}: {}",
            source.source,
            if source.passed { "PASS" } else { "FAIL" }
        );
        for outcome in &source.report.outcomes {
            if outcome.passed {
                let _ = writeln!(out, "  {:<20} pass", outcome.rule.as_str());
            } else {
                let _ = writeln!(
                    out,
                    "  {:<20} fail  ({})",
                    outcome.rule.as_str(),
                    outcome.rule.description()
                );
            }
        }
        for diagnostic in &source.report.diagnostics {
            match diagnostic.line {
                Some(line) => {
                    let _ = writeln!(
                        out,
                        "  {}:{}: [{}] {}",
                        source.source, line, diagnostic.rule, diagnostic.message
                    );
                }
                None => {
                    let _ = writeln!(
                        out,
                        "  {}: [{}] {}",
                        source.source, diagnostic.rule, diagnostic.message
                    );
                }
            }
        }
    }

    let failed = reports.iter().filter(|r| !r.passed).count();
    let _ = writeln!(out, "{} of {} inputs failed", failed, reports.len());
    out
}

pub fn render_json(reports: &[SourceReport]) -> Result<String> {
    Ok(serde_json::to_string_pretty(reports)?)
}
