//! Focusable elements must carry an inline hint of a visible focus style.

use super::{Rule, RuleId, FOCUSABLE};
use crate::core::{Diagnostic, DiagnosticSink};
use crate::scanner::open_tags;

/// Literal tokens accepted as evidence of a focus indicator
pub const INDICATOR_TOKENS: [&str; 2] = ["outline", "border"];

pub struct FocusIndicatorRule;

impl Rule for FocusIndicatorRule {
    fn id(&self) -> RuleId {
        RuleId::FocusIndicator
    }

    fn description(&self) -> &'static str {
        "Every focusable element mentions \"outline\" or \"border\" in its attributes"
    }

    fn evaluate(&self, markup: &str, sink: &mut dyn DiagnosticSink) -> bool {
        let mut passed = true;

        for tag in open_tags(markup, FOCUSABLE) {
            // Only attribute text counts; stylesheets are not resolved
            if INDICATOR_TOKENS.iter().any(|token| tag.attrs.contains(token)) {
                continue;
            }
            passed = false;
            sink.record(
                Diagnostic::error(
                    self.id(),
                    format!("No visible focus indicator (outline or border) on {}", tag.raw),
                )
                .spanning(markup, tag.start, tag.end),
            );
        }

        passed
    }
}
