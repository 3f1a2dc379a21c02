//! Interactive elements must declare an explicit `tabindex`.
//!
//! Native anchors and buttons are focusable without one; requiring the
//! attribute anyway makes keyboard-focus handling auditable in markup.

use super::{Rule, RuleId};
use crate::core::{Diagnostic, DiagnosticSink};
use crate::scanner::{open_tags, TagSet};

/// Elements that must declare a tabindex
pub const KEYBOARD_OPERABLE: TagSet = TagSet(&["a", "button", "input", "select"]);

pub struct KeyboardAccessibleRule;

impl Rule for KeyboardAccessibleRule {
    fn id(&self) -> RuleId {
        RuleId::KeyboardAccessible
    }

    fn description(&self) -> &'static str {
        "Every interactive element declares a tabindex attribute"
    }

    fn evaluate(&self, markup: &str, sink: &mut dyn DiagnosticSink) -> bool {
        let mut passed = true;

        for tag in open_tags(markup, KEYBOARD_OPERABLE) {
            if tag.attributes().has("tabindex") {
                continue;
            }
            passed = false;
            sink.record(
                Diagnostic::error(
                    self.id(),
                    format!("Element {} has no tabindex attribute", tag.raw),
                )
                .spanning(markup, tag.start, tag.end),
            );
        }

        passed
    }
}
