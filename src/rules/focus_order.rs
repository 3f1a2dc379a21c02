//! Focus order approximated as a non-decreasing sequence of tab indices.

use super::{Rule, RuleId};
use crate::core::{Diagnostic, DiagnosticSink};
use crate::scanner::{open_tags, Tag, TagSet};

/// Elements that take part in the focus order check
pub const ORDERED: TagSet = TagSet(&["a", "button", "input", "select", "textarea", "div"]);

pub struct FocusOrderRule;

impl Rule for FocusOrderRule {
    fn id(&self) -> RuleId {
        RuleId::FocusOrder
    }

    fn description(&self) -> &'static str {
        "Tab indices never decrease in document order"
    }

    fn evaluate(&self, markup: &str, sink: &mut dyn DiagnosticSink) -> bool {
        let mut previous: Option<u32> = None;

        for tag in open_tags(markup, ORDERED) {
            let index = effective_tab_index(&tag);
            match previous {
                Some(prev) if index < prev => {
                    sink.record(
                        Diagnostic::error(
                            self.id(),
                            format!(
                                "Focus order is not logical: tabindex {} of {} follows tabindex {}",
                                index, tag.raw, prev
                            ),
                        )
                        .spanning(markup, tag.start, tag.end),
                    );
                    return false;
                }
                _ => previous = Some(index),
            }
        }

        true
    }
}

/// The tabindex as a non-negative integer; absent or anything else is 0
pub fn effective_tab_index(tag: &Tag<'_>) -> u32 {
    tag.attributes()
        .value("tabindex")
        .and_then(|value| value.trim().parse::<u32>().ok())
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn evaluate(markup: &str) -> (bool, Vec<Diagnostic>) {
        let mut diagnostics: Vec<Diagnostic> = Vec::new();
        let verdict = FocusOrderRule.evaluate(markup, &mut diagnostics);
        (verdict, diagnostics)
    }

    #[test]
    fn test_monotonic_sequence() {
        let (ok, diagnostics) = evaluate(
            r#"<div>x</div><a tabindex="0">a</a><button tabindex="1">b</button><input tabindex="2"><select tabindex="3"></select>"#,
        );
        assert!(ok);
        assert!(diagnostics.is_empty());
    }

    #[test]
    fn test_decrease_reports_once() {
        let (ok, diagnostics) = evaluate(
            r#"<button tabindex="2">a</button><button tabindex="1">b</button><button tabindex="3">c</button><input tabindex="0">"#,
        );
        assert!(!ok);
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(
            diagnostics[0].fragment.as_deref(),
            Some(r#"<button tabindex="1">"#)
        );
    }

    #[test]
    fn test_missing_tabindex_counts_as_zero() {
        let (ok, _) = evaluate(r#"<button tabindex="1">a</button><div>later</div>"#);
        assert!(!ok);
    }

    #[test]
    fn test_negative_tabindex_counts_as_zero() {
        let (ok, _) = evaluate(r#"<a tabindex="-1">a</a><a>b</a><a tabindex="4">c</a>"#);
        assert!(ok);
    }

    #[test]
    fn test_zero_or_one_element() {
        assert!(evaluate("").0);
        assert!(evaluate(r#"<div tabindex="7"></div>"#).0);
    }

    #[test]
    fn test_effective_tab_index() {
        let markup = r#"<div tabindex=" 5 "><div tabindex="x"><div>"#;
        let indices: Vec<_> = open_tags(markup, ORDERED)
            .map(|tag| effective_tab_index(&tag))
            .collect();
        assert_eq!(indices, vec![5, 0, 0]);
    }
}
