//! Dialogs must contain something focusable so keyboard users can leave.
//!
//! Dialog bodies are captured up to the next `</div>`, so a dialog with a
//! nested `div` is cut short at the nested element's closing tag.

use super::{Rule, RuleId, FOCUSABLE};
use crate::core::{Diagnostic, DiagnosticSink};
use crate::scanner::{element_content, mentions_tag, open_tags, Tag, TagSet};

const CONTAINER: TagSet = TagSet(&["div"]);

pub struct FocusTrapRule;

impl Rule for FocusTrapRule {
    fn id(&self) -> RuleId {
        RuleId::FocusTrap
    }

    fn description(&self) -> &'static str {
        "Every role=\"dialog\" container holds at least one focusable element"
    }

    fn evaluate(&self, markup: &str, sink: &mut dyn DiagnosticSink) -> bool {
        let mut passed = true;
        // Dialog tags inside an already captured body are not rescanned
        let mut resume_at = 0;

        for tag in open_tags(markup, CONTAINER) {
            if tag.start < resume_at || !is_dialog(&tag) {
                continue;
            }
            let Some(content) = element_content(markup, tag.name, tag.end) else {
                continue;
            };
            resume_at = content.end;

            if mentions_tag(content.text, FOCUSABLE) {
                continue;
            }
            passed = false;
            sink.record(
                Diagnostic::error(
                    self.id(),
                    format!(
                        "Dialog {} has no focusable element; keyboard focus would be trapped",
                        tag.raw
                    ),
                )
                .spanning(markup, tag.start, tag.end),
            );
        }

        passed
    }
}

fn is_dialog(tag: &Tag<'_>) -> bool {
    tag.attributes()
        .value("role")
        .is_some_and(|role| role.trim().eq_ignore_ascii_case("dialog"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn evaluate(markup: &str) -> (bool, Vec<Diagnostic>) {
        let mut diagnostics: Vec<Diagnostic> = Vec::new();
        let verdict = FocusTrapRule.evaluate(markup, &mut diagnostics);
        (verdict, diagnostics)
    }

    #[test]
    fn test_text_only_dialog_fails() {
        let (ok, diagnostics) = evaluate(r#"<div role="dialog">text only</div>"#);
        assert!(!ok);
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].fragment.as_deref(), Some(r#"<div role="dialog">"#));
    }

    #[test]
    fn test_dialog_with_button_passes() {
        let (ok, diagnostics) = evaluate(r#"<div role="dialog"><button>OK</button></div>"#);
        assert!(ok);
        assert!(diagnostics.is_empty());
    }

    #[test]
    fn test_role_is_case_insensitive() {
        let (ok, _) = evaluate(r#"<DIV class="modal" ROLE="Dialog"><p>Saved</p></DIV>"#);
        assert!(!ok);
    }

    #[test]
    fn test_one_diagnostic_per_trapping_dialog() {
        let markup = concat!(
            r#"<div role="dialog">a</div>"#,
            r#"<div role="dialog"><a href="/">close</a></div>"#,
            r#"<div role="dialog">b</div>"#,
        );
        let (ok, diagnostics) = evaluate(markup);
        assert!(!ok);
        assert_eq!(diagnostics.len(), 2);
    }

    #[test]
    fn test_nested_div_truncates_capture() {
        // The button sits after the nested div's close, outside the capture
        let (ok, _) =
            evaluate(r#"<div role="dialog"><div>Title</div><button>Close</button></div>"#);
        assert!(!ok);
    }

    #[test]
    fn test_unclosed_dialog_is_ignored() {
        let (ok, diagnostics) = evaluate(r#"<div role="dialog">no close"#);
        assert!(ok);
        assert!(diagnostics.is_empty());
    }

    #[test]
    fn test_non_dialog_roles_are_ignored() {
        let (ok, _) = evaluate(r#"<div role="alertdialog">text</div><div>plain</div>"#);
        assert!(ok);
    }

    #[test]
    fn test_malformed_focusable_counts() {
        let (ok, _) = evaluate(r#"<div role="dialog"><input type="text"</div>"#);
        assert!(ok);
    }
}
