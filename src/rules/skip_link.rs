//! Skip-to-main-content link must be the first focusable element.

use super::{Rule, RuleId, FOCUSABLE};
use crate::core::{Diagnostic, DiagnosticSink};
use crate::scanner::{element_content, open_tags, Tag};

/// Link text that identifies a skip link
pub const SKIP_LINK_TEXT: &str = "Skip to main content";

/// Class tokens for visually hidden, screen-reader accessible content
pub const HIDDEN_CLASSES: &[&str] = &["sr-only", "visually-hidden", "screen-reader-only"];

pub struct SkipLinkRule;

impl Rule for SkipLinkRule {
    fn id(&self) -> RuleId {
        RuleId::SkipLink
    }

    fn description(&self) -> &'static str {
        "The first focusable element is a visually hidden \"Skip to main content\" link"
    }

    fn evaluate(&self, markup: &str, sink: &mut dyn DiagnosticSink) -> bool {
        let mut focusable = open_tags(markup, FOCUSABLE);

        let Some(first) = focusable.next() else {
            sink.record(Diagnostic::error(
                self.id(),
                "Skip link missing: document has no focusable elements",
            ));
            return false;
        };

        if is_skip_link(markup, &first) {
            return true;
        }

        let message = match focusable.find(|tag| is_skip_link(markup, tag)) {
            Some(link) => format!(
                "Skip link is not the first focusable element: {} precedes {}",
                first.raw, link.raw
            ),
            None => format!(
                "Skip link missing: first focusable element is {}",
                first.raw
            ),
        };
        sink.record(
            Diagnostic::error(self.id(), message).spanning(markup, first.start, first.end),
        );
        false
    }
}

fn is_skip_link(markup: &str, tag: &Tag<'_>) -> bool {
    tag.is("a")
        && tag
            .attributes()
            .class_tokens()
            .any(|class| HIDDEN_CLASSES.contains(&class))
        && element_content(markup, tag.name, tag.end)
            .is_some_and(|content| content.text.contains(SKIP_LINK_TEXT))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn evaluate(markup: &str) -> (bool, Vec<Diagnostic>) {
        let mut diagnostics: Vec<Diagnostic> = Vec::new();
        let verdict = SkipLinkRule.evaluate(markup, &mut diagnostics);
        (verdict, diagnostics)
    }

    #[test]
    fn test_skip_link_first() {
        let (ok, diagnostics) = evaluate(
            r##"<body><a class="sr-only" href="#main">Skip to main content</a><nav><a href="/">Home</a></nav></body>"##,
        );
        assert!(ok);
        assert!(diagnostics.is_empty());
    }

    #[test]
    fn test_skip_link_after_button() {
        let (ok, diagnostics) = evaluate(
            r##"<button>Menu</button><a class="sr-only" href="#main">Skip to main content</a>"##,
        );
        assert!(!ok);
        assert_eq!(diagnostics.len(), 1);
        assert!(diagnostics[0].message.contains("not the first"));
        assert_eq!(diagnostics[0].fragment.as_deref(), Some("<button>"));
    }

    #[test]
    fn test_no_focusable_elements() {
        let (ok, diagnostics) = evaluate("<main><p>Hello</p></main>");
        assert!(!ok);
        assert_eq!(diagnostics.len(), 1);
    }

    #[test]
    fn test_requires_hidden_class() {
        let (ok, diagnostics) = evaluate(r##"<a href="#main">Skip to main content</a>"##);
        assert!(!ok);
        assert!(diagnostics[0].message.contains("missing"));
    }

    #[test]
    fn test_requires_exact_text() {
        let (ok, _) = evaluate(r##"<a class="sr-only" href="#main">Skip navigation</a>"##);
        assert!(!ok);
    }

    #[test]
    fn test_class_token_not_substring() {
        let (ok, _) =
            evaluate(r##"<a class="not-sr-only" href="#main">Skip to main content</a>"##);
        assert!(!ok);
    }

    #[test]
    fn test_alternate_hidden_class_and_nested_text() {
        let (ok, _) = evaluate(
            r##"<a href="#main" class="link visually-hidden"><span>Skip to main content</span></a><button>Go</button>"##,
        );
        assert!(ok);
    }

    #[test]
    fn test_unclosed_anchor_is_not_skip_link() {
        let (ok, _) = evaluate(r##"<a class="sr-only" href="#main">Skip to main content"##);
        assert!(!ok);
    }
}
