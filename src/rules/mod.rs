//! Focus Rules
//!
//! Each rule is an independent predicate over the raw markup. A rule
//! returns its verdict and reports every violation it finds to the sink;
//! a rule that finds nothing to inspect passes unless it says otherwise.

pub mod focus_indicator;
pub mod focus_order;
pub mod focus_trap;
pub mod keyboard;
pub mod skip_link;

use std::fmt;
use std::str::FromStr;

use anyhow::bail;
use serde::{Deserialize, Serialize};

use crate::core::DiagnosticSink;
use crate::scanner::TagSet;

pub use focus_indicator::FocusIndicatorRule;
pub use focus_order::FocusOrderRule;
pub use focus_trap::FocusTrapRule;
pub use keyboard::KeyboardAccessibleRule;
pub use skip_link::SkipLinkRule;

/// Elements that take keyboard focus natively
pub const FOCUSABLE: TagSet = TagSet(&["a", "button", "input", "select", "textarea"]);

/// A single keyboard-focus check
pub trait Rule: Send + Sync {
    fn id(&self) -> RuleId;

    /// Short description of what this rule checks
    fn description(&self) -> &'static str;

    /// Evaluate the rule over `markup`, recording each violation in `sink`
    fn evaluate(&self, markup: &str, sink: &mut dyn DiagnosticSink) -> bool;
}

/// Identifier of a built-in rule.
///
/// Variants are declared in evaluation order; sorting a list of ids puts
/// it in that order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RuleId {
    SkipLink,
    FocusIndicator,
    KeyboardAccessible,
    FocusOrder,
    FocusTrap,
}

impl RuleId {
    pub const ALL: [RuleId; 5] = [
        RuleId::SkipLink,
        RuleId::FocusIndicator,
        RuleId::KeyboardAccessible,
        RuleId::FocusOrder,
        RuleId::FocusTrap,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            RuleId::SkipLink => "skip-link",
            RuleId::FocusIndicator => "focus-indicator",
            RuleId::KeyboardAccessible => "keyboard-accessible",
            RuleId::FocusOrder => "focus-order",
            RuleId::FocusTrap => "focus-trap",
        }
    }

    /// Short description of the rule this id names
    pub fn description(self) -> &'static str {
        self.rule().description()
    }

    /// Build the rule this id names
    pub fn rule(self) -> Box<dyn Rule> {
        match self {
            RuleId::SkipLink => Box::new(SkipLinkRule),
            RuleId::FocusIndicator => Box::new(FocusIndicatorRule),
            RuleId::KeyboardAccessible => Box::new(KeyboardAccessibleRule),
            RuleId::FocusOrder => Box::new(FocusOrderRule),
            RuleId::FocusTrap => Box::new(FocusTrapRule),
        }
    }
}

impl fmt::Display for RuleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RuleId {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        match RuleId::ALL
            .into_iter()
            .find(|id| id.as_str().eq_ignore_ascii_case(name))
        {
            Some(id) => Ok(id),
            None => bail!(
                "unknown rule '{}' (expected one of: {})",
                name,
                RuleId::ALL.map(|id| id.as_str()).join(", ")
            ),
        }
    }
}

/// The built-in rules in evaluation order
pub fn default_rules() -> Vec<Box<dyn Rule>> {
    RuleId::ALL.into_iter().map(RuleId::rule).collect()
}
