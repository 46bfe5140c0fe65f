//! First-match-wins keyword classification.

use crate::normalize::normalize_text;
use crate::rules::{Rule, RuleSet};

/// What tied a notice to its category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Evidence {
    /// A rule keyword literally present in the folded text.
    Keyword(String),
    /// Category adopted from the collector's process type; no keyword hit.
    Implicit,
    /// No category at all (unidentified notices).
    None,
}

impl Evidence {
    /// Report rendering: the keyword itself, "implícita", or "-".
    pub fn label(&self) -> &str {
        match self {
            Evidence::Keyword(kw) => kw,
            Evidence::Implicit => "implícita",
            Evidence::None => "-",
        }
    }
}

/// Outcome of classifying one text: the winning rule and its evidence, or
/// nothing.
pub type Outcome<'r> = Option<(&'r Rule, Evidence)>;

/// Classify a raw text against the rule table.
///
/// Scans rules in table order and returns the first whose keyword set has a
/// substring hit in the folded text; the hit keyword becomes the evidence.
/// When no keyword fires but the collector pre-assigned a process type that
/// names a rule category, that category is adopted with implicit evidence.
/// `None` means unidentified, a valid terminal state.
pub fn classify<'r>(rules: &'r RuleSet, text: &str, process_type: Option<&str>) -> Outcome<'r> {
    let folded = normalize_text(text);

    for rule in &rules.reglas {
        if let Some(kw) = rule.first_hit(&folded) {
            return Some((rule, Evidence::Keyword(kw.to_string())));
        }
    }

    if let Some(pt) = process_type
        && let Some(rule) = rules.by_normalized_category(&normalize_text(pt))
    {
        return Some((rule, Evidence::Implicit));
    }

    None
}
