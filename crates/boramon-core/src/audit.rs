//! Advisory review flags for unidentified notices.
//!
//! A notice that matched no rule but still talks about money, transfers or
//! budget lines is a likely false negative. The auditor surfaces the first
//! trigger word it finds so a human can review the dictionary; it never
//! reclassifies anything.

use crate::normalize::normalize_text;
use crate::rules::RuleSet;

/// Review state attached to every analysed notice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuditStatus {
    /// Nothing to review.
    Ok,
    /// Unidentified notice containing red-flag vocabulary; names the first
    /// trigger word found.
    NeedsReview(String),
}

impl AuditStatus {
    /// Report rendering: "OK" or "REVISAR: <palabra>".
    pub fn label(&self) -> String {
        match self {
            AuditStatus::Ok => "OK".to_string(),
            AuditStatus::NeedsReview(word) => format!("REVISAR: {word}"),
        }
    }

    pub fn needs_review(&self) -> bool {
        matches!(self, AuditStatus::NeedsReview(_))
    }
}

/// Scan an unidentified notice's text against the audit-trigger list.
///
/// Trigger order in the rule set decides which word is reported when
/// several appear. Classified notices never reach this scan.
pub fn audit_unidentified(rules: &RuleSet, text: &str) -> AuditStatus {
    let folded = normalize_text(text);
    match rules
        .disparadores_auditoria
        .iter()
        .find(|w| folded.contains(w.as_str()))
    {
        Some(word) => AuditStatus::NeedsReview(word.clone()),
        None => AuditStatus::Ok,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::taxonomy;

    #[test]
    fn flags_money_vocabulary() {
        let rs = taxonomy::builtin();
        let status = audit_unidentified(
            &rs,
            "Asígnase una partida presupuestaria extraordinaria al organismo.",
        );
        assert_eq!(
            status,
            AuditStatus::NeedsReview("partida presupuestaria".to_string())
        );
        assert_eq!(status.label(), "REVISAR: partida presupuestaria");
    }

    #[test]
    fn reports_first_trigger_in_list_order() {
        let rs = taxonomy::builtin();
        // Text contains "millones", "pesos" and "monto"; "millones" comes
        // first in the trigger list.
        let status = audit_unidentified(&rs, "El monto asciende a dos millones de pesos.");
        assert_eq!(status, AuditStatus::NeedsReview("millones".to_string()));
    }

    #[test]
    fn clean_text_is_ok() {
        let rs = taxonomy::builtin();
        let status = audit_unidentified(
            &rs,
            "Declaración de interés cultural a la obra de teatro local.",
        );
        assert_eq!(status, AuditStatus::Ok);
        assert!(!status.needs_review());
    }

    #[test]
    fn accent_insensitive_triggers() {
        let rs = taxonomy::builtin();
        let status = audit_unidentified(&rs, "Erogación prevista para el ejercicio.");
        assert_eq!(status, AuditStatus::NeedsReview("erogacion".to_string()));
    }
}
