//! Batch engine: the pure per-record pipeline over a collected table.
//!
//! normalise → classify → score → audit, repeated over the batch in
//! collector order. No I/O, no state, no retries; an empty input is an
//! empty output, not an error.

use tracing::debug;

use crate::audit::{AuditStatus, audit_unidentified};
use crate::classify::{Evidence, classify};
use crate::notice::Notice;
use crate::rules::{RuleSet, TransferDirection, UNIDENTIFIED};
use crate::score::{Score, score};

/// Derived classification attached to one notice.
#[derive(Debug, Clone)]
pub struct Classification {
    /// A rule-table category, or [`UNIDENTIFIED`].
    pub categoria: String,
    /// Transfer direction of the matched category; `None` when unidentified.
    pub transferencia: Option<TransferDirection>,
    /// Mechanism label of the matched category; `None` when unidentified.
    pub mecanismo: Option<String>,
    /// Intensity score with tier and breakdown.
    pub indice: Score,
    /// Keyword (or sentinel) that produced the category.
    pub evidencia: Evidence,
    /// Advisory review flag.
    pub auditoria: AuditStatus,
}

impl Classification {
    pub fn is_identified(&self) -> bool {
        self.categoria != UNIDENTIFIED
    }
}

/// One notice together with its derived classification.
#[derive(Debug, Clone)]
pub struct AnalyzedNotice {
    pub notice: Notice,
    pub classification: Classification,
}

/// Classify, score and audit a single notice.
pub fn analyze_one(rules: &RuleSet, notice: &Notice) -> Classification {
    match classify(rules, &notice.detalle, notice.process_type()) {
        Some((rule, evidencia)) => Classification {
            categoria: rule.categoria.clone(),
            transferencia: Some(rule.transferencia.clone()),
            mecanismo: Some(rule.mecanismo.clone()),
            indice: score(rule, notice.process_type()),
            evidencia,
            auditoria: AuditStatus::Ok,
        },
        None => Classification {
            categoria: UNIDENTIFIED.to_string(),
            transferencia: None,
            mecanismo: None,
            indice: Score::zero(),
            evidencia: Evidence::None,
            auditoria: audit_unidentified(rules, &notice.detalle),
        },
    }
}

/// Run the pipeline over a whole collected batch, preserving input order.
pub fn analyze(rules: &RuleSet, notices: &[Notice]) -> Vec<AnalyzedNotice> {
    let analyzed: Vec<AnalyzedNotice> = notices
        .iter()
        .map(|notice| AnalyzedNotice {
            notice: notice.clone(),
            classification: analyze_one(rules, notice),
        })
        .collect();

    let identified = analyzed
        .iter()
        .filter(|a| a.classification.is_identified())
        .count();
    let flagged = analyzed
        .iter()
        .filter(|a| a.classification.auditoria.needs_review())
        .count();
    debug!(
        total = analyzed.len(),
        identified, flagged, "batch analysis complete"
    );

    analyzed
}
