//! Aggregate statistics over an enriched report.
//!
//! These back the console report and the dashboard headline metrics:
//! how many notices, how many matched a scenario, how the risk mass is
//! distributed, and which categories and sections dominate.

use std::collections::HashMap;

use boramon_core::RiskTier;

use crate::report::ReportRow;

/// Headline metrics plus per-category and per-section breakdowns.
#[derive(Debug, Clone)]
pub struct Summary {
    /// Total rows in the report.
    pub total: usize,
    /// Rows with a real category (not the sentinel).
    pub detectados: usize,
    /// Mean score over all rows; `None` for an empty report.
    pub indice_promedio: Option<f64>,
    /// Rows in the High tier.
    pub riesgo_alto: usize,
    /// Rows flagged for human review.
    pub a_revisar: usize,
    /// Category → count, descending by count then name (stable listing).
    pub por_categoria: Vec<(String, usize)>,
    /// Section → count, same ordering.
    pub por_seccion: Vec<(String, usize)>,
    /// Tier → count for the three tiers, High first.
    pub por_riesgo: Vec<(RiskTier, usize)>,
}

impl Summary {
    /// Compute the summary for a report table. Empty input yields an empty
    /// summary, never an error.
    pub fn compute(rows: &[ReportRow]) -> Self {
        let total = rows.len();
        let detectados = rows.iter().filter(|r| r.is_identified()).count();

        let indice_promedio = if total == 0 {
            None
        } else {
            let sum: f64 = rows.iter().map(|r| r.indice_fenomeno_corruptivo).sum();
            Some(sum / total as f64)
        };

        let a_revisar = rows
            .iter()
            .filter(|r| r.auditoria.starts_with("REVISAR"))
            .count();

        let por_categoria = counted(rows.iter().map(|r| r.tipo_decision.as_str()));
        let por_seccion = counted(
            rows.iter()
                .map(|r| r.seccion.as_str())
                .filter(|s| !s.is_empty()),
        );

        let (mut alto, mut medio, mut bajo) = (0, 0, 0);
        for row in rows {
            match row_tier(row) {
                RiskTier::High => alto += 1,
                RiskTier::Medium => medio += 1,
                RiskTier::Low => bajo += 1,
            }
        }
        let por_riesgo = vec![
            (RiskTier::High, alto),
            (RiskTier::Medium, medio),
            (RiskTier::Low, bajo),
        ];
        let riesgo_alto = alto;

        Summary {
            total,
            detectados,
            indice_promedio,
            riesgo_alto,
            a_revisar,
            por_categoria,
            por_seccion,
            por_riesgo,
        }
    }

    /// Top `n` categories by count.
    pub fn top_categorias(&self, n: usize) -> &[(String, usize)] {
        &self.por_categoria[..self.por_categoria.len().min(n)]
    }
}

/// Tier of one row, tolerant of legacy label spellings. A label that does
/// not parse at all falls back to the score, like the compat refill.
fn row_tier(row: &ReportRow) -> RiskTier {
    RiskTier::parse_label(&row.nivel_riesgo_teorico)
        .unwrap_or_else(|| RiskTier::from_score(row.indice_fenomeno_corruptivo))
}

/// Count occurrences and sort descending by count, then by name for a
/// deterministic listing.
fn counted<'a>(values: impl Iterator<Item = &'a str>) -> Vec<(String, usize)> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for v in values {
        *counts.entry(v).or_default() += 1;
    }
    let mut out: Vec<(String, usize)> = counts
        .into_iter()
        .map(|(k, v)| (k.to_string(), v))
        .collect();
    out.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    out
}
