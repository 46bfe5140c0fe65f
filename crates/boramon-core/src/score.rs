//! Intensity scoring and risk tiers.
//!
//! One authoritative formula: the score is the matched category's fixed
//! weight, plus one point when the notice went through a direct-award
//! process, clipped to the [0, 10] bound. Nothing in the text beyond which
//! category matched ever moves the score.

use serde::{Deserialize, Serialize};

use crate::normalize::normalize_text;
use crate::rules::{MAX_SCORE, Rule};

/// Direct-award process forms that add the discretion modifier.
const DIRECT_AWARD_FORMS: &[&str] = &[
    "contratacion directa",
    "adjudicacion directa",
    "compra directa",
];

/// Discretion modifier applied on top of the category weight.
const DIRECT_AWARD_MODIFIER: f64 = 1.0;

/// Coarse risk bucket derived from the intensity score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RiskTier {
    Low,
    Medium,
    High,
}

impl RiskTier {
    /// Fixed cut points: score ≥ 8 is High, ≥ 5 Medium, else Low.
    pub fn from_score(score: f64) -> Self {
        if score >= 8.0 {
            Self::High
        } else if score >= 5.0 {
            Self::Medium
        } else {
            Self::Low
        }
    }

    /// Report rendering, matching the historical column values.
    pub fn label(&self) -> &'static str {
        match self {
            Self::High => "Alto",
            Self::Medium => "Medio",
            Self::Low => "Bajo",
        }
    }

    /// Parse a report label back into a tier (compat boundary).
    pub fn parse_label(label: &str) -> Option<Self> {
        match normalize_text(label.trim()).as_str() {
            "alto" => Some(Self::High),
            "medio" => Some(Self::Medium),
            "bajo" => Some(Self::Low),
            _ => None,
        }
    }
}

/// An intensity score with its audit trail.
#[derive(Debug, Clone, PartialEq)]
pub struct Score {
    /// Final value in [0, 10].
    pub valor: f64,
    /// Risk tier at the fixed cut points.
    pub nivel: RiskTier,
    /// Human-readable breakdown (base weight + modifier).
    pub explicacion: String,
}

impl Score {
    /// Score for an unidentified notice: zero, Low, no breakdown.
    pub fn zero() -> Self {
        Self {
            valor: 0.0,
            nivel: RiskTier::Low,
            explicacion: "-".to_string(),
        }
    }
}

/// Score a matched rule.
///
/// `score = clamp(weight + modifier, 0, 10)`; the modifier is +1 only when
/// the collector-reported process type is a direct-award form.
pub fn score(rule: &Rule, process_type: Option<&str>) -> Score {
    let modifier = match process_type {
        Some(pt) if is_direct_award(pt) => DIRECT_AWARD_MODIFIER,
        _ => 0.0,
    };

    let valor = (rule.peso + modifier).clamp(0.0, MAX_SCORE);
    let explicacion = if modifier > 0.0 {
        format!(
            "peso {:.0} + {:.0} (proceso directo)",
            rule.peso, modifier
        )
    } else {
        format!("peso {:.0}", rule.peso)
    };

    Score {
        valor,
        nivel: RiskTier::from_score(valor),
        explicacion,
    }
}

fn is_direct_award(process_type: &str) -> bool {
    let folded = normalize_text(process_type);
    DIRECT_AWARD_FORMS.iter().any(|form| folded.contains(form))
}
