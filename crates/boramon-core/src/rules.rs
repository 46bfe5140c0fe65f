//! The rule taxonomy: ordered categories, keyword sets, transfer directions
//! and weights.
//!
//! The table is an ordered sequence, not a map: when a text matches keywords
//! from several categories, the earliest entry in the table wins. That order
//! is a deliberate priority, so it is part of the data, never an iteration
//! accident.

use serde::{Deserialize, Serialize};

use crate::error::RuleSetError;
use crate::normalize::normalize_text;

/// Terminal category for notices no rule matched. Always a valid outcome,
/// never an error.
pub const UNIDENTIFIED: &str = "No identificado";

/// Upper bound of the intensity scale (scores and weights live in [0, 10]).
pub const MAX_SCORE: f64 = 10.0;

/// Economic-sector pair for a category: who pays, who benefits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransferDirection {
    /// Sector that bears the cost (e.g. "Jubilados").
    pub origen: String,
    /// Sector that captures the income (e.g. "Estado").
    pub destino: String,
}

impl TransferDirection {
    pub fn new(origen: &str, destino: &str) -> Self {
        Self {
            origen: origen.to_string(),
            destino: destino.to_string(),
        }
    }

    /// Render as the single-column form used in reports: "Jubilados → Estado".
    pub fn label(&self) -> String {
        format!("{} → {}", self.origen, self.destino)
    }
}

/// One taxonomy entry: a category with its trigger keywords.
///
/// Keywords are stored pre-normalised (lower-case, unaccented); matching is
/// plain substring search with no word-boundary check, so multi-word phrases
/// like "obra publica" are the only guard against collisions such as
/// "obra de teatro".
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Rule {
    /// Category name as it appears in reports.
    pub categoria: String,
    /// Trigger keywords, in audit-priority order: the first one found in a
    /// text is the one reported as evidence.
    pub palabras: Vec<String>,
    /// Payer → beneficiary pair for this scenario.
    pub transferencia: TransferDirection,
    /// Short label for the transfer mechanism behind the scenario.
    pub mecanismo: String,
    /// Fixed intensity weight in [0, 10]. A table constant, never derived
    /// from text.
    pub peso: f64,
}

impl Rule {
    /// First keyword of this rule found in the normalised text, if any.
    pub fn first_hit<'a>(&'a self, normalized_text: &str) -> Option<&'a str> {
        self.palabras
            .iter()
            .map(String::as_str)
            .find(|kw| normalized_text.contains(kw))
    }
}

/// The full taxonomy plus the audit-trigger vocabulary.
///
/// Built once, shared read-only across all classification calls; nothing in
/// the engine mutates it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RuleSet {
    /// Ordered rules; earlier entries take priority on multi-category hits.
    pub reglas: Vec<Rule>,
    /// Red-flag vocabulary scanned over unidentified notices (money,
    /// transfers, budget lines). Pre-normalised like rule keywords; an
    /// externalised file may omit it, which disables the audit scan.
    #[serde(default)]
    pub disparadores_auditoria: Vec<String>,
}

impl RuleSet {
    /// Validate and seal a rule set.
    ///
    /// Rejects empty tables, duplicate categories, empty or blank keyword
    /// lists, and weights outside the intensity bound. Keywords and audit
    /// triggers are re-normalised here so a hand-edited file with accents
    /// still matches.
    pub fn new(
        reglas: Vec<Rule>,
        disparadores_auditoria: Vec<String>,
    ) -> Result<Self, RuleSetError> {
        if reglas.is_empty() {
            return Err(RuleSetError::Empty);
        }

        let mut seen = std::collections::HashSet::new();
        for rule in &reglas {
            if !seen.insert(rule.categoria.clone()) {
                return Err(RuleSetError::DuplicateCategory(rule.categoria.clone()));
            }
            if rule.palabras.is_empty() {
                return Err(RuleSetError::EmptyKeywords(rule.categoria.clone()));
            }
            for (index, kw) in rule.palabras.iter().enumerate() {
                if kw.trim().is_empty() {
                    return Err(RuleSetError::BlankKeyword {
                        category: rule.categoria.clone(),
                        index,
                    });
                }
            }
            if !(0.0..=MAX_SCORE).contains(&rule.peso) {
                return Err(RuleSetError::WeightOutOfRange {
                    category: rule.categoria.clone(),
                    weight: rule.peso,
                    max: MAX_SCORE,
                });
            }
        }

        let reglas = reglas
            .into_iter()
            .map(|mut rule| {
                for kw in &mut rule.palabras {
                    *kw = normalize_text(kw.trim());
                }
                rule
            })
            .collect();

        let disparadores_auditoria = disparadores_auditoria
            .iter()
            .map(|w| normalize_text(w.trim()))
            .filter(|w| !w.is_empty())
            .collect();

        Ok(Self {
            reglas,
            disparadores_auditoria,
        })
    }

    /// Load an externalised taxonomy from JSON text.
    pub fn from_json(json: &str) -> Result<Self, RuleSetError> {
        let raw: RuleSet = serde_json::from_str(json)?;
        Self::new(raw.reglas, raw.disparadores_auditoria)
    }

    /// Look up a rule by category name (exact match).
    pub fn by_category(&self, categoria: &str) -> Option<&Rule> {
        self.reglas.iter().find(|r| r.categoria == categoria)
    }

    /// Look up a rule whose normalised category name equals the given
    /// normalised text. Used for collector-assigned process types.
    pub fn by_normalized_category(&self, normalized: &str) -> Option<&Rule> {
        self.reglas
            .iter()
            .find(|r| normalize_text(&r.categoria) == normalized)
    }

    pub fn len(&self) -> usize {
        self.reglas.len()
    }

    pub fn is_empty(&self) -> bool {
        self.reglas.is_empty()
    }
}
