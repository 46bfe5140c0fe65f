//! Keyword suggestions for the rule curator.
//!
//! Whatever the dictionary ignored lands in the unidentified bucket. This
//! module counts which content words repeat there, so a human can decide
//! whether a new rule keyword is warranted. Purely advisory: nothing here
//! touches classification.

use std::collections::HashMap;

use boramon_core::normalize_text;

use crate::report::ReportRow;

/// Connector words skipped during frequency counting, pre-normalised.
/// Gazette boilerplate ("resolucion", "visto", "considerando") counts as a
/// stopword too.
const STOPWORDS: &[&str] = &[
    "el", "la", "los", "las", "un", "una", "unos", "unas", "de", "del", "al", "a", "en", "y", "o",
    "que", "se", "por", "con", "para", "su", "sus", "es", "son", "fue", "boletin", "oficial",
    "resolucion", "decreto", "ley", "articulo", "fecha", "visto", "considerando", "nacional",
    "ministerio",
];

/// Tokens this short are connectors or abbreviations, never keyword
/// candidates.
const MIN_TOKEN_LEN: usize = 5;

/// One candidate keyword with its frequency among unidentified notices.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeywordSuggestion {
    pub palabra: String,
    pub frecuencia: usize,
}

/// Count content words over the unidentified rows and return the top `n`.
///
/// Ties break alphabetically so the listing is deterministic.
pub fn suggest_keywords(rows: &[ReportRow], n: usize) -> Vec<KeywordSuggestion> {
    let mut counts: HashMap<String, usize> = HashMap::new();

    for row in rows.iter().filter(|r| !r.is_identified()) {
        let folded = normalize_text(&row.detalle);
        for token in folded.split_whitespace() {
            let word = token.trim_matches(|c: char| c.is_ascii_punctuation());
            if word.len() >= MIN_TOKEN_LEN && !STOPWORDS.contains(&word) {
                *counts.entry(word.to_string()).or_default() += 1;
            }
        }
    }

    let mut out: Vec<KeywordSuggestion> = counts
        .into_iter()
        .map(|(palabra, frecuencia)| KeywordSuggestion {
            palabra,
            frecuencia,
        })
        .collect();
    out.sort_by(|a, b| {
        b.frecuencia
            .cmp(&a.frecuencia)
            .then_with(|| a.palabra.cmp(&b.palabra))
    });
    out.truncate(n);
    out
}
