//! Text normalisation for keyword matching.
//!
//! Gazette text arrives with inconsistent casing and Spanish diacritics
//! ("Concesión", "CONCESION", "concesion" must all match the same rule).
//! Matching therefore runs over a folded form: lower-cased, NFD-decomposed,
//! combining marks stripped.

use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

/// Fold a raw text into its matching form.
///
/// Lower-cases, decomposes to NFD, and drops combining marks, so
/// "Privatización" becomes "privatizacion". Total: any input produces a
/// valid (possibly empty) output, never an error.
pub fn normalize_text(text: &str) -> String {
    text.nfd()
        .filter(|c| !is_combining_mark(*c))
        .collect::<String>()
        .to_lowercase()
}

/// Fold an optional field, treating a missing value as empty text.
///
/// Collector output sometimes lacks the detail column entirely; the engine
/// normalises that to "" rather than failing the batch.
pub fn normalize_opt(text: Option<&str>) -> String {
    text.map(normalize_text).unwrap_or_default()
}
