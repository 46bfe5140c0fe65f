//! Collected gazette notice, as handed over by the external collector.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One scraped record from an official-gazette or procurement portal.
///
/// Immutable once collected. Every field except `date` is optional at the
/// boundary: a collector that drops a column must not break the analysis
/// batch, so missing values default to empty.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Notice {
    /// Publication date, ISO 8601 (`YYYY-MM-DD`). Defaulted when the
    /// collector drops the column; an enriched row then carries an empty
    /// date rather than failing the batch.
    #[serde(default, alias = "Fecha")]
    pub fecha: String,
    /// Gazette section the notice was published under.
    #[serde(default, alias = "Seccion")]
    pub seccion: String,
    /// Raw notice text used for classification.
    #[serde(default, alias = "Detalle")]
    pub detalle: String,
    /// Canonical URL of the notice.
    #[serde(default, alias = "Link")]
    pub link: String,
    /// Process type pre-assigned by the collector, when it knows one
    /// (e.g. "contratación directa"). Empty when absent.
    #[serde(default, alias = "tipo_decision")]
    pub tipo_proceso: String,
}

impl Notice {
    /// The process type, if the collector supplied a meaningful one.
    pub fn process_type(&self) -> Option<&str> {
        let t = self.tipo_proceso.trim();
        if t.is_empty() { None } else { Some(t) }
    }

    /// Parse the publication date.
    ///
    /// Collectors have emitted both `YYYY-MM-DD` and the compact `YYYYMMDD`
    /// file-name form; an unparseable date is `None`, never an error.
    pub fn parsed_date(&self) -> Option<NaiveDate> {
        let raw = self.fecha.trim();
        NaiveDate::parse_from_str(raw, "%Y-%m-%d")
            .or_else(|_| NaiveDate::parse_from_str(raw, "%Y%m%d"))
            .ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_with_missing_optional_columns() {
        let json = r#"{"fecha": "2026-01-30"}"#;
        let notice: Notice = serde_json::from_str(json).unwrap();
        assert_eq!(notice.fecha, "2026-01-30");
        assert_eq!(notice.detalle, "");
        assert_eq!(notice.link, "");
        assert!(notice.process_type().is_none());
    }

    #[test]
    fn accepts_legacy_collector_headers() {
        let json = r#"{"Fecha": "2026-01-30", "Seccion": "primera", "Detalle": "texto", "Link": "http://x"}"#;
        let notice: Notice = serde_json::from_str(json).unwrap();
        assert_eq!(notice.seccion, "primera");
        assert_eq!(notice.detalle, "texto");
    }

    #[test]
    fn parses_both_date_forms() {
        let mut notice: Notice = serde_json::from_str(r#"{"fecha": "2026-01-30"}"#).unwrap();
        let expected = NaiveDate::from_ymd_opt(2026, 1, 30).unwrap();
        assert_eq!(notice.parsed_date(), Some(expected));

        notice.fecha = "20260130".to_string();
        assert_eq!(notice.parsed_date(), Some(expected));

        notice.fecha = "30/01/2026".to_string();
        assert_eq!(notice.parsed_date(), None);
    }

    #[test]
    fn blank_process_type_is_none() {
        let json = r#"{"fecha": "2026-01-30", "tipo_proceso": "  "}"#;
        let notice: Notice = serde_json::from_str(json).unwrap();
        assert!(notice.process_type().is_none());
    }
}
