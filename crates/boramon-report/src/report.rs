//! Report assembly: the fixed, ordered column set handed to external
//! writers.
//!
//! The assembler copies out of the analysed batch; it never mutates the
//! rule table or the collected rows. Column names keep the historical
//! Spanish headers so existing dashboards keep reading the output.

use serde::{Deserialize, Serialize};

use boramon_core::engine::AnalyzedNotice;

/// Report columns, in output order. Must stay in sync with [`ReportRow`]'s
/// field order; serde serialises struct fields positionally into CSV.
pub const COLUMNS: &[&str] = &[
    "fecha",
    "seccion",
    "tipo_decision",
    "transferencia",
    "origen_transferencia",
    "destino_transferencia",
    "mecanismo",
    "indice_fenomeno_corruptivo",
    "nivel_riesgo_teorico",
    "palabra_detectada",
    "auditoria",
    "explicacion_indice",
    "detalle",
    "link",
];

/// One enriched report row.
///
/// Deserialisation accepts the legacy header spellings (`origen`,
/// `indice_total`, `nivel_riesgo`) so old reports load without a separate
/// migration step; see [`crate::compat`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportRow {
    #[serde(default)]
    pub fecha: String,
    #[serde(default)]
    pub seccion: String,
    #[serde(default)]
    pub tipo_decision: String,
    #[serde(default, alias = "origen")]
    pub transferencia: String,
    #[serde(default)]
    pub origen_transferencia: String,
    #[serde(default)]
    pub destino_transferencia: String,
    #[serde(default)]
    pub mecanismo: String,
    #[serde(
        default,
        alias = "indice_total",
        deserialize_with = "lenient_score"
    )]
    pub indice_fenomeno_corruptivo: f64,
    #[serde(default, alias = "nivel_riesgo")]
    pub nivel_riesgo_teorico: String,
    #[serde(default)]
    pub palabra_detectada: String,
    #[serde(default)]
    pub auditoria: String,
    #[serde(default)]
    pub explicacion_indice: String,
    #[serde(default)]
    pub detalle: String,
    #[serde(default)]
    pub link: String,
}

impl ReportRow {
    /// Whether this row carries a real category (not the sentinel).
    pub fn is_identified(&self) -> bool {
        !self.tipo_decision.is_empty() && self.tipo_decision != boramon_core::UNIDENTIFIED
    }
}

impl From<&AnalyzedNotice> for ReportRow {
    fn from(a: &AnalyzedNotice) -> Self {
        let n = &a.notice;
        let c = &a.classification;
        let (origen, destino, transferencia) = match &c.transferencia {
            Some(t) => (t.origen.clone(), t.destino.clone(), t.label()),
            None => (String::new(), String::new(), "-".to_string()),
        };

        ReportRow {
            fecha: n.fecha.clone(),
            seccion: n.seccion.clone(),
            tipo_decision: c.categoria.clone(),
            transferencia,
            origen_transferencia: origen,
            destino_transferencia: destino,
            mecanismo: c.mecanismo.clone().unwrap_or_else(|| "-".to_string()),
            indice_fenomeno_corruptivo: c.indice.valor,
            nivel_riesgo_teorico: c.indice.nivel.label().to_string(),
            palabra_detectada: c.evidencia.label().to_string(),
            auditoria: c.auditoria.label(),
            explicacion_indice: c.indice.explicacion.clone(),
            detalle: n.detalle.clone(),
            link: n.link.clone(),
        }
    }
}

/// Score cells in old spreadsheets are sometimes blank or locale-formatted;
/// a malformed cell degrades to 0.0 instead of failing the whole load.
fn lenient_score<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: serde::Deserializer<'de>,
{
    struct ScoreVisitor;

    impl serde::de::Visitor<'_> for ScoreVisitor {
        type Value = f64;

        fn expecting(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
            f.write_str("a number or numeric string")
        }

        fn visit_f64<E: serde::de::Error>(self, v: f64) -> Result<f64, E> {
            Ok(v)
        }

        fn visit_i64<E: serde::de::Error>(self, v: i64) -> Result<f64, E> {
            Ok(v as f64)
        }

        fn visit_u64<E: serde::de::Error>(self, v: u64) -> Result<f64, E> {
            Ok(v as f64)
        }

        fn visit_str<E: serde::de::Error>(self, v: &str) -> Result<f64, E> {
            Ok(v.trim().replace(',', ".").parse().unwrap_or(0.0))
        }

        fn visit_unit<E: serde::de::Error>(self) -> Result<f64, E> {
            Ok(0.0)
        }
    }

    deserializer.deserialize_any(ScoreVisitor)
}

/// Assemble the enriched table for external serialisation.
pub fn assemble(analyzed: &[AnalyzedNotice]) -> Vec<ReportRow> {
    analyzed.iter().map(ReportRow::from).collect()
}
