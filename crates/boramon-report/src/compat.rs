//! Legacy report compatibility.
//!
//! Earlier generations of the monitor wrote the same table under shifting
//! column names (`origen`, `indice_total`, `nivel_riesgo`) and sometimes on
//! a 0–100 scale. The mapping lives here, at the report-reading boundary;
//! the core engine only ever speaks the current schema.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use tracing::info;

use boramon_core::RiskTier;

use crate::error::ReportError;
use crate::report::ReportRow;

/// Load a previously written report, old or new schema.
///
/// Header renames are handled by serde aliases on [`ReportRow`]; this adds
/// the two normalisations aliases cannot express: rescaling 0–100 scores
/// down to the 0–10 bound, and refilling a missing risk-tier column from
/// the score.
pub fn load_report(path: &Path) -> Result<Vec<ReportRow>, ReportError> {
    let mut rows = match crate::io::extension(path) {
        Some("json") => {
            let file = File::open(path)?;
            serde_json::from_reader::<_, Vec<ReportRow>>(BufReader::new(file))?
        }
        Some("csv") => {
            let mut reader = csv::ReaderBuilder::new()
                .flexible(true)
                .trim(csv::Trim::All)
                .from_path(path)?;
            let mut rows = Vec::new();
            for row in reader.deserialize() {
                rows.push(row?);
            }
            rows
        }
        other => {
            return Err(ReportError::UnsupportedFormat(
                other.unwrap_or("").to_string(),
            ));
        }
    };

    normalize_scale(&mut rows);
    refill_risk_tiers(&mut rows);

    info!(count = rows.len(), path = %path.display(), "report loaded");
    Ok(rows)
}

/// Rescale a 0–100 report to the 0–10 bound, rounded to one decimal.
///
/// Applied to the whole table at once: a single score above 10 means the
/// file predates the bounded scale.
pub fn normalize_scale(rows: &mut [ReportRow]) {
    let legacy_scale = rows
        .iter()
        .any(|r| r.indice_fenomeno_corruptivo > 10.0);
    if !legacy_scale {
        return;
    }

    for row in rows.iter_mut() {
        let scaled = row.indice_fenomeno_corruptivo / 10.0;
        row.indice_fenomeno_corruptivo = (scaled * 10.0).round() / 10.0;
    }
}

/// Derive the risk-tier column from the score wherever it is blank.
pub fn refill_risk_tiers(rows: &mut [ReportRow]) {
    for row in rows.iter_mut() {
        if RiskTier::parse_label(&row.nivel_riesgo_teorico).is_none() {
            row.nivel_riesgo_teorico = RiskTier::from_score(row.indice_fenomeno_corruptivo)
                .label()
                .to_string();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_csv(dir: &tempfile::TempDir, name: &str, content: &str) -> std::path::PathBuf {
        let path = dir.path().join(name);
        std::fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn loads_legacy_headers() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_csv(
            &dir,
            "viejo.csv",
            "fecha,tipo_decision,origen,indice_total,nivel_riesgo,detalle,link\n\
             2025-11-02,Tarifas Servicios Públicos,Consumidores → Empresas,8,Alto,Cuadro tarifario.,https://x/1\n",
        );

        let rows = load_report(&path).unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].transferencia, "Consumidores → Empresas");
        assert_eq!(rows[0].indice_fenomeno_corruptivo, 8.0);
        assert_eq!(rows[0].nivel_riesgo_teorico, "Alto");
    }

    #[test]
    fn rescales_percent_scale_reports() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_csv(
            &dir,
            "porcentual.csv",
            "fecha,tipo_decision,indice_total,detalle\n\
             2025-11-02,Privatización / Concesión,85,Concesión vial.\n\
             2025-11-02,Subsidios / Exenciones,60,Subsidio.\n",
        );

        let rows = load_report(&path).unwrap();
        assert_eq!(rows[0].indice_fenomeno_corruptivo, 8.5);
        assert_eq!(rows[1].indice_fenomeno_corruptivo, 6.0);
        // Tier column was absent; refilled from the rescaled score.
        assert_eq!(rows[0].nivel_riesgo_teorico, "Alto");
        assert_eq!(rows[1].nivel_riesgo_teorico, "Medio");
    }

    #[test]
    fn bounded_scale_left_untouched() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_csv(
            &dir,
            "actual.csv",
            "fecha,tipo_decision,indice_fenomeno_corruptivo,nivel_riesgo_teorico,detalle\n\
             2026-01-30,Deuda / Fideicomisos,6,Medio,Fideicomiso.\n",
        );

        let rows = load_report(&path).unwrap();
        assert_eq!(rows[0].indice_fenomeno_corruptivo, 6.0);
        assert_eq!(rows[0].nivel_riesgo_teorico, "Medio");
    }

    #[test]
    fn rejects_unknown_extension() {
        let err = load_report(std::path::Path::new("reporte.xlsx")).unwrap_err();
        assert!(matches!(err, ReportError::UnsupportedFormat(ext) if ext == "xlsx"));
    }

    #[test]
    fn blank_score_cell_degrades_to_zero() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_csv(
            &dir,
            "roto.csv",
            "fecha,tipo_decision,indice_total,detalle\n\
             2025-11-02,No identificado,,Texto.\n",
        );

        let rows = load_report(&path).unwrap();
        assert_eq!(rows[0].indice_fenomeno_corruptivo, 0.0);
        assert_eq!(rows[0].nivel_riesgo_teorico, "Bajo");
    }
}
