//! CSV/JSON boundary: collected tables in, enriched reports out.
//!
//! Storage layout beyond a single file path is the caller's business; the
//! writer only decides the serialisation of one table.

use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use tracing::{info, warn};

use boramon_core::Notice;

use crate::error::ReportError;
use crate::report::ReportRow;

/// Read a collected-notice table, dispatching on the file extension.
pub fn read_notices(path: &Path) -> Result<Vec<Notice>, ReportError> {
    match extension(path) {
        Some("csv") => read_notices_csv(path),
        Some("json") => read_notices_json(path),
        other => Err(ReportError::UnsupportedFormat(
            other.unwrap_or("").to_string(),
        )),
    }
}

/// Read collected notices from CSV with a header row.
///
/// Missing optional columns come back as defaults; collector header
/// variants ("Fecha", "Detalle", ...) are accepted via serde aliases on
/// [`Notice`].
pub fn read_notices_csv(path: &Path) -> Result<Vec<Notice>, ReportError> {
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .trim(csv::Trim::All)
        .from_path(path)?;

    let mut notices = Vec::new();
    for row in reader.deserialize() {
        let notice: Notice = row?;
        notices.push(notice);
    }
    canonicalize_dates(&mut notices);

    info!(count = notices.len(), path = %path.display(), "collected table loaded");
    Ok(notices)
}

/// Read collected notices from a JSON array.
pub fn read_notices_json(path: &Path) -> Result<Vec<Notice>, ReportError> {
    let file = File::open(path)?;
    let mut notices: Vec<Notice> = serde_json::from_reader(BufReader::new(file))?;
    canonicalize_dates(&mut notices);
    info!(count = notices.len(), path = %path.display(), "collected table loaded");
    Ok(notices)
}

/// Rewrite publication dates to ISO form at the reading boundary.
///
/// Collectors emit both `YYYY-MM-DD` and the compact `YYYYMMDD` file-name
/// form; downstream reports should carry a single spelling. A date that
/// parses as neither is kept as-is and logged, never a batch failure.
fn canonicalize_dates(notices: &mut [Notice]) {
    for notice in notices.iter_mut() {
        match notice.parsed_date() {
            Some(date) => notice.fecha = date.format("%Y-%m-%d").to_string(),
            None if !notice.fecha.trim().is_empty() => {
                warn!(fecha = %notice.fecha, "unparseable publication date kept verbatim");
            }
            None => {}
        }
    }
}

/// Write the enriched report, dispatching on the file extension.
pub fn write_report(path: &Path, rows: &[ReportRow]) -> Result<(), ReportError> {
    match extension(path) {
        Some("csv") => write_report_csv(path, rows),
        Some("json") => write_report_json(path, rows),
        other => Err(ReportError::UnsupportedFormat(
            other.unwrap_or("").to_string(),
        )),
    }
}

/// Write the report as CSV with the fixed column order.
pub fn write_report_csv(path: &Path, rows: &[ReportRow]) -> Result<(), ReportError> {
    let mut writer = csv::Writer::from_path(path)?;
    for row in rows {
        writer.serialize(row)?;
    }
    writer.flush().map_err(ReportError::Io)?;
    info!(count = rows.len(), path = %path.display(), "report written");
    Ok(())
}

/// Write the report as a pretty-printed JSON array.
pub fn write_report_json(path: &Path, rows: &[ReportRow]) -> Result<(), ReportError> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, rows)?;
    writer.write_all(b"\n")?;
    writer.flush()?;
    info!(count = rows.len(), path = %path.display(), "report written");
    Ok(())
}

pub(crate) fn extension(path: &Path) -> Option<&str> {
    path.extension().and_then(|e| e.to_str())
}

#[cfg(test)]
mod tests {
    use super::*;
    use boramon_core::{analyze, taxonomy};

    use crate::report::assemble;

    #[test]
    fn reads_csv_with_missing_optional_columns() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bora.csv");
        std::fs::write(
            &path,
            "fecha,detalle\n2026-01-30,Apruébase el nuevo cuadro tarifario eléctrico.\n",
        )
        .unwrap();

        let notices = read_notices(&path).unwrap();
        assert_eq!(notices.len(), 1);
        assert_eq!(notices[0].fecha, "2026-01-30");
        assert_eq!(notices[0].seccion, "");
        assert_eq!(notices[0].link, "");
    }

    #[test]
    fn reads_collector_header_variants() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bora.csv");
        std::fs::write(
            &path,
            "Fecha,Seccion,Detalle,Link\n20260130,primera,Concesión vial.,https://example.org/1\n",
        )
        .unwrap();

        let notices = read_notices_csv(&path).unwrap();
        assert_eq!(notices[0].seccion, "primera");
        assert_eq!(notices[0].detalle, "Concesión vial.");
        // Compact collector dates come out in ISO form.
        assert_eq!(notices[0].fecha, "2026-01-30");
    }

    #[test]
    fn canonicalizes_compact_dates_in_json_too() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bora.json");
        std::fs::write(
            &path,
            r#"[{"fecha": "20260130", "detalle": "Subsidio a la distribuidora."}]"#,
        )
        .unwrap();

        let notices = read_notices(&path).unwrap();
        assert_eq!(notices[0].fecha, "2026-01-30");
    }

    #[test]
    fn unparseable_date_is_kept_without_failing_the_batch() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bora.csv");
        std::fs::write(
            &path,
            "fecha,detalle\n30/01/2026,Concesión vial.\n,Cuadro tarifario.\n",
        )
        .unwrap();

        let notices = read_notices(&path).unwrap();
        assert_eq!(notices.len(), 2);
        assert_eq!(notices[0].fecha, "30/01/2026");
        assert_eq!(notices[1].fecha, "");
    }

    #[test]
    fn reads_json_array() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bora.json");
        std::fs::write(
            &path,
            r#"[{"fecha": "2026-01-30", "detalle": "Subsidio a la distribuidora."}]"#,
        )
        .unwrap();

        let notices = read_notices(&path).unwrap();
        assert_eq!(notices.len(), 1);
    }

    #[test]
    fn rejects_unknown_extension() {
        let err = read_notices(Path::new("bora.xlsx")).unwrap_err();
        assert!(matches!(err, ReportError::UnsupportedFormat(ext) if ext == "xlsx"));
    }

    #[test]
    fn report_csv_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("bora.csv");
        std::fs::write(
            &input,
            "fecha,seccion,detalle,link\n\
             2026-01-30,primera,Apruébase el nuevo cuadro tarifario eléctrico.,https://example.org/1\n\
             2026-01-30,tercera,Declaración de interés cultural a la obra de teatro local.,https://example.org/2\n",
        )
        .unwrap();

        let rs = taxonomy::builtin();
        let notices = read_notices(&input).unwrap();
        let rows = assemble(&analyze(&rs, &notices));

        let out = dir.path().join("reporte.csv");
        write_report(&out, &rows).unwrap();

        let loaded = crate::compat::load_report(&out).unwrap();
        assert_eq!(loaded.len(), 2);
        assert_eq!(loaded[0].tipo_decision, "Tarifas Servicios Públicos");
        assert_eq!(loaded[1].tipo_decision, boramon_core::UNIDENTIFIED);
    }

    #[test]
    fn empty_table_writes_empty_report() {
        let dir = tempfile::tempdir().unwrap();
        let rs = taxonomy::builtin();
        let rows = assemble(&analyze(&rs, &[]));

        let out = dir.path().join("reporte.json");
        write_report(&out, &rows).unwrap();

        let text = std::fs::read_to_string(&out).unwrap();
        assert_eq!(text.trim(), "[]");
    }
}
