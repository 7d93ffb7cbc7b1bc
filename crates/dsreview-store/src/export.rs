//! Statistics export as a `Metric,Value,Category` CSV

use dsreview_core::stats::MetricRow;
use std::path::Path;

use crate::atomic::atomic_write;
use crate::errors::{csv_error, io_error, Result};

pub fn encode_metrics(rows: &[MetricRow]) -> Result<Vec<u8>> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer
        .write_record(["Metric", "Value", "Category"])
        .map_err(|e| csv_error("export_stats", e))?;
    for row in rows {
        writer
            .write_record([&row.metric, &row.value, &row.category])
            .map_err(|e| csv_error("export_stats", e))?;
    }
    writer
        .into_inner()
        .map_err(|e| io_error("export_stats", e.into_error()))
}

/// Write the metric rows to `path`, replacing any previous export
///
/// # Errors
///
/// `Io` when the file cannot be written
pub fn export_metrics(path: &Path, rows: &[MetricRow]) -> Result<()> {
    atomic_write(path, &encode_metrics(rows)?)?;
    tracing::info!(path = %path.display(), rows = rows.len(), "statistics exported");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_written_even_without_rows() {
        let bytes = encode_metrics(&[]).unwrap();
        assert_eq!(String::from_utf8(bytes).unwrap(), "Metric,Value,Category\n");
    }

    #[test]
    fn test_rows_follow_header() {
        let rows = vec![MetricRow {
            metric: "Language: en, us".to_string(),
            value: "3".to_string(),
            category: "Language".to_string(),
        }];
        let text = String::from_utf8(encode_metrics(&rows).unwrap()).unwrap();
        assert_eq!(
            text,
            "Metric,Value,Category\n\"Language: en, us\",3,Language\n"
        );
    }
}
