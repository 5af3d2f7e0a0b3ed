use std::path::{Path, PathBuf};

use thiserror::Error;

use super::model::RawTable;

// ---------------------------------------------------------------------------
// Load failures
// ---------------------------------------------------------------------------

/// Why the CSV could not be turned into a [`RawTable`].
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("file not found: {}", .0.display())]
    NotFound(PathBuf),
    #[error("data loading error: {0}")]
    ReadFailure(String),
}

// ---------------------------------------------------------------------------
// CSV loader
// ---------------------------------------------------------------------------

/// Read a UTF-8 CSV with a header row into a [`RawTable`].
///
/// Rows shorter than the header are padded with empty cells and longer rows
/// are truncated, so downstream indexing is always in bounds.
pub fn load_csv(path: &Path) -> Result<RawTable, LoadError> {
    if !path.exists() {
        return Err(LoadError::NotFound(path.to_path_buf()));
    }

    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .from_path(path)
        .map_err(|e| LoadError::ReadFailure(e.to_string()))?;

    let headers: Vec<String> = reader
        .headers()
        .map_err(|e| LoadError::ReadFailure(e.to_string()))?
        .iter()
        .map(|h| h.trim().to_string())
        .collect();

    let mut rows = Vec::new();
    for (row_no, result) in reader.records().enumerate() {
        let record = result.map_err(|e| LoadError::ReadFailure(format!("row {row_no}: {e}")))?;
        let mut row: Vec<String> = record
            .iter()
            .take(headers.len())
            .map(str::to_string)
            .collect();
        row.resize(headers.len(), String::new());
        rows.push(row);
    }

    log::info!(
        "loaded {} rows, {} columns from {}",
        rows.len(),
        headers.len(),
        path.display()
    );
    Ok(RawTable { headers, rows })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_temp(name: &str, contents: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!("fitcorr-{}-{name}", std::process::id()));
        std::fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn missing_file_is_not_found() {
        let err = load_csv(Path::new("definitely-not-here.csv")).unwrap_err();
        assert!(matches!(err, LoadError::NotFound(_)));
    }

    #[test]
    fn reads_headers_and_rows() {
        let path = write_temp("basic.csv", "체지방율,BMI\n10,15\n20,25\n");
        let table = load_csv(&path).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(table.headers, vec!["체지방율", "BMI"]);
        assert_eq!(table.len(), 2);
        assert_eq!(table.rows[1], vec!["20", "25"]);
    }

    #[test]
    fn ragged_rows_are_padded_and_truncated() {
        let path = write_temp("ragged.csv", "a,b,c\n1,2\n1,2,3,4\n");
        let table = load_csv(&path).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(table.rows[0], vec!["1", "2", ""]);
        assert_eq!(table.rows[1], vec!["1", "2", "3"]);
    }
}
