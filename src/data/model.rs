// ---------------------------------------------------------------------------
// RawTable – the CSV exactly as loaded, all cells kept as text
// ---------------------------------------------------------------------------

/// The source table as read from disk: header row plus string cells.
#[derive(Debug, Clone)]
pub struct RawTable {
    /// Column names from the first CSV row, in file order.
    pub headers: Vec<String>,
    /// Row-major cells; every row has exactly `headers.len()` entries.
    pub rows: Vec<Vec<String>>,
}

impl RawTable {
    /// Number of data rows (the header does not count).
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the table has no data rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Index of a named column, if present.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == name)
    }

    /// The first `n` rows, for preview tables.
    pub fn head(&self, n: usize) -> &[Vec<String>] {
        &self.rows[..self.rows.len().min(n)]
    }
}

// ---------------------------------------------------------------------------
// NumericTable – dense feature matrix after preprocessing
// ---------------------------------------------------------------------------

/// Column-major numeric matrix. Invariant: every value is finite and every
/// column holds exactly `n_rows()` entries.
#[derive(Debug, Clone)]
pub struct NumericTable {
    /// Surviving feature names, in allow-list order.
    pub columns: Vec<String>,
    /// `values[c][r]` is row `r` of column `c`.
    pub values: Vec<Vec<f64>>,
}

impl NumericTable {
    pub fn n_rows(&self) -> usize {
        self.values.first().map_or(0, Vec::len)
    }

    /// Whether any feature column survived preprocessing.
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// The values of a named column, if present.
    pub fn column(&self, name: &str) -> Option<&[f64]> {
        let idx = self.columns.iter().position(|c| c == name)?;
        Some(&self.values[idx])
    }

    /// The first `n` rows in row-major order, for the preview table.
    pub fn head(&self, n: usize) -> Vec<Vec<f64>> {
        let take = self.n_rows().min(n);
        (0..take)
            .map(|r| self.values.iter().map(|col| col[r]).collect())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> NumericTable {
        NumericTable {
            columns: vec!["a".to_string(), "b".to_string()],
            values: vec![vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]],
        }
    }

    #[test]
    fn head_transposes_to_rows() {
        let table = sample();
        assert_eq!(table.head(2), vec![vec![1.0, 4.0], vec![2.0, 5.0]]);
    }

    #[test]
    fn head_is_clamped_to_row_count() {
        let table = sample();
        assert_eq!(table.head(10).len(), 3);
    }

    #[test]
    fn column_lookup_by_name() {
        let table = sample();
        assert_eq!(table.column("b"), Some(&[4.0, 5.0, 6.0][..]));
        assert_eq!(table.column("missing"), None);
        assert_eq!(table.n_rows(), 3);
    }

    #[test]
    fn raw_table_column_index() {
        let raw = RawTable {
            headers: vec!["id".to_string(), "체지방율".to_string()],
            rows: vec![],
        };
        assert_eq!(raw.column_index("체지방율"), Some(1));
        assert_eq!(raw.column_index("BMI"), None);
        assert!(raw.is_empty());
    }
}
