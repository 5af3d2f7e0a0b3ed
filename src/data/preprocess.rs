use super::model::{NumericTable, RawTable};

// ---------------------------------------------------------------------------
// Feature schema
// ---------------------------------------------------------------------------

/// Measurement columns eligible for correlation analysis, in presentation
/// order. Anything else in the export is ignored.
pub const FEATURE_COLUMNS: [&str; 14] = [
    "신장",
    "체중",
    "체지방율",
    "허리둘레",
    "이완기혈압_최저",
    "수축기혈압_최고",
    "악력_좌",
    "악력_우",
    "윗몸말아올리기",
    "제자리 멀리뛰기",
    "BMI",
    "상대악력",
    "허리둘레-신장비",
    "반복옆뛰기",
];

/// The analysis target: body-fat percentage.
pub const TARGET_COLUMN: &str = "체지방율";

// ---------------------------------------------------------------------------
// Projection, coercion, imputation
// ---------------------------------------------------------------------------

/// Project the raw table onto [`FEATURE_COLUMNS`], coerce cells to `f64` and
/// mean-impute the gaps.
///
/// Cells that do not parse as a finite number count as missing and take the
/// column mean; a column with no parseable cell at all becomes all zeros so
/// the correlation matrix stays NaN-free. Allow-listed columns absent from
/// the input are skipped.
pub fn preprocess(raw: &RawTable) -> NumericTable {
    let mut columns = Vec::new();
    let mut values = Vec::new();

    for &name in FEATURE_COLUMNS.iter() {
        let Some(idx) = raw.column_index(name) else {
            log::warn!("measurement column '{name}' missing from input, skipping");
            continue;
        };

        let mut column: Vec<f64> = raw.rows.iter().map(|row| coerce(&row[idx])).collect();
        impute_mean(&mut column);

        columns.push(name.to_string());
        values.push(column);
    }

    NumericTable { columns, values }
}

/// Parse one cell; anything that is not a finite number is missing.
fn coerce(cell: &str) -> f64 {
    match cell.trim().parse::<f64>() {
        Ok(v) if v.is_finite() => v,
        _ => f64::NAN,
    }
}

/// Replace NaN with the mean of the non-missing cells, or 0.0 when the whole
/// column is missing.
fn impute_mean(column: &mut [f64]) {
    let (sum, count) = column
        .iter()
        .filter(|v| !v.is_nan())
        .fold((0.0, 0usize), |(s, c), v| (s + v, c + 1));

    let fill = if count == 0 { 0.0 } else { sum / count as f64 };
    for v in column.iter_mut() {
        if v.is_nan() {
            *v = fill;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(headers: &[&str], rows: &[&[&str]]) -> RawTable {
        RawTable {
            headers: headers.iter().map(|s| s.to_string()).collect(),
            rows: rows
                .iter()
                .map(|row| row.iter().map(|s| s.to_string()).collect())
                .collect(),
        }
    }

    #[test]
    fn output_is_always_finite() {
        let raw = table(
            &["체지방율", "BMI", "악력_좌"],
            &[
                &["10", "abc", "1e999"],
                &["", "25", "-3.5"],
                &["30", "  35 ", "nope"],
            ],
        );
        let numeric = preprocess(&raw);

        assert_eq!(numeric.n_rows(), 3);
        for col in &numeric.values {
            assert!(col.iter().all(|v| v.is_finite()));
        }
    }

    #[test]
    fn columns_follow_allow_list_order() {
        // Raw order deliberately scrambled and padded with unknown columns.
        let raw = table(
            &["BMI", "id", "체지방율", "성별", "신장"],
            &[&["20", "1", "15", "M", "170"]],
        );
        let numeric = preprocess(&raw);

        assert_eq!(numeric.columns, vec!["신장", "체지방율", "BMI"]);
    }

    #[test]
    fn missing_cells_take_the_column_mean() {
        let raw = table(
            &["체지방율", "BMI"],
            &[&["10", "15"], &["20", ""], &["30", "35"]],
        );
        let numeric = preprocess(&raw);

        assert_eq!(numeric.column("BMI"), Some(&[15.0, 25.0, 35.0][..]));
    }

    #[test]
    fn all_missing_column_becomes_zeros() {
        let raw = table(&["체지방율", "BMI"], &[&["10", "x"], &["20", ""]]);
        let numeric = preprocess(&raw);

        assert_eq!(numeric.column("BMI"), Some(&[0.0, 0.0][..]));
    }

    #[test]
    fn no_allow_listed_columns_yields_empty_table() {
        let raw = table(&["id", "name"], &[&["1", "kim"]]);
        let numeric = preprocess(&raw);

        assert!(numeric.is_empty());
        assert_eq!(numeric.n_rows(), 0);
    }

    #[test]
    fn row_count_is_preserved() {
        let rows: Vec<Vec<String>> = (0..17).map(|i| vec![format!("{i}")]).collect();
        let raw = RawTable {
            headers: vec!["체중".to_string()],
            rows,
        };
        assert_eq!(preprocess(&raw).n_rows(), 17);
    }
}
