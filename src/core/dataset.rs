use crate::core::dataset_header::DatasetHeader;
use crate::error::EvalError;
use std::sync::Arc;

/// Feature rows paired positionally with their labels.
///
/// Every row has `header.number_of_features()` finite values and there is
/// exactly one label per row. A `Dataset` is never mutated after
/// construction; transformations such as normalisation produce a new one.
#[derive(Debug, Clone)]
pub struct Dataset {
    header: Arc<DatasetHeader>,
    rows: Vec<Vec<f64>>,
    labels: Vec<String>,
}

impl Dataset {
    pub fn new(
        header: Arc<DatasetHeader>,
        rows: Vec<Vec<f64>>,
        labels: Vec<String>,
    ) -> Result<Self, EvalError> {
        if rows.is_empty() {
            return Err(EvalError::invalid_input("dataset has no rows"));
        }
        if rows.len() != labels.len() {
            return Err(EvalError::invalid_input(format!(
                "{} rows but {} labels",
                rows.len(),
                labels.len()
            )));
        }

        let width = header.number_of_features();
        if width == 0 {
            return Err(EvalError::invalid_input("dataset has no feature columns"));
        }
        for (i, row) in rows.iter().enumerate() {
            if row.len() != width {
                return Err(EvalError::invalid_input(format!(
                    "row {i} has {} values, expected {width}",
                    row.len()
                )));
            }
            if let Some(j) = row.iter().position(|v| !v.is_finite()) {
                return Err(EvalError::invalid_input(format!(
                    "row {i}, column {j} is not a finite number"
                )));
            }
        }

        Ok(Self {
            header,
            rows,
            labels,
        })
    }

    /// Builds a dataset with an anonymous header sized from the first row.
    pub fn from_rows(rows: Vec<Vec<f64>>, labels: Vec<String>) -> Result<Self, EvalError> {
        let width = rows.first().map(Vec::len).unwrap_or(0);
        Self::new(Arc::new(DatasetHeader::anonymous(width)), rows, labels)
    }

    pub fn header(&self) -> &DatasetHeader {
        &self.header
    }

    pub fn header_arc(&self) -> Arc<DatasetHeader> {
        Arc::clone(&self.header)
    }

    pub fn rows(&self) -> &[Vec<f64>] {
        &self.rows
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn number_of_features(&self) -> usize {
        self.header.number_of_features()
    }

    /// Per-column `(min, max)` over every row.
    pub fn column_ranges(&self) -> Vec<(f64, f64)> {
        let mut ranges = vec![(f64::INFINITY, f64::NEG_INFINITY); self.number_of_features()];
        for row in &self.rows {
            for (range, &v) in ranges.iter_mut().zip(row) {
                range.0 = range.0.min(v);
                range.1 = range.1.max(v);
            }
        }
        ranges
    }

    /// Same header and labels, new feature values.
    pub(crate) fn with_rows(&self, rows: Vec<Vec<f64>>) -> Result<Self, EvalError> {
        Self::new(self.header_arc(), rows, self.labels.clone())
    }
}

pub fn parse_feature_value(raw: &str, line: usize, column: usize) -> Result<f64, EvalError> {
    let trimmed = raw.trim();
    match trimmed.parse::<f64>() {
        Ok(v) if v.is_finite() => Ok(v),
        _ => Err(EvalError::Parse {
            line,
            column,
            value: trimmed.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels(v: &[&str]) -> Vec<String> {
        v.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn rejects_mismatched_label_count() {
        let err = Dataset::from_rows(vec![vec![1.0], vec![2.0]], labels(&["a"])).unwrap_err();
        assert!(matches!(err, EvalError::InvalidInput(_)));
    }

    #[test]
    fn rejects_ragged_rows() {
        let err = Dataset::from_rows(vec![vec![1.0, 2.0], vec![3.0]], labels(&["a", "b"]))
            .unwrap_err();
        assert!(matches!(err, EvalError::InvalidInput(_)));
    }

    #[test]
    fn rejects_empty_dataset() {
        let err = Dataset::from_rows(Vec::new(), Vec::new()).unwrap_err();
        assert!(matches!(err, EvalError::InvalidInput(_)));
    }

    #[test]
    fn rejects_non_finite_values() {
        let err = Dataset::from_rows(vec![vec![f64::NAN]], labels(&["a"])).unwrap_err();
        assert!(matches!(err, EvalError::InvalidInput(_)));
    }

    #[test]
    fn parse_feature_value_rejects_nan_and_inf_text() {
        assert!(parse_feature_value("NaN", 1, 0).is_err());
        assert!(parse_feature_value("inf", 1, 0).is_err());
        assert_eq!(parse_feature_value(" -0.33 ", 1, 0).unwrap(), -0.33);
    }

    #[test]
    fn column_ranges_cover_all_rows() {
        let ds = Dataset::from_rows(
            vec![vec![0.0, 5.0], vec![-1.0, 5.0], vec![3.0, 5.0]],
            labels(&["a", "b", "c"]),
        )
        .unwrap();
        assert_eq!(ds.column_ranges(), vec![(-1.0, 3.0), (5.0, 5.0)]);
    }
}
