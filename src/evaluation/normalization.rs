use crate::core::Dataset;
use crate::error::EvalError;

/// Min-max rescaling of every feature column to `[0, 1]`.
///
/// Column bounds come from the whole dataset passed to [`fit`], so every
/// later holdout split sees the same scale. A constant column has no range
/// and is mapped to `0.0`.
///
/// [`fit`]: MinMaxNormalizer::fit
#[derive(Debug, Clone, PartialEq)]
pub struct MinMaxNormalizer {
    ranges: Vec<(f64, f64)>,
}

impl MinMaxNormalizer {
    pub fn fit(dataset: &Dataset) -> Self {
        Self {
            ranges: dataset.column_ranges(),
        }
    }

    pub fn constant_columns(&self) -> Vec<usize> {
        self.ranges
            .iter()
            .enumerate()
            .filter(|(_, (min, max))| max == min)
            .map(|(i, _)| i)
            .collect()
    }

    #[inline]
    pub fn scale(&self, column: usize, value: f64) -> f64 {
        let (min, max) = self.ranges[column];
        let range = max - min;
        if range > 0.0 {
            (value - min) / range
        } else {
            0.0
        }
    }

    pub fn transform(&self, dataset: &Dataset) -> Result<Dataset, EvalError> {
        if dataset.number_of_features() != self.ranges.len() {
            return Err(EvalError::invalid_input(format!(
                "normalizer fitted on {} columns, dataset has {}",
                self.ranges.len(),
                dataset.number_of_features()
            )));
        }

        for column in self.constant_columns() {
            ftlog::warn!(
                "feature '{}' is constant; normalising it to 0",
                dataset.header().feature_at_index(column).unwrap_or("?")
            );
        }

        let rows = dataset
            .rows()
            .iter()
            .map(|row| {
                row.iter()
                    .enumerate()
                    .map(|(j, &v)| self.scale(j, v))
                    .collect()
            })
            .collect();
        dataset.with_rows(rows)
    }
}

pub fn normalize(dataset: &Dataset) -> Result<Dataset, EvalError> {
    MinMaxNormalizer::fit(dataset).transform(dataset)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ds(rows: Vec<Vec<f64>>) -> Dataset {
        let labels = (0..rows.len()).map(|i| format!("c{}", i % 2)).collect();
        Dataset::from_rows(rows, labels).unwrap()
    }

    #[test]
    fn rescales_each_column_to_unit_interval() {
        let data = ds(vec![vec![2.0, -1.0], vec![4.0, 1.0], vec![3.0, 0.0]]);
        let out = normalize(&data).unwrap();
        assert_eq!(out.rows(), &[vec![0.0, 0.0], vec![1.0, 1.0], vec![0.5, 0.5]]);
        assert_eq!(out.labels(), data.labels());
    }

    #[test]
    fn constant_column_maps_to_zero() {
        let data = ds(vec![vec![7.0, 1.0], vec![7.0, 3.0]]);
        let norm = MinMaxNormalizer::fit(&data);
        assert_eq!(norm.constant_columns(), vec![0]);
        let out = norm.transform(&data).unwrap();
        for row in out.rows() {
            assert_eq!(row[0], 0.0);
            assert!(row.iter().all(|v| v.is_finite()));
        }
    }

    #[test]
    fn bounds_come_from_the_fitted_dataset() {
        let full = ds(vec![vec![0.0], vec![10.0]]);
        let norm = MinMaxNormalizer::fit(&full);
        assert_eq!(norm.scale(0, 2.5), 0.25);
        assert_eq!(norm.scale(0, 10.0), 1.0);
        assert_eq!(norm.scale(0, 20.0), 2.0);
    }

    #[test]
    fn transform_rejects_width_mismatch() {
        let norm = MinMaxNormalizer::fit(&ds(vec![vec![0.0], vec![1.0]]));
        let other = ds(vec![vec![0.0, 1.0], vec![1.0, 2.0]]);
        assert!(matches!(
            norm.transform(&other),
            Err(EvalError::InvalidInput(_))
        ));
    }
}
