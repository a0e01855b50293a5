use crate::core::Dataset;
use crate::error::EvalError;
use rand::Rng;
use rand::seq::SliceRandom;

pub const DEFAULT_TRAIN_FRACTION: f64 = 0.75;

/// One random training/testing partition of a dataset.
///
/// `training_indices` and `testing_indices` are positions in the source
/// dataset, listed in shuffled order; the row and label vectors follow the
/// same order.
#[derive(Debug, Clone)]
pub struct Split {
    pub training_indices: Vec<usize>,
    pub testing_indices: Vec<usize>,
    pub training_rows: Vec<Vec<f64>>,
    pub training_labels: Vec<String>,
    pub testing_rows: Vec<Vec<f64>>,
    pub testing_labels: Vec<String>,
}

impl Split {
    pub fn testing_len(&self) -> usize {
        self.testing_indices.len()
    }
}

/// Randomised holdout: shuffle the row indices, the first
/// `floor(train_fraction * n)` go to training and the rest to testing.
#[derive(Debug, Clone, Copy)]
pub struct HoldoutSplitter {
    train_fraction: f64,
}

impl Default for HoldoutSplitter {
    fn default() -> Self {
        Self {
            train_fraction: DEFAULT_TRAIN_FRACTION,
        }
    }
}

impl HoldoutSplitter {
    pub fn new(train_fraction: f64) -> Result<Self, EvalError> {
        if !(train_fraction > 0.0 && train_fraction < 1.0) {
            return Err(EvalError::invalid_config(format!(
                "train fraction must be strictly between 0 and 1, got {train_fraction}"
            )));
        }
        Ok(Self { train_fraction })
    }

    pub fn training_size(&self, n: usize) -> usize {
        (self.train_fraction * n as f64).floor() as usize
    }

    /// Training size for `n` rows, provided both partitions are non-empty.
    pub fn check_splittable(&self, n: usize) -> Result<usize, EvalError> {
        let cutoff = self.training_size(n);
        if cutoff == 0 || cutoff >= n {
            return Err(EvalError::invalid_input(format!(
                "{n} rows cannot be split {:.0}/{:.0} into non-empty training and testing sets",
                self.train_fraction * 100.0,
                (1.0 - self.train_fraction) * 100.0
            )));
        }
        Ok(cutoff)
    }

    pub fn split<R: Rng + ?Sized>(&self, dataset: &Dataset, rng: &mut R) -> Result<Split, EvalError> {
        let n = dataset.len();
        let cutoff = self.check_splittable(n)?;

        let mut permutation: Vec<usize> = (0..n).collect();
        permutation.shuffle(rng);
        let testing_indices = permutation.split_off(cutoff);
        let training_indices = permutation;

        let rows = dataset.rows();
        let labels = dataset.labels();
        let gather_rows =
            |idx: &[usize]| -> Vec<Vec<f64>> { idx.iter().map(|&i| rows[i].clone()).collect() };
        let gather_labels =
            |idx: &[usize]| -> Vec<String> { idx.iter().map(|&i| labels[i].clone()).collect() };

        Ok(Split {
            training_rows: gather_rows(&training_indices),
            training_labels: gather_labels(&training_indices),
            testing_rows: gather_rows(&testing_indices),
            testing_labels: gather_labels(&testing_indices),
            training_indices,
            testing_indices,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn dataset(n: usize) -> Dataset {
        let rows = (0..n).map(|i| vec![i as f64, -(i as f64)]).collect();
        let labels = (0..n).map(|i| format!("L{i}")).collect();
        Dataset::from_rows(rows, labels).unwrap()
    }

    #[test]
    fn partitions_cover_every_index_once() {
        let mut rng = StdRng::seed_from_u64(7);
        for n in [2, 3, 4, 10, 33, 100] {
            let ds = dataset(n);
            let split = HoldoutSplitter::default().split(&ds, &mut rng).unwrap();
            assert_eq!(split.training_indices.len() + split.testing_len(), n);
            assert_eq!(split.training_indices.len(), (0.75 * n as f64) as usize);

            let mut all: Vec<usize> = split
                .training_indices
                .iter()
                .chain(&split.testing_indices)
                .copied()
                .collect();
            all.sort_unstable();
            assert_eq!(all, (0..n).collect::<Vec<_>>());
        }
    }

    #[test]
    fn rows_and_labels_stay_paired() {
        let ds = dataset(40);
        let mut rng = StdRng::seed_from_u64(11);
        let split = HoldoutSplitter::default().split(&ds, &mut rng).unwrap();
        for (pos, &i) in split.training_indices.iter().enumerate() {
            assert_eq!(split.training_rows[pos], ds.rows()[i]);
            assert_eq!(split.training_labels[pos], format!("L{i}"));
        }
        for (pos, &i) in split.testing_indices.iter().enumerate() {
            assert_eq!(split.testing_rows[pos][0], i as f64);
            assert_eq!(split.testing_labels[pos], format!("L{i}"));
        }
    }

    #[test]
    fn same_seed_same_split_and_fresh_calls_differ() {
        let ds = dataset(50);
        let splitter = HoldoutSplitter::default();

        let a = splitter.split(&ds, &mut StdRng::seed_from_u64(3)).unwrap();
        let b = splitter.split(&ds, &mut StdRng::seed_from_u64(3)).unwrap();
        assert_eq!(a.training_indices, b.training_indices);

        let mut rng = StdRng::seed_from_u64(3);
        let first = splitter.split(&ds, &mut rng).unwrap();
        let second = splitter.split(&ds, &mut rng).unwrap();
        assert_ne!(first.training_indices, second.training_indices);
    }

    #[test]
    fn custom_fraction_truncates() {
        let splitter = HoldoutSplitter::new(0.5).unwrap();
        let split = splitter
            .split(&dataset(7), &mut StdRng::seed_from_u64(1))
            .unwrap();
        assert_eq!(split.training_indices.len(), 3);
        assert_eq!(split.testing_len(), 4);
    }

    #[test]
    fn too_small_to_split_is_invalid_input() {
        let mut rng = StdRng::seed_from_u64(0);
        let err = HoldoutSplitter::default()
            .split(&dataset(1), &mut rng)
            .unwrap_err();
        assert!(matches!(err, EvalError::InvalidInput(_)));

        let err = HoldoutSplitter::new(0.1)
            .unwrap()
            .split(&dataset(5), &mut rng)
            .unwrap_err();
        assert!(matches!(err, EvalError::InvalidInput(_)));
    }

    #[test]
    fn rejects_fraction_outside_open_unit_interval() {
        for f in [0.0, 1.0, -0.2, 1.5, f64::NAN] {
            assert!(matches!(
                HoldoutSplitter::new(f),
                Err(EvalError::InvalidConfig(_))
            ));
        }
    }
}
