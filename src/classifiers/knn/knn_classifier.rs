use crate::classifiers::classifier::Classifier;
use crate::classifiers::knn::distance::DistanceMetric;
use crate::classifiers::knn::vote_tally::{VoteTally, VoteWeighting};
use crate::error::EvalError;

/// Predicts the label of `query` from its `k` nearest rows in
/// `training_rows`.
///
/// Neighbours are the first `k` rows after a stable sort by distance, so
/// equally distant rows keep their training order. The tally is seeded
/// with every training label before voting. Under inverse weighting an
/// exact match decides the vote; see [`VoteTally::winner`] for the full
/// ordering.
///
/// # Errors
///
/// - `InvalidInput` if the training set is empty, rows and labels differ in
///   count, or a row's width differs from the query's.
/// - `InvalidConfig` if `k` is zero or larger than the training set.
pub fn classify(
    training_rows: &[Vec<f64>],
    training_labels: &[String],
    query: &[f64],
    k: usize,
    metric: DistanceMetric,
    weighting: VoteWeighting,
) -> Result<String, EvalError> {
    let tally = tally_votes(training_rows, training_labels, query, k, metric, weighting)?;
    tally
        .winner()
        .map(str::to_string)
        .ok_or_else(|| EvalError::invalid_input("no labels to vote for"))
}

/// The tally behind [`classify`].
pub fn tally_votes<'a>(
    training_rows: &[Vec<f64>],
    training_labels: &'a [String],
    query: &[f64],
    k: usize,
    metric: DistanceMetric,
    weighting: VoteWeighting,
) -> Result<VoteTally<'a>, EvalError> {
    check_training_set(training_rows, training_labels, k)?;
    if let Some(i) = training_rows.iter().position(|r| r.len() != query.len()) {
        return Err(EvalError::invalid_input(format!(
            "training row {i} has {} features but the query has {}",
            training_rows[i].len(),
            query.len()
        )));
    }

    let mut by_distance: Vec<(f64, usize)> = training_rows
        .iter()
        .enumerate()
        .map(|(i, row)| (metric.distance(query, row), i))
        .collect();
    // `sort_by` is stable: equal distances keep training order.
    by_distance.sort_by(|(a, _), (b, _)| a.total_cmp(b));

    let mut tally = VoteTally::seeded(training_labels.iter().map(String::as_str));
    for &(d, i) in by_distance.iter().take(k) {
        tally.vote(&training_labels[i], d, weighting);
    }
    Ok(tally)
}

fn check_training_set(rows: &[Vec<f64>], labels: &[String], k: usize) -> Result<(), EvalError> {
    if rows.is_empty() {
        return Err(EvalError::invalid_input("training set is empty"));
    }
    if rows.len() != labels.len() {
        return Err(EvalError::invalid_input(format!(
            "{} training rows but {} labels",
            rows.len(),
            labels.len()
        )));
    }
    if k == 0 || k > rows.len() {
        return Err(EvalError::invalid_config(format!(
            "k must be in [1, {}], got {k}",
            rows.len()
        )));
    }
    Ok(())
}

/// k-nearest-neighbour classifier. Training just stores the rows; every
/// prediction scans all of them.
#[derive(Debug, Clone)]
pub struct KnnClassifier {
    k: usize,
    metric: DistanceMetric,
    weighting: VoteWeighting,
    rows: Vec<Vec<f64>>,
    labels: Vec<String>,
}

impl KnnClassifier {
    pub fn new(k: usize, metric: DistanceMetric, weighting: VoteWeighting) -> Result<Self, EvalError> {
        if k == 0 {
            return Err(EvalError::invalid_config("k must be at least 1"));
        }
        Ok(Self {
            k,
            metric,
            weighting,
            rows: Vec::new(),
            labels: Vec::new(),
        })
    }
}

impl Classifier for KnnClassifier {
    fn train(&mut self, rows: &[Vec<f64>], labels: &[String]) -> Result<(), EvalError> {
        check_training_set(rows, labels, self.k)?;
        self.rows = rows.to_vec();
        self.labels = labels.to_vec();
        Ok(())
    }

    fn predict(&self, query: &[f64]) -> Result<String, EvalError> {
        classify(
            &self.rows,
            &self.labels,
            query,
            self.k,
            self.metric,
            self.weighting,
        )
    }

    fn min_training_size(&self) -> usize {
        self.k
    }
}
