use crate::error::EvalError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use strum_macros::{Display, EnumIter, EnumString};

/// Minkowski-family distance with a fixed exponent `p`:
/// `(Σ|aᵢ − bᵢ|^p)^(1/p)`.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    EnumIter,
    EnumString,
    Display,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
pub enum DistanceMetric {
    #[strum(to_string = "manhattan", serialize = "1")]
    Manhattan,
    #[default]
    #[strum(to_string = "euclidean", serialize = "2")]
    Euclidean,
    #[strum(to_string = "minkowski", serialize = "3")]
    Minkowski,
}

impl DistanceMetric {
    pub fn from_exponent(p: u64) -> Result<Self, EvalError> {
        match p {
            1 => Ok(DistanceMetric::Manhattan),
            2 => Ok(DistanceMetric::Euclidean),
            3 => Ok(DistanceMetric::Minkowski),
            other => Err(EvalError::invalid_config(format!(
                "unknown distance metric selector {other}, expected 1-3"
            ))),
        }
    }

    /// Accepts `1|2|3` or a metric name, case-insensitively.
    pub fn parse_selector(raw: &str) -> Result<Self, EvalError> {
        DistanceMetric::from_str(raw.trim()).map_err(|_| {
            EvalError::invalid_config(format!(
                "unknown distance metric '{raw}', expected manhattan, euclidean, minkowski or 1-3"
            ))
        })
    }

    /// Human-readable name used in reports.
    pub fn label(self) -> &'static str {
        match self {
            DistanceMetric::Manhattan => "Manhattan Distance",
            DistanceMetric::Euclidean => "Euclidean Distance",
            DistanceMetric::Minkowski => "Minkowski Distance",
        }
    }

    /// Both slices must have the same length.
    pub fn distance(self, a: &[f64], b: &[f64]) -> f64 {
        debug_assert_eq!(a.len(), b.len());
        let diffs = a.iter().zip(b).map(|(x, y)| (x - y).abs());
        match self {
            DistanceMetric::Manhattan => diffs.sum(),
            DistanceMetric::Euclidean => diffs.map(|d| d * d).sum::<f64>().sqrt(),
            DistanceMetric::Minkowski => diffs.map(|d| d * d * d).sum::<f64>().cbrt(),
        }
    }
}

/// A metric as written in a configuration file: the exponent, the name,
/// or anything else, which is rejected when resolved.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub(crate) enum MetricSelector {
    Exponent(u64),
    Name(String),
    Other(serde_json::Value),
}

impl MetricSelector {
    pub(crate) fn resolve(self) -> Result<DistanceMetric, EvalError> {
        match self {
            MetricSelector::Exponent(p) => DistanceMetric::from_exponent(p),
            MetricSelector::Name(name) => DistanceMetric::parse_selector(&name),
            MetricSelector::Other(value) => Err(EvalError::invalid_config(format!(
                "unknown distance metric selector {value}, expected a name or 1-3"
            ))),
        }
    }
}
