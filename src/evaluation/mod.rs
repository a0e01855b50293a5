mod holdout;
mod normalization;
mod report;
mod run_summary;
mod summary_table;

pub use holdout::{DEFAULT_TRAIN_FRACTION, HoldoutSplitter, Split};
pub use normalization::{MinMaxNormalizer, normalize};
pub use report::{ConsoleReport, ReportSink};
pub use run_summary::{RunSummary, TrialResult};
pub use summary_table::{SummaryFormat, SummaryTable};
