use crate::error::EvalError;
use crate::evaluation::report::ReportSink;
use crate::evaluation::run_summary::RunSummary;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use strum_macros::{Display, EnumString};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, EnumString, Display)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
pub enum SummaryFormat {
    #[default]
    Csv,
    Tsv,
    Json,
}

impl SummaryFormat {
    fn delimiter(self) -> Option<char> {
        match self {
            SummaryFormat::Csv => Some(','),
            SummaryFormat::Tsv => Some('\t'),
            SummaryFormat::Json => None,
        }
    }
}

const COLUMNS: &[&str] = &[
    "k",
    "metric",
    "inverse_weighting",
    "normalize",
    "mean_accuracy",
    "cpu_seconds",
    "trials",
];

/// Every run summary of a session, in the order they were produced.
#[derive(Debug, Clone, Default)]
pub struct SummaryTable {
    summaries: Vec<RunSummary>,
}

impl SummaryTable {
    pub fn push(&mut self, summary: RunSummary) {
        self.summaries.push(summary);
    }

    pub fn len(&self) -> usize {
        self.summaries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.summaries.is_empty()
    }

    /// Highest mean accuracy; the earliest run wins a tie.
    pub fn best(&self) -> Option<&RunSummary> {
        self.summaries.iter().reduce(|best, s| {
            if s.mean_accuracy.total_cmp(&best.mean_accuracy).is_gt() {
                s
            } else {
                best
            }
        })
    }

    pub fn export(&self, path: &Path, format: SummaryFormat) -> Result<(), EvalError> {
        let mut w = BufWriter::new(File::create(path)?);
        self.write_to(&mut w, format)?;
        w.flush()?;
        Ok(())
    }

    pub fn write_to<W: Write>(&self, w: &mut W, format: SummaryFormat) -> Result<(), EvalError> {
        let Some(sep) = format.delimiter() else {
            serde_json::to_writer_pretty(&mut *w, &self.summaries)?;
            writeln!(w)?;
            return Ok(());
        };

        writeln!(w, "{}", COLUMNS.join(&sep.to_string()))?;
        for s in &self.summaries {
            let trials = s
                .trials
                .iter()
                .map(|t| RunSummary::fmtv(t.accuracy))
                .collect::<Vec<_>>()
                .join(";");
            writeln!(
                w,
                "{k}{sep}{metric}{sep}{inv}{sep}{norm}{sep}{mean}{sep}{cpu:.6}{sep}{trials}",
                k = s.config.k,
                metric = s.config.metric,
                inv = s.config.inverse_weighting,
                norm = s.config.normalize,
                mean = RunSummary::fmtv(s.mean_accuracy),
                cpu = s.cpu_seconds,
            )?;
        }
        Ok(())
    }
}

impl From<Vec<RunSummary>> for SummaryTable {
    fn from(summaries: Vec<RunSummary>) -> Self {
        Self { summaries }
    }
}

impl ReportSink for SummaryTable {
    fn report(&mut self, summary: &RunSummary) -> Result<(), EvalError> {
        self.push(summary.clone());
        Ok(())
    }
}
