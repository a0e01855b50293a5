use crate::error::EvalError;
use crate::evaluation::run_summary::RunSummary;
use crate::utils::ansi::{BOLD, DIM, FG_CYAN, FG_GREEN, RESET};
use std::io::{self, Stdout, Write};

/// Receives each run summary as soon as its trials finish.
pub trait ReportSink {
    fn report(&mut self, summary: &RunSummary) -> Result<(), EvalError>;
}

/// Three-line plain-text report per run: configuration, mean accuracy and
/// the per-trial accuracies.
pub struct ConsoleReport<W: Write> {
    out: W,
    styled: bool,
}

impl ConsoleReport<Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> ConsoleReport<W> {
    pub fn new(out: W) -> Self {
        Self { out, styled: false }
    }

    /// Enables ANSI colours.
    pub fn styled(mut self, styled: bool) -> Self {
        self.styled = styled;
        self
    }

    fn paint(&self, style: &str, text: &str) -> String {
        if self.styled {
            format!("{style}{text}{RESET}")
        } else {
            text.to_string()
        }
    }
}

impl<W: Write> ReportSink for ConsoleReport<W> {
    fn report(&mut self, summary: &RunSummary) -> Result<(), EvalError> {
        let trials = summary
            .trials
            .iter()
            .map(|t| RunSummary::fmtv(t.accuracy))
            .collect::<Vec<_>>()
            .join(", ");

        let config_line = self.paint(&format!("{BOLD}{FG_CYAN}"), &summary.config.to_string());
        let mean_line = format!(
            "{} {}",
            self.paint(FG_GREEN, "Average Accuracy:"),
            RunSummary::fmtv(summary.mean_accuracy)
        );
        let trials_line = self.paint(DIM, &format!("[{trials}]"));

        writeln!(self.out, "{config_line}")?;
        writeln!(self.out, "{mean_line}")?;
        writeln!(self.out, "{trials_line}")?;
        writeln!(self.out)?;
        self.out.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classifiers::DistanceMetric;
    use crate::evaluation::TrialResult;
    use crate::tasks::KnnConfig;

    fn summary() -> RunSummary {
        RunSummary::new(
            KnnConfig::new(5, DistanceMetric::Euclidean)
                .with_inverse_weighting(true)
                .with_normalize(true),
            vec![TrialResult::new(22, 25), TrialResult::new(21, 25)],
            0.01,
        )
    }

    #[test]
    fn plain_report_layout() {
        let mut buf = Vec::new();
        ConsoleReport::new(&mut buf).report(&summary()).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert_eq!(
            text,
            "K=5 | Euclidean Distance | InverseScoring: true | Normalization: true\n\
             Average Accuracy: 86.00\n\
             [88.00, 84.00]\n\
             \n"
        );
    }

    #[test]
    fn styled_report_contains_escape_codes() {
        let mut buf = Vec::new();
        ConsoleReport::new(&mut buf)
            .styled(true)
            .report(&summary())
            .unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert!(text.contains(RESET));
        assert!(text.contains("Average Accuracy:"));
    }
}
