use std::path::PathBuf;
use std::str::FromStr;

use anyhow::{Context, Result, bail};
use clap::{Args, Parser, Subcommand, ValueHint};

use crate::classifiers::DistanceMetric;
use crate::evaluation::{DEFAULT_TRAIN_FRACTION, SummaryFormat};
use crate::tasks::{DEFAULT_REPETITIONS, KnnConfig, TrialOptions, default_grid, load_grid};

#[derive(Debug, Parser)]
#[command(
    author,
    version,
    about = "Repeated random-holdout evaluation of k-nearest-neighbour classifiers"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Evaluate a single configuration
    Evaluate(EvaluateArgs),
    /// Evaluate a list of configurations (the built-in study grid unless --grid is given)
    Grid(GridArgs),
}

#[derive(Debug, Args)]
pub struct CommonArgs {
    /// CSV file with a header row; every column except the label must be numeric
    #[arg(long, value_name = "PATH", value_hint = ValueHint::FilePath)]
    pub data: PathBuf,

    /// Zero-based index of the label column (omit for the last column)
    #[arg(long, value_name = "INDEX")]
    pub label_column: Option<usize>,

    /// Seed for the holdout shuffles (omit for a random seed)
    #[arg(long, value_name = "SEED")]
    pub seed: Option<u64>,

    /// Holdout trials per configuration
    #[arg(
        long,
        default_value_t = DEFAULT_REPETITIONS as u64,
        value_name = "N",
        value_parser = clap::value_parser!(u64).range(1..),
    )]
    pub repetitions: u64,

    /// Fraction of rows used for training in each trial
    #[arg(
        long,
        default_value_t = DEFAULT_TRAIN_FRACTION,
        value_name = "FRACTION",
        value_parser = parse_fraction,
    )]
    pub train_fraction: f64,

    /// File to dump the run summaries to after completion
    #[arg(long, value_name = "PATH", value_hint = ValueHint::FilePath)]
    pub dump_file: Option<PathBuf>,

    /// Format for the dump file (csv, tsv, json)
    #[arg(long, value_name = "FORMAT")]
    pub dump_format: Option<String>,

    /// Write logs to this directory instead of stderr
    #[arg(long, value_name = "DIR", value_hint = ValueHint::DirPath)]
    pub log_dir: Option<PathBuf>,

    /// Log every trial
    #[arg(short, long)]
    pub verbose: bool,

    /// Disable colours in the report
    #[arg(long)]
    pub no_color: bool,
}

#[derive(Debug, Args)]
pub struct EvaluateArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Number of neighbours
    #[arg(short, long, value_name = "K", value_parser = clap::value_parser!(u64).range(1..))]
    pub k: u64,

    /// Distance metric: manhattan, euclidean, minkowski, or 1-3
    #[arg(short, long, default_value = "euclidean", value_name = "METRIC", value_parser = parse_metric)]
    pub metric: DistanceMetric,

    /// Weight each neighbour's vote by its inverse distance
    #[arg(long)]
    pub inverse_weighting: bool,

    /// Min-max normalise every feature over the whole dataset first
    #[arg(long)]
    pub normalize: bool,
}

#[derive(Debug, Args)]
pub struct GridArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// JSON array of {k, metric, inverse_weighting, normalize} records
    #[arg(long, value_name = "PATH", value_hint = ValueHint::FilePath)]
    pub grid: Option<PathBuf>,
}

/// Everything `main` needs, resolved and validated.
#[derive(Debug, Clone)]
pub struct RunPlan {
    pub data: PathBuf,
    pub label_column: Option<usize>,
    pub seed: Option<u64>,
    pub options: TrialOptions,
    pub configs: Vec<KnnConfig>,
    pub dump_file: Option<PathBuf>,
    pub dump_format: SummaryFormat,
    pub log_dir: Option<PathBuf>,
    pub verbose: bool,
    pub styled: bool,
}

impl Command {
    pub fn into_plan(self) -> Result<RunPlan> {
        match self {
            Command::Evaluate(args) => {
                let config = KnnConfig::new(usize::try_from(args.k)?, args.metric)
                    .with_inverse_weighting(args.inverse_weighting)
                    .with_normalize(args.normalize);
                args.common.into_plan(vec![config])
            }
            Command::Grid(args) => {
                let configs = match &args.grid {
                    Some(path) => load_grid(path)
                        .with_context(|| format!("failed to read grid from {}", path.display()))?,
                    None => default_grid(),
                };
                args.common.into_plan(configs)
            }
        }
    }
}

impl CommonArgs {
    fn into_plan(self, configs: Vec<KnnConfig>) -> Result<RunPlan> {
        let dump_format = match self.dump_format {
            Some(fmt) => SummaryFormat::from_str(fmt.trim())
                .with_context(|| format!("invalid dump format '{fmt}'"))?,
            None => SummaryFormat::default(),
        };

        Ok(RunPlan {
            data: self.data,
            label_column: self.label_column,
            seed: self.seed,
            options: TrialOptions {
                repetitions: usize::try_from(self.repetitions)?,
                train_fraction: self.train_fraction,
            },
            configs,
            dump_file: self.dump_file,
            dump_format,
            log_dir: self.log_dir,
            verbose: self.verbose,
            styled: !self.no_color,
        })
    }
}

fn parse_metric(raw: &str) -> Result<DistanceMetric, String> {
    DistanceMetric::parse_selector(raw).map_err(|e| e.to_string())
}

fn parse_fraction(raw: &str) -> Result<f64, String> {
    let value: f64 = raw
        .trim()
        .parse()
        .map_err(|_| format!("'{raw}' is not a number"))?;
    check_fraction(value).map_err(|e| e.to_string())?;
    Ok(value)
}

fn check_fraction(value: f64) -> Result<()> {
    if !(value > 0.0 && value < 1.0) {
        bail!("train fraction must be strictly between 0 and 1, got {value}");
    }
    Ok(())
}
