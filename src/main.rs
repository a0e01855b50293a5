use anyhow::{Context, Result, anyhow};
use clap::Parser;
use ftlog::LevelFilter;
use rand::SeedableRng;
use rand::rngs::StdRng;

use holdout_knn::evaluation::{ConsoleReport, SummaryTable};
use holdout_knn::sources::{CsvFileSource, DataSource};
use holdout_knn::tasks::run_grid;
use holdout_knn::ui::cli::args::Cli;
use holdout_knn::utils::ansi::{BOLD, DIM, FG_CYAN, FG_GREEN, FG_GREY, RESET};
use holdout_knn::utils::logging::configure_logger;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let plan = cli.command.into_plan()?;

    let level = if plan.verbose {
        LevelFilter::Debug
    } else if plan.log_dir.is_some() {
        LevelFilter::Info
    } else {
        LevelFilter::Warn
    };
    let (_guard, log_path) = configure_logger("holdout-knn", plan.log_dir.as_deref(), level)
        .map_err(|e| anyhow!(e))
        .context("failed to configure logger")?;

    let dataset = CsvFileSource::new(plan.data.clone(), plan.label_column)
        .load()
        .with_context(|| format!("failed to load {}", plan.data.display()))?;

    let mut rng = match plan.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    let header: Vec<String> = vec![
        format!("{BOLD}{FG_CYAN}▶ Holdout kNN Evaluation{RESET}"),
        format!(
            "{DIM}data={} ({}, label={}){RESET}  {DIM}rows={} features={}{RESET}  {DIM}configs={} repetitions={} train_fraction={}{RESET}  {}",
            plan.data.display(),
            dataset.header().relation_name(),
            dataset.header().label_name(),
            dataset.len(),
            dataset.number_of_features(),
            plan.configs.len(),
            plan.options.repetitions,
            plan.options.train_fraction,
            timestamp_now()
        ),
        format!(
            "{FG_GREY}────────────────────────────────────────────────────────────────────────{RESET}"
        ),
    ];
    for line in header {
        println!("{line}");
    }
    if let Some(path) = &log_path {
        println!("{DIM}logging to {}{RESET}", path.display());
    }
    println!();

    let mut console = ConsoleReport::stdout().styled(plan.styled);
    let summaries = run_grid(&dataset, &plan.configs, &plan.options, &mut rng, &mut console)
        .context("evaluation failed")?;
    let table = SummaryTable::from(summaries);

    if table.len() > 1
        && let Some(best) = table.best()
    {
        println!("{BOLD}{FG_GREEN}best{RESET} {best}");
    }

    if let Some(path) = plan.dump_file
        && !path.as_os_str().is_empty()
    {
        table
            .export(&path, plan.dump_format)
            .with_context(|| format!("failed to export summaries to {}", path.display()))?;
    }

    Ok(())
}

fn timestamp_now() -> String {
    use chrono::{Local, SecondsFormat};
    let now = Local::now();
    format!(
        "{DIM}{}{}",
        now.to_rfc3339_opts(SecondsFormat::Secs, true),
        RESET
    )
}
