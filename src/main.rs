mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use std::fs::OpenOptions;

use cli::Cli;
use issue_goldset::config::Config;
use issue_goldset::pipeline::Pipeline;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => Config::load(path)
            .with_context(|| format!("Could not load config {}", path.display()))?,
        None => Config::default(),
    };
    if let Some(repo) = cli.repo {
        config.repo_path = repo;
    }
    if let Some(output) = cli.output {
        config.output_dir = output;
    }
    if !cli.ranges.is_empty() {
        config.versions = cli.ranges;
    }
    if let Some(context_lines) = cli.context_lines {
        config.resolver.context_lines = context_lines;
    }

    init_logging(&config)?;

    let mut pipeline = Pipeline::new(config)?;
    if cli.quiet {
        pipeline = pipeline.quiet();
    }
    let reports = pipeline.run()?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&reports)?);
    } else {
        for report in &reports {
            println!(
                "{}: {} commits, {} issues, {} goldsets, {} warnings",
                report.label,
                report.commits,
                report.issues,
                report.goldsets_written,
                report.diagnostics.warnings()
            );
        }
    }

    Ok(())
}

fn init_logging(config: &Config) -> Result<()> {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"));

    if let Some(path) = &config.log_file {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .with_context(|| format!("Could not open log file {}", path.display()))?;
        builder.target(env_logger::Target::Pipe(Box::new(file)));
    }

    builder.try_init().context("Logger already initialized")?;
    Ok(())
}
