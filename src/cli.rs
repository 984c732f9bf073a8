use clap::Parser;
use issue_goldset::config::VersionRange;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "issue-goldset",
    version,
    about = "Build issue → changed class/method goldsets from git history"
)]
pub struct Cli {
    /// TOML configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Path to the git repository (overrides the config file)
    #[arg(short, long)]
    pub repo: Option<PathBuf>,

    /// Output directory (overrides the config file)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Version window as FROM..TO; repeatable, replaces configured versions
    #[arg(long = "range", value_name = "FROM..TO")]
    pub ranges: Vec<VersionRange>,

    /// Diff context width trimmed from each hunk edge
    #[arg(long)]
    pub context_lines: Option<usize>,

    /// Print run reports as JSON
    #[arg(long)]
    pub json: bool,

    /// Hide progress bars
    #[arg(short, long)]
    pub quiet: bool,
}
