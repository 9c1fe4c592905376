mod input;
mod logging;
mod model;
mod pipeline;
mod report;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::input::load_reports;
use crate::model::policy::ScoringPolicy;
use crate::pipeline::ScoreEngine;
use crate::report::{ReportFormat, json::render_reports, text::render_summary, write_reports};

#[derive(Debug, Parser)]
#[command(
    name = "posture-score",
    version,
    about = "Weighted posture scores for framework/control scan reports"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Score a scan report document
    Run(RunArgs),
}

#[derive(Debug, Clone, Args)]
struct RunArgs {
    /// JSON document with one framework report or a list of them
    #[arg(long)]
    input: PathBuf,
    /// Output directory; the summary is printed to stdout when omitted
    #[arg(long)]
    out: Option<PathBuf>,
    /// Zero the weight of role/rolebinding/clusterrole/clusterrolebinding resources
    #[arg(long)]
    ignore_transitional_kinds: bool,
    #[arg(long)]
    replica_factor: Option<f32>,
    /// Frameworks scored concurrently
    #[arg(long, default_value_t = 1)]
    jobs: usize,
    #[arg(long, value_enum, default_value_t = ReportFormat::Both)]
    format: ReportFormat,
    #[arg(long)]
    quiet: bool,
}

fn main() {
    let cli = Cli::parse();
    let Command::Run(args) = cli.command;
    logging::init(args.quiet);
    if let Err(err) = run(&args) {
        eprintln!("{err}");
        std::process::exit(1);
    }
}

fn run(args: &RunArgs) -> Result<(), String> {
    let policy = resolve_policy(args, ScoringPolicy::from_env())?;
    let mut reports = load_reports(&args.input).map_err(|e| e.to_string())?;

    let engine = ScoreEngine::new(policy).with_jobs(args.jobs);
    let outcome = engine.calculate(&mut reports);

    match &args.out {
        Some(out_dir) => {
            write_reports(&reports, engine.policy(), out_dir, args.format)
                .map_err(|e| e.to_string())?;
        }
        None => match args.format {
            ReportFormat::Json => {
                print!("{}", render_reports(&reports).map_err(|e| e.to_string())?)
            }
            ReportFormat::Text | ReportFormat::Both => {
                print!("{}", render_summary(&reports, engine.policy()))
            }
        },
    }

    outcome.map_err(|e| e.to_string())
}

fn resolve_policy(args: &RunArgs, base: ScoringPolicy) -> Result<ScoringPolicy, String> {
    let mut policy = base;
    if args.ignore_transitional_kinds {
        policy.ignore_transitional_kinds = true;
    }
    if let Some(factor) = args.replica_factor {
        policy = policy
            .with_replica_factor(factor)
            .map_err(|e| e.to_string())?;
    }
    Ok(policy)
}
