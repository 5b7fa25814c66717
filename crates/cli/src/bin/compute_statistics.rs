use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Instant;

use clap::Parser;
use line_reports_cli::{args, diagnostics, output};
use line_reports_engine::classify::classify_number;
use line_reports_engine::error::EngineError;
use line_reports_engine::{format, reader, stats};

const RESULTS_FILE: &str = "StatisticsResults.txt";

#[derive(Parser, Debug)]
#[command(
    name = "compute_statistics",
    version,
    about = "Compute COUNT/MEAN/MEDIAN/MODE and population SD/variance over a numeric column"
)]
struct Args {
    /// Input file with one numeric value per line
    #[arg(value_hint = clap::ValueHint::FilePath)]
    file: PathBuf,
}

fn main() -> ExitCode {
    let started = Instant::now();

    let args: Args = match args::parse_or_exit() {
        Ok(args) => args,
        Err(code) => return code,
    };

    let outcome = match reader::read_classified(&args.file, classify_number) {
        Ok(outcome) => outcome,
        Err(err) => {
            eprintln!("Error: {err}");
            return ExitCode::FAILURE;
        }
    };

    diagnostics::print_statistics_rejections(&outcome.rejections);

    if outcome.values.is_empty() {
        eprintln!("Error: {}", EngineError::NoValidData);
        return ExitCode::FAILURE;
    }

    let summary = stats::summarize(&outcome.values);
    let elapsed = started.elapsed().as_secs_f64();

    output::emit(&format::statistics_report(&summary, elapsed), RESULTS_FILE);
    ExitCode::SUCCESS
}
