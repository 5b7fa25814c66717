use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Instant;

use clap::Parser;
use line_reports_cli::{args, diagnostics, output};
use line_reports_engine::convert::classify_conversion;
use line_reports_engine::{format, reader};

const RESULTS_FILE: &str = "ConversionResults.txt";

#[derive(Parser, Debug)]
#[command(
    name = "convert_numbers",
    version,
    about = "Convert integers to binary and hexadecimal, one per input line"
)]
struct Args {
    /// Input file with one integer per line
    #[arg(value_hint = clap::ValueHint::FilePath)]
    file: PathBuf,
}

fn main() -> ExitCode {
    let started = Instant::now();

    let args: Args = match args::parse_or_exit() {
        Ok(args) => args,
        Err(code) => return code,
    };

    let outcome = match reader::read_classified(&args.file, classify_conversion) {
        Ok(outcome) => outcome,
        Err(err) => {
            eprintln!("Error: {err}");
            return ExitCode::FAILURE;
        }
    };

    diagnostics::print_conversion_rejections(&outcome.rejections);

    let elapsed = started.elapsed().as_secs_f64();

    output::emit(
        &format::conversion_report(&outcome.values, elapsed),
        RESULTS_FILE,
    );
    ExitCode::SUCCESS
}
