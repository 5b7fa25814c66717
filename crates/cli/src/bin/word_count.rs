use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Instant;

use clap::Parser;
use line_reports_cli::{args, diagnostics, output};
use line_reports_engine::classify::classify_words;
use line_reports_engine::words::WordTable;
use line_reports_engine::{format, reader};

const RESULTS_FILE: &str = "WordCountResults.txt";

#[derive(Parser, Debug)]
#[command(
    name = "word_count",
    version,
    about = "Count distinct words and their frequency in first-appearance order"
)]
struct Args {
    /// Input file with whitespace-separated words
    #[arg(value_hint = clap::ValueHint::FilePath)]
    file: PathBuf,
}

fn main() -> ExitCode {
    let started = Instant::now();

    let args: Args = match args::parse_or_exit() {
        Ok(args) => args,
        Err(code) => return code,
    };

    let outcome = match reader::read_classified(&args.file, classify_words) {
        Ok(outcome) => outcome,
        Err(err) => {
            eprintln!("Error: {err}");
            return ExitCode::FAILURE;
        }
    };

    diagnostics::print_word_count_rejections(&outcome.rejections);

    let mut table = WordTable::new();
    for words in outcome.values {
        table.extend(words);
    }

    let elapsed = started.elapsed().as_secs_f64();

    output::emit(&format::word_count_report(&table, elapsed), RESULTS_FILE);
    ExitCode::SUCCESS
}
