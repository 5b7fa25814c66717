use std::fs;

/// Emit a finished report to both sinks: stdout always, the fixed-name
/// results file best-effort. A failed file write degrades to a console
/// warning; the run still counts as a success because the console output
/// was already produced.
pub fn emit(report: &str, results_file: &str) {
    print!("{report}");

    if let Err(err) = fs::write(results_file, report) {
        eprintln!("Warning: could not write '{results_file}'. Details: {err}");
    }
}
