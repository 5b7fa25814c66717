//! Console rendering of per-line rejections.
//!
//! Diagnostics go to stderr only; the results file receives report text and
//! nothing else. Each tool keeps its own historical phrasing.

use line_reports_engine::classify::RejectReason;
use line_reports_engine::reader::Rejection;

/// Statistics tool: `Invalid data at line {n}: '{text}' (ignored, continuing)`.
pub fn print_statistics_rejections(rejections: &[Rejection]) {
    for r in rejections {
        eprintln!(
            "Invalid data at line {}: '{}' (ignored, continuing)",
            r.line, r.text
        );
    }
}

/// Conversion tool: `Invalid data at line {n}: '{text}' (ignored)`.
pub fn print_conversion_rejections(rejections: &[Rejection]) {
    for r in rejections {
        eprintln!("Invalid data at line {}: '{}' (ignored)", r.line, r.text);
    }
}

/// Word-count tool reports the reason rather than the raw text.
pub fn print_word_count_rejections(rejections: &[Rejection]) {
    for r in rejections {
        let reason = match r.reason {
            RejectReason::EmptyLine => "empty line",
            RejectReason::NoWords => "no words",
            // Not produced by the word classifier; keep the arm total.
            RejectReason::Malformed | RejectReason::OutOfRange => "invalid data",
        };
        eprintln!("Invalid data at line {}: {reason} (ignored)", r.line);
    }
}
