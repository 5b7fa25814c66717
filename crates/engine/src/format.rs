//! Fixed-format report rendering.
//!
//! All numbers print with up to 10 fractional digits, trailing zeros
//! stripped, so integral values print with no decimal point. Reports end
//! with a trailing newline and are written verbatim to both sinks.

use std::fmt::Write;

use crate::convert::ConversionRow;
use crate::stats::StatsSummary;
use crate::words::WordTable;

/// Sentinel printed when the statistics have no mode.
pub const NO_MODE: &str = "#N/A";

/// Render `x` with up to 10 fractional digits, trailing zeros and a bare
/// decimal point stripped; `"0"` if stripping consumes everything.
pub fn format_number(x: f64) -> String {
    let stripped = strip_trailing(format!("{x:.10}"));
    if stripped.is_empty() {
        "0".to_string()
    } else {
        stripped
    }
}

/// Elapsed-time variant of [`format_number`]: same stripping, no
/// empty-string fallback.
pub fn format_elapsed(seconds: f64) -> String {
    strip_trailing(format!("{seconds:.10}"))
}

fn strip_trailing(s: String) -> String {
    s.trim_end_matches('0').trim_end_matches('.').to_string()
}

pub fn statistics_report(summary: &StatsSummary, elapsed: f64) -> String {
    let mode = summary
        .mode
        .map_or_else(|| NO_MODE.to_string(), format_number);

    format!(
        "COUNT: {}\nMEAN: {}\nMEDIAN: {}\nMODE: {}\nSD (Population): {}\nVARIANCE (Population): {}\nTIME (seconds): {}\n",
        summary.count,
        format_number(summary.mean),
        format_number(summary.median),
        mode,
        format_number(summary.std_dev),
        format_number(summary.variance),
        format_number(elapsed),
    )
}

pub fn conversion_report(rows: &[ConversionRow], elapsed: f64) -> String {
    let mut out = String::from("ITEM\tVALUE\tBIN\tHEX\n");
    for (idx, row) in rows.iter().enumerate() {
        let _ = writeln!(out, "{}\t{}\t{}\t{}", idx + 1, row.value, row.binary, row.hex);
    }
    let _ = writeln!(out, "TIME (seconds): {}", format_elapsed(elapsed));
    out
}

pub fn word_count_report(table: &WordTable, elapsed: f64) -> String {
    let mut out = String::from("WORD\tCOUNT\n");
    for (word, count) in table.iter() {
        let _ = writeln!(out, "{word}\t{count}");
    }
    let _ = writeln!(out, "TIME (seconds): {}", format_elapsed(elapsed));
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::convert::convert;
    use crate::stats::summarize;

    #[test]
    fn integral_values_lose_the_decimal_point() {
        assert_eq!(format_number(3.0), "3");
        assert_eq!(format_number(-2.0), "-2");
        assert_eq!(format_number(0.0), "0");
    }

    #[test]
    fn fractional_values_keep_significant_digits_only() {
        assert_eq!(format_number(3.14), "3.14");
        assert_eq!(format_number(2.5), "2.5");
        assert_eq!(format_number(0.0000000001), "0.0000000001");
    }

    #[test]
    fn statistics_report_layout() {
        let summary = summarize(&[2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0]);
        let report = statistics_report(&summary, 0.25);
        assert_eq!(
            report,
            "COUNT: 8\n\
             MEAN: 5\n\
             MEDIAN: 4.5\n\
             MODE: 4\n\
             SD (Population): 2\n\
             VARIANCE (Population): 4\n\
             TIME (seconds): 0.25\n"
        );
    }

    #[test]
    fn statistics_report_no_mode_sentinel() {
        let summary = summarize(&[1.0, 2.0, 3.0]);
        let report = statistics_report(&summary, 0.0);
        assert!(report.contains("MODE: #N/A\n"));
    }

    #[test]
    fn conversion_report_numbers_rows_in_input_order() {
        let rows = vec![convert(5).unwrap(), convert(-6).unwrap()];
        let report = conversion_report(&rows, 0.5);
        assert_eq!(
            report,
            "ITEM\tVALUE\tBIN\tHEX\n\
             1\t5\t101\t5\n\
             2\t-6\t1111111010\tFFFFFFFFFA\n\
             TIME (seconds): 0.5\n"
        );
    }

    #[test]
    fn word_count_report_first_appearance_order() {
        let mut table = WordTable::new();
        table.extend(["b", "a", "b", "c", "a", "a"].map(String::from));
        let report = word_count_report(&table, 1.0);
        assert_eq!(
            report,
            "WORD\tCOUNT\n\
             b\t2\n\
             a\t3\n\
             c\t1\n\
             TIME (seconds): 1\n"
        );
    }

    #[test]
    fn empty_aggregates_still_render_headers() {
        let report = conversion_report(&[], 0.0);
        assert!(report.starts_with("ITEM\tVALUE\tBIN\tHEX\n"));

        let report = word_count_report(&WordTable::new(), 0.0);
        assert!(report.starts_with("WORD\tCOUNT\n"));
    }
}
