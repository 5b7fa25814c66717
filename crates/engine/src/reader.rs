use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::classify::{LineClass, RejectReason};
use crate::error::{EngineError, Result};

/// One line that failed classification. Carries everything the console
/// diagnostic needs; the results file never sees these.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rejection {
    /// 1-based line number in the input file.
    pub line: usize,
    /// The offending text, whitespace-trimmed.
    pub text: String,
    pub reason: RejectReason,
}

/// Everything a single read pass produced.
#[derive(Debug)]
pub struct ReadOutcome<T> {
    pub values: Vec<T>,
    pub rejections: Vec<Rejection>,
}

/// Read `path` line by line, classifying each line with `classify`.
///
/// Per-line failures are collected as [`Rejection`]s and never abort the
/// pass. Only file-level failures (missing file, I/O error mid-read) return
/// an error.
///
/// # Errors
///
/// [`EngineError::FileNotFound`] if the file does not exist,
/// [`EngineError::FileRead`] for any other open or read failure.
pub fn read_classified<T>(
    path: &Path,
    mut classify: impl FnMut(&str) -> LineClass<T>,
) -> Result<ReadOutcome<T>> {
    let file = File::open(path).map_err(|source| {
        if source.kind() == std::io::ErrorKind::NotFound {
            EngineError::FileNotFound {
                path: path.to_path_buf(),
            }
        } else {
            EngineError::FileRead {
                path: path.to_path_buf(),
                source,
            }
        }
    })?;

    let reader = BufReader::new(file);
    let mut values = Vec::new();
    let mut rejections = Vec::new();

    for (idx, line) in reader.lines().enumerate() {
        let line = line.map_err(|source| EngineError::FileRead {
            path: path.to_path_buf(),
            source,
        })?;

        match classify(&line) {
            LineClass::Value(value) => values.push(value),
            LineClass::Skip => {}
            LineClass::Reject(reason) => rejections.push(Rejection {
                line: idx + 1,
                text: line.trim().to_string(),
                reason,
            }),
        }
    }

    Ok(ReadOutcome { values, rejections })
}
