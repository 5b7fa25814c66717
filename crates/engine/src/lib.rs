//! Core engine for the `line_reports` tools: tolerant line classification,
//! single-pass aggregation, and fixed-format report rendering.
//!
//! The binaries in `line_reports_cli` wire these pieces together; nothing
//! here touches the clock, stdout, or the process exit code.

pub mod classify;
pub mod convert;
pub mod error;
pub mod format;
pub mod reader;
pub mod stats;
pub mod words;
