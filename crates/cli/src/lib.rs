pub mod args;
pub mod diagnostics;
pub mod output;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
