use clap::Parser;
use std::process::ExitCode;

/// Parse the command line, mapping clap's outcomes onto the tools' exit
/// contract: `--help`/`--version` exit 0, any argument error (including a
/// wrong argument count) prints the usage message and exits 1.
pub fn parse_or_exit<A: Parser>() -> Result<A, ExitCode> {
    match A::try_parse() {
        Ok(args) => Ok(args),
        Err(err) => {
            let code = if err.use_stderr() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            };
            let _ = err.print();
            Err(code)
        }
    }
}
