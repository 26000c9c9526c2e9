//! Command handlers for the MathLang CLI.
//!
//! Handlers write to a caller-supplied sink and return `Err(message)` on
//! failure; `main` prints `error: message` and exits with status 1.

mod eval;
mod ops;
mod repl;
mod run;

pub use eval::eval_source;
pub use ops::list_operations;
pub use repl::run_repl;
pub use run::{parse_run_args, run_script, RunOptions};

use std::io::Write;

use mathlang_eval::EvaluationResult;

use crate::format_result;

/// Read a script, mapping I/O failures to user-facing messages.
pub fn read_source(path: &str) -> Result<String, String> {
    std::fs::read_to_string(path).map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => format!("cannot find file '{path}'"),
        std::io::ErrorKind::PermissionDenied => format!("permission denied reading '{path}'"),
        std::io::ErrorKind::InvalidData => format!("'{path}' contains invalid UTF-8 data"),
        _ => format!("error reading '{path}': {e}"),
    })
}

pub(crate) fn write_results<W: Write>(out: &mut W, results: &[EvaluationResult]) -> Result<(), String> {
    for result in results {
        writeln!(out, "{}", format_result(result)).map_err(io_error)?;
    }
    Ok(())
}

pub(crate) fn io_error(e: std::io::Error) -> String {
    format!("write failed: {e}")
}
