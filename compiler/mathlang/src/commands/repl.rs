//! `mathlang repl`
//!
//! One line is one evaluation. Bindings persist across lines. Lines
//! starting with `:` are meta-commands; engine errors are printed and the
//! loop continues.

use std::io::{BufRead, Write};

use super::{io_error, list_operations, write_results};
use crate::Session;

const PROMPT: &str = "> ";

const HELP: &str = "\
:vars    list variables
:clear   remove all variables
:ops     list operations (optionally :ops <category-prefix>)
:quit    exit";

/// Read-eval-print until `:quit` or end of input.
pub fn run_repl<R: BufRead, W: Write>(session: &Session, input: R, out: &mut W) -> Result<(), String> {
    let mut lines = input.lines();
    loop {
        write!(out, "{PROMPT}").map_err(io_error)?;
        out.flush().map_err(io_error)?;
        let Some(line) = lines.next() else {
            writeln!(out).map_err(io_error)?;
            return Ok(());
        };
        let line = line.map_err(|e| format!("read failed: {e}"))?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if let Some(command) = line.strip_prefix(':') {
            if !meta_command(session, command.trim(), out)? {
                return Ok(());
            }
            continue;
        }
        match session.eval(line) {
            Ok(results) => write_results(out, &results)?,
            Err(e) => writeln!(out, "error: {e}").map_err(io_error)?,
        }
    }
}

/// Returns `false` when the loop should stop.
fn meta_command<W: Write>(session: &Session, command: &str, out: &mut W) -> Result<bool, String> {
    let (name, rest) = command
        .split_once(char::is_whitespace)
        .map_or((command, ""), |(n, r)| (n, r.trim()));
    match name {
        "quit" | "q" | "exit" => return Ok(false),
        "vars" => {
            let vars = session.variables();
            if vars.is_empty() {
                writeln!(out, "(no variables)").map_err(io_error)?;
            }
            for var in vars {
                writeln!(out, "{} = {} ({})", var.name, var.display, var.type_name)
                    .map_err(io_error)?;
            }
        }
        "clear" => {
            session.clear();
            writeln!(out, "variables cleared").map_err(io_error)?;
        }
        "ops" => {
            let prefix = (!rest.is_empty()).then_some(rest);
            if let Err(e) = list_operations(session.registry(), prefix, out) {
                writeln!(out, "error: {e}").map_err(io_error)?;
            }
        }
        "help" => writeln!(out, "{HELP}").map_err(io_error)?,
        other => writeln!(out, "error: unknown command ':{other}' (try :help)").map_err(io_error)?,
    }
    Ok(true)
}
