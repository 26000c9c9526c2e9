//! `mathlang run <script> [--var name=value]... [--quiet]`

use std::io::Write;

use mathlang_runtime::Value;
use tracing::debug;

use super::{read_source, write_results};
use crate::{parse_var_arg, Session};

#[derive(Clone, Debug, Default, PartialEq)]
pub struct RunOptions {
    pub path: String,
    /// Seed bindings, applied in order before the script runs.
    pub vars: Vec<(String, Value)>,
    /// Suppress result output; errors are still reported.
    pub quiet: bool,
}

/// Parse the arguments following `run`.
pub fn parse_run_args(args: &[String]) -> Result<RunOptions, String> {
    let mut options = RunOptions::default();
    let mut path = None;
    let mut i = 0;
    while i < args.len() {
        let arg = args[i].as_str();
        if let Some(binding) = arg.strip_prefix("--var=") {
            options.vars.push(parse_var_arg(binding)?);
            i += 1;
            continue;
        }
        match arg {
            "--quiet" | "-q" => options.quiet = true,
            "--var" => {
                let Some(binding) = args.get(i + 1) else {
                    return Err("--var requires a name=value argument".to_string());
                };
                options.vars.push(parse_var_arg(binding)?);
                i += 1;
            }
            _ if arg.starts_with('-') => return Err(format!("unknown option '{arg}'")),
            _ if path.is_none() => path = Some(arg.to_string()),
            _ => return Err(format!("unexpected argument '{arg}'")),
        }
        i += 1;
    }
    options.path = path.ok_or_else(|| "missing script path".to_string())?;
    Ok(options)
}

/// Read and evaluate a script in `session`.
pub fn run_script<W: Write>(session: &Session, options: &RunOptions, out: &mut W) -> Result<(), String> {
    let source = read_source(&options.path)?;
    for (name, value) in &options.vars {
        debug!(name = %name, value = %value, "seeding variable");
        session.set(name.clone(), value.clone());
    }
    let results = session.eval(&source).map_err(|e| e.to_string())?;
    if options.quiet {
        return Ok(());
    }
    write_results(out, &results)
}
