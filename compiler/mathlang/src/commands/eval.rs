//! `mathlang eval "<source>"`

use std::io::Write;

use super::write_results;
use crate::Session;

/// Evaluate one source string in `session` and print every result.
pub fn eval_source<W: Write>(session: &Session, source: &str, out: &mut W) -> Result<(), String> {
    let results = session.eval(source).map_err(|e| e.to_string())?;
    write_results(out, &results)
}
