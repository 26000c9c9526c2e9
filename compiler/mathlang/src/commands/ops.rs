//! `mathlang ops [category-prefix]`

use std::io::Write;

use mathlang_runtime::OperationRegistry;

use super::io_error;

/// Print operations grouped by category, optionally only the categories
/// starting with `prefix`.
pub fn list_operations<W: Write>(
    registry: &OperationRegistry,
    prefix: Option<&str>,
    out: &mut W,
) -> Result<(), String> {
    let mut shown = 0;
    for (category, operations) in registry.list_by_category() {
        if prefix.is_some_and(|p| !category.starts_with(p)) {
            continue;
        }
        if shown > 0 {
            writeln!(out).map_err(io_error)?;
        }
        writeln!(out, "{category}").map_err(io_error)?;
        for op in operations {
            writeln!(out, "  {:<40} {}", op.signature(), op.description).map_err(io_error)?;
        }
        shown += 1;
    }
    if shown == 0 {
        if let Some(p) = prefix {
            return Err(format!("no categories match '{p}'"));
        }
    }
    Ok(())
}
