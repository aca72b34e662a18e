use std::io::{self, Write};

use listing::TraversalResult;

use crate::command::PROGRAM_NAME;

/// Writes one path per line in result order.
pub(crate) fn write_paths<W: Write>(result: &TraversalResult, out: &mut W) -> io::Result<()> {
    for path in result.paths() {
        writeln!(out, "{}", path.display())?;
    }
    out.flush()
}

/// Writes the whole result, soft errors included, as pretty-printed JSON.
///
/// The document is rendered in full before anything reaches `out`.
pub(crate) fn write_json<W: Write>(result: &TraversalResult, out: &mut W) -> io::Result<()> {
    let document = serde_json::to_vec_pretty(result)?;
    out.write_all(&document)?;
    writeln!(out)?;
    out.flush()
}

/// Reports absorbed subtree failures as warnings.
pub(crate) fn write_soft_errors<W: Write>(result: &TraversalResult, err: &mut W) -> io::Result<()> {
    for error in result.soft_errors() {
        writeln!(err, "{PROGRAM_NAME}: warning: {error}")?;
    }
    if result.is_cancelled() {
        writeln!(err, "{PROGRAM_NAME}: warning: listing cancelled before completion")?;
    }
    Ok(())
}

/// Reports a fatal error.
pub(crate) fn write_error<W: Write>(err: &mut W, error: &dyn std::fmt::Display) -> io::Result<()> {
    writeln!(err, "{PROGRAM_NAME}: error: {error}")
}
