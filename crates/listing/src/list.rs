use logging::trace_list;
use patterns::PatternSet;
use walk::{CancelToken, TraversalError, WalkBuilder, WalkOutcome};

use crate::{ListError, TraversalRequest, TraversalResult};

/// Lists the regular files below the request root.
///
/// Exclude patterns prune entries by name before they are inspected; include
/// suffixes decide which files are reported. Unreadable subdirectories,
/// dangling links, and entries that vanish mid-walk are recorded in
/// [`TraversalResult::soft_errors`] instead of failing the call.
///
/// # Errors
///
/// Returns [`ListError::Pattern`] when the exclude patterns do not compile
/// and [`ListError::Traversal`] when the root is missing, not a directory, or
/// unreadable.
///
/// # Examples
///
/// ```
/// use listing::{TraversalRequest, list_files};
/// use std::fs;
///
/// # fn demo() -> Result<(), Box<dyn std::error::Error>> {
/// let temp = tempfile::tempdir()?;
/// fs::write(temp.path().join("a.ts"), b"")?;
/// fs::write(temp.path().join("b.js"), b"")?;
/// fs::create_dir(temp.path().join("node_modules"))?;
/// fs::write(temp.path().join("node_modules/c.ts"), b"")?;
///
/// let request = TraversalRequest::from_raw(temp.path(), ".ts", "node_modules");
/// let result = list_files(&request)?;
/// let names: Vec<_> = result.iter().map(|entry| entry.relative_path()).collect();
/// assert_eq!(names, [std::path::Path::new("a.ts")]);
/// # Ok(())
/// # }
/// # demo().unwrap();
/// ```
pub fn list_files(request: &TraversalRequest) -> Result<TraversalResult, ListError> {
    list_files_with_cancel(request, &CancelToken::new())
}

/// Like [`list_files`], but stops early once `token` is cancelled.
///
/// A cancelled listing still succeeds; the result holds what was found so far
/// and reports [`TraversalResult::is_cancelled`].
///
/// # Errors
///
/// Same conditions as [`list_files`].
pub fn list_files_with_cancel(
    request: &TraversalRequest,
    token: &CancelToken,
) -> Result<TraversalResult, ListError> {
    let options = request.options;
    let patterns = PatternSet::new(
        &request.include_patterns,
        &request.exclude_patterns,
        options.syntax(),
    )?;

    trace_list!(
        root = %request.root_directory.display(),
        include = ?patterns.include().suffixes(),
        exclude = ?patterns.exclude().patterns(),
        syntax = %options.syntax(),
        "listing files"
    );

    let mut builder = WalkBuilder::new(request.root_directory.clone())
        .follow_symlinks(options.follows_symlinks())
        .cancel_token(token.clone());
    if !patterns.include().is_empty() {
        builder = builder.include(patterns.include_predicate());
    }
    if !patterns.exclude().is_empty() {
        builder = builder.exclude(patterns.exclude_predicate());
    }

    let mut result = TraversalResult::from(walk(builder, options.is_parallel())?);
    if options.sorts() {
        result.sort();
    }

    trace_list!(
        files = result.len(),
        soft_errors = result.soft_errors().len(),
        cancelled = result.is_cancelled(),
        "listing finished"
    );
    Ok(result)
}

#[cfg(feature = "parallel")]
fn walk(builder: WalkBuilder, parallel: bool) -> Result<WalkOutcome, TraversalError> {
    if parallel {
        builder.run_parallel()
    } else {
        builder.run()
    }
}

#[cfg(not(feature = "parallel"))]
fn walk(builder: WalkBuilder, parallel: bool) -> Result<WalkOutcome, TraversalError> {
    if parallel {
        trace_list!("parallel walker not compiled in, walking sequentially");
    }
    builder.run()
}
