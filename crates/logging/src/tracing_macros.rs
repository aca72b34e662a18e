//! crates/logging/src/tracing_macros.rs
//! Convenience macros for file-list tracing targets.
//!
//! Each macro forwards its arguments verbatim to the matching `tracing`
//! macro, so structured fields (`count = n`) and format strings both work.

/// Emit a traversal trace at `debug` level.
///
/// # Example
/// ```ignore
/// trace_walk!("entering directory {}", path.display());
/// ```
#[macro_export]
macro_rules! trace_walk {
    ($($arg:tt)*) => {
        $crate::tracing::debug!(target: "file_list::walk", $($arg)*)
    };
}

/// Emit a fine-grained traversal trace at `trace` level.
///
/// Used for per-entry decisions, which are too noisy for `debug`.
///
/// # Example
/// ```ignore
/// trace_entry!("excluded {:?}", name);
/// ```
#[macro_export]
macro_rules! trace_entry {
    ($($arg:tt)*) => {
        $crate::tracing::trace!(target: "file_list::walk", $($arg)*)
    };
}

/// Emit a traversal warning, used for absorbed subtree failures.
///
/// # Example
/// ```ignore
/// warn_walk!("skipping unreadable directory {}", path.display());
/// ```
#[macro_export]
macro_rules! warn_walk {
    ($($arg:tt)*) => {
        $crate::tracing::warn!(target: "file_list::walk", $($arg)*)
    };
}

/// Emit a pattern compilation trace.
///
/// # Example
/// ```ignore
/// trace_filter!("compiled {} exclude patterns", count);
/// ```
#[macro_export]
macro_rules! trace_filter {
    ($($arg:tt)*) => {
        $crate::tracing::debug!(target: "file_list::filter", $($arg)*)
    };
}

/// Emit a request-level trace at `info` level.
///
/// # Example
/// ```ignore
/// trace_list!("listed {} files", count);
/// ```
#[macro_export]
macro_rules! trace_list {
    ($($arg:tt)*) => {
        $crate::tracing::info!(target: "file_list::list", $($arg)*)
    };
}
