#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `patterns` turns the raw, comma-separated include and exclude strings
//! accepted by `file-list` into predicates consulted during traversal.
//! Include patterns are literal path suffixes (`.ts`, `.tar.gz`); exclude
//! patterns are compiled into a single case-insensitive matcher tested against
//! each directory entry's *name*.
//!
//! # Design
//!
//! - [`parse_list`] splits a raw string on commas, trims each token, and drops
//!   empty tokens while preserving order.
//! - [`IncludeFilter`] accepts a path when it ends with any configured suffix,
//!   or unconditionally when no suffix was configured.
//! - [`ExcludeFilter`] compiles every exclude pattern into one matcher using
//!   the selected [`PatternSyntax`]. Without patterns nothing is excluded.
//! - [`PatternSet`] bundles both filters behind an [`std::sync::Arc`] so the
//!   walker (and its worker threads) can share them cheaply.
//!
//! # Invariants
//!
//! - Include matching is case-sensitive and byte-oriented, so non-UTF-8 paths
//!   are matched without lossy conversion.
//! - Exclude matching is case-insensitive and unanchored: a name is excluded
//!   when any part of it matches any pattern.
//! - A [`PatternSet`] never changes after construction.
//!
//! # Errors
//!
//! [`ExcludeFilter::new`] and [`PatternSet::new`] report
//! [`PatternCompilationError`] when the patterns cannot be compiled. The error
//! carries the full raw pattern list together with the engine error.
//!
//! # Examples
//!
//! ```
//! use patterns::{PatternSet, PatternSyntax};
//! use std::ffi::OsStr;
//! use std::path::Path;
//!
//! let set = PatternSet::from_raw(".ts, .tsx", "node_modules,.git", PatternSyntax::Regex)
//!     .expect("patterns compile");
//!
//! assert!(set.includes(Path::new("src/main.ts")));
//! assert!(!set.includes(Path::new("src/main.js")));
//! assert!(set.excludes(OsStr::new("Node_Modules")));
//! assert!(!set.excludes(OsStr::new("src")));
//! ```

mod error;
mod exclude;
mod include;
mod list;
mod set;

pub use error::{PatternCompilationError, PatternEngineError};
pub use exclude::{ExcludeFilter, PatternSyntax, UnknownSyntax};
pub use include::IncludeFilter;
pub use list::parse_list;
pub use set::PatternSet;
