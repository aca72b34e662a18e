#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `listing` produces a filtered inventory of the regular files below a
//! directory. [`list_files`] is the single entry point: it compiles the
//! request's patterns with the `patterns` crate and hands the resulting
//! predicates to the `walk` traversal.
//!
//! # Filtering
//!
//! - Exclude patterns are matched against each entry's *name*, files and
//!   directories alike. A matching directory is pruned before it is opened.
//! - Include patterns are literal suffixes of the emitted path. `".ts"`
//!   matches `src/a.ts`; `"*.ts"` matches only paths that really end in
//!   `*.ts`.
//!
//! # Errors
//!
//! A bad exclude pattern or an unusable root fails the call with
//! [`ListError`]. Everything that goes wrong below the root is collected in
//! [`TraversalResult::soft_errors`] and the listing carries on.

mod error;
mod list;
mod options;
mod request;
mod result;

pub use error::ListError;
pub use list::{list_files, list_files_with_cancel};
pub use options::ListOptions;
pub use patterns::{PatternCompilationError, PatternSyntax};
pub use request::TraversalRequest;
pub use result::{FileEntry, TraversalResult};
pub use walk::{CancelToken, TraversalError, TraversalErrorKind};
