#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `walk` enumerates the regular files below a root directory. Traversal is
//! depth-first pre-order: a subdirectory's contents are produced before the
//! directory's next sibling. Siblings are visited in the order the
//! filesystem enumerates them; nothing is sorted.
//!
//! # Design
//!
//! - [`WalkBuilder`] takes the root plus two predicates. The exclude
//!   predicate sees bare entry names and prunes whole subtrees. The include
//!   predicate sees the emitted path of each regular file.
//! - [`Walker`] implements [`Iterator`] over [`WalkEntry`] values. It keeps a
//!   stack of open directory listings and a set of canonical directory paths
//!   already entered.
//! - [`TraversalError`] describes both fatal root failures returned from
//!   [`WalkBuilder::build`] and soft failures that the walker records while
//!   carrying on with sibling entries.
//! - With the `parallel` feature, `WalkBuilder::run_parallel` lists sibling
//!   directories on the rayon pool and merges the results back into the same
//!   order.
//!
//! # Invariants
//!
//! - Only regular files are emitted. Directories, sockets, FIFOs, and device
//!   nodes never appear in the output.
//! - Each real directory is entered at most once, so symbolic-link cycles
//!   terminate.
//! - Emitted paths take the root's form: a relative root yields relative
//!   paths and an absolute root absolute ones.
//! - A failure below the root never aborts the walk.
//!
//! # Examples
//!
//! ```
//! use walk::WalkBuilder;
//! use std::fs;
//!
//! # fn demo() -> Result<(), Box<dyn std::error::Error>> {
//! let temp = tempfile::tempdir()?;
//! let root = temp.path();
//! fs::create_dir_all(root.join("src/nested"))?;
//! fs::create_dir_all(root.join("node_modules/pkg"))?;
//! fs::write(root.join("src/lib.ts"), b"")?;
//! fs::write(root.join("src/nested/util.ts"), b"")?;
//! fs::write(root.join("src/readme.md"), b"")?;
//! fs::write(root.join("node_modules/pkg/index.ts"), b"")?;
//!
//! let outcome = WalkBuilder::new(root)
//!     .exclude(|name| name == "node_modules")
//!     .include(|path| path.extension().is_some_and(|ext| ext == "ts"))
//!     .run()?;
//!
//! let mut found: Vec<_> = outcome
//!     .entries
//!     .iter()
//!     .map(|entry| entry.relative_path().to_path_buf())
//!     .collect();
//! found.sort();
//! assert_eq!(
//!     found,
//!     [
//!         std::path::PathBuf::from("src/lib.ts"),
//!         std::path::PathBuf::from("src/nested/util.ts"),
//!     ]
//! );
//! assert!(outcome.soft_errors.is_empty());
//! # Ok(())
//! # }
//! # demo().unwrap();
//! ```

mod builder;
mod cancel;
mod entry;
mod error;
mod outcome;
#[cfg(feature = "parallel")]
mod parallel;
mod visit;
mod walker;

pub use builder::WalkBuilder;
pub use cancel::CancelToken;
pub use entry::WalkEntry;
pub use error::{TraversalError, TraversalErrorKind};
pub use outcome::WalkOutcome;
pub use walker::Walker;

#[cfg(test)]
mod tests;
