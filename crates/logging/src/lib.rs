#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `logging` centralises diagnostic output for the `file-list` workspace. All
//! crates emit events through the [`tracing`] facade using a fixed set of
//! targets (`file_list::walk`, `file_list::filter`, `file_list::list`) so
//! operators can enable traversal chatter independently of pattern
//! compilation messages.
//!
//! # Design
//!
//! - [`trace_walk!`], [`trace_filter!`], and [`trace_list!`] wrap the standard
//!   `tracing` macros with the workspace targets. They expand through the
//!   re-exported [`tracing`] crate so callers do not need their own
//!   dependency on it.
//! - [`Verbosity`] maps the number of `-v` flags onto a
//!   [`tracing_subscriber::filter::LevelFilter`].
//! - [`init_tracing`] and [`init_tracing_with_filter`] install a formatting
//!   subscriber writing to standard error.
//!
//! # Invariants
//!
//! - Library crates never install a subscriber; only binaries call the
//!   `init_*` helpers.
//! - The `FILE_LIST_LOG` environment variable, when set, takes precedence over
//!   the verbosity derived from command-line flags.
//!
//! # Examples
//!
//! ```
//! use logging::{Verbosity, trace_walk};
//!
//! let verbosity = Verbosity::from_verbose_level(2);
//! assert_eq!(verbosity.directive(), "debug");
//!
//! // Without an installed subscriber the event is simply discarded.
//! trace_walk!(entries = 3, "listed directory");
//! ```

mod subscriber;
mod tracing_macros;
mod verbosity;

pub use subscriber::{ENV_FILTER_VAR, env_filter, init_tracing, init_tracing_with_filter};
pub use verbosity::Verbosity;

#[doc(hidden)]
pub use tracing;

/// Target used for traversal events.
pub const WALK_TARGET: &str = "file_list::walk";

/// Target used for pattern compilation and matching events.
pub const FILTER_TARGET: &str = "file_list::filter";

/// Target used for request-level events emitted by the listing facade.
pub const LIST_TARGET: &str = "file_list::list";
