//! # dirdigest
//!
//! `dirdigest` builds a single-file "digest" of a directory tree: a directory
//! overview followed by the concatenated, clearly delimited contents of every
//! file whose extension is on a configurable allow-list.
//!
//! The whole pipeline is one sequential pass: scan the root, sort the
//! matches, capture the tree overview, then stream the delimited file blocks
//! to the output.
//!
//! # Features
//!
//! - `logging`: Enables debug logging via the `tracing` crate.
//!
//! # Example
//!
//! ```no_run
//! use dirdigest::{digest, output, DigestBuilder, SortKey, SortOrder, SortSpec};
//!
//! let options = DigestBuilder::new(".")
//!     .extensions([".md", ".rs"])
//!     .sort(SortSpec::new(SortKey::Modified, SortOrder::Descending))
//!     .build();
//!
//! let result = digest(options.clone()).expect("Failed to scan directory");
//! output::write_digest_to_file(&result, &options, "digest.txt")
//!     .expect("Failed to write digest");
//! ```

mod engine;
mod error;
mod options;
pub mod output;
mod sort;
mod tree;
mod types;

pub use engine::digest;
pub use error::DigestError;
pub use options::{DEFAULT_EXTENSIONS, DigestBuilder, DigestOptions, normalize_extension};
pub use sort::{SortKey, SortOrder, SortSpec, sort_entries};
pub use types::{DigestResult, FileEntry};
