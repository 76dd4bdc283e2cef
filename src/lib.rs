//! Word-level diffs between two revisions of text
//!
//! The crate is organized into two top-level modules:
//!
//! - `artifacts`: the diff pipeline (tokenizer, alignment table, reconstruction, rendering)
//!   and the small output utilities the binary needs
//! - `commands`: the `delta` command-line surface built on top of the pipeline
//!
//! ```
//! assert_eq!(
//!     delta::calculate("hello world", "hello earth", false),
//!     "hello <del>world</del> <ins>earth</ins>"
//! );
//! assert_eq!(
//!     delta::calculate("hello world", "hello earth", true),
//!     "hello ---world--- +++earth+++"
//! );
//! ```

pub mod artifacts;
pub mod commands;

pub use artifacts::diff::{calculate, diff_segments};
