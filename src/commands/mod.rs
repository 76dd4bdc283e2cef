//! Command implementations
//!
//! - `diff`: Reads two revisions, computes their word diff and writes it out
//!
//! The binary in `main.rs` only parses arguments and hands a [`diff::DiffOptions`] to
//! [`diff::DiffCommand`].

pub mod diff;
