//! Word diff data structures and algorithms
//!
//! - `core`: Shared utilities (pager-backed output sink)
//! - `diff`: Tokenization, LCS alignment, backtracking and rendering

pub mod core;
pub mod diff;
