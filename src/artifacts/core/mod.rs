//! Core utilities and shared types
//!
//! - `output`: Where rendered diffs are written (stdout or the minus pager)

pub mod output;
