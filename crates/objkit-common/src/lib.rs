//! Common utilities for the objkit crates.
//!
//! This crate provides shared infrastructure used by the other crates:
//! - **Warning System** - colored, de-duplicated diagnostics on stderr

pub mod warning;
