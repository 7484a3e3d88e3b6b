//! Common utilities for restyle.
//!
//! This crate provides shared infrastructure used by the other crates:
//! - **Warning System** - colored, deduplicated terminal warnings
//! - **Filesystem** - all-or-nothing file replacement

pub mod fs;
pub mod warning;
