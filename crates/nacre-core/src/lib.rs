//! Nacre Core
//!
//! Shared utilities for the Nacre UI toolkit crates.

pub mod alloc;
pub mod logging;
